// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The name of a variable (a dataset column, a matrix row/column).
///
/// Names are short and cloned a lot while reshaping, so they are backed by `SmolStr`.
/// The only enforced rule is that a name is not empty or whitespace-only; surrounding
/// whitespace is trimmed, since CSV headers frequently carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariableName(SmolStr);

impl VariableName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(SmolStr::new(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for VariableName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for VariableName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VariableName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VariableName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VariableName> for String {
    fn from(value: VariableName) -> Self {
        value.0.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("variable name must not be empty")]
    Empty,
}

/// Builds a list of names, failing on the first invalid one.
pub fn names<I, S>(values: I) -> Result<Vec<VariableName>, NameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(VariableName::new).collect()
}
