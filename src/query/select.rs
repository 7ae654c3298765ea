// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::{Regex, RegexBuilder};

use super::suggest::closest_name;
use crate::model::VariableName;

/// Which variables an operation should keep.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Keep these names, in the given order.
    Include(Vec<String>),
    /// Keep every name except these, in matrix order.
    Exclude(Vec<String>),
    /// Keep names matching the pattern, in matrix order.
    Matches(Regex),
}

impl Selection {
    pub fn include<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Include(names.into_iter().map(Into::into).collect())
    }

    pub fn exclude<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclude(names.into_iter().map(Into::into).collect())
    }

    pub fn matching(pattern: &str, case_insensitive: bool) -> Result<Self, LookupError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| LookupError::InvalidPattern {
                pattern: pattern.to_owned(),
                source: Box::new(source),
            })?;
        Ok(Self::Matches(regex))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("unknown variable '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownVariable {
        name: String,
        suggestion: Option<VariableName>,
    },
    #[error("selection does not match any variable")]
    EmptySelection,
    #[error("invalid variable pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

fn suggestion_suffix(suggestion: &Option<VariableName>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

impl PartialEq for LookupError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::UnknownVariable { name: a, suggestion: sa },
                Self::UnknownVariable { name: b, suggestion: sb },
            ) => a == b && sa == sb,
            (Self::EmptySelection, Self::EmptySelection) => true,
            (Self::InvalidPattern { pattern: a, .. }, Self::InvalidPattern { pattern: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }
}

fn position_of(names: &[VariableName], name: &str) -> Result<usize, LookupError> {
    let name = name.trim();
    names.iter().position(|candidate| candidate.as_str() == name).ok_or_else(|| {
        LookupError::UnknownVariable {
            name: name.to_owned(),
            suggestion: closest_name(name, names).cloned(),
        }
    })
}

/// Resolves `selection` against `names` into distinct positions.
///
/// Every explicitly named variable must exist, for exclusions too; a typo in an exclusion
/// list would otherwise silently keep the variable.
pub fn resolve(names: &[VariableName], selection: &Selection) -> Result<Vec<usize>, LookupError> {
    let positions = match selection {
        Selection::Include(wanted) => {
            let mut positions = Vec::with_capacity(wanted.len());
            for name in wanted {
                let position = position_of(names, name)?;
                if !positions.contains(&position) {
                    positions.push(position);
                }
            }
            positions
        }
        Selection::Exclude(unwanted) => {
            let mut dropped = vec![false; names.len()];
            for name in unwanted {
                dropped[position_of(names, name)?] = true;
            }
            (0..names.len()).filter(|&idx| !dropped[idx]).collect()
        }
        Selection::Matches(regex) => (0..names.len())
            .filter(|&idx| regex.is_match(names[idx].as_str()))
            .collect::<Vec<_>>(),
    };

    if positions.is_empty() {
        return Err(LookupError::EmptySelection);
    }
    Ok(positions)
}
