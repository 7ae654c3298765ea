// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::VariableName;

/// One cell of a correlation table in long form: row variable `x`, column variable `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongFormEntry {
    pub x: VariableName,
    pub y: VariableName,
    pub r: Option<f64>,
}

impl LongFormEntry {
    pub fn new(x: VariableName, y: VariableName, r: Option<f64>) -> Self {
        Self { x, y, r }
    }
}
