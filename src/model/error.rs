// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{NameError, VariableName};

/// Degenerate or malformed input detected while building a dataset or a matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("at least two numeric columns are required (found {found})")]
    TooFewNumericColumns { found: usize },
    #[error("column {name} has {found} rows, expected {expected}")]
    LengthMismatch {
        name: VariableName,
        expected: usize,
        found: usize,
    },
    #[error("variable name {name} appears more than once")]
    DuplicateName { name: VariableName },
    #[error("matrix must be square with one row per variable ({variables} variables, {rows}x{cols} values)")]
    NotSquare {
        variables: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matrix is not symmetric at ({row}, {col}): {upper:?} vs {lower:?}")]
    Asymmetric {
        row: VariableName,
        col: VariableName,
        upper: Option<f64>,
        lower: Option<f64>,
    },
    #[error("correlation at ({row}, {col}) is outside [-1, 1]: {value}")]
    OutOfRange {
        row: VariableName,
        col: VariableName,
        value: f64,
    },
    #[error("invalid variable name: {0}")]
    InvalidName(#[from] NameError),
}
