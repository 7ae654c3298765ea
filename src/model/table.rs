// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ndarray::Array2;

use super::ids::VariableName;

/// Read access shared by square matrices and rectangular focus tables.
///
/// Reshaping, formatting and rendering only need names and cells, so they accept any
/// `CorrTable`.
pub trait CorrTable {
    fn row_names(&self) -> &[VariableName];
    fn col_names(&self) -> &[VariableName];
    /// `None` for masked cells and for out-of-bounds positions.
    fn cell(&self, row: usize, col: usize) -> Option<f64>;

    fn shape(&self) -> (usize, usize) {
        (self.row_names().len(), self.col_names().len())
    }
}

/// Selected columns of a correlation matrix against all of its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTable {
    rows: Vec<VariableName>,
    cols: Vec<VariableName>,
    values: Array2<Option<f64>>,
}

impl FocusTable {
    pub(crate) fn new(
        rows: Vec<VariableName>,
        cols: Vec<VariableName>,
        values: Array2<Option<f64>>,
    ) -> Self {
        debug_assert_eq!(values.dim(), (rows.len(), cols.len()));
        Self { rows, cols, values }
    }

    pub fn values(&self) -> &Array2<Option<f64>> {
        &self.values
    }

    /// One selected column's values in row order.
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let col = self.cols.iter().position(|candidate| candidate.as_str() == name)?;
        Some(self.values.column(col).to_vec())
    }

    pub fn value(&self, row: &str, col: &str) -> Option<f64> {
        let row = self.rows.iter().position(|candidate| candidate.as_str() == row)?;
        let col = self.cols.iter().position(|candidate| candidate.as_str() == col)?;
        self.cell(row, col)
    }
}

impl CorrTable for FocusTable {
    fn row_names(&self) -> &[VariableName] {
        &self.rows
    }

    fn col_names(&self) -> &[VariableName] {
        &self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied().flatten()
    }
}
