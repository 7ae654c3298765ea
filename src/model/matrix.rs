// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use ndarray::Array2;

use super::error::InputError;
use super::ids::VariableName;
use super::table::CorrTable;

/// Tolerance used when validating symmetry of externally supplied values.
const SYMMETRY_EPSILON: f64 = 1e-12;

/// A named, square table of correlation coefficients.
///
/// Cells hold `Some(r)` with `r` in `[-1, 1]`, or `None` for the missing-value marker. The
/// diagonal is always `None`: self-correlations never reach downstream aggregation or
/// plotting. Every operation builds a new matrix; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<VariableName>,
    values: Array2<Option<f64>>,
}

impl CorrelationMatrix {
    /// Wraps values produced inside the crate. The caller guarantees the shape; the diagonal
    /// is masked here regardless of what the values contain.
    pub(crate) fn from_raw(names: Vec<VariableName>, mut values: Array2<Option<f64>>) -> Self {
        debug_assert_eq!(values.dim(), (names.len(), names.len()));
        for i in 0..names.len() {
            values[[i, i]] = None;
        }
        Self { names, values }
    }

    /// Validates an externally supplied square table and masks its diagonal.
    ///
    /// A value facing a masked cell is accepted, so shaved matrices load back.
    pub fn from_parts(
        names: Vec<VariableName>,
        values: Array2<Option<f64>>,
    ) -> Result<Self, InputError> {
        let (rows, cols) = values.dim();
        if rows != names.len() || cols != names.len() {
            return Err(InputError::NotSquare { variables: names.len(), rows, cols });
        }
        ensure_unique(&names)?;

        for i in 0..rows {
            for j in 0..cols {
                if i == j {
                    continue;
                }
                let value = values[[i, j]];
                if let Some(r) = value {
                    if !r.is_finite() || !(-1.0..=1.0).contains(&r) {
                        return Err(InputError::OutOfRange {
                            row: names[i].clone(),
                            col: names[j].clone(),
                            value: r,
                        });
                    }
                }
            }
        }
        ensure_mirrors_agree(&names, &values)?;

        Ok(Self::from_raw(names, values))
    }

    /// Builds a matrix from row vectors, as read from a matrix file.
    pub fn from_rows(
        names: Vec<VariableName>,
        rows: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, InputError> {
        let n = names.len();
        if rows.len() != n || rows.iter().any(|row| row.len() != n) {
            let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
            return Err(InputError::NotSquare { variables: n, rows: rows.len(), cols });
        }
        let flat = rows.into_iter().flatten().collect::<Vec<_>>();
        let values = Array2::from_shape_vec((n, n), flat)
            .map_err(|_| InputError::NotSquare { variables: n, rows: n, cols: n })?;
        Self::from_parts(names, values)
    }

    pub fn names(&self) -> &[VariableName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn values(&self) -> &Array2<Option<f64>> {
        &self.values
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate.as_str() == name)
    }

    /// Value at `(row, col)` by position; `None` when masked or out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied().flatten()
    }

    /// Value at `(row, col)` by name; `None` when masked or either name is unknown.
    pub fn value(&self, row: &str, col: &str) -> Option<f64> {
        let row = self.index_of(row)?;
        let col = self.index_of(col)?;
        self.at(row, col)
    }

    /// Row values in current column order.
    pub fn row(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let row = self.index_of(name)?;
        Some(self.values.row(row).to_vec())
    }

    /// True when every off-diagonal pair holds equal values (both masked counts as equal).
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| ((i + 1)..n).all(|j| cells_match(self.values[[i, j]], self.values[[j, i]])))
    }

    /// Dense `f64` copy: masked cells become NaN, the diagonal is set to `diagonal`.
    pub fn to_dense(&self, diagonal: f64) -> Array2<f64> {
        Array2::from_shape_fn(self.values.dim(), |(i, j)| {
            if i == j {
                diagonal
            } else {
                self.values[[i, j]].unwrap_or(f64::NAN)
            }
        })
    }

    /// Non-masked values, row-major.
    pub fn present_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(|value| *value).collect()
    }

    /// New matrix over `order` (positions into this matrix), applied to rows and columns alike.
    ///
    /// `order` may be a permutation or a subset; positions must be in bounds and distinct.
    pub(crate) fn reindexed(&self, order: &[usize]) -> Self {
        let names = order.iter().map(|&idx| self.names[idx].clone()).collect::<Vec<_>>();
        let values = Array2::from_shape_fn((order.len(), order.len()), |(i, j)| {
            self.values[[order[i], order[j]]]
        });
        Self::from_raw(names, values)
    }
}

impl CorrTable for CorrelationMatrix {
    fn row_names(&self) -> &[VariableName] {
        &self.names
    }

    fn col_names(&self) -> &[VariableName] {
        &self.names
    }

    fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.at(row, col)
    }
}

fn cells_match(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() <= SYMMETRY_EPSILON,
        _ => false,
    }
}

/// Rejects pairs whose two cells both hold values that differ. A masked side is allowed, so
/// shaved matrices pass.
pub(crate) fn ensure_mirrors_agree(
    names: &[VariableName],
    values: &Array2<Option<f64>>,
) -> Result<(), InputError> {
    let n = names.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (upper, lower) = (values[[i, j]], values[[j, i]]);
            if let (Some(a), Some(b)) = (upper, lower) {
                if (a - b).abs() > SYMMETRY_EPSILON {
                    return Err(InputError::Asymmetric {
                        row: names[i].clone(),
                        col: names[j].clone(),
                        upper,
                        lower,
                    });
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn ensure_unique(names: &[VariableName]) -> Result<(), InputError> {
    let mut seen = HashSet::<&VariableName>::with_capacity(names.len());
    for name in names {
        if !seen.insert(name) {
            return Err(InputError::DuplicateName { name: name.clone() });
        }
    }
    Ok(())
}
