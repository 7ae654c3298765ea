// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transformations over correlation matrices.
//!
//! Every operation takes its input by reference and returns a new value, so calls chain:
//! `stretch(&shave(&rearrange(&m, &opts), Triangle::Upper), &StretchOptions::default())`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{
    CorrTable, CorrelationMatrix, FocusTable, InputError, LongFormEntry, VariableName,
};
use crate::model::matrix::ensure_mirrors_agree;
use crate::query::{resolve, LookupError, Selection};

pub mod seriation;

pub use seriation::{Hierarchical, Linkage, NearestNeighbor, Seriation, SeriationMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triangle {
    #[default]
    Upper,
    Lower,
}

impl Triangle {
    fn contains(self, row: usize, col: usize) -> bool {
        match self {
            Self::Upper => row < col,
            Self::Lower => row > col,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown triangle '{0}' (expected upper or lower)")]
pub struct ParseTriangleError(String);

impl FromStr for Triangle {
    type Err = ParseTriangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            _ => Err(ParseTriangleError(s.to_owned())),
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        })
    }
}

/// Masks every cell of the selected triangle, positions taken in the current order.
///
/// Idempotent; the diagonal and the other triangle are left as they are.
pub fn shave(matrix: &CorrelationMatrix, triangle: Triangle) -> CorrelationMatrix {
    let values = Array2::from_shape_fn(matrix.values().dim(), |(i, j)| {
        if triangle.contains(i, j) {
            None
        } else {
            matrix.at(i, j)
        }
    });
    debug!(%triangle, variables = matrix.len(), "shaved");
    CorrelationMatrix::from_raw(matrix.names().to_vec(), values)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RearrangeOptions {
    pub method: SeriationMethod,
    /// Cluster on `|r|` so strong negative correlations count as similar.
    pub absolute: bool,
}

impl Default for RearrangeOptions {
    fn default() -> Self {
        Self { method: SeriationMethod::default(), absolute: true }
    }
}

/// Distances between variables: `1 - |r|` when `absolute`, else `1 - r`.
///
/// A masked cell falls back to its mirrored cell, so shaved matrices cluster the same way as
/// their unshaved source; a pair with no value on either side is treated as uncorrelated.
pub fn distance_matrix(matrix: &CorrelationMatrix, absolute: bool) -> Array2<f64> {
    Array2::from_shape_fn(matrix.values().dim(), |(i, j)| {
        if i == j {
            return 0.0;
        }
        let r = matrix.at(i, j).or_else(|| matrix.at(j, i)).unwrap_or(0.0);
        if absolute {
            1.0 - r.abs()
        } else {
            1.0 - r
        }
    })
}

/// Reorders with one of the built-in strategies.
pub fn rearrange(matrix: &CorrelationMatrix, options: &RearrangeOptions) -> CorrelationMatrix {
    rearrange_with(matrix, &options.method, options.absolute)
}

/// Reorders rows and columns together by the order `seriation` picks.
pub fn rearrange_with<S: Seriation + ?Sized>(
    matrix: &CorrelationMatrix,
    seriation: &S,
    absolute: bool,
) -> CorrelationMatrix {
    let order = seriation.order(&distance_matrix(matrix, absolute));
    debug_assert!(is_permutation(&order, matrix.len()), "seriation must return a permutation");
    debug!(absolute, order = ?order, "rearranged");
    matrix.reindexed(&order)
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    order.len() == n
        && order.iter().all(|&idx| idx < n && !std::mem::replace(&mut seen[idx], true))
}

/// Result of [`focus`]: a rectangular table, or a square matrix when mirrored.
#[derive(Debug, Clone, PartialEq)]
pub enum Focused {
    Table(FocusTable),
    Mirror(CorrelationMatrix),
}

/// Selects variables from a matrix.
///
/// Without `mirror`, the selected columns are kept against every row (self cells stay
/// masked). With `mirror`, both rows and columns are restricted to the selection.
pub fn focus(
    matrix: &CorrelationMatrix,
    selection: &Selection,
    mirror: bool,
) -> Result<Focused, LookupError> {
    if mirror {
        dice(matrix, selection).map(Focused::Mirror)
    } else {
        focus_columns(matrix, selection).map(Focused::Table)
    }
}

/// The selected columns against all rows.
pub fn focus_columns(
    matrix: &CorrelationMatrix,
    selection: &Selection,
) -> Result<FocusTable, LookupError> {
    let cols = resolve(matrix.names(), selection)?;
    let values = Array2::from_shape_fn((matrix.len(), cols.len()), |(i, j)| matrix.at(i, cols[j]));
    let col_names = cols.iter().map(|&idx| matrix.names()[idx].clone()).collect();
    debug!(rows = matrix.len(), cols = cols.len(), "focused");
    Ok(FocusTable::new(matrix.names().to_vec(), col_names, values))
}

/// The square sub-matrix over the selected variables.
pub fn dice(
    matrix: &CorrelationMatrix,
    selection: &Selection,
) -> Result<CorrelationMatrix, LookupError> {
    let keep = resolve(matrix.names(), selection)?;
    debug!(variables = keep.len(), "diced");
    Ok(matrix.reindexed(&keep))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StretchOptions {
    /// Drop masked cells.
    pub na_rm: bool,
    /// Keep a single entry per unordered variable pair.
    pub remove_dups: bool,
}

/// Flattens a table into long form, row-major in the current row and column order.
///
/// With `remove_dups`, the entry kept for a pair is the first one in row-major order that
/// holds a value, or simply the first one when neither does.
pub fn stretch<T: CorrTable + ?Sized>(table: &T, options: &StretchOptions) -> Vec<LongFormEntry> {
    let rows = table.row_names();
    let cols = table.col_names();

    let mut keep: HashMap<(&str, &str), (usize, usize)> = HashMap::new();
    if options.remove_dups {
        for (i, row) in rows.iter().enumerate() {
            for (j, col) in cols.iter().enumerate() {
                let key = pair_key(row, col);
                match keep.get(&key) {
                    None => {
                        keep.insert(key, (i, j));
                    }
                    Some(&(ki, kj)) => {
                        if table.cell(ki, kj).is_none() && table.cell(i, j).is_some() {
                            keep.insert(key, (i, j));
                        }
                    }
                }
            }
        }
    }

    let mut entries = Vec::with_capacity(rows.len() * cols.len());
    for (i, row) in rows.iter().enumerate() {
        for (j, col) in cols.iter().enumerate() {
            if options.remove_dups && keep.get(&pair_key(row, col)) != Some(&(i, j)) {
                continue;
            }
            let r = table.cell(i, j);
            if options.na_rm && r.is_none() {
                continue;
            }
            entries.push(LongFormEntry::new(row.clone(), col.clone(), r));
        }
    }

    debug!(
        entries = entries.len(),
        na_rm = options.na_rm,
        remove_dups = options.remove_dups,
        "stretched"
    );
    entries
}

fn pair_key<'a>(a: &'a VariableName, b: &'a VariableName) -> (&'a str, &'a str) {
    if a <= b {
        (a.as_str(), b.as_str())
    } else {
        (b.as_str(), a.as_str())
    }
}

/// Rebuilds a matrix from long form.
///
/// Variables are ordered by first appearance (`x` before `y` within an entry). Cells without
/// an entry are masked, later entries for the same cell win, and the diagonal is masked.
/// Mirrored entries that both hold values must agree.
pub fn retract(entries: &[LongFormEntry]) -> Result<CorrelationMatrix, InputError> {
    let mut names = Vec::<VariableName>::new();
    let mut index = HashMap::<&VariableName, usize>::new();
    for entry in entries {
        for name in [&entry.x, &entry.y] {
            if !index.contains_key(name) {
                index.insert(name, names.len());
                names.push(name.clone());
            }
        }
    }

    let n = names.len();
    let mut values = Array2::<Option<f64>>::from_elem((n, n), None);
    for entry in entries {
        if let Some(r) = entry.r {
            if !r.is_finite() || !(-1.0..=1.0).contains(&r) {
                return Err(InputError::OutOfRange {
                    row: entry.x.clone(),
                    col: entry.y.clone(),
                    value: r,
                });
            }
        }
        values[[index[&entry.x], index[&entry.y]]] = entry.r;
    }

    ensure_mirrors_agree(&names, &values)?;

    debug!(variables = n, entries = entries.len(), "retracted");
    Ok(CorrelationMatrix::from_raw(names, values))
}
