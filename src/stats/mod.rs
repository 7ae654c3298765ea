// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pairwise correlation of dataset columns.
//!
//! Every column pair is correlated over the rows where both are present (pairwise deletion),
//! independently of the other pairs.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{CorrelationMatrix, Dataset, InputError, VariableName};

pub mod methods;

pub use methods::{average_ranks, complete_pairs, kendall, pearson, spearman};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    Pearson,
    Spearman,
    Kendall,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
            Self::Kendall => "kendall",
        }
    }

    /// Correlation of two columns under pairwise deletion.
    pub fn correlate_pair(self, x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
        let (xs, ys) = complete_pairs(x, y);
        match self {
            Self::Pearson => pearson(&xs, &ys),
            Self::Spearman => spearman(&xs, &ys),
            Self::Kendall => kendall(&xs, &ys),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown correlation method '{0}' (expected pearson, spearman or kendall)")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(Self::Pearson),
            "spearman" => Ok(Self::Spearman),
            "kendall" => Ok(Self::Kendall),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorrelateOptions {
    pub method: Method,
}

/// Builds a correlation matrix over the numeric columns of `dataset`.
///
/// Text columns are skipped with a warning. Cells whose pair has fewer than two complete
/// observations, or zero variance on either side, hold the missing-value marker.
pub fn correlate(
    dataset: &Dataset,
    options: &CorrelateOptions,
) -> Result<CorrelationMatrix, InputError> {
    let skipped = dataset.text_columns().map(VariableName::as_str).collect::<Vec<_>>();
    if !skipped.is_empty() {
        warn!(columns = ?skipped, "non-numeric columns removed before correlating");
    }

    let columns = dataset.numeric_columns().collect::<Vec<_>>();
    if columns.len() < 2 {
        return Err(InputError::TooFewNumericColumns { found: columns.len() });
    }

    let n = columns.len();
    let mut values = Array2::<Option<f64>>::from_elem((n, n), None);
    let mut undefined = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = options.method.correlate_pair(columns[i].1, columns[j].1);
            if r.is_none() {
                undefined += 1;
            }
            values[[i, j]] = r;
            values[[j, i]] = r;
        }
    }

    debug!(
        method = %options.method,
        variables = n,
        rows = dataset.rows(),
        undefined,
        "correlation matrix computed"
    );

    let names = columns.into_iter().map(|(name, _)| name.clone()).collect();
    Ok(CorrelationMatrix::from_raw(names, values))
}

#[cfg(test)]
mod tests;
