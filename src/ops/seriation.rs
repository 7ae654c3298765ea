// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Chooses a variable order from a symmetric distance matrix with a zero diagonal.
///
/// Implementations must return a permutation of `0..distances.nrows()`.
pub trait Seriation {
    fn order(&self, distances: &Array2<f64>) -> Vec<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    Single,
    #[default]
    Complete,
    Average,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown linkage '{0}' (expected single, complete or average)")]
pub struct ParseLinkageError(String);

impl FromStr for Linkage {
    type Err = ParseLinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "complete" => Ok(Self::Complete),
            "average" => Ok(Self::Average),
            _ => Err(ParseLinkageError(s.to_owned())),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Complete => "complete",
            Self::Average => "average",
        })
    }
}

type Members = SmallVec<[usize; 8]>;

/// Agglomerative hierarchical clustering; the order is the leaf order of the merge tree.
///
/// At each step the closest pair of clusters merges (ties go to the pair seen first in
/// row-major order), and the merged cluster lists the earlier cluster's leaves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hierarchical {
    pub linkage: Linkage,
}

impl Seriation for Hierarchical {
    fn order(&self, distances: &Array2<f64>) -> Vec<usize> {
        let n = distances.nrows();
        let mut clusters: Vec<Members> = (0..n).map(|idx| smallvec![idx]).collect();
        let mut dist = (0..n).map(|i| distances.row(i).to_vec()).collect::<Vec<_>>();

        while clusters.len() > 1 {
            let (p, q) = closest_pair(&dist);
            let size_p = clusters[p].len() as f64;
            let size_q = clusters[q].len() as f64;

            for k in 0..clusters.len() {
                if k == p || k == q {
                    continue;
                }
                let merged = match self.linkage {
                    Linkage::Single => dist[p][k].min(dist[q][k]),
                    Linkage::Complete => dist[p][k].max(dist[q][k]),
                    Linkage::Average => {
                        (size_p * dist[p][k] + size_q * dist[q][k]) / (size_p + size_q)
                    }
                };
                dist[p][k] = merged;
                dist[k][p] = merged;
            }

            let absorbed = clusters.remove(q);
            clusters[p].extend(absorbed);
            dist.remove(q);
            for row in &mut dist {
                row.remove(q);
            }
        }

        clusters.pop().map(|members| members.into_vec()).unwrap_or_default()
    }
}

/// `(p, q)` with `p < q` minimizing `dist[p][q]`.
fn closest_pair(dist: &[Vec<f64>]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_distance = f64::INFINITY;
    for p in 0..dist.len() {
        for q in (p + 1)..dist.len() {
            if dist[p][q] < best_distance {
                best_distance = dist[p][q];
                best = (p, q);
            }
        }
    }
    best
}

/// Greedy chain: start at the first variable and repeatedly step to the nearest unvisited
/// one (ties go to the lower index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NearestNeighbor;

impl Seriation for NearestNeighbor {
    fn order(&self, distances: &Array2<f64>) -> Vec<usize> {
        let n = distances.nrows();
        if n == 0 {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut current = 0;
        visited[current] = true;
        order.push(current);

        while order.len() < n {
            let mut next = None;
            let mut next_distance = f64::INFINITY;
            for candidate in 0..n {
                if visited[candidate] {
                    continue;
                }
                let d = distances[[current, candidate]];
                if next.is_none() || d < next_distance {
                    next = Some(candidate);
                    next_distance = d;
                }
            }
            let Some(next) = next else {
                break;
            };
            visited[next] = true;
            order.push(next);
            current = next;
        }

        order
    }
}

/// The built-in strategies, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriationMethod {
    Hierarchical { linkage: Linkage },
    NearestNeighbor,
}

impl Default for SeriationMethod {
    fn default() -> Self {
        Self::Hierarchical { linkage: Linkage::default() }
    }
}

impl Seriation for SeriationMethod {
    fn order(&self, distances: &Array2<f64>) -> Vec<usize> {
        match *self {
            Self::Hierarchical { linkage } => Hierarchical { linkage }.order(distances),
            Self::NearestNeighbor => NearestNeighbor.order(distances),
        }
    }
}
