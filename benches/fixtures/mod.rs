// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use corrlens::{CorrelationMatrix, LongFormEntry};

pub fn checksum_matrix(matrix: &CorrelationMatrix) -> u64 {
    let mut acc = 0u64;
    for name in matrix.names() {
        acc = acc.wrapping_mul(131).wrapping_add(name.as_str().len() as u64);
    }
    for value in matrix.values().iter() {
        let bits = value.map(f64::to_bits).unwrap_or(u64::MAX);
        acc = acc.wrapping_mul(131).wrapping_add(bits);
    }
    acc
}

pub fn checksum_entries(entries: &[LongFormEntry]) -> u64 {
    let mut acc = 0u64;
    for entry in entries {
        acc = acc.wrapping_mul(131).wrapping_add(entry.x.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(entry.y.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(entry.r.map(f64::to_bits).unwrap_or(0));
    }
    acc
}

pub mod dataset {
    use corrlens::Dataset;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DatasetParams {
        pub variables: usize,
        pub rows: usize,
        /// Variables sharing a latent factor; controls how much structure clustering finds.
        pub blocks: usize,
        /// Every `missing_every`-th cell is missing (0 = complete data).
        pub missing_every: usize,
    }

    impl DatasetParams {
        pub const fn new(variables: usize, rows: usize, blocks: usize, missing_every: usize) -> Self {
            Self { variables, rows, blocks, missing_every }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumSparse,
        LargeWide,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumSparse => "medium_sparse",
                Self::LargeWide => "large_wide",
            }
        }

        pub const fn params(self) -> DatasetParams {
            match self {
                Self::Small => DatasetParams::new(8, 64, 2, 0),
                Self::MediumSparse => DatasetParams::new(32, 500, 4, 17),
                Self::LargeWide => DatasetParams::new(96, 1_000, 8, 41),
            }
        }
    }

    fn splitmix64(mut state: u64) -> u64 {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[-1, 1)` from a seed.
    fn unit(seed: u64) -> f64 {
        (splitmix64(seed) >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    /// Deterministic blocked dataset.
    ///
    /// - Variable `j` follows latent factor `j % blocks` plus its own noise, so variables in
    ///   the same block correlate strongly and the rest weakly.
    /// - Odd blocks load negatively, so `|r|` clustering differs from signed clustering.
    pub fn blocked(params: DatasetParams) -> Dataset {
        assert!(params.variables >= 2, "variables must be >= 2");
        assert!(params.blocks >= 1, "blocks must be >= 1");

        let latent = (0..params.blocks)
            .map(|block| {
                (0..params.rows)
                    .map(|row| unit(((block as u64) << 32) ^ row as u64))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let columns = (0..params.variables).map(|var| {
            let block = var % params.blocks;
            let sign = if block % 2 == 0 { 1.0 } else { -1.0 };
            let values = (0..params.rows)
                .map(|row| {
                    let cell = var * params.rows + row;
                    if params.missing_every > 0 && cell % params.missing_every == 0 {
                        return None;
                    }
                    let noise = unit((1u64 << 48) ^ ((var as u64) << 24) ^ row as u64);
                    Some(sign * latent[block][row] + 0.5 * noise)
                })
                .collect::<Vec<_>>();
            (format!("v{var:03}"), values)
        });

        Dataset::from_numeric(columns).expect("valid bench dataset")
    }

    pub fn fixture(case: Case) -> Dataset {
        blocked(case.params())
    }
}
