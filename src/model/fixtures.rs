// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ndarray::Array2;

use super::ids::VariableName;
use super::matrix::CorrelationMatrix;

fn var(value: &str) -> VariableName {
    VariableName::new(value).expect("variable name")
}

/// Builds a symmetric matrix from the upper-triangle values, listed row by row.
pub(crate) fn matrix_from_upper(names: &[&str], upper: &[f64]) -> CorrelationMatrix {
    let n = names.len();
    assert_eq!(upper.len(), n * (n - 1) / 2, "upper triangle size");

    let mut values = Array2::from_elem((n, n), None);
    let mut next = upper.iter();
    for i in 0..n {
        for j in (i + 1)..n {
            let r = *next.next().expect("upper value");
            values[[i, j]] = Some(r);
            values[[j, i]] = Some(r);
        }
    }

    let names = names.iter().map(|name| var(name)).collect();
    CorrelationMatrix::from_parts(names, values).expect("fixture matrix")
}

/// v1..v3 all pairwise correlated at 0.7.
pub(crate) fn uniform_three() -> CorrelationMatrix {
    matrix_from_upper(&["v1", "v2", "v3"], &[0.7, 0.7, 0.7])
}

/// Two tight blocks, {a, c, e} and {b, d, f}, interleaved in the input order.
pub(crate) fn two_blocks_interleaved() -> CorrelationMatrix {
    #[rustfmt::skip]
    let upper = [
        // a-b   a-c   a-d   a-e   a-f
        0.10, 0.90, 0.05, 0.85, 0.00,
        // b-c   b-d   b-e   b-f
        0.10, 0.88, 0.02, 0.80,
        // c-d   c-e   c-f
        0.05, 0.92, 0.10,
        // d-e   d-f
        0.03, 0.86,
        // e-f
        0.04,
    ];
    matrix_from_upper(&["a", "b", "c", "d", "e", "f"], &upper)
}

/// Six variables with distinct correlations, some negative.
pub(crate) fn six_vars() -> CorrelationMatrix {
    #[rustfmt::skip]
    let upper = [
        0.60, -0.20, 0.35, 0.10, -0.55,
        0.25, -0.40, 0.70, 0.15,
        0.05, -0.65, 0.45,
        0.30, -0.10,
        0.80,
    ];
    matrix_from_upper(&["v1", "v2", "v3", "v4", "v5", "v6"], &upper)
}
