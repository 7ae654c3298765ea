// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::VariableName;

/// Minimum normalized similarity (0..=1) for a name to be offered as a suggestion.
const MIN_SUGGESTION_RATIO: f64 = 0.6;

/// Closest known name to `needle`, if any is similar enough to be worth suggesting.
pub fn closest_name<'a>(needle: &str, candidates: &'a [VariableName]) -> Option<&'a VariableName> {
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }

    let needle_lower = needle.to_lowercase();
    let mut best: Option<(f64, &VariableName)> = None;
    for candidate in candidates {
        let haystack = candidate.as_str().to_lowercase();
        let mut score = rapidfuzz::fuzz::ratio(needle_lower.chars(), haystack.chars());
        if haystack.starts_with(&needle_lower) || needle_lower.starts_with(&haystack) {
            score += 0.1;
        }
        if best.map(|(best_score, _)| score > best_score).unwrap_or(true) {
            best = Some((score, candidate));
        }
    }

    best.filter(|(score, _)| *score >= MIN_SUGGESTION_RATIO).map(|(_, name)| name)
}
