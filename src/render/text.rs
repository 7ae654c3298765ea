// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

/// Display width in chars; labels are assumed to be single-width.
pub(crate) fn width(text: &str) -> usize {
    text.chars().count()
}

/// `text` cut to at most `max` chars, ending in `…` when anything was dropped.
pub(crate) fn clip(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        None => Cow::Borrowed(text),
        Some(_) if max == 0 => Cow::Borrowed(""),
        Some(_) => {
            let keep = text.char_indices().nth(max - 1).map_or(text.len(), |(idx, _)| idx);
            Cow::Owned(format!("{}…", &text[..keep]))
        }
    }
}

/// Left-aligns `text` in a field of `field` chars, clipping it if needed.
pub(crate) fn fit_left(text: &str, field: usize) -> String {
    let mut out = clip(text, field).into_owned();
    let pad = field.saturating_sub(width(&out));
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Joins lines after trimming trailing spaces and dropping trailing empty lines.
pub(crate) fn join_trimmed(lines: &[String]) -> String {
    let mut lines = lines.iter().map(|line| line.trim_end_matches(' ')).collect::<Vec<_>>();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
