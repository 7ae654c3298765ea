// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::text::{clip, fit_left, join_trimmed, width};
use crate::format::{fashion_value, FashionOptions};
use crate::model::CorrTable;

/// Shade glyphs for `|r|` in buckets of 0.2, weakest first.
pub const STRENGTH_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];
pub const NEGATIVE_MARK: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RplotOptions {
    /// Maximum chars for row labels and for the vertical column labels.
    pub label_width: usize,
    pub legend: bool,
    /// Print rounded coefficients instead of glyphs.
    pub print_cor: bool,
}

impl Default for RplotOptions {
    fn default() -> Self {
        Self { label_width: 8, legend: true, print_cor: false }
    }
}

pub fn strength_glyph(r: f64) -> char {
    let bucket = (r.abs() * STRENGTH_GLYPHS.len() as f64).floor() as usize;
    STRENGTH_GLYPHS[bucket.min(STRENGTH_GLYPHS.len() - 1)]
}

fn glyph_cell(value: Option<f64>) -> String {
    match value {
        None => "   ".to_owned(),
        Some(r) => {
            let sign = if r < 0.0 { NEGATIVE_MARK } else { ' ' };
            format!(" {sign}{}", strength_glyph(r))
        }
    }
}

fn number_cell(value: Option<f64>) -> String {
    let options = FashionOptions::default();
    format!("{:>5}", fashion_value(value, &options))
}

/// Renders a table as a grid of glyphs, one cell per coefficient.
///
/// Column labels are written vertically above their cells; masked cells stay blank.
pub fn render_rplot<T: CorrTable + ?Sized>(table: &T, options: &RplotOptions) -> String {
    let rows = table.row_names();
    let cols = table.col_names();
    let cell_width = if options.print_cor { 5 } else { 3 };

    let row_label_width = rows
        .iter()
        .map(|name| width(name.as_str()))
        .max()
        .unwrap_or(0)
        .min(options.label_width);

    let col_labels = cols
        .iter()
        .map(|name| clip(name.as_str(), options.label_width).chars().collect())
        .collect::<Vec<Vec<char>>>();
    let header_height = col_labels.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::<String>::with_capacity(header_height + rows.len() + 2);
    for k in 0..header_height {
        let mut line = " ".repeat(row_label_width);
        for label in &col_labels {
            line.push_str(&" ".repeat(cell_width - 1));
            line.push(label.get(k).copied().unwrap_or(' '));
        }
        lines.push(line);
    }

    for (i, name) in rows.iter().enumerate() {
        let mut line = fit_left(name.as_str(), row_label_width);
        for j in 0..cols.len() {
            let value = table.cell(i, j);
            if options.print_cor {
                line.push_str(&number_cell(value));
            } else {
                line.push_str(&glyph_cell(value));
            }
        }
        lines.push(line);
    }

    if options.legend && !options.print_cor {
        lines.push(String::new());
        lines.push(legend());
    }

    join_trimmed(&lines)
}

fn legend() -> String {
    let bounds = [".2", ".4", ".6", ".8"];
    let mut parts = Vec::with_capacity(STRENGTH_GLYPHS.len() + 1);
    for (idx, glyph) in STRENGTH_GLYPHS.iter().enumerate() {
        match bounds.get(idx) {
            Some(bound) => parts.push(format!("{glyph} <{bound}")),
            None => parts.push(format!("{glyph} >={}", bounds[bounds.len() - 1])),
        }
    }
    parts.push(format!("{NEGATIVE_MARK} negative"));
    format!("|r|: {}", parts.join("  "))
}
