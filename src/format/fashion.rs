// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::CorrTable;
use crate::render::text::width;

/// Header of the first column, which holds the row variable names.
pub const TERM_HEADER: &str = "term";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FashionOptions {
    /// Digits after the decimal point.
    pub decimals: u8,
    /// Printed for masked cells.
    pub na_print: String,
    /// Keep the `0` in `0.42`; dropped by default so columns stay narrow.
    pub leading_zeros: bool,
}

impl Default for FashionOptions {
    fn default() -> Self {
        Self { decimals: 2, na_print: String::new(), leading_zeros: false }
    }
}

/// Display-ready cells: a header row plus one row of strings per table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FashionedTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl FashionedTable {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

impl fmt::Display for FashionedTable {
    /// Term column left-aligned, value columns right-aligned, single-space gutters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = self.header.iter().map(|cell| width(cell)).collect::<Vec<_>>();
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(width(cell));
            }
        }

        let lines = std::iter::once(&self.header).chain(self.rows.iter());
        for (line_idx, row) in lines.enumerate() {
            if line_idx > 0 {
                f.write_str("\n")?;
            }
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                let pad = widths[col] - width(cell);
                if col == 0 {
                    line.push_str(cell);
                    line.extend(std::iter::repeat(' ').take(pad));
                } else {
                    line.push(' ');
                    line.extend(std::iter::repeat(' ').take(pad));
                    line.push_str(cell);
                }
            }
            f.write_str(line.trim_end_matches(' '))?;
        }
        Ok(())
    }
}

/// Rounds every cell for display; masked cells print as `na_print`.
pub fn fashion<T: CorrTable + ?Sized>(table: &T, options: &FashionOptions) -> FashionedTable {
    let header = std::iter::once(TERM_HEADER.to_owned())
        .chain(table.col_names().iter().map(ToString::to_string))
        .collect();

    let rows = table
        .row_names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut row = Vec::with_capacity(table.col_names().len() + 1);
            row.push(name.to_string());
            for j in 0..table.col_names().len() {
                row.push(fashion_value(table.cell(i, j), options));
            }
            row
        })
        .collect();

    FashionedTable { header, rows }
}

pub fn fashion_value(value: Option<f64>, options: &FashionOptions) -> String {
    let Some(value) = value else {
        return options.na_print.clone();
    };

    let mut text = format!("{:.*}", usize::from(options.decimals), value);
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        // Rounded to zero: drop the sign of `-0.00`.
        text.remove(0);
    }
    if !options.leading_zeros {
        if let Some(rest) = text.strip_prefix("0.") {
            text = format!(".{rest}");
        } else if let Some(rest) = text.strip_prefix("-0.") {
            text = format!("-.{rest}");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{fashion, fashion_value, FashionOptions};
    use crate::model::fixtures::uniform_three;
    use crate::ops::{focus_columns, shave, Triangle};
    use crate::query::Selection;

    fn opts(decimals: u8, na_print: &str, leading_zeros: bool) -> FashionOptions {
        FashionOptions { decimals, na_print: na_print.to_owned(), leading_zeros }
    }

    #[rstest]
    #[case(Some(0.7), opts(2, "", false), ".70")]
    #[case(Some(0.7), opts(2, "", true), "0.70")]
    #[case(Some(-0.456), opts(2, "", false), "-.46")]
    #[case(Some(-0.456), opts(1, "", true), "-0.5")]
    #[case(Some(-0.001), opts(2, "", false), ".00")]
    #[case(Some(1.0), opts(2, "", false), "1.00")]
    #[case(Some(-1.0), opts(0, "", false), "-1")]
    #[case(Some(0.3), opts(0, "", false), "0")]
    #[case(None, opts(2, "", false), "")]
    #[case(None, opts(2, "NA", false), "NA")]
    fn formats_single_values(
        #[case] value: Option<f64>,
        #[case] options: FashionOptions,
        #[case] expected: &str,
    ) {
        assert_eq!(fashion_value(value, &options), expected);
    }

    #[test]
    fn widest_precision_formats_without_panicking() {
        let text = fashion_value(Some(0.5), &opts(u8::MAX, "", true));
        assert_eq!(text.len(), 2 + usize::from(u8::MAX));
        assert!(text.starts_with("0.5000"));
    }

    #[test]
    fn fashion_renders_shaved_matrix() {
        let table = fashion(&shave(&uniform_three(), Triangle::Upper), &FashionOptions::default());
        assert_eq!(table.header(), ["term", "v1", "v2", "v3"]);
        assert_eq!(table.cell(1, 1), Some(".70"));
        assert_eq!(table.cell(0, 2), Some(""));

        let expected = "term  v1  v2 v3\nv1\nv2   .70\nv3   .70 .70";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn fashion_uses_na_print_placeholder() {
        let options = FashionOptions { na_print: "-".to_owned(), ..FashionOptions::default() };
        let text = fashion(&uniform_three(), &options).to_string();
        assert_eq!(text, "term  v1  v2  v3\nv1     - .70 .70\nv2   .70   - .70\nv3   .70 .70   -");
    }

    #[test]
    fn fashion_accepts_focus_tables() {
        let table = focus_columns(&uniform_three(), &Selection::include(["v2"])).expect("focus");
        let fashioned = fashion(&table, &FashionOptions::default());
        assert_eq!(fashioned.header(), ["term", "v2"]);
        assert_eq!(fashioned.rows().len(), 3);
        assert_eq!(fashioned.cell(1, 1), Some(""));
    }
}
