// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::StoreError;
use crate::model::{Column, Dataset, InputError, VariableName};

/// Name given to an unnamed leading header cell, as written by R's `write.csv`.
pub const ROWNAME_COLUMN: &str = "rowname";

const MISSING_TOKENS: [&str; 4] = ["", "na", "nan", "null"];

fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.iter().any(|token| cell.eq_ignore_ascii_case(token))
}

/// Parses a column as numeric, or returns `None` if any present cell is not a number.
fn parse_numeric(cells: &[String]) -> Option<Vec<Option<f64>>> {
    cells
        .iter()
        .map(|cell| {
            if is_missing(cell) {
                Some(None)
            } else {
                cell.parse::<f64>().ok().map(Some)
            }
        })
        .collect()
}

fn text_cells(cells: Vec<String>) -> Vec<Option<String>> {
    cells.into_iter().map(|cell| (!is_missing(&cell)).then_some(cell)).collect()
}

/// Reads a dataset from CSV with a header row.
///
/// A column is numeric when every non-missing cell parses as a number; otherwise it is kept as
/// text. `""`, `NA`, `NaN` and `null` (any case) mark missing cells.
pub fn read_dataset_csv<R: Read>(reader: R) -> Result<Dataset, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut cells = vec![Vec::<String>::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (column, cell) in cells.iter_mut().zip(record.iter()) {
            column.push(cell.to_owned());
        }
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (idx, (header, cells)) in headers.iter().zip(cells).enumerate() {
        let header = if idx == 0 && header.is_empty() { ROWNAME_COLUMN } else { header };
        let name = VariableName::new(header).map_err(InputError::from)?;
        let column = match parse_numeric(&cells) {
            Some(values) => Column::numeric(name, values),
            None => Column::text(name, text_cells(cells)),
        };
        columns.push(column);
    }

    let dataset = Dataset::new(columns)?;
    debug!(
        rows = dataset.rows(),
        columns = dataset.columns().len(),
        numeric = dataset.numeric_columns().count(),
        "read dataset"
    );
    Ok(dataset)
}

pub fn load_dataset_csv(path: impl AsRef<Path>) -> Result<Dataset, StoreError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    read_dataset_csv(file)
}
