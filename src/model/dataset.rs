// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::error::InputError;
use super::ids::VariableName;

/// Cell storage for one column. `None` is a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: VariableName,
    data: ColumnData,
}

impl Column {
    /// Creates a numeric column. Non-finite values are stored as missing.
    pub fn numeric(name: VariableName, values: Vec<Option<f64>>) -> Self {
        let values = values.into_iter().map(|value| value.filter(|v| v.is_finite())).collect();
        Self { name, data: ColumnData::Numeric(values) }
    }

    pub fn text(name: VariableName, values: Vec<Option<String>>) -> Self {
        Self { name, data: ColumnData::Text(values) }
    }

    pub fn name(&self) -> &VariableName {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(values) => Some(values),
            ColumnData::Text(_) => None,
        }
    }
}

/// A column-oriented table of named vectors, all of the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, InputError> {
        let rows = columns.first().map(|column| column.data.len()).unwrap_or(0);
        let mut seen = HashSet::<&VariableName>::with_capacity(columns.len());

        for column in &columns {
            if !seen.insert(&column.name) {
                return Err(InputError::DuplicateName { name: column.name.clone() });
            }
            let found = column.data.len();
            if found != rows {
                return Err(InputError::LengthMismatch {
                    name: column.name.clone(),
                    expected: rows,
                    found,
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Convenience constructor for all-numeric data.
    pub fn from_numeric<I, S>(columns: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (S, Vec<Option<f64>>)>,
        S: AsRef<str>,
    {
        let columns = columns
            .into_iter()
            .map(|(name, values)| Ok(Column::numeric(VariableName::new(name)?, values)))
            .collect::<Result<Vec<_>, InputError>>()?;
        Self::new(columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name.as_str() == name)
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = (&VariableName, &[Option<f64>])> {
        self.columns
            .iter()
            .filter_map(|column| column.as_numeric().map(|values| (&column.name, values)))
    }

    pub fn text_columns(&self) -> impl Iterator<Item = &VariableName> {
        self.columns.iter().filter(|column| !column.data.is_numeric()).map(|column| &column.name)
    }
}
