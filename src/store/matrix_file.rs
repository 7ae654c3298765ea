// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fs_util::write_atomic;
use super::StoreError;
use crate::model::{CorrelationMatrix, InputError, LongFormEntry, VariableName};

/// On-disk shape of a correlation matrix. Missing cells are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixFile {
    pub variables: Vec<VariableName>,
    pub rows: Vec<Vec<Option<f64>>>,
}

impl From<&CorrelationMatrix> for MatrixFile {
    fn from(matrix: &CorrelationMatrix) -> Self {
        let rows = matrix.values().rows().into_iter().map(|row| row.to_vec()).collect();
        Self { variables: matrix.names().to_vec(), rows }
    }
}

impl TryFrom<MatrixFile> for CorrelationMatrix {
    type Error = InputError;

    fn try_from(file: MatrixFile) -> Result<Self, Self::Error> {
        CorrelationMatrix::from_rows(file.variables, file.rows)
    }
}

pub fn save_matrix_json(path: impl AsRef<Path>, matrix: &CorrelationMatrix) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut bytes = serde_json::to_vec_pretty(&MatrixFile::from(matrix))
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), variables = matrix.len(), "saved matrix");
    Ok(())
}

/// Loads a matrix file, rejecting non-square, asymmetric or out-of-range content.
pub fn load_matrix_json(path: impl AsRef<Path>) -> Result<CorrelationMatrix, StoreError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let file: MatrixFile = serde_json::from_slice(&bytes)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    Ok(CorrelationMatrix::try_from(file)?)
}

/// Writes long-form entries as `x,y,r` CSV. A missing coefficient is an empty field.
pub fn write_long_csv<W: Write>(writer: W, entries: &[LongFormEntry]) -> Result<(), StoreError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(["x", "y", "r"])?;
    for entry in entries {
        let r = entry.r.map(|r| r.to_string()).unwrap_or_default();
        writer.write_record([entry.x.as_str(), entry.y.as_str(), r.as_str()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn save_long_csv(path: impl AsRef<Path>, entries: &[LongFormEntry]) -> Result<(), StoreError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    write_long_csv(&mut bytes, entries)?;
    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), entries = entries.len(), "saved long form");
    Ok(())
}
