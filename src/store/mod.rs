// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading datasets and writing results.
//!
//! Datasets come from CSV files with a header row. Matrices persist as JSON, long form as CSV.

use std::io;
use std::path::PathBuf;

use crate::model::InputError;

pub mod dataset_csv;
mod fs_util;
pub mod matrix_file;

pub use dataset_csv::{load_dataset_csv, read_dataset_csv, ROWNAME_COLUMN};
pub use matrix_file::{
    load_matrix_json, save_long_csv, save_matrix_json, write_long_csv, MatrixFile,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("csv error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("invalid data: {source}")]
    Input {
        #[from]
        source: InputError,
    },
}
