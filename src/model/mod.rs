// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A `Dataset` of named columns is turned into a `CorrelationMatrix`; operations produce new
//! matrices, `FocusTable`s, or long-form entries.

pub mod dataset;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod long_form;
pub mod matrix;
pub mod table;

pub use dataset::{Column, ColumnData, Dataset};
pub use error::InputError;
pub use ids::{names, NameError, VariableName};
pub use long_form::LongFormEntry;
pub use matrix::CorrelationMatrix;
pub use table::{CorrTable, FocusTable};
