// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Corrlens: correlation matrices for exploring tabular data.
//!
//! Build a matrix from a [`model::Dataset`] with [`stats::correlate`], then reshape it with
//! the pure operations in [`ops`] (shave, rearrange, focus, stretch) and present it with
//! [`format::fashion`] or [`render::render_rplot`].

pub mod format;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod stats;
pub mod store;

pub use format::{fashion, FashionOptions, FashionedTable};
pub use model::{CorrTable, CorrelationMatrix, Dataset, FocusTable, LongFormEntry, VariableName};
pub use ops::{
    dice, focus, focus_columns, rearrange, retract, shave, stretch, Focused, RearrangeOptions,
    StretchOptions, Triangle,
};
pub use query::Selection;
pub use stats::{correlate, CorrelateOptions, Method};
