// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Variable selection.
//!
//! Resolves name lists, exclusions and patterns against a matrix's variables.

pub mod select;
pub mod suggest;

pub use select::{resolve, LookupError, Selection};
pub use suggest::closest_name;
