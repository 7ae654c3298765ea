// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text rendering for correlation tables.
//!
//! Renderers produce Unicode text suitable for a terminal; colour and graphics are left to
//! external plotting tools fed from the long form.

pub mod rplot;
pub(crate) mod text;

pub use rplot::{render_rplot, strength_glyph, RplotOptions, NEGATIVE_MARK, STRENGTH_GLYPHS};
