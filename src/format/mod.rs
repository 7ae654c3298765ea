// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display formatting for correlation tables.

pub mod fashion;

pub use fashion::{fashion, fashion_value, FashionOptions, FashionedTable, TERM_HEADER};
