// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`GridModel`] holds one [`StateKey`] per [`Well`] plus the active key applied by
//! selection gestures. Labels and colors live in an immutable [`StateCatalog`].

pub mod grid;
pub mod state;
pub mod well;

pub use grid::{GridError, GridModel};
pub use state::{KeyFilter, Rgb, StateCatalog, StateEntry, StateKey};
pub use well::{Well, MAX_NAMED_ROWS};
