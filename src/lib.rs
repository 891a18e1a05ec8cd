// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wellpick: interactive microplate well-assignment editor.
//!
//! A [`GridModel`] stores one state key per well. [`PlateEditor`] lays the plate out on a
//! drawing surface and turns pointer gestures into key assignments: a click toggles one
//! well, a drag assigns the active key to every well inside the box. Results are read back
//! as row-major or column-major indexes, well names, or a [`PlateSummary`].

pub mod config;
pub mod layout;
pub mod model;
pub mod query;
pub mod select;
pub mod tui;

pub use config::{ConfigError, EditorConfig};
pub use layout::{LayoutEngine, PlateLayout, Point, Rect, SurfaceSize};
pub use model::{GridError, GridModel, KeyFilter, StateCatalog, StateKey, Well};
pub use query::{PlateSummary, ScanOrder};
pub use select::{PlateEditor, PointerEvent, Response, SelectionController};
