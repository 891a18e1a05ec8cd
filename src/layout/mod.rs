// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plate geometry.
//!
//! Computes well size, margins and per-well centers from the drawing-surface size, and
//! answers hit tests and box tests against the most recent layout pass.

pub mod engine;
pub mod geometry;
pub mod plate;

pub use engine::LayoutEngine;
pub use geometry::{InsetBounds, Point, Rect, SurfaceSize};
pub use plate::{min_surface_size, PlateLayout, WellCenter};
