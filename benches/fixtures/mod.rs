// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use wellpick::layout::{Point, SurfaceSize};
use wellpick::model::{GridModel, StateCatalog, StateKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Plate96,
    Plate384,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Plate96 => "plate_96",
            Self::Plate384 => "plate_384",
        }
    }

    pub const fn dims(self) -> (usize, usize) {
        match self {
            Self::Plate96 => (8, 12),
            Self::Plate384 => (16, 24),
        }
    }

    /// Roughly 40 units per well on either plate.
    pub const fn surface(self) -> SurfaceSize {
        match self {
            Self::Plate96 => SurfaceSize::new(640.0, 480.0),
            Self::Plate384 => SurfaceSize::new(1280.0, 960.0),
        }
    }
}

/// Grid with a repeating Blank/Calibrant/Sample/Empty stripe so every filter matches
/// something.
pub fn striped_grid(case: Case) -> GridModel {
    let (rows, cols) = case.dims();
    let mut grid = GridModel::new(rows, cols, StateCatalog::standard()).expect("bench grid");
    for well in grid.wells().collect::<Vec<_>>() {
        let key = StateKey::ALL[(well.row + well.col) % StateKey::ALL.len()];
        if key.is_assigned() {
            grid.set_active_key(key);
            grid.select(well.row, well.col);
        }
    }
    grid.set_active_key(StateKey::Sample);
    grid
}

/// Points walking the diagonal of the surface, hitting some wells and missing others.
pub fn sample_points(surface: SurfaceSize, count: usize) -> Vec<Point> {
    assert!(count >= 2, "count must be >= 2");
    (0..count)
        .map(|idx| {
            let t = idx as f64 / (count - 1) as f64;
            Point::new(surface.width * t, surface.height * t)
        })
        .collect()
}
