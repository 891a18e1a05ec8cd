// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::trace;

use super::geometry::{Point, Rect, SurfaceSize};
use super::plate::{min_surface_size, PlateLayout};
use crate::config::EditorConfig;
use crate::model::Well;

/// Owns the layout computed by the most recent layout pass.
///
/// The layout pass writes the cache (`relayout`); pointer handling only reads it. Before
/// the first pass every hit test and box test reports no wells.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    rows: usize,
    cols: usize,
    config: EditorConfig,
    current: Option<PlateLayout>,
    passes: u64,
}

impl LayoutEngine {
    pub fn new(rows: usize, cols: usize, config: EditorConfig) -> Self {
        Self {
            rows,
            cols,
            config,
            current: None,
            passes: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Recomputes the layout for `surface`, replacing the cached one wholesale.
    pub fn relayout(&mut self, surface: SurfaceSize) -> &PlateLayout {
        let layout = PlateLayout::compute(surface, self.rows, self.cols, &self.config);
        self.passes = self.passes.wrapping_add(1);
        trace!(
            width = surface.width,
            height = surface.height,
            well_size = layout.well_size(),
            pass = self.passes,
            "relayout"
        );
        self.current.insert(layout)
    }

    /// Drops the cached layout, e.g. when the surface is hidden.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&PlateLayout> {
        self.current.as_ref()
    }

    /// Number of layout passes so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn well_size(&self) -> f64 {
        self.current.as_ref().map_or(0.0, PlateLayout::well_size)
    }

    pub fn hit_test(&self, point: Point) -> Option<Well> {
        self.current.as_ref()?.hit_test(point)
    }

    pub fn box_test(&self, rect: Rect) -> Vec<Well> {
        match &self.current {
            Some(layout) => layout.box_test(rect, self.config.box_inset_slack),
            None => Vec::new(),
        }
    }

    pub fn min_surface_size(&self) -> SurfaceSize {
        min_surface_size(self.rows, self.cols, &self.config)
    }
}
