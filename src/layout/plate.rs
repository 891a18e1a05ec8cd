// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::geometry::{InsetBounds, Point, Rect, SurfaceSize};
use crate::config::EditorConfig;
use crate::model::Well;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WellCenter {
    pub well: Well,
    pub center: Point,
}

/// Geometry of one layout pass over a drawing surface.
///
/// Wells are uniform circles: the limiting axis decides `well_size` so the plate never
/// stretches into ellipses, and the well block is centred on the surface.
///
/// ```text
/// padding = min(w, h) / 36      margin = min(w, h) / 8
/// well    = min((w - 2m - 2p) / cols, (h - 2m - 2p) / rows)
/// origin  = ((w - well * cols) / 2, (h - well * rows) / 2)
/// center  = origin + (col, row) * well + well / 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateLayout {
    surface: SurfaceSize,
    rows: usize,
    cols: usize,
    padding: f64,
    margin: f64,
    well_size: f64,
    origin: Point,
    centers: Vec<WellCenter>,
}

impl PlateLayout {
    /// Pure function of its inputs. Lengths snap down to whole device units, so a surface
    /// too small for a one-unit well, or a grid without rows or columns, yields a layout
    /// with no centers.
    pub fn compute(surface: SurfaceSize, rows: usize, cols: usize, config: &EditorConfig) -> Self {
        let min_side = surface.min_side().max(0.0);
        let padding = (min_side / config.padding_divisor).floor();
        let margin = (min_side / config.margin_divisor).floor();

        let plate_width = surface.width - 2.0 * margin - 2.0 * padding;
        let plate_height = surface.height - 2.0 * margin - 2.0 * padding;

        let well_size = if rows == 0 || cols == 0 {
            0.0
        } else {
            (plate_width / cols as f64)
                .min(plate_height / rows as f64)
                .floor()
        };
        // NaN and negative sizes collapse to an empty layout.
        let well_size = if well_size > 0.0 && well_size.is_finite() {
            well_size
        } else {
            0.0
        };

        let block_width = well_size * cols as f64;
        let block_height = well_size * rows as f64;
        let origin = Point::new(
            ((surface.width - block_width) / 2.0).floor(),
            ((surface.height - block_height) / 2.0).floor(),
        );

        let centers = if well_size > 0.0 {
            let half = (well_size / 2.0).floor();
            (0..rows)
                .flat_map(|row| (0..cols).map(move |col| Well::new(row, col)))
                .map(|well| WellCenter {
                    well,
                    center: Point::new(
                        origin.x + well.col as f64 * well_size + half,
                        origin.y + well.row as f64 * well_size + half,
                    ),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            surface,
            rows,
            cols,
            padding,
            margin,
            well_size,
            origin,
            centers,
        }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Diameter of one well.
    pub fn well_size(&self) -> f64 {
        self.well_size
    }

    /// Half a well, in whole units. Doubles as the hit radius.
    pub fn half_well(&self) -> f64 {
        (self.well_size / 2.0).floor()
    }

    /// Top-left corner of the well block.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn block_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.well_size * self.cols as f64,
            self.well_size * self.rows as f64,
        )
    }

    /// Row-major list of well centers.
    pub fn centers(&self) -> &[WellCenter] {
        &self.centers
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn center(&self, well: Well) -> Option<Point> {
        if well.row >= self.rows || well.col >= self.cols {
            return None;
        }
        self.centers
            .get(well.row * self.cols + well.col)
            .map(|entry| entry.center)
    }

    /// The well whose center lies strictly within half a well of `point`; the nearest one
    /// wins if several do.
    pub fn hit_test(&self, point: Point) -> Option<Well> {
        let radius = self.half_well();
        self.centers
            .iter()
            .map(|entry| (entry.well, entry.center.distance(point)))
            .filter(|(_, distance)| *distance < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(well, _)| well)
    }

    /// Wells whose centers lie strictly inside `rect` after every edge is moved inward by
    /// `half_well() - slack`. Returned in row-major order.
    pub fn box_test(&self, rect: Rect, slack: f64) -> Vec<Well> {
        let bounds = InsetBounds::new(rect, self.half_well() - slack);
        self.centers
            .iter()
            .filter(|entry| bounds.contains_strict(entry.center))
            .map(|entry| entry.well)
            .collect()
    }

    /// Radius of the drawn circle, slightly smaller than half a well.
    pub fn well_radius(&self, config: &EditorConfig) -> f64 {
        self.well_size / 2.0 - self.well_size / config.well_inset_divisor
    }

    /// Plate background: the well block grown by `padding`.
    pub fn frame(&self) -> Rect {
        let block = self.block_size();
        Rect::new(
            self.origin.x - self.padding,
            self.origin.y - self.padding,
            block.width + 2.0 * self.padding,
            block.height + 2.0 * self.padding,
        )
    }

    /// Centre points for row letters, left of the frame.
    pub fn row_label_anchors(&self) -> Vec<(usize, Point)> {
        let x = self.origin.x - 2.0 * self.padding - self.well_size / 4.0;
        (0..self.rows)
            .map(|row| {
                let y = self.origin.y + row as f64 * self.well_size + self.half_well();
                (row, Point::new(x, y))
            })
            .collect()
    }

    /// Centre points for column numbers, above the frame.
    pub fn col_label_anchors(&self) -> Vec<(usize, Point)> {
        let y = self.origin.y - 2.0 * self.padding - self.well_size / 4.0;
        (0..self.cols)
            .map(|col| {
                let x = self.origin.x + col as f64 * self.well_size + self.half_well();
                (col, Point::new(x, y))
            })
            .collect()
    }

    /// One tile per legend entry in the band below the frame.
    pub fn legend_slots(&self, entries: usize) -> Vec<Rect> {
        if entries == 0 {
            return Vec::new();
        }
        let block = self.block_size();
        let slot_width = (block.width + 2.0 * self.padding) / entries as f64;
        let height = self.margin - 2.0 * self.padding;
        let y = self.origin.y + block.height + 2.0 * self.padding;

        let mut x = self.origin.x - self.padding;
        let mut slots = Vec::with_capacity(entries);
        for _ in 0..entries {
            slots.push(Rect::new(
                x + self.padding / 2.0,
                y,
                slot_width - self.padding,
                height,
            ));
            x += slot_width + 1.0;
        }
        slots
    }
}

/// Smallest surface that still shows every well at `min_well_extent` units.
pub fn min_surface_size(rows: usize, cols: usize, config: &EditorConfig) -> SurfaceSize {
    SurfaceSize::new(
        cols as f64 * config.min_well_extent,
        rows as f64 * config.min_well_extent,
    )
}
