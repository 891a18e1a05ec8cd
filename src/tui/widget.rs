// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use super::input::{CellSize, TerminalSurface};
use crate::layout::{PlateLayout, Point};
use crate::model::{Rgb, StateKey, Well};
use crate::select::EditorView;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r(), rgb.g(), rgb.b())
    }
}

/// Black or white, whichever reads better on `background`.
fn label_color(background: Rgb) -> Color {
    let luma = 299 * u32::from(background.r())
        + 587 * u32::from(background.g())
        + 114 * u32::from(background.b());
    if luma >= 128_000 {
        Color::Black
    } else {
        Color::White
    }
}

/// Plate background behind the wells.
const FRAME_COLOR: Rgb = Rgb(235, 235, 235);

/// Draws the plate frame, well labels, row letters, column numbers and an optional legend at
/// the terminal cells under their layout anchors. Wells inside a pending box are drawn bold
/// in the active key's colour.
///
/// The editor must have been laid out for `TerminalSurface::size` of the same area.
pub struct PlateWidget<'a> {
    view: &'a EditorView<'a>,
    cell: CellSize,
    show_labels: bool,
    show_well_labels: bool,
    show_legend: bool,
}

impl<'a> PlateWidget<'a> {
    pub fn new(view: &'a EditorView<'a>, cell: CellSize) -> Self {
        Self {
            view,
            cell,
            show_labels: true,
            show_well_labels: true,
            show_legend: false,
        }
    }

    /// Row letters and column numbers. On by default.
    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Names or state initials inside the wells. When off, wells show only their colour.
    /// On by default.
    pub fn show_well_labels(mut self, show: bool) -> Self {
        self.show_well_labels = show;
        self
    }

    /// One tile per catalog entry below the plate. Off by default.
    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    fn key_style(&self, key: StateKey, pending: bool) -> Style {
        let color = self.view.grid.catalog().color(key);
        let style = Style::default().fg(label_color(color)).bg(color.into());
        if pending {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn render_axis_labels(
        &self,
        layout: &PlateLayout,
        surface: &TerminalSurface,
        buf: &mut Buffer,
    ) {
        for (row, anchor) in layout.row_label_anchors() {
            if let Some((x, y)) = surface.to_cell(anchor) {
                let letter = Well::new(row, 0).row_letter();
                buf.set_string(x, y, letter.to_string(), Style::default());
            }
        }
        for (col, anchor) in layout.col_label_anchors() {
            if let Some((x, y)) = surface.to_cell(anchor) {
                buf.set_string(x, y, (col + 1).to_string(), Style::default());
            }
        }
    }

    fn render_wells(&self, layout: &PlateLayout, surface: &TerminalSurface, buf: &mut Buffer) {
        let right = surface.area().right();
        for entry in layout.centers() {
            let Some((x, y)) = surface.to_cell(entry.center) else {
                continue;
            };
            let key = self.view.display_key(entry.well);
            let pending = self.view.pending.binary_search(&entry.well).is_ok();
            let label = self.view.grid.display_label(entry.well, key);
            let style = self.key_style(key, pending);
            // Keep labels inside the area; set_string clips at the buffer edge only.
            let room = right.saturating_sub(x);
            if self.show_well_labels {
                buf.set_stringn(x, y, label.as_str(), usize::from(room), style);
            } else {
                let width = u16::try_from(label.len()).unwrap_or(u16::MAX).min(room);
                buf.set_style(Rect::new(x, y, width, 1), style);
            }
        }
    }

    fn render_legend(&self, layout: &PlateLayout, surface: &TerminalSurface, buf: &mut Buffer) {
        let entries = self.view.grid.catalog().entries();
        for (entry, slot) in entries.iter().zip(layout.legend_slots(entries.len())) {
            let Some(tile) = surface.cells_covering(slot) else {
                continue;
            };
            let style = self.key_style(entry.key(), false);
            buf.set_style(tile, style);

            let center = Point::new(slot.x + slot.width / 2.0, slot.y + slot.height / 2.0);
            let Some((center_x, y)) = surface.to_cell(center) else {
                continue;
            };
            let label = entry.label();
            let half = u16::try_from(label.chars().count() / 2).unwrap_or(u16::MAX);
            let x = center_x.saturating_sub(half).max(tile.x);
            let room = usize::from(tile.right().saturating_sub(x));
            buf.set_stringn(x, y, label, room, style);
        }
    }
}

impl Widget for PlateWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = self.view.layout.filter(|layout| !layout.is_empty()) else {
            return;
        };
        let surface = TerminalSurface::new(area, self.cell);

        if let Some(frame) = surface.cells_covering(layout.frame()) {
            buf.set_style(frame, Style::default().bg(FRAME_COLOR.into()));
        }
        if self.show_labels {
            self.render_axis_labels(layout, &surface, buf);
        }
        self.render_wells(layout, &surface, buf);
        if self.show_legend {
            self.render_legend(layout, &surface, buf);
        }
    }
}
