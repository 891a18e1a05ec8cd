// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::layout::{Point, Rect as PlateRect, SurfaceSize};
use crate::select::PointerEvent;

/// Device units covered by one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

/// A terminal area treated as a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalSurface {
    area: Rect,
    cell: CellSize,
}

impl TerminalSurface {
    pub fn new(area: Rect, cell: CellSize) -> Self {
        Self { area, cell }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn cell(&self) -> CellSize {
        self.cell
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(
            f64::from(self.area.width) * self.cell.width,
            f64::from(self.area.height) * self.cell.height,
        )
    }

    /// Centre of the cell at (`column`, `row`), relative to the area. Cells left of or above
    /// the area map to negative coordinates so a drag may leave the surface.
    pub fn to_point(&self, column: u16, row: u16) -> Point {
        let x = f64::from(column) - f64::from(self.area.x) + 0.5;
        let y = f64::from(row) - f64::from(self.area.y) + 0.5;
        Point::new(x * self.cell.width, y * self.cell.height)
    }

    /// Absolute terminal cell containing `point`, if it lies inside the area.
    pub fn to_cell(&self, point: Point) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let column = (point.x / self.cell.width).floor();
        let row = (point.y / self.cell.height).floor();
        if column >= f64::from(self.area.width) || row >= f64::from(self.area.height) {
            return None;
        }
        Some((self.area.x + column as u16, self.area.y + row as u16))
    }

    /// Cells touched by `rect`, clipped to the area. `None` when nothing is left.
    pub fn cells_covering(&self, rect: PlateRect) -> Option<Rect> {
        let span = |start: f64, length: f64, unit: f64, cells: u16| {
            let first = (start / unit).floor().max(0.0);
            let end = ((start + length) / unit).ceil().min(f64::from(cells));
            (end > first).then(|| (first as u16, (end - first) as u16))
        };
        let (column, width) = span(rect.x, rect.width, self.cell.width, self.area.width)?;
        let (row, height) = span(rect.y, rect.height, self.cell.height, self.area.height)?;
        Some(Rect::new(
            self.area.x + column,
            self.area.y + row,
            width,
            height,
        ))
    }

    /// Left-button press, drag and release become pointer events; losing terminal focus
    /// ends any capture. Everything else is ignored.
    pub fn pointer_event(&self, event: &Event) -> Option<PointerEvent> {
        match event {
            Event::Mouse(mouse) => self.mouse_event(mouse),
            Event::FocusLost => Some(PointerEvent::CaptureLost),
            _ => None,
        }
    }

    fn mouse_event(&self, mouse: &MouseEvent) -> Option<PointerEvent> {
        let point = self.to_point(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(point)),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move(point)),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(point)),
            _ => None,
        }
    }
}
