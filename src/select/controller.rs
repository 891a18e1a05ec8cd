// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::EditorConfig;
use crate::layout::{LayoutEngine, Point, Rect};
use crate::model::{GridModel, Well};

/// Primitive pointer input, in surface-relative device units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    /// Treated exactly like `Down`.
    DoubleClick(Point),
    Move(Point),
    Up(Point),
    CaptureLost,
}

/// An in-progress rubber band: where the press happened and where the pointer is now.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragBox {
    pub anchor: Point,
    pub current: Point,
}

impl DragBox {
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragBox),
}

/// Pointer-capture request for the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Acquire,
    Release,
}

/// What a finished (or abandoned) drag did to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Release within the click threshold. `well` is `None` when the press missed every well.
    Click { well: Option<Well> },
    /// Every listed well was assigned the active key.
    Box { wells: Vec<Well> },
    /// Capture was lost mid-drag; nothing changed.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub capture: Option<Capture>,
    pub repaint: bool,
    pub gesture: Option<Gesture>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn repaint() -> Self {
        Self {
            repaint: true,
            ..Self::default()
        }
    }
}

/// Click-or-drag state machine: `Idle` until a press, `Dragging` until release or capture
/// loss. Reads well positions from the last layout pass and mutates the grid on release.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    state: DragState,
    click_threshold: f64,
}

impl SelectionController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            state: DragState::Idle,
            click_threshold: config.click_threshold,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn drag_box(&self) -> Option<DragBox> {
        match self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    /// A release is a click when it stays within the threshold on both axes.
    pub fn is_click(&self, anchor: Point, release: Point) -> bool {
        (anchor.x - release.x).abs() < self.click_threshold
            && (anchor.y - release.y).abs() < self.click_threshold
    }

    /// Wells the pending box would assign if released now.
    pub fn pending_wells(&self, layout: &LayoutEngine) -> Vec<Well> {
        match self.state {
            DragState::Dragging(drag) => layout.box_test(drag.rect()),
            DragState::Idle => Vec::new(),
        }
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        layout: &LayoutEngine,
        grid: &mut GridModel,
    ) -> Response {
        match event {
            PointerEvent::Down(point) | PointerEvent::DoubleClick(point) => self.press(point),
            PointerEvent::Move(point) => self.drag_to(point),
            PointerEvent::Up(point) => self.release(point, layout, grid),
            PointerEvent::CaptureLost => self.cancel(),
        }
    }

    fn press(&mut self, point: Point) -> Response {
        let already_captured = self.is_dragging();
        self.state = DragState::Dragging(DragBox {
            anchor: point,
            current: point,
        });
        Response {
            capture: (!already_captured).then_some(Capture::Acquire),
            repaint: true,
            gesture: None,
        }
    }

    fn drag_to(&mut self, point: Point) -> Response {
        let DragState::Dragging(drag) = &mut self.state else {
            return Response::ignored();
        };
        drag.current = point;
        trace!(x = point.x, y = point.y, "drag");
        Response::repaint()
    }

    fn release(&mut self, point: Point, layout: &LayoutEngine, grid: &mut GridModel) -> Response {
        let DragState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return Response::ignored();
        };

        let anchor = drag.anchor;
        let gesture = if self.is_click(anchor, point) {
            let well = layout.hit_test(anchor);
            match well {
                Some(well) => {
                    grid.toggle(well.row, well.col);
                    debug!(
                        anchor_x = anchor.x,
                        anchor_y = anchor.y,
                        release_x = point.x,
                        release_y = point.y,
                        well = %well,
                        key = %grid.key_at(well.row, well.col),
                        "click toggled well"
                    );
                }
                None => debug!(
                    anchor_x = anchor.x,
                    anchor_y = anchor.y,
                    release_x = point.x,
                    release_y = point.y,
                    "click missed every well"
                ),
            }
            Gesture::Click { well }
        } else {
            let rect = Rect::from_corners(anchor, point);
            let wells = layout.box_test(rect);
            for well in &wells {
                grid.select(well.row, well.col);
            }
            debug!(
                anchor_x = anchor.x,
                anchor_y = anchor.y,
                release_x = point.x,
                release_y = point.y,
                count = wells.len(),
                key = %grid.active_key(),
                "box selection assigned wells"
            );
            Gesture::Box { wells }
        };

        Response {
            capture: Some(Capture::Release),
            repaint: true,
            gesture: Some(gesture),
        }
    }

    fn cancel(&mut self) -> Response {
        if std::mem::take(&mut self.state) == DragState::Idle {
            return Response::ignored();
        }
        debug!("pointer capture lost, pending box discarded");
        Response {
            capture: None,
            repaint: true,
            gesture: Some(Gesture::Cancelled),
        }
    }
}
