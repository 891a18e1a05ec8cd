// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::controller::{DragBox, PointerEvent, Response, SelectionController};
use crate::config::EditorConfig;
use crate::layout::{LayoutEngine, PlateLayout, SurfaceSize};
use crate::model::{GridModel, StateKey, Well};
use crate::query::PlateSummary;

/// One editing session: the grid, its layout cache and the pointer state machine.
///
/// Only pointer handling and the bulk actions mutate the grid; only `on_layout` writes the
/// layout cache.
#[derive(Debug, Clone)]
pub struct PlateEditor {
    grid: GridModel,
    layout: LayoutEngine,
    selection: SelectionController,
}

impl PlateEditor {
    pub fn new(grid: GridModel, config: EditorConfig) -> Self {
        let layout = LayoutEngine::new(grid.rows(), grid.cols(), config);
        let selection = SelectionController::new(&config);
        Self {
            grid,
            layout,
            selection,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn into_grid(self) -> GridModel {
        self.grid
    }

    pub fn set_active_key(&mut self, key: StateKey) {
        self.grid.set_active_key(key);
    }

    pub fn select_all(&mut self) {
        self.grid.select_all();
    }

    pub fn select_none(&mut self) {
        self.grid.select_none();
    }

    /// Layout pass; call on resize and before every paint.
    pub fn on_layout(&mut self, surface: SurfaceSize) -> &PlateLayout {
        self.layout.relayout(surface)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Response {
        self.selection.handle(event, &self.layout, &mut self.grid)
    }

    /// Read-only snapshot for the renderer.
    pub fn view(&self) -> EditorView<'_> {
        EditorView {
            grid: &self.grid,
            layout: self.layout.current(),
            drag_box: self.selection.drag_box(),
            pending: self.selection.pending_wells(&self.layout),
        }
    }

    pub fn summary(&self) -> PlateSummary {
        PlateSummary::from_grid(&self.grid)
    }
}

#[derive(Debug, Clone)]
pub struct EditorView<'a> {
    pub grid: &'a GridModel,
    pub layout: Option<&'a PlateLayout>,
    pub drag_box: Option<DragBox>,
    /// Row-major wells inside the pending box.
    pub pending: Vec<Well>,
}

impl EditorView<'_> {
    /// Key to draw for `well`: the active key while a pending box covers it, the stored
    /// key otherwise.
    pub fn display_key(&self, well: Well) -> StateKey {
        if self.pending.binary_search(&well).is_ok() {
            self.grid.active_key()
        } else {
            self.grid.key_at(well.row, well.col)
        }
    }

    pub fn active_key(&self) -> StateKey {
        self.grid.active_key()
    }
}
