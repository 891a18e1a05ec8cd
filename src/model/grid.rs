// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;
use thiserror::Error;

use super::state::{KeyFilter, StateCatalog, StateKey};
use super::well::{Well, MAX_NAMED_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },
    #[error("grid has {rows} rows but well names support at most {max}")]
    TooManyRows { rows: usize, max: usize },
}

/// The authoritative well-to-state assignment for one editing session.
///
/// Dimensions are fixed at construction. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    cells: Vec<StateKey>,
    active_key: StateKey,
    catalog: StateCatalog,
}

impl GridModel {
    pub fn new(rows: usize, cols: usize, catalog: StateCatalog) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        if rows > MAX_NAMED_ROWS {
            return Err(GridError::TooManyRows {
                rows,
                max: MAX_NAMED_ROWS,
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![StateKey::Empty; rows * cols],
            active_key: StateKey::Sample,
            catalog,
        })
    }

    /// Standard 8x12 (96 well) plate with the standard catalog.
    pub fn plate_96() -> Self {
        Self {
            rows: 8,
            cols: 12,
            cells: vec![StateKey::Empty; 96],
            active_key: StateKey::Sample,
            catalog: StateCatalog::standard(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn catalog(&self) -> &StateCatalog {
        &self.catalog
    }

    pub fn active_key(&self) -> StateKey {
        self.active_key
    }

    pub fn set_active_key(&mut self, key: StateKey) {
        self.active_key = key;
    }

    /// Row-major slice of all cells.
    pub fn cells(&self) -> &[StateKey] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[StateKey] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[StateKey]> + '_ {
        self.cells.chunks(self.cols)
    }

    pub fn contains(&self, well: Well) -> bool {
        well.row < self.rows && well.col < self.cols
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "well ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn key_at(&self, row: usize, col: usize) -> StateKey {
        self.cells[self.offset(row, col)]
    }

    /// Assigns the active key, regardless of the current value.
    pub fn select(&mut self, row: usize, col: usize) {
        let offset = self.offset(row, col);
        self.cells[offset] = self.active_key;
    }

    /// Clears the well if it already holds the active key, otherwise assigns it.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let offset = self.offset(row, col);
        let cell = &mut self.cells[offset];
        *cell = if *cell == self.active_key {
            StateKey::Empty
        } else {
            self.active_key
        };
    }

    pub fn select_all(&mut self) {
        self.cells = vec![self.active_key; self.rows * self.cols];
    }

    pub fn select_none(&mut self) {
        self.cells = vec![StateKey::Empty; self.rows * self.cols];
    }

    pub fn check_cell(&self, row: usize, col: usize, filter: impl Into<KeyFilter>) -> bool {
        filter.into().matches(self.key_at(row, col))
    }

    pub fn count(&self, filter: impl Into<KeyFilter>) -> usize {
        let filter = filter.into();
        self.cells.iter().filter(|key| filter.matches(**key)).count()
    }

    /// Text drawn inside a well shown with `key`: the unpadded well name when empty,
    /// otherwise the first character of the key's label.
    pub fn display_label(&self, well: Well, key: StateKey) -> SmolStr {
        if key.is_assigned() {
            let mut buf = [0u8; 4];
            SmolStr::new(self.catalog.initial(key).encode_utf8(&mut buf))
        } else {
            well.short_label()
        }
    }

    pub fn wells(&self) -> impl Iterator<Item = Well> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |idx| Well::new(idx / cols, idx % cols))
    }
}
