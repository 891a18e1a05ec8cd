// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a [`GridModel`].
//!
//! Positions are 1-based and count every visited well, matching or not, so a position
//! identifies the same well regardless of the filter used.

pub mod summary;

use smol_str::SmolStr;

use crate::model::{GridModel, KeyFilter, Well};

pub use summary::{KeySummary, PlateSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanOrder {
    /// Outer loop over rows, inner over columns.
    RowMajor,
    /// Outer loop over columns, inner over rows.
    ColumnMajor,
}

impl ScanOrder {
    /// Wells in this scan order.
    pub fn wells(self, rows: usize, cols: usize) -> impl Iterator<Item = Well> {
        (0..rows * cols).map(move |idx| match self {
            Self::RowMajor => Well::new(idx / cols, idx % cols),
            Self::ColumnMajor => Well::new(idx % rows, idx / rows),
        })
    }
}

impl GridModel {
    pub fn indexes(&self, order: ScanOrder, filter: impl Into<KeyFilter>) -> Vec<usize> {
        let filter = filter.into();
        order
            .wells(self.rows(), self.cols())
            .enumerate()
            .filter(|(_, well)| filter.matches(self.key_at(well.row, well.col)))
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    pub fn col_major_indexes(&self, filter: impl Into<KeyFilter>) -> Vec<usize> {
        self.indexes(ScanOrder::ColumnMajor, filter)
    }

    pub fn row_major_indexes(&self, filter: impl Into<KeyFilter>) -> Vec<usize> {
        self.indexes(ScanOrder::RowMajor, filter)
    }

    pub fn matching_wells(&self, filter: impl Into<KeyFilter>) -> Vec<Well> {
        let filter = filter.into();
        ScanOrder::RowMajor
            .wells(self.rows(), self.cols())
            .filter(|well| filter.matches(self.key_at(well.row, well.col)))
            .collect()
    }

    /// Names (`A01`, ...) of matching wells in row-major order.
    pub fn names(&self, filter: impl Into<KeyFilter>) -> Vec<SmolStr> {
        self.matching_wells(filter)
            .into_iter()
            .map(|well| well.name())
            .collect()
    }
}

#[cfg(test)]
mod tests;
