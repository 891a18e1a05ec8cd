// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use crate::model::{GridModel, StateKey};

/// Per-key listing reported once editing is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySummary {
    pub key: StateKey,
    pub label: SmolStr,
    pub col_major: Vec<usize>,
    pub row_major: Vec<usize>,
    pub names: Vec<SmolStr>,
}

/// Snapshot of a finished plate: one [`KeySummary`] per catalog entry (Empty included)
/// plus a matrix of label initials, one line per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlateSummary {
    pub rows: usize,
    pub cols: usize,
    pub keys: Vec<KeySummary>,
    pub matrix: Vec<String>,
}

impl PlateSummary {
    pub fn from_grid(grid: &GridModel) -> Self {
        let catalog = grid.catalog();
        let keys = catalog
            .entries()
            .iter()
            .map(|entry| KeySummary {
                key: entry.key(),
                label: SmolStr::new(entry.label()),
                col_major: grid.col_major_indexes(entry.key()),
                row_major: grid.row_major_indexes(entry.key()),
                names: grid.names(entry.key()),
            })
            .collect();

        let matrix = grid
            .row_slices()
            .map(|row| {
                row.iter()
                    .map(|key| catalog.initial(*key).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            keys,
            matrix,
        }
    }

    pub fn key(&self, key: StateKey) -> Option<&KeySummary> {
        self.keys.iter().find(|summary| summary.key == key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl fmt::Display for PlateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.keys {
            write!(f, "{} (Column Major): ", summary.label)?;
            write_list(f, &summary.col_major)?;
            writeln!(f)?;
            write!(f, "{} (Row Major): ", summary.label)?;
            write_list(f, &summary.row_major)?;
            writeln!(f)?;
            write!(f, "{} (Names): ", summary.label)?;
            write_list(f, &summary.names)?;
            writeln!(f)?;
        }
        for line in &self.matrix {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
