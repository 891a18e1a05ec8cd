// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::{format_smolstr, SmolStr};

/// Rows are named by a single uppercase letter.
pub const MAX_NAMED_ROWS: usize = 26;

/// Zero-based address of a well on the plate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Well {
    pub row: usize,
    pub col: usize,
}

impl Well {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `A` for row 0 through `Z` for row 25; rows past `MAX_NAMED_ROWS` have no letter
    /// and show as `?`.
    pub fn row_letter(&self) -> char {
        u8::try_from(self.row)
            .ok()
            .filter(|row| usize::from(*row) < MAX_NAMED_ROWS)
            .and_then(|row| b'A'.checked_add(row))
            .map_or('?', char::from)
    }

    /// Plate name: row letter plus the 1-based column padded to two digits (`A01`, `C12`).
    pub fn name(&self) -> SmolStr {
        format_smolstr!("{}{:02}", self.row_letter(), self.col + 1)
    }

    /// Unpadded name shown inside an empty well (`A1`, `C12`).
    pub fn short_label(&self) -> SmolStr {
        format_smolstr!("{}{}", self.row_letter(), self.col + 1)
    }

    /// 1-based position when scanning row by row.
    pub const fn row_major_position(&self, cols: usize) -> usize {
        self.row * cols + self.col + 1
    }

    /// 1-based position when scanning column by column.
    pub const fn col_major_position(&self, rows: usize) -> usize {
        self.col * rows + self.row + 1
    }
}

impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<(usize, usize)> for Well {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Well;

    #[rstest]
    #[case(0, 0, "A01", "A1")]
    #[case(2, 11, "C12", "C12")]
    #[case(7, 8, "H09", "H9")]
    #[case(25, 99, "Z100", "Z100")]
    fn names_pad_columns_to_two_digits(
        #[case] row: usize,
        #[case] col: usize,
        #[case] name: &str,
        #[case] short: &str,
    ) {
        let well = Well::new(row, col);
        assert_eq!(well.name(), name);
        assert_eq!(well.short_label(), short);
    }

    #[rstest]
    #[case(26)]
    #[case(255)]
    #[case(256)]
    #[case(usize::MAX)]
    fn rows_past_z_have_no_letter(#[case] row: usize) {
        let well = Well::new(row, 0);
        assert_eq!(well.row_letter(), '?');
        assert_eq!(well.name(), "?01");
        assert_eq!(well.short_label(), "?1");
    }

    #[test]
    fn positions_follow_scan_order() {
        let well = Well::new(1, 2);
        assert_eq!(well.row_major_position(3), 6);
        assert_eq!(well.col_major_position(2), 6);
        assert_eq!(Well::new(0, 0).row_major_position(12), 1);
        assert_eq!(Well::new(7, 0).col_major_position(8), 8);
    }
}
