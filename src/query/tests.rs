// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rstest::rstest;

use crate::model::{GridModel, KeyFilter, StateCatalog, StateKey, Well};

use super::ScanOrder;

fn grid(rows: usize, cols: usize) -> GridModel {
    GridModel::new(rows, cols, StateCatalog::standard()).expect("grid")
}

#[test]
fn fresh_grid_has_no_assigned_indexes() {
    let grid = grid(8, 12);
    assert!(grid.row_major_indexes(KeyFilter::Any).is_empty());
    assert!(grid.col_major_indexes(KeyFilter::Any).is_empty());
    assert!(grid.names(KeyFilter::Any).is_empty());
    assert_eq!(grid.row_major_indexes(StateKey::Empty).len(), 96);
}

#[test]
fn two_by_three_positions_and_names() {
    let mut grid = grid(2, 3);
    grid.select(0, 0);
    grid.select(1, 2);

    assert_eq!(grid.row_major_indexes(StateKey::Sample), vec![1, 6]);
    assert_eq!(grid.col_major_indexes(StateKey::Sample), vec![1, 6]);
    assert_eq!(grid.names(StateKey::Sample), vec!["A01", "B03"]);
}

#[test]
fn column_major_visits_columns_first() {
    let mut grid = grid(2, 3);
    grid.select(0, 1);
    grid.select(1, 0);

    // Row-major: (0,1)=2, (1,0)=4. Column-major: (1,0)=2, (0,1)=3.
    assert_eq!(grid.row_major_indexes(KeyFilter::Any), vec![2, 4]);
    assert_eq!(grid.col_major_indexes(KeyFilter::Any), vec![2, 3]);
    assert_eq!(grid.names(KeyFilter::Any), vec!["A02", "B01"]);
}

#[rstest]
#[case(StateKey::Blank, vec![1], vec![1])]
#[case(StateKey::Calibrant, vec![2], vec![3])]
#[case(StateKey::Sample, vec![], vec![])]
#[case(StateKey::Empty, vec![3, 4], vec![2, 4])]
fn exact_key_filters_ignore_other_keys(
    #[case] key: StateKey,
    #[case] row_major: Vec<usize>,
    #[case] col_major: Vec<usize>,
) {
    let mut grid = grid(2, 2);
    grid.set_active_key(StateKey::Blank);
    grid.select(0, 0);
    grid.set_active_key(StateKey::Calibrant);
    grid.select(0, 1);

    assert_eq!(grid.row_major_indexes(key), row_major);
    assert_eq!(grid.col_major_indexes(key), col_major);
}

#[test]
fn scan_order_wells_match_position_formulas() {
    let (rows, cols) = (3, 5);
    for (idx, well) in ScanOrder::RowMajor.wells(rows, cols).enumerate() {
        assert_eq!(well.row_major_position(cols), idx + 1);
    }
    for (idx, well) in ScanOrder::ColumnMajor.wells(rows, cols).enumerate() {
        assert_eq!(well.col_major_position(rows), idx + 1);
    }
}

#[test]
fn select_all_names_every_well_once() {
    let mut grid = grid(8, 12);
    grid.select_all();
    let names = grid.names(KeyFilter::Any);
    assert_eq!(names.len(), 96);
    let unique: BTreeSet<_> = names.iter().cloned().collect();
    assert_eq!(unique.len(), 96);
    assert_eq!(names.first().map(|n| n.as_str()), Some("A01"));
    assert_eq!(names.last().map(|n| n.as_str()), Some("H12"));
}

fn key_strategy() -> impl Strategy<Value = StateKey> {
    prop::sample::select(StateKey::ALL.to_vec())
}

fn filter_strategy() -> impl Strategy<Value = KeyFilter> {
    prop_oneof![Just(KeyFilter::Any), key_strategy().prop_map(KeyFilter::Key)]
}

fn populated_grid() -> impl Strategy<Value = GridModel> {
    (1usize..=16, 1usize..=24)
        .prop_flat_map(|(rows, cols)| {
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(key_strategy(), rows * cols),
            )
        })
        .prop_map(|(rows, cols, keys)| {
            let mut grid = grid(rows, cols);
            for (idx, key) in keys.into_iter().enumerate() {
                grid.set_active_key(key);
                grid.select(idx / cols, idx % cols);
            }
            grid.set_active_key(StateKey::Sample);
            grid
        })
}

proptest! {
    #[test]
    fn index_orders_cover_the_same_wells(grid in populated_grid(), filter in filter_strategy()) {
        let rows = grid.rows();
        let cols = grid.cols();
        let row_major = grid.row_major_indexes(filter);
        let col_major = grid.col_major_indexes(filter);
        prop_assert_eq!(row_major.len(), col_major.len());

        let from_rows: BTreeSet<Well> = row_major
            .iter()
            .map(|pos| Well::new((pos - 1) / cols, (pos - 1) % cols))
            .collect();
        let from_cols: BTreeSet<Well> = col_major
            .iter()
            .map(|pos| Well::new((pos - 1) % rows, (pos - 1) / rows))
            .collect();
        prop_assert_eq!(from_rows, from_cols);
        prop_assert_eq!(grid.names(filter).len(), row_major.len());
    }

    #[test]
    fn indexes_are_strictly_increasing(grid in populated_grid(), filter in filter_strategy()) {
        for order in [ScanOrder::RowMajor, ScanOrder::ColumnMajor] {
            let indexes = grid.indexes(order, filter);
            prop_assert!(indexes.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn toggle_twice_restores_the_cell(
        mut grid in populated_grid(),
        active in key_strategy(),
        seed in any::<prop::sample::Index>(),
    ) {
        let idx = seed.index(grid.len());
        let (row, col) = (idx / grid.cols(), idx % grid.cols());
        let before = grid.key_at(row, col);
        grid.set_active_key(active);
        grid.toggle(row, col);
        grid.toggle(row, col);
        // Toggling a cell that held a different assigned key leaves it Empty, not restored.
        if before == active || !before.is_assigned() {
            prop_assert_eq!(grid.key_at(row, col), before);
        } else {
            prop_assert_eq!(grid.key_at(row, col), StateKey::Empty);
        }
    }

    #[test]
    fn every_name_is_row_letter_then_padded_column(mut grid in populated_grid()) {
        grid.select_all();
        let names = grid.names(KeyFilter::Any);
        prop_assert_eq!(names.len(), grid.len());

        let wells = ScanOrder::RowMajor.wells(grid.rows(), grid.cols());
        for (name, well) in names.iter().zip(wells) {
            let mut chars = name.chars();
            let letter = chars.next().expect("non-empty name");
            let digits = chars.as_str();
            prop_assert!(letter.is_ascii_uppercase(), "{}", name);
            prop_assert_eq!(u32::from(letter) - u32::from('A'), well.row as u32);
            prop_assert!(digits.len() >= 2, "{}", name);
            prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{}", name);
            prop_assert_eq!(digits, format!("{:02}", well.col + 1));
        }

        let unique: BTreeSet<_> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }
}
