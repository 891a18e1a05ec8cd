// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Classification assigned to a single well.
///
/// `Empty` is the distinguished "unset" key; it is the only key for which
/// [`StateKey::is_assigned`] returns `false`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum StateKey {
    #[default]
    Empty = 0,
    Blank = 1,
    Calibrant = 2,
    Sample = 3,
}

impl StateKey {
    /// All keys in catalog order.
    pub const ALL: [StateKey; 4] = [Self::Empty, Self::Blank, Self::Calibrant, Self::Sample];

    pub const fn is_assigned(self) -> bool {
        !matches!(self, Self::Empty)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Blank => "blank",
            Self::Calibrant => "calibrant",
            Self::Sample => "sample",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query filter over state keys.
///
/// `Any` matches every assigned (non-`Empty`) well, not every well. Use
/// `KeyFilter::Key(StateKey::Empty)` to match unassigned wells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyFilter {
    #[default]
    Any,
    Key(StateKey),
}

impl KeyFilter {
    pub fn matches(self, key: StateKey) -> bool {
        match self {
            Self::Any => key.is_assigned(),
            Self::Key(expected) => key == expected,
        }
    }
}

impl From<StateKey> for KeyFilter {
    fn from(value: StateKey) -> Self {
        Self::Key(value)
    }
}

impl From<Option<StateKey>> for KeyFilter {
    fn from(value: Option<StateKey>) -> Self {
        value.map_or(Self::Any, Self::Key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn r(self) -> u8 {
        self.0
    }

    pub const fn g(self) -> u8 {
        self.1
    }

    pub const fn b(self) -> u8 {
        self.2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateEntry {
    key: StateKey,
    label: SmolStr,
    color: Rgb,
}

impl StateEntry {
    pub fn key(&self) -> StateKey {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// First character of the label, used for compact well labels.
    pub fn initial(&self) -> char {
        self.label.chars().next().unwrap_or('?')
    }
}

/// Immutable mapping of every [`StateKey`] to its label and color.
///
/// The catalog always covers every key, so any value stored in a grid has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCatalog {
    entries: [StateEntry; 4],
}

impl Default for StateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl StateCatalog {
    pub fn standard() -> Self {
        Self {
            entries: [
                StateEntry {
                    key: StateKey::Empty,
                    label: SmolStr::new_static("Empty"),
                    color: Rgb(255, 255, 255),
                },
                StateEntry {
                    key: StateKey::Blank,
                    label: SmolStr::new_static("Blank"),
                    color: Rgb(102, 102, 255),
                },
                StateEntry {
                    key: StateKey::Calibrant,
                    label: SmolStr::new_static("Calibrant"),
                    color: Rgb(51, 204, 51),
                },
                StateEntry {
                    key: StateKey::Sample,
                    label: SmolStr::new_static("Sample"),
                    color: Rgb(204, 51, 51),
                },
            ],
        }
    }

    pub fn with_label(mut self, key: StateKey, label: impl Into<SmolStr>) -> Self {
        self.entries[key.index()].label = label.into();
        self
    }

    pub fn with_color(mut self, key: StateKey, color: Rgb) -> Self {
        self.entries[key.index()].color = color;
        self
    }

    pub fn entry(&self, key: StateKey) -> &StateEntry {
        &self.entries[key.index()]
    }

    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    pub fn label(&self, key: StateKey) -> &str {
        self.entry(key).label()
    }

    pub fn color(&self, key: StateKey) -> Rgb {
        self.entry(key).color()
    }

    pub fn initial(&self, key: StateKey) -> char {
        self.entry(key).initial()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyFilter, Rgb, StateCatalog, StateKey};

    #[test]
    fn empty_is_the_only_unassigned_key() {
        let unassigned: Vec<_> = StateKey::ALL
            .into_iter()
            .filter(|key| !key.is_assigned())
            .collect();
        assert_eq!(unassigned, vec![StateKey::Empty]);
        assert_eq!(StateKey::default(), StateKey::Empty);
        assert_eq!(StateKey::Empty as u8, 0);
    }

    #[test]
    fn any_filter_matches_assigned_keys_only() {
        assert!(!KeyFilter::Any.matches(StateKey::Empty));
        assert!(KeyFilter::Any.matches(StateKey::Blank));
        assert!(KeyFilter::from(StateKey::Empty).matches(StateKey::Empty));
        assert!(!KeyFilter::from(StateKey::Sample).matches(StateKey::Blank));
        assert_eq!(KeyFilter::from(None), KeyFilter::Any);
    }

    #[test]
    fn standard_catalog_entries_follow_key_order() {
        let catalog = StateCatalog::standard();
        let keys: Vec<_> = catalog.entries().iter().map(|entry| entry.key()).collect();
        assert_eq!(keys, StateKey::ALL.to_vec());
        assert_eq!(catalog.label(StateKey::Calibrant), "Calibrant");
        assert_eq!(catalog.color(StateKey::Sample), Rgb(204, 51, 51));
        assert_eq!(catalog.initial(StateKey::Blank), 'B');
    }

    #[test]
    fn overrides_do_not_touch_other_entries() {
        let catalog = StateCatalog::standard()
            .with_label(StateKey::Sample, "Unknown")
            .with_color(StateKey::Sample, Rgb(1, 2, 3));
        assert_eq!(catalog.label(StateKey::Sample), "Unknown");
        assert_eq!(catalog.initial(StateKey::Sample), 'U');
        assert_eq!(catalog.color(StateKey::Sample), Rgb(1, 2, 3));
        assert_eq!(catalog.label(StateKey::Blank), "Blank");
    }

    #[test]
    fn state_keys_serialize_as_snake_case() {
        let json = serde_json::to_string(&StateKey::Calibrant).expect("serialize");
        assert_eq!(json, "\"calibrant\"");
    }
}
