// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal front end.
//!
//! Maps crossterm mouse and focus events onto the pointer model and draws the plate into a
//! ratatui buffer. Terminal cells are scaled to device units by a [`CellSize`].

pub mod input;
pub mod widget;

pub use input::{CellSize, TerminalSurface};
pub use widget::PlateWidget;
