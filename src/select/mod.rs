// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wellpick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wellpick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer-driven well selection.
//!
//! A press starts a drag. On release the gesture is a click (toggle the well under the
//! press point) when the pointer stayed within the click threshold, and a box selection
//! (assign the active key to every well centred inside the inset rectangle) otherwise.

pub mod controller;
pub mod editor;

pub use controller::{Capture, DragBox, Gesture, PointerEvent, Response, SelectionController};
pub use editor::{EditorView, PlateEditor};
