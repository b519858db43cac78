// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `Message` enum, an update function returning an event or
//! effect for the parent, and a `view` taking a borrowed context.
//!
//! - [`preview`] - The multi-file preview widget
//! - [`layout`] - Header, file sidebar and footer
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod layout;
pub mod preview;
pub mod styles;
pub mod theming;
