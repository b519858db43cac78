// SPDX-License-Identifier: MPL-2.0
//! Preview widget: toolbar, rendering surfaces and the component tying them
//! to the preview state machine.

pub mod component;
pub mod surfaces;
pub mod toolbar;

pub use component::{Effect, Message, State, ViewEnv};
