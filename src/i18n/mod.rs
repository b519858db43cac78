// SPDX-License-Identifier: MPL-2.0
//! Localization of user-visible strings with Fluent.
//!
//! Translation files are embedded from `assets/i18n/` at build time. The
//! active locale is picked from the command line, then the config file, then
//! the operating system, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
