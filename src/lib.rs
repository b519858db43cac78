// SPDX-License-Identifier: MPL-2.0
//! `iced_preview` is a multi-file preview widget built with the Iced GUI framework.
//!
//! It previews an ordered list of file references (local paths or URLs):
//! images are decoded and rendered natively with zoom, PDFs and unsupported
//! files get an information card, and spreadsheets are handed to online
//! viewers unless the file is only reachable from the local machine.
//! Navigation works with the toolbar, the keyboard and horizontal swipes.
//!
//! The toolkit-independent model lives in [`preview`]; [`ui`] and [`app`]
//! put it on screen.

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod media;
pub mod preview;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
