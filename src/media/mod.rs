// SPDX-License-Identifier: MPL-2.0
//! Resource loading for the rendering surfaces.
//!
//! Only images are decoded natively; PDF and spreadsheet content is handed
//! to external viewers and never fetched here.

pub mod image;
pub mod source;

pub use image::{decode_image, dimensions_of, load_image, read_dimensions, ImageData};
pub use source::{fetch_bytes, fetch_prefix, http_client, local_path, USER_AGENT};
