// SPDX-License-Identifier: MPL-2.0
//! Sample files shown when nothing is passed on the command line.
//!
//! The list exercises every rendering branch: remote and relative images,
//! a query-string image, a PDF, public and local spreadsheets, and a file
//! type with no preview.

use crate::preview::FileReference;

pub const DEMO_FILES: &[&str] = &[
    "https://mozilla.github.io/pdf.js/web/compressed.tracemonkey-pldi-09.pdf",
    "https://upload.wikimedia.org/wikipedia/commons/7/77/Delete_key1.jpg",
    "assets/demo/diagram.svg",
    "https://picsum.photos/id/1015/800/500.jpg?grayscale",
    "https://file-examples.com/storage/fe0cebcf59a5caccb7a0b48/2017/02/file_example_XLSX_10.xlsx",
    "http://localhost:4200/reports/q3-budget.xlsx",
    "assets/demo/budget.csv",
    "https://file-examples.com/storage/fe0cebcf59a5caccb7a0b48/2017/02/zip_2MB.zip",
];

#[must_use]
pub fn demo_files() -> Vec<FileReference> {
    DEMO_FILES.iter().copied().map(FileReference::from).collect()
}

/// Command-line files replace the demo list when any were given.
#[must_use]
pub fn initial_files(cli_files: Vec<String>) -> Vec<FileReference> {
    if cli_files.is_empty() {
        demo_files()
    } else {
        cli_files.into_iter().map(FileReference::from).collect()
    }
}
