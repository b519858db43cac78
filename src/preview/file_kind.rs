// SPDX-License-Identifier: MPL-2.0
//! Extension-based classification of file references.
//!
//! Matching is case-insensitive and looks only at the path portion of the
//! reference, so `photo.jpg?x=1` is an image. No I/O is performed.

use super::reference::FileReference;

/// Extension sets recognized by [`classify`].
pub mod extensions {
    pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "svg"];

    pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "xlsb", "csv"];
}

/// Content category inferred from a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Image,
    Spreadsheet,
    Other,
}

impl FileKind {
    /// i18n key naming the kind in the UI.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FileKind::Pdf => "file-kind-pdf",
            FileKind::Image => "file-kind-image",
            FileKind::Spreadsheet => "file-kind-spreadsheet",
            FileKind::Other => "file-kind-other",
        }
    }
}

/// Classifies a reference by its extension.
#[must_use]
pub fn classify(reference: &FileReference) -> FileKind {
    let Some(extension) = extension_of(reference.path_portion()) else {
        return FileKind::Other;
    };
    let extension = extension.to_ascii_lowercase();
    let extension = extension.as_str();

    if extensions::PDF_EXTENSIONS.contains(&extension) {
        FileKind::Pdf
    } else if extensions::IMAGE_EXTENSIONS.contains(&extension) {
        FileKind::Image
    } else if extensions::SPREADSHEET_EXTENSIONS.contains(&extension) {
        FileKind::Spreadsheet
    } else {
        FileKind::Other
    }
}

/// Text after the last `.` of the final path segment.
fn extension_of(path: &str) -> Option<&str> {
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let (stem, extension) = segment.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(reference: &str) -> FileKind {
        classify(&FileReference::new(reference))
    }

    #[test]
    fn recognizes_each_category() {
        assert_eq!(kind("docs/manual.pdf"), FileKind::Pdf);
        assert_eq!(kind("https://example.com/banner.webp"), FileKind::Image);
        assert_eq!(kind("icons/logo.svg"), FileKind::Image);
        assert_eq!(kind("exports/data.csv"), FileKind::Spreadsheet);
        assert_eq!(kind("macros.xlsm"), FileKind::Spreadsheet);
        assert_eq!(kind("archive.zip"), FileKind::Other);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(kind("a/b/report.XLSX"), FileKind::Spreadsheet);
        assert_eq!(kind("SCAN.PdF"), FileKind::Pdf);
        assert_eq!(kind("Photo.JPEG"), FileKind::Image);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(kind("photo.jpg?x=1"), FileKind::Image);
        assert_eq!(kind("https://cdn.example.com/q3.xlsx?sig=abc.pdf"), FileKind::Spreadsheet);
        assert_eq!(kind("manual.pdf#page=3"), FileKind::Pdf);
    }

    #[test]
    fn references_without_extension_are_other() {
        assert_eq!(kind(""), FileKind::Other);
        assert_eq!(kind("README"), FileKind::Other);
        assert_eq!(kind(".png"), FileKind::Other);
        assert_eq!(kind("trailing."), FileKind::Other);
        assert_eq!(kind("dir.png/notes"), FileKind::Other);
        assert_eq!(kind("https://example.com/"), FileKind::Other);
    }

    #[test]
    fn classification_is_deterministic() {
        let reference = FileReference::new("https://example.com/a/b/c.gif");
        assert_eq!(classify(&reference), classify(&reference.clone()));
    }
}
