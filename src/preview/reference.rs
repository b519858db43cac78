// SPDX-License-Identifier: MPL-2.0
//! Opaque locator of a previewable resource.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A URL or filesystem path identifying one file in the preview list.
///
/// The text is kept verbatim; nothing is validated or normalized, so a
/// malformed reference still flows through classification and rendering on
/// a best-effort basis. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileReference(Arc<str>);

impl FileReference {
    #[must_use]
    pub fn new(reference: impl AsRef<str>) -> Self {
        Self(Arc::from(reference.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reference without its query string or fragment.
    #[must_use]
    pub fn path_portion(&self) -> &str {
        let end = self.0.find(['?', '#']).unwrap_or(self.0.len());
        &self.0[..end]
    }

    /// Last path segment, for labels. Falls back to the whole reference.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let path = self.path_portion().trim_end_matches(['/', '\\']);
        match path.rsplit(['/', '\\']).next() {
            Some(name) if !name.is_empty() => name,
            _ => self.as_str(),
        }
    }

    /// [`Self::file_name`] with percent-escapes decoded. Falls back to the
    /// raw name when the escapes do not form valid UTF-8.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        let name = self.file_name();
        if !name.contains('%') {
            return Cow::Borrowed(name);
        }
        match String::from_utf8(percent_decode(name)) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(_) => Cow::Borrowed(name),
        }
    }

    /// Whether the reference carries an `http` or `https` scheme.
    #[must_use]
    pub fn is_http(&self) -> bool {
        self.authority().is_some()
    }

    /// Text between `scheme://` and the first `/`, `?` or `#`, for http(s)
    /// references only.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        let trimmed = self.0.trim_start();
        let rest = strip_prefix_ignore_case(trimmed, "https://")
            .or_else(|| strip_prefix_ignore_case(trimmed, "http://"))?;
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

/// Decodes `%XX` sequences; malformed ones are kept literally.
fn percent_decode(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| bytes.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            }
            None => {
                decoded.push(bytes[i]);
                i += 1;
            }
        }
    }
    decoded
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FileReference {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&String> for FileReference {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}
