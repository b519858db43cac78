// SPDX-License-Identifier: MPL-2.0
//! Memoized derivations read by the view on every frame.
//!
//! For each reference the cache remembers whether it is local and the two
//! third-party spreadsheet viewer URLs built from it. Each value is computed
//! on first read and then served from an LRU table until [`DerivedUrlCache::invalidate`]
//! clears everything, which the owning state does whenever its file list is
//! replaced.
//!
//! Reads take `&self`: the view holds only a shared borrow of the state, so
//! the tables sit behind a `RefCell`.

use super::file_kind::{classify, FileKind};
use super::reference::FileReference;
use crate::config::{
    PreviewConfig, DEFAULT_ALTERNATE_VIEWER_ENDPOINT, DEFAULT_OFFICE_VIEWER_ENDPOINT,
    DEFAULT_URL_CACHE_CAPACITY,
};
use lru::LruCache;
use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Hosts that public viewer services cannot reach.
const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1"];

/// Base URLs of the external spreadsheet viewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerEndpoints {
    pub office: String,
    pub alternate: String,
}

impl ViewerEndpoints {
    #[must_use]
    pub fn from_config(config: &PreviewConfig) -> Self {
        Self {
            office: config.office_viewer_endpoint().to_string(),
            alternate: config.alternate_viewer_endpoint().to_string(),
        }
    }
}

impl Default for ViewerEndpoints {
    fn default() -> Self {
        Self {
            office: DEFAULT_OFFICE_VIEWER_ENDPOINT.to_string(),
            alternate: DEFAULT_ALTERNATE_VIEWER_ENDPOINT.to_string(),
        }
    }
}

/// Per-reference memo slots. `None` means "not computed yet".
#[derive(Debug, Clone, Default)]
struct Entry {
    is_local: Option<bool>,
    viewer_url: Option<Option<Arc<str>>>,
    alternate_url: Option<Option<Arc<str>>>,
}

#[derive(Debug)]
pub struct DerivedUrlCache {
    endpoints: ViewerEndpoints,
    entries: RefCell<LruCache<FileReference, Entry>>,
    computed: Cell<usize>,
}

impl Default for DerivedUrlCache {
    fn default() -> Self {
        Self::new(ViewerEndpoints::default(), DEFAULT_URL_CACHE_CAPACITY)
    }
}

impl DerivedUrlCache {
    #[must_use]
    pub fn new(endpoints: ViewerEndpoints, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            endpoints,
            entries: RefCell::new(LruCache::new(capacity)),
            computed: Cell::new(0),
        }
    }

    #[must_use]
    pub fn from_config(config: &PreviewConfig) -> Self {
        Self::new(
            ViewerEndpoints::from_config(config),
            config.url_cache_capacity(),
        )
    }

    #[must_use]
    pub fn endpoints(&self) -> &ViewerEndpoints {
        &self.endpoints
    }

    /// Whether third-party viewers are unable to reach `reference`.
    pub fn is_local(&self, reference: &FileReference) -> bool {
        self.with_entry(reference, |cache, entry| cache.local_flag(reference, entry))
    }

    /// Embed URL for the primary spreadsheet viewer, or `None` when the
    /// reference is not a spreadsheet or is local.
    pub fn spreadsheet_viewer_url(&self, reference: &FileReference) -> Option<Arc<str>> {
        self.with_entry(reference, |cache, entry| {
            if let Some(url) = &entry.viewer_url {
                return url.clone();
            }
            let url = cache
                .embeddable(reference, entry)
                .then(|| office_viewer_url(&cache.endpoints.office, reference).into());
            cache.count_computation();
            entry.viewer_url = Some(url.clone());
            url
        })
    }

    /// Embed URL for the alternate spreadsheet viewer, under the same
    /// conditions as [`Self::spreadsheet_viewer_url`].
    pub fn alternate_viewer_url(&self, reference: &FileReference) -> Option<Arc<str>> {
        self.with_entry(reference, |cache, entry| {
            if let Some(url) = &entry.alternate_url {
                return url.clone();
            }
            let url = cache
                .embeddable(reference, entry)
                .then(|| alternate_viewer_url(&cache.endpoints.alternate, reference).into());
            cache.count_computation();
            entry.alternate_url = Some(url.clone());
            url
        })
    }

    /// Drops every memoized value.
    pub fn invalidate(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of references currently memoized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of derivations actually computed since creation.
    #[must_use]
    pub fn stats(&self) -> usize {
        self.computed.get()
    }

    fn with_entry<T>(
        &self,
        reference: &FileReference,
        f: impl FnOnce(&Self, &mut Entry) -> T,
    ) -> T {
        let mut entries = self.entries.borrow_mut();
        let entry = entries.get_or_insert_mut(reference.clone(), Entry::default);
        f(self, entry)
    }

    fn local_flag(&self, reference: &FileReference, entry: &mut Entry) -> bool {
        *entry.is_local.get_or_insert_with(|| {
            self.count_computation();
            is_local_reference(reference)
        })
    }

    fn embeddable(&self, reference: &FileReference, entry: &mut Entry) -> bool {
        classify(reference) == FileKind::Spreadsheet && !self.local_flag(reference, entry)
    }

    fn count_computation(&self) {
        self.computed.set(self.computed.get() + 1);
    }
}

/// Uncached locality check.
///
/// A reference is local when it has no `http`/`https` scheme (relative or
/// absolute paths, `file:`, `blob:`, `data:`), when its host is a loopback
/// name, or when its host is empty.
#[must_use]
pub fn is_local_reference(reference: &FileReference) -> bool {
    match reference.authority() {
        None => true,
        Some(authority) => {
            let host = host_of(authority);
            host.is_empty()
                || LOCAL_HOSTS
                    .iter()
                    .any(|local| host.eq_ignore_ascii_case(local))
        }
    }
}

fn host_of(authority: &str) -> &str {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split(']').next().unwrap_or(bracketed);
    }
    host_port.split(':').next().unwrap_or(host_port)
}

/// Percent-encodes `text` as a URI component.
///
/// Keeps `A-Z a-z 0-9 - _ . ! ~ * ' ( )` and encodes every other UTF-8 byte
/// as `%XX` with uppercase hex digits.
#[must_use]
pub fn percent_encode_component(text: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        let keep = byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')');
        if keep {
            encoded.push(char::from(byte));
        } else {
            encoded.push('%');
            encoded.push(char::from(HEX[usize::from(byte >> 4)]));
            encoded.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    encoded
}

fn join_query(endpoint: &str) -> char {
    if endpoint.contains('?') {
        '&'
    } else {
        '?'
    }
}

fn office_viewer_url(endpoint: &str, reference: &FileReference) -> String {
    format!(
        "{endpoint}{}src={}",
        join_query(endpoint),
        percent_encode_component(reference.as_str())
    )
}

fn alternate_viewer_url(endpoint: &str, reference: &FileReference) -> String {
    format!(
        "{endpoint}{}url={}&embedded=true",
        join_query(endpoint),
        percent_encode_component(reference.as_str())
    )
}
