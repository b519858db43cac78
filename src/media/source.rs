// SPDX-License-Identifier: MPL-2.0
//! Fetching raw bytes for a file reference.
//!
//! `http`/`https` references go through a shared `reqwest` client; anything
//! else is treated as a filesystem path (a leading `file://` is stripped).

use crate::error::{Error, HttpError, Result};
use crate::preview::FileReference;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedPreview/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Shared HTTP client, built on first use.
///
/// # Errors
///
/// Returns [`Error::Http`] if the TLS backend cannot be initialized.
pub fn http_client() -> Result<&'static reqwest::Client> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Http(HttpError::Transport(e.to_string())))?;
    Ok(CLIENT.get_or_init(|| client))
}

/// Filesystem path of a non-http reference.
#[must_use]
pub fn local_path(reference: &FileReference) -> Option<PathBuf> {
    if reference.is_http() {
        return None;
    }
    let path = reference.path_portion();
    let path = path.strip_prefix("file://").unwrap_or(path);
    (!path.is_empty()).then(|| PathBuf::from(path))
}

/// Reads the full content behind `reference`.
///
/// # Errors
///
/// Returns [`Error::Io`] for unreadable local files, [`Error::Http`] for
/// transport failures or non-success statuses, and [`Error::Io`] for
/// references that are neither http nor a usable path (`blob:`, `data:`).
pub async fn fetch_bytes(reference: &FileReference) -> Result<Vec<u8>> {
    if reference.is_http() {
        let response = http_client()?
            .get(reference.as_str())
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        return Ok(bytes.to_vec());
    }

    match local_path(reference) {
        Some(path) if !has_opaque_scheme(reference) => Ok(tokio::fs::read(path).await?),
        _ => Err(Error::Io(format!("unsupported reference: {reference}"))),
    }
}

/// Issues a `HEAD` request and returns the advertised content type.
///
/// # Errors
///
/// Same as [`fetch_bytes`] for remote references.
pub async fn head(reference: &FileReference) -> Result<Option<String>> {
    let response = http_client()?
        .head(reference.as_str())
        .send()
        .await?
        .error_for_status()?;
    Ok(response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string))
}

/// Fetches at most the first `len` bytes of a remote resource with a ranged
/// `GET`. Servers that ignore the range are cut off after `len` bytes.
///
/// # Errors
///
/// Same as [`fetch_bytes`] for remote references.
pub async fn fetch_prefix(reference: &FileReference, len: usize) -> Result<Vec<u8>> {
    let mut response = http_client()?
        .get(reference.as_str())
        .header(
            reqwest::header::RANGE,
            format!("bytes=0-{}", len.saturating_sub(1)),
        )
        .send()
        .await?
        .error_for_status()?;

    let mut bytes = Vec::with_capacity(len);
    while bytes.len() < len {
        match response.chunk().await? {
            Some(chunk) => bytes.extend_from_slice(&chunk),
            None => break,
        }
    }
    bytes.truncate(len);
    Ok(bytes)
}

fn has_opaque_scheme(reference: &FileReference) -> bool {
    let text = reference.as_str();
    ["blob:", "data:"]
        .iter()
        .any(|scheme| {
            text.get(..scheme.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn local_path_strips_file_scheme_and_query() {
        assert_eq!(
            local_path(&FileReference::new("file:///tmp/a.png?v=2")),
            Some(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            local_path(&FileReference::new("assets/demo/diagram.svg")),
            Some(PathBuf::from("assets/demo/diagram.svg"))
        );
        assert_eq!(local_path(&FileReference::new("https://example.com/a.png")), None);
        assert_eq!(local_path(&FileReference::new("")), None);
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("IcedPreview/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn http_client_is_shared() {
        let first = http_client().expect("client");
        let second = http_client().expect("client");
        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn fetch_reads_local_files() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("data.csv");
        fs::write(&path, b"a,b\n1,2\n").expect("write");

        let reference = FileReference::new(path.to_string_lossy());
        let bytes = fetch_bytes(&reference).await.expect("bytes");
        assert_eq!(bytes, b"a,b\n1,2\n");
    }

    #[tokio::test]
    async fn fetch_rejects_opaque_schemes_and_missing_files() {
        let blob = FileReference::new("blob:https://example.com/1234");
        assert!(matches!(fetch_bytes(&blob).await, Err(Error::Io(_))));

        let missing = FileReference::new("/definitely/not/here.png");
        assert!(matches!(fetch_bytes(&missing).await, Err(Error::Io(_))));
    }
}
