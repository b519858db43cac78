// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget health probes for image references.
//!
//! Every list replacement issues one [`probe`] per image in the list. Probes
//! only feed the log and the [`ProbeDiagnostics`] table; they never touch
//! navigation, zoom or the render-error flag.

use super::file_kind::{classify, FileKind};
use super::reference::FileReference;
use crate::error::Error;
use crate::media;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable { width: u32, height: u32 },
    /// Remote resource answered but its size is unknown without a download.
    ReachableUnknownSize,
    Failed(String),
}

impl ProbeOutcome {
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !matches!(self, ProbeOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub generation: u64,
    pub reference: FileReference,
    pub outcome: ProbeOutcome,
}

/// Image references worth probing, in list order.
pub fn probe_targets<'a>(
    files: impl IntoIterator<Item = &'a FileReference>,
) -> Vec<FileReference> {
    files
        .into_iter()
        .filter(|file| classify(file) == FileKind::Image)
        .cloned()
        .collect()
}

/// Bytes requested when a server refuses `HEAD`; enough for common headers.
const PREFIX_LEN: usize = 64 * 1024;

/// Checks that `reference` can be reached.
///
/// Local files get their header decoded for dimensions; remote references
/// receive a `HEAD` request, or a ranged `GET` when the server refuses it.
pub async fn probe(generation: u64, reference: FileReference) -> ProbeReport {
    let outcome = if reference.is_http() {
        probe_remote(&reference).await
    } else {
        match media::local_path(&reference) {
            Some(path) => match media::read_dimensions(path).await {
                Ok((width, height)) => ProbeOutcome::Reachable { width, height },
                Err(err) => ProbeOutcome::Failed(err.to_string()),
            },
            None => ProbeOutcome::Failed("empty reference".into()),
        }
    };

    match &outcome {
        ProbeOutcome::Failed(reason) => {
            tracing::warn!(%reference, generation, %reason, "image probe failed");
        }
        _ => tracing::info!(%reference, generation, ?outcome, "image probe succeeded"),
    }

    ProbeReport {
        generation,
        reference,
        outcome,
    }
}

async fn probe_remote(reference: &FileReference) -> ProbeOutcome {
    match media::source::head(reference).await {
        Ok(content_type) => {
            tracing::debug!(%reference, ?content_type, "remote image answered");
            ProbeOutcome::ReachableUnknownSize
        }
        Err(Error::Http(status)) if status.rejects_method() => {
            tracing::debug!(%reference, %status, "HEAD refused, retrying with a ranged GET");
            match media::fetch_prefix(reference, PREFIX_LEN).await {
                Ok(prefix) => outcome_from_prefix(reference, &prefix),
                Err(err) => ProbeOutcome::Failed(err.to_string()),
            }
        }
        Err(err) => ProbeOutcome::Failed(err.to_string()),
    }
}

/// Reachable with dimensions when the leading bytes carry a readable header.
fn outcome_from_prefix(reference: &FileReference, prefix: &[u8]) -> ProbeOutcome {
    let svg = media::image::looks_like_svg(reference, prefix);
    match media::dimensions_of(prefix, svg) {
        Ok((width, height)) => ProbeOutcome::Reachable { width, height },
        Err(_) => ProbeOutcome::ReachableUnknownSize,
    }
}

/// Counts shown in the footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    pub total: usize,
    pub reachable: usize,
    pub failed: usize,
}

impl ProbeSummary {
    #[must_use]
    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.reachable + self.failed)
    }
}

/// Probe results of the current generation.
#[derive(Debug, Clone, Default)]
pub struct ProbeDiagnostics {
    generation: u64,
    expected: usize,
    results: Vec<(FileReference, ProbeOutcome)>,
}

impl ProbeDiagnostics {
    /// Forgets previous results and waits for `expected` reports tagged with
    /// `generation`.
    pub fn reset(&mut self, generation: u64, expected: usize) {
        self.generation = generation;
        self.expected = expected;
        self.results.clear();
    }

    /// Stores `report` unless it belongs to an older generation.
    pub fn record(&mut self, report: ProbeReport) -> bool {
        if report.generation != self.generation {
            tracing::debug!(
                reference = %report.reference,
                stale = report.generation,
                current = self.generation,
                "stale probe result dropped"
            );
            return false;
        }
        self.results.push((report.reference, report.outcome));
        true
    }

    #[must_use]
    pub fn summary(&self) -> ProbeSummary {
        let reachable = self
            .results
            .iter()
            .filter(|(_, outcome)| outcome.is_reachable())
            .count();
        ProbeSummary {
            total: self.expected,
            reachable,
            failed: self.results.len() - reachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::{Cursor, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use tempfile::tempdir;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let mut encoded = Vec::new();
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 255, 255]))
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .expect("encode png");
        encoded
    }

    const METHOD_NOT_ALLOWED: &[u8] =
        b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    /// Serves `requests` connections: `HEAD` gets a 405, `GET` the body.
    /// Request heads are sent back through the returned channel.
    fn serve_without_head(body: Vec<u8>, requests: usize) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let address = listener.local_addr().expect("local addr");
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            for stream in listener.incoming().take(requests) {
                let mut stream = stream.expect("accept");
                let mut head = Vec::new();
                let mut byte = [0u8; 1];
                while !head.ends_with(b"\r\n\r\n") {
                    match stream.read(&mut byte) {
                        Ok(1) => head.push(byte[0]),
                        _ => break,
                    }
                }
                let head = String::from_utf8_lossy(&head).into_owned();
                let response = if head.starts_with("HEAD") {
                    METHOD_NOT_ALLOWED.to_vec()
                } else {
                    let mut response = format!(
                        concat!(
                            "HTTP/1.1 206 Partial Content\r\n",
                            "Content-Type: image/png\r\n",
                            "Content-Length: {}\r\n",
                            "Connection: close\r\n\r\n"
                        ),
                        body.len()
                    )
                    .into_bytes();
                    response.extend_from_slice(&body);
                    response
                };
                let _ = stream.write_all(&response);
                let _ = sender.send(head);
            }
        });

        (format!("http://{address}/remote.png"), receiver)
    }

    fn report(generation: u64, reference: &str, outcome: ProbeOutcome) -> ProbeReport {
        ProbeReport {
            generation,
            reference: FileReference::new(reference),
            outcome,
        }
    }

    #[test]
    fn only_images_are_probed() {
        let files: Vec<FileReference> = ["a.pdf", "b.png", "c.csv", "d.svg?v=1", "e"]
            .into_iter()
            .map(FileReference::new)
            .collect();
        let targets = probe_targets(&files);
        let names: Vec<&str> = targets.iter().map(FileReference::as_str).collect();
        assert_eq!(names, ["b.png", "d.svg?v=1"]);
    }

    #[test]
    fn stale_reports_are_dropped() {
        let mut diagnostics = ProbeDiagnostics::default();
        diagnostics.reset(3, 2);

        assert!(!diagnostics.record(report(2, "old.png", ProbeOutcome::ReachableUnknownSize)));
        assert!(diagnostics.record(report(3, "new.png", ProbeOutcome::Failed("404".into()))));

        let summary = diagnostics.summary();
        assert_eq!(summary, ProbeSummary { total: 2, reachable: 0, failed: 1 });
        assert_eq!(summary.pending(), 1);
    }

    #[test]
    fn reset_clears_previous_generation() {
        let mut diagnostics = ProbeDiagnostics::default();
        diagnostics.reset(1, 1);
        diagnostics.record(report(1, "a.png", ProbeOutcome::ReachableUnknownSize));

        diagnostics.reset(2, 0);
        assert_eq!(diagnostics.summary(), ProbeSummary::default());
    }

    #[tokio::test]
    async fn local_probe_reads_dimensions() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("probe.png");
        RgbaImage::from_pixel(5, 8, Rgba([0, 255, 0, 255]))
            .save(&path)
            .expect("write png");

        let report = probe(7, FileReference::new(path.to_string_lossy())).await;
        assert_eq!(report.generation, 7);
        assert_eq!(report.outcome, ProbeOutcome::Reachable { width: 5, height: 8 });
    }

    #[test]
    fn prefix_with_header_reports_dimensions() {
        let reference = FileReference::new("https://example.com/a.png");
        assert_eq!(
            outcome_from_prefix(&reference, &encoded_png(4, 6)),
            ProbeOutcome::Reachable { width: 4, height: 6 }
        );
        assert_eq!(
            outcome_from_prefix(&reference, b"<html>not an image</html>"),
            ProbeOutcome::ReachableUnknownSize
        );
    }

    #[tokio::test]
    async fn refused_head_falls_back_to_ranged_get() {
        let (url, requests) = serve_without_head(encoded_png(12, 3), 2);

        let report = probe(4, FileReference::new(url)).await;

        assert_eq!(report.outcome, ProbeOutcome::Reachable { width: 12, height: 3 });
        let head = requests.recv().expect("HEAD request");
        assert!(head.starts_with("HEAD"));
        let get = requests.recv().expect("GET request").to_ascii_lowercase();
        assert!(get.starts_with("get"));
        assert!(get.contains("range: bytes=0-"));
    }

    #[tokio::test]
    async fn missing_local_file_fails() {
        let report = probe(1, FileReference::new("/no/such/dir/missing.png")).await;
        assert!(matches!(report.outcome, ProbeOutcome::Failed(_)));
        assert!(!report.outcome.is_reachable());
    }
}
