// SPDX-License-Identifier: MPL-2.0
//! Preview state machine.
//!
//! [`PreviewState`] owns the file list, the navigation cursor, the zoom level
//! and the transient render-error flag of the widget. Every transition is
//! synchronous; asynchronous work (image loads, probes) is tagged with a
//! [`LoadTicket`] or the list generation so late results can be recognized
//! and dropped.

use super::file_kind::{classify, FileKind};
use super::reference::FileReference;
use super::url_cache::DerivedUrlCache;
use super::zoom::ZoomLevel;
use std::sync::Arc;

/// Navigation state snapshot for rendering the toolbar and page indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    pub has_next: bool,
    pub has_previous: bool,
    /// Current position (0-indexed), `None` when the list is empty.
    pub current_index: Option<usize>,
    pub total_count: usize,
}

/// Failure reported by a rendering surface for the current file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub reference: FileReference,
    /// Short, user-presentable cause (an i18n key or a decoder message).
    pub detail: String,
}

/// Identifies one load of the current file.
///
/// A load result is applied only while [`PreviewState::is_current`] still
/// holds for the ticket it was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub generation: u64,
    pub index: usize,
    serial: u64,
}

#[derive(Debug, Default)]
pub struct PreviewState {
    files: Vec<FileReference>,
    cursor: usize,
    zoom: ZoomLevel,
    render_error: Option<RenderFailure>,
    /// Retries of the current file since it became current.
    attempts: u32,
    /// Incremented on every list replacement.
    generation: u64,
    /// Incremented whenever the current load becomes obsolete.
    load_serial: u64,
    urls: DerivedUrlCache,
}

impl PreviewState {
    #[must_use]
    pub fn new(urls: DerivedUrlCache) -> Self {
        Self {
            urls,
            ..Self::default()
        }
    }

    /// Replaces the whole file list.
    ///
    /// Resets cursor and zoom, clears the render error and every memoized
    /// URL, and starts a new generation. An empty list is accepted.
    pub fn set_files<I, R>(&mut self, files: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<FileReference>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self.cursor = 0;
        self.zoom = ZoomLevel::default();
        self.render_error = None;
        self.attempts = 0;
        self.generation = self.generation.wrapping_add(1);
        self.load_serial = self.load_serial.wrapping_add(1);
        self.urls.invalidate();

        tracing::info!(
            count = self.files.len(),
            generation = self.generation,
            "preview file list replaced"
        );
    }

    /// Moves to the next file. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.can_navigate_next() {
            self.move_to(self.cursor + 1);
            true
        } else {
            false
        }
    }

    /// Moves to the previous file. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.can_navigate_prev() {
            self.move_to(self.cursor - 1);
            true
        } else {
            false
        }
    }

    /// Jumps to `index`. Out-of-range or current indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.files.len() && index != self.cursor {
            self.move_to(index);
            true
        } else {
            false
        }
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index;
        self.zoom = ZoomLevel::default();
        self.render_error = None;
        self.attempts = 0;
        self.load_serial = self.load_serial.wrapping_add(1);
        tracing::debug!(cursor = index, total = self.files.len(), "preview navigated");
    }

    #[must_use]
    pub fn can_navigate_prev(&self) -> bool {
        self.files.len() > 1 && self.cursor > 0
    }

    #[must_use]
    pub fn can_navigate_next(&self) -> bool {
        self.files.len() > 1 && self.cursor + 1 < self.files.len()
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: self.can_navigate_next(),
            has_previous: self.can_navigate_prev(),
            current_index: (!self.files.is_empty()).then_some(self.cursor),
            total_count: self.files.len(),
        }
    }

    #[must_use]
    pub fn current_file(&self) -> Option<&FileReference> {
        self.files.get(self.cursor)
    }

    #[must_use]
    pub fn current_kind(&self) -> Option<FileKind> {
        self.current_file().map(classify)
    }

    #[must_use]
    pub fn files(&self) -> &[FileReference] {
        &self.files
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Zoom

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    /// Sets an exact zoom level. Out-of-range input is rejected and the
    /// previous level kept.
    pub fn zoom_to(&mut self, level: f32) -> bool {
        match ZoomLevel::try_new(level) {
            Some(zoom) => {
                self.zoom = zoom;
                true
            }
            None => {
                tracing::debug!(level, "zoom request out of range ignored");
                false
            }
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZoomLevel::default();
    }

    /// Double-activation toggle between natural and double size.
    pub fn toggle_zoom(&mut self) {
        self.zoom = self.zoom.toggled();
    }

    // Rendering

    #[must_use]
    pub fn render_error(&self) -> Option<&RenderFailure> {
        self.render_error.as_ref()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Records a rendering failure for `reference`.
    ///
    /// Reports for a file that is no longer current are ignored. Returns
    /// whether the flag was set.
    pub fn mark_render_failed(
        &mut self,
        reference: &FileReference,
        detail: impl Into<String>,
    ) -> bool {
        if self.current_file() != Some(reference) {
            tracing::debug!(%reference, "stale render failure ignored");
            return false;
        }
        let detail = detail.into();
        tracing::warn!(%reference, %detail, "preview render failed");
        self.render_error = Some(RenderFailure {
            reference: reference.clone(),
            detail,
        });
        true
    }

    /// Clears the render error and issues a fresh ticket for reloading the
    /// current file. `None` when the list is empty.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        self.current_file()?;
        self.render_error = None;
        self.attempts = self.attempts.saturating_add(1);
        self.load_serial = self.load_serial.wrapping_add(1);
        tracing::debug!(attempt = self.attempts, cursor = self.cursor, "preview retry");
        self.load_ticket()
    }

    /// Ticket for the load of the current file as things stand.
    #[must_use]
    pub fn load_ticket(&self) -> Option<LoadTicket> {
        self.current_file().map(|_| LoadTicket {
            generation: self.generation,
            index: self.cursor,
            serial: self.load_serial,
        })
    }

    /// Whether a load issued with `ticket` is still wanted.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.load_ticket() == Some(ticket)
    }

    // Derived URLs

    #[must_use]
    pub fn urls(&self) -> &DerivedUrlCache {
        &self.urls
    }

    #[must_use]
    pub fn current_is_local(&self) -> Option<bool> {
        self.current_file().map(|file| self.urls.is_local(file))
    }

    #[must_use]
    pub fn current_viewer_url(&self) -> Option<Arc<str>> {
        self.current_file()
            .and_then(|file| self.urls.spreadsheet_viewer_url(file))
    }

    #[must_use]
    pub fn current_alternate_url(&self) -> Option<Arc<str>> {
        self.current_file()
            .and_then(|file| self.urls.alternate_viewer_url(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::zoom::{MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL};
    use crate::test_utils::preview_with;

    #[test]
    fn replacement_resets_cursor_and_zoom() {
        let mut state = preview_with(&["a.pdf", "b.png", "c.csv"]);
        state.next();
        state.next();
        state.zoom_in();
        assert_eq!(state.cursor(), 2);

        state.set_files(["x.png", "y.png"]);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert_eq!(state.current_file().map(FileReference::as_str), Some("x.png"));
    }

    #[test]
    fn replacement_bumps_generation_and_clears_urls() {
        let mut state = preview_with(&["https://example.com/a.xlsx"]);
        let generation = state.generation();
        assert!(state.current_viewer_url().is_some());
        assert_eq!(state.urls().len(), 1);

        state.set_files(["https://example.com/b.xlsx"]);
        assert_eq!(state.generation(), generation + 1);
        assert!(state.urls().is_empty());
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut state = preview_with(&["a.pdf", "b.png"]);
        assert!(!state.prev());
        assert_eq!(state.cursor(), 0);

        assert!(state.next());
        assert!(!state.next());
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn navigation_resets_zoom_and_error() {
        let mut state = preview_with(&["a.png", "b.png"]);
        state.zoom_in();
        let current = state.current_file().cloned().expect("file");
        assert!(state.mark_render_failed(&current, "decode"));

        state.next();
        assert_eq!(state.zoom(), ZoomLevel::default());
        assert!(state.render_error().is_none());
    }

    #[test]
    fn single_file_cannot_navigate() {
        let state = preview_with(&["only.pdf"]);
        assert!(!state.can_navigate_prev());
        assert!(!state.can_navigate_next());
        assert_eq!(
            state.navigation_info(),
            NavigationInfo {
                has_next: false,
                has_previous: false,
                current_index: Some(0),
                total_count: 1,
            }
        );
    }

    #[test]
    fn empty_list_has_no_current_file() {
        let mut state = preview_with(&[]);
        assert!(state.current_file().is_none());
        assert!(state.current_kind().is_none());
        assert!(!state.next());
        assert!(!state.prev());
        assert!(state.retry().is_none());
        assert!(state.load_ticket().is_none());
        assert_eq!(state.navigation_info().current_index, None);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut state = preview_with(&["a.pdf", "b.png", "c.csv"]);
        assert!(state.go_to(2));
        assert_eq!(state.cursor(), 2);
        assert!(!state.go_to(3));
        assert!(!state.go_to(2));
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn zoom_to_rejects_out_of_range() {
        let mut state = preview_with(&["a.png"]);
        assert!(state.zoom_to(2.0));
        assert_eq!(state.zoom().value(), 2.0);

        assert!(!state.zoom_to(5.0));
        assert!(!state.zoom_to(f32::NAN));
        assert_eq!(state.zoom().value(), 2.0);
    }

    #[test]
    fn zoom_to_rounds_to_one_decimal() {
        let mut state = preview_with(&["a.png"]);
        assert!(state.zoom_to(1.26));
        assert_eq!(state.zoom().value(), 1.3);
    }

    #[test]
    fn zoom_steps_stay_in_bounds() {
        let mut state = preview_with(&["a.png"]);
        for _ in 0..20 {
            state.zoom_in();
            assert!(state.zoom().value() <= MAX_ZOOM_LEVEL);
        }
        for _ in 0..20 {
            state.zoom_out();
            assert!(state.zoom().value() >= MIN_ZOOM_LEVEL);
        }
        state.reset_zoom();
        assert!(state.zoom().is_default());
    }

    #[test]
    fn stale_render_failure_is_ignored() {
        let mut state = preview_with(&["a.png", "b.png"]);
        let first = state.current_file().cloned().expect("file");
        state.next();

        assert!(!state.mark_render_failed(&first, "timeout"));
        assert!(state.render_error().is_none());
    }

    #[test]
    fn retry_clears_error_and_invalidates_previous_ticket() {
        let mut state = preview_with(&["a.png"]);
        let ticket = state.load_ticket().expect("ticket");
        let current = state.current_file().cloned().expect("file");
        state.mark_render_failed(&current, "error-load-network");

        let retry = state.retry().expect("retry ticket");
        assert!(state.render_error().is_none());
        assert_eq!(state.attempts(), 1);
        assert!(state.is_current(retry));
        assert!(!state.is_current(ticket));
    }

    #[test]
    fn tickets_expire_on_navigation_and_replacement() {
        let mut state = preview_with(&["a.png", "b.png"]);
        let first = state.load_ticket().expect("ticket");
        state.next();
        state.prev();
        assert!(!state.is_current(first));

        let second = state.load_ticket().expect("ticket");
        state.set_files(["a.png", "b.png"]);
        assert!(!state.is_current(second));
    }

    #[test]
    fn local_spreadsheet_has_no_viewer_url() {
        let state = preview_with(&["http://localhost:4200/a.xlsx"]);
        assert_eq!(state.current_kind(), Some(FileKind::Spreadsheet));
        assert_eq!(state.current_is_local(), Some(true));
        assert!(state.current_viewer_url().is_none());
        assert!(state.current_alternate_url().is_none());
    }
}
