//! Viewport and scroll controller
//!
//! Owns the terminal dimensions, the cached [`RenderedDocument`] and the
//! scroll offset into its body. The identity band and the footer are pinned,
//! so only `height - band - footer` rows scroll.
//!
//! Layout is not run here. A resize marks the viewport dirty and the owner
//! supplies a fresh document through [`Viewport::set_document`] before the
//! next frame.

use crate::layout::{RenderedDocument, FOOTER_HEIGHT};
use termcv_tui::Line;

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    ready: bool,
    dirty: bool,
    document: Option<RenderedDocument>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// False until the first resize with a nonzero size
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// True when the cached document does not match the current width
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn document(&self) -> Option<&RenderedDocument> {
        self.document.as_ref()
    }

    /// Record new terminal dimensions. Zero sizes before the first real
    /// size are ignored. The cached document is marked for reflow; the
    /// offset is left alone until the reflowed document arrives.
    pub fn resize(&mut self, width: u16, height: u16) {
        if !self.ready && (width == 0 || height == 0) {
            return;
        }
        self.ready = true;
        self.width = width;
        self.height = height;
        self.dirty = true;
    }

    /// Install a document laid out for the current width. The offset keeps
    /// its line count, clamped to the new document.
    pub fn set_document(&mut self, document: RenderedDocument) {
        self.document = Some(document);
        self.dirty = false;
        self.clamp();
    }

    /// Rows available to the scrolling body
    pub fn body_height(&self) -> usize {
        let band = self.document.as_ref().map_or(0, |d| d.band_height());
        (self.height as usize)
            .saturating_sub(band)
            .saturating_sub(FOOTER_HEIGHT)
    }

    /// Lines in the scrolling body
    pub fn total_lines(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.body().len())
    }

    pub fn max_offset(&self) -> usize {
        self.total_lines().saturating_sub(self.body_height())
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Move by `delta` lines (negative scrolls up), clamped to the document
    pub fn scroll(&mut self, delta: isize) {
        self.offset = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.clamp();
    }

    pub fn line_down(&mut self, n: usize) {
        self.scroll(n as isize);
    }

    pub fn line_up(&mut self, n: usize) {
        self.scroll(-(n as isize));
    }

    pub fn page_down(&mut self) {
        self.line_down(self.body_height().max(1));
    }

    pub fn page_up(&mut self) {
        self.line_up(self.body_height().max(1));
    }

    pub fn half_page_down(&mut self) {
        self.line_down((self.body_height() / 2).max(1));
    }

    pub fn half_page_up(&mut self) {
        self.line_up((self.body_height() / 2).max(1));
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Body lines from the offset, at most [`Self::body_height`] of them
    pub fn visible_slice(&self) -> &[Line] {
        let Some(document) = &self.document else {
            return &[];
        };
        let body = document.body();
        let start = self.offset.min(body.len());
        let end = start.saturating_add(self.body_height()).min(body.len());
        &body[start..end]
    }

    /// `offset / max(1, total - height)`, in `[0, 1]`
    pub fn scroll_percent(&self) -> f64 {
        let range = self.total_lines().saturating_sub(self.body_height()).max(1);
        (self.offset as f64 / range as f64).clamp(0.0, 1.0)
    }

    /// Scroll position as a whole percentage
    pub fn percent(&self) -> u8 {
        (self.scroll_percent() * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::model::{Identity, Resume, Section, SectionKind};
    use crate::theme::StyleSheet;

    /// Band of 3 rows, then a body with `paragraphs` lines of summary text
    fn document(width: usize, paragraphs: usize) -> RenderedDocument {
        let content = (0..paragraphs)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let resume = Resume::new(
            Identity {
                name: "Ada".into(),
                ..Identity::default()
            },
            vec![Section::new("About", SectionKind::Summary(content))],
        );
        LayoutEngine::new(StyleSheet::default(), 5).layout(&resume, width)
    }

    /// Like [`document`], with lines that wrap in two below 20 columns
    fn long_document(width: usize, paragraphs: usize) -> RenderedDocument {
        let content = (0..paragraphs)
            .map(|i| format!("line {i} of the summary"))
            .collect::<Vec<_>>()
            .join("\n");
        let resume = Resume::new(
            Identity {
                name: "Ada".into(),
                ..Identity::default()
            },
            vec![Section::new("About", SectionKind::Summary(content))],
        );
        LayoutEngine::new(StyleSheet::default(), 5).layout(&resume, width)
    }

    fn ready(height: u16, paragraphs: usize) -> Viewport {
        let mut viewport = Viewport::new();
        viewport.resize(40, height);
        viewport.set_document(document(40, paragraphs));
        viewport
    }

    #[test]
    fn test_uninitialized_until_nonzero_size() {
        let mut viewport = Viewport::new();
        assert!(!viewport.is_ready());
        viewport.resize(0, 24);
        assert!(!viewport.is_ready());
        assert!(!viewport.is_dirty());
        viewport.resize(80, 24);
        assert!(viewport.is_ready());
        assert!(viewport.is_dirty());
        assert!(viewport.visible_slice().is_empty());
    }

    #[test]
    fn test_body_height_excludes_pinned_bands() {
        // 20 rows - 3 band - 3 footer
        let viewport = ready(20, 30);
        assert_eq!(viewport.body_height(), 14);
        assert_eq!(viewport.visible_slice().len(), 14);

        let tiny = ready(4, 30);
        assert_eq!(tiny.body_height(), 0);
        assert!(tiny.visible_slice().is_empty());
    }

    #[test]
    fn test_scroll_clamps() {
        let mut viewport = ready(20, 30);
        // body: title, blank, 30 lines
        assert_eq!(viewport.total_lines(), 32);
        assert_eq!(viewport.max_offset(), 18);

        viewport.scroll(-5);
        assert_eq!(viewport.offset(), 0);
        viewport.scroll(1000);
        assert_eq!(viewport.offset(), 18);
        viewport.scroll(isize::MIN);
        assert_eq!(viewport.offset(), 0);
        viewport.scroll(isize::MAX);
        assert_eq!(viewport.offset(), 18);
    }

    #[test]
    fn test_navigation_helpers() {
        let mut viewport = ready(20, 30);
        viewport.page_down();
        assert_eq!(viewport.offset(), 14);
        viewport.half_page_up();
        assert_eq!(viewport.offset(), 7);
        viewport.line_down(2);
        assert_eq!(viewport.offset(), 9);
        viewport.goto_bottom();
        assert_eq!(viewport.offset(), 18);
        assert_eq!(viewport.percent(), 100);
        viewport.goto_top();
        assert_eq!(viewport.percent(), 0);
    }

    #[test]
    fn test_visible_slice_follows_offset() {
        let mut viewport = ready(20, 30);
        viewport.scroll(2);
        let first = viewport.visible_slice()[0].to_plain();
        assert_eq!(first.trim(), "line 0");
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let mut viewport = ready(40, 2);
        viewport.scroll(10);
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.scroll_percent(), 0.0);
    }

    #[test]
    fn test_resize_clamps_against_reflowed_document() {
        let mut viewport = ready(20, 30);
        viewport.goto_bottom();
        assert_eq!(viewport.offset(), 18);

        // taller and narrower: every summary line wraps in two
        viewport.resize(12, 30);
        assert!(viewport.is_dirty());
        assert_eq!(viewport.offset(), 18);
        viewport.set_document(long_document(12, 30));
        // title, blank, 60 wrapped lines; 24 body rows
        assert_eq!(viewport.max_offset(), 38);
        assert_eq!(viewport.offset(), 18);
        assert!(!viewport.is_dirty());

        // back to the wide layout with more rows: the offset clamps
        viewport.resize(40, 30);
        viewport.set_document(long_document(40, 30));
        assert_eq!(viewport.max_offset(), 8);
        assert_eq!(viewport.offset(), 8);
    }

    #[test]
    fn test_scroll_percent() {
        let mut viewport = ready(20, 30);
        viewport.scroll(9);
        assert!((viewport.scroll_percent() - 0.5).abs() < f64::EPSILON);
        assert_eq!(viewport.percent(), 50);
    }
}
