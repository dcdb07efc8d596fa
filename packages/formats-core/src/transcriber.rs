//! Transcriber
//!
//! Position-tracked rewriting of a source document. Used both to build a
//! template out of an imported file and to compile a file out of a template.
//!
//! A transcriber holds the source text, a cursor into it and an append-only
//! list of output segments. Handlers move through the source copying the
//! parts they want to keep, injecting placeholders or translations, and
//! skipping the parts they replace:
//!
//! ```
//! use formats_core::transcriber::Transcriber;
//!
//! let source = r#"<string name="foo">hello world</string>"#;
//! let mut transcriber = Transcriber::new(source);
//!
//! transcriber.copy_until(source.find('>').unwrap() + 1);
//! transcriber.add("aee8cc2abd5abd5a87cd784be_tr");
//! transcriber.skip("hello world".len());
//! transcriber.copy_until(source.len());
//!
//! assert_eq!(
//!     transcriber.get_destination(),
//!     r#"<string name="foo">aee8cc2abd5abd5a87cd784be_tr</string>"#
//! );
//! ```
//!
//! Regions of the output whose fate is not known when they are emitted can
//! be bracketed with [`Transcriber::mark_section_start`] and
//! [`Transcriber::mark_section_end`] and later dropped with
//! [`Transcriber::remove_section`].
//!
//! All offsets are byte offsets into the source and must fall on character
//! boundaries.

use crate::chars;
use std::ops::Range;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Source(Range<usize>),
    Text(String),
    SectionStart,
    SectionEnd,
    Removed,
}

/// A bracketed region of the output, as indices into the segment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Section {
    start: usize,
    end: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Transcriber<'a> {
    source: &'a str,
    destination: Vec<Segment>,
    ptr: usize,
    newline_count: usize,
    // Live sections, in the order they were opened.
    sections: Vec<Section>,
    // Start indices of the sections that have not been closed yet.
    open_sections: Vec<usize>,
}

impl<'a> Transcriber<'a> {
    pub fn new(source: &'a str) -> Self {
        Transcriber {
            source,
            destination: Vec::new(),
            ptr: 0,
            newline_count: 0,
            sections: Vec::new(),
            open_sections: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current read position in the source.
    pub fn ptr(&self) -> usize {
        self.ptr
    }

    /// 1-based line of the source the cursor is on; counts every newline
    /// that was copied or skipped.
    pub fn line_number(&self) -> usize {
        self.newline_count + 1
    }

    /// Copy `length` bytes of the source, starting at the cursor.
    pub fn copy(&mut self, length: usize) {
        self.copy_until(self.ptr + length);
    }

    /// Copy the source from the cursor up to `end` and move the cursor there.
    ///
    /// # Panics
    ///
    /// Panics if `end` is behind the cursor.
    pub fn copy_until(&mut self, end: usize) {
        let end = self.clamp(end);
        assert!(
            end >= self.ptr,
            "copy_until({}) is behind the transcriber position {}",
            end,
            self.ptr
        );
        self.count_newlines(self.ptr..end);
        if end > self.ptr {
            self.destination.push(Segment::Source(self.ptr..end));
        }
        self.ptr = end;
    }

    /// Inject text into the output without moving the cursor.
    pub fn add(&mut self, text: impl Into<String>) {
        self.destination.push(Segment::Text(text.into()));
    }

    /// Move the cursor `length` bytes forward without copying.
    pub fn skip(&mut self, length: usize) {
        self.skip_until(self.ptr + length);
    }

    /// Move the cursor to `end` without copying.
    ///
    /// # Panics
    ///
    /// Panics if `end` is behind the cursor.
    pub fn skip_until(&mut self, end: usize) {
        let end = self.clamp(end);
        assert!(
            end >= self.ptr,
            "skip_until({}) is behind the transcriber position {}",
            end,
            self.ptr
        );
        self.count_newlines(self.ptr..end);
        trace!(from = self.ptr, to = end, "skipping source");
        self.ptr = end;
    }

    pub fn mark_section_start(&mut self) {
        let start = self.destination.len();
        self.destination.push(Segment::SectionStart);
        self.sections.push(Section { start, end: None });
        self.open_sections.push(start);
    }

    /// Close the most recently opened section that is still open.
    pub fn mark_section_end(&mut self) {
        let end = self.destination.len();
        self.destination.push(Segment::SectionEnd);
        if let Some(start) = self.open_sections.pop() {
            if let Some(section) = self.sections.iter_mut().find(|s| s.start == start) {
                section.end = Some(end);
            }
        }
    }

    /// Drop the `place`-th most recent live section from the output
    /// (0 is the latest one). A section that was never closed extends to the
    /// current end of the output. Sections nested inside the removed one are
    /// removed with it.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `place + 1` sections are live.
    pub fn remove_section(&mut self, place: usize) {
        let index = self
            .sections
            .len()
            .checked_sub(place + 1)
            .unwrap_or_else(|| {
                panic!(
                    "remove_section({}) called with only {} live section(s)",
                    place,
                    self.sections.len()
                )
            });
        let section = self.sections[index];
        let end = section.end.unwrap_or(self.destination.len() - 1);

        for segment in &mut self.destination[section.start..=end] {
            *segment = Segment::Removed;
        }
        let removed = section.start..=end;
        self.sections.retain(|s| !removed.contains(&s.start));
        self.open_sections.retain(|start| !removed.contains(start));
        debug!(start = section.start, end, "removed section");
    }

    /// The output so far, without section markers and removed segments.
    pub fn get_destination(&self) -> String {
        let mut destination = String::with_capacity(self.source.len());
        for segment in &self.destination {
            match segment {
                Segment::Source(range) => destination.push_str(&self.source[range.clone()]),
                Segment::Text(text) => destination.push_str(text),
                Segment::SectionStart | Segment::SectionEnd | Segment::Removed => {}
            }
        }
        destination
    }

    pub fn into_destination(self) -> String {
        self.get_destination()
    }

    fn clamp(&self, end: usize) -> usize {
        end.min(self.source.len())
    }

    fn count_newlines(&mut self, range: Range<usize>) {
        self.newline_count += self.source[range]
            .chars()
            .filter(|&c| c == chars::NEWLINE)
            .count();
    }
}
