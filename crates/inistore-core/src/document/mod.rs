//! The in-memory INI document.
//!
//! A [`Document`] owns two things:
//!
//! - a [`LineStore`]: the raw lines of the file, which are the single source
//!   of truth.  There is no separate parsed tree.
//! - a [`PatternSet`]: the comment characters that decide how each line is
//!   classified.  It is fixed when the document is created.
//!
//! Read-only scans live in [`locator`], edits in [`mutator`].  Both are plain
//! `impl Document` blocks split across files to keep each one readable.
//!
//! # First match wins
//!
//! Sections and entries are not required to be unique.  Every lookup scans
//! forward from the top of the document and stops at the first hit, so a
//! second `[General]` header is never reachable by name.  Nothing is cached:
//! two lookups separated by an edit always see the edit.

use std::fmt;

pub mod lines;
pub mod locator;
pub mod mutator;
pub mod pattern;

use lines::LineStore;
use pattern::PatternSet;

/// An INI document held in memory as a sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: LineStore,
    patterns: PatternSet,
}

impl Document {
    /// Creates an empty document using the default comment characters (`#;`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document that recognises `patterns`' comment characters.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self {
            lines: LineStore::new(),
            patterns,
        }
    }

    /// Splits `text` into lines using the default comment characters.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, PatternSet::default())
    }

    /// Splits `text` into lines using `patterns`' comment characters.
    pub fn parse_with(text: &str, patterns: PatternSet) -> Self {
        Self {
            lines: LineStore::parse(text),
            patterns,
        }
    }

    /// Appends the lines of `text` after the existing content.
    pub fn extend_from_text(&mut self, text: &str) {
        self.lines.extend_from_text(text);
    }

    /// Raw line access.
    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Serialises the document for persistence, one platform line terminator
    /// after every line.
    pub fn to_text(&self) -> String {
        self.lines.to_text()
    }

    pub(crate) fn lines_mut(&mut self) -> &mut LineStore {
        &mut self.lines
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
