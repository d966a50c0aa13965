//! Line classification for INI documents.
//!
//! Every line is tagged as exactly one [`LineKind`] by [`PatternSet::classify`].
//! All scans in the locator, the mutator and the tree exporter dispatch on that
//! tag, so there is a single definition of what a caption, an entry or a
//! comment looks like.
//!
//! Grammar (evaluated on the line with surrounding whitespace removed):
//!
//! ```text
//! blank    := ""
//! comment  := C any*
//! caption  := "[" any+ "]" trailer?     (closed by the first "]" that
//!                                         leaves a valid trailer)
//! entry    := (not "=")+ "=" (not "=" and not C)+ trailer?
//! trailer  := ws* C any*
//! ```
//!
//! where `C` is any configured comment character.  Anything else is
//! [`LineKind::Other`]: inert text that is preserved but never matched.

use thiserror::Error;

/// Comment characters used when none are configured.  `#` is canonical.
pub const DEFAULT_COMMENT_CHARS: &str = "#;";

/// Errors raised when building a [`PatternSet`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// No comment character was supplied.
    #[error("at least one comment character is required")]
    Empty,

    /// The character is part of the INI grammar and cannot start a comment.
    #[error("'{0}' cannot be used as a comment character")]
    Reserved(char),
}

/// A section header such as `[Flextime] ; work time settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption<'a> {
    /// Section name with surrounding whitespace removed.
    pub name: &'a str,
    /// Text after the trailing comment character, if any.
    pub comment: Option<&'a str>,
}

/// A `key=value` line, optionally followed by a trailing comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub comment: Option<&'a str>,
}

/// The tag assigned to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with a comment character.  `body` is everything after it.
    Comment { body: &'a str },
    Caption(Caption<'a>),
    Entry(Entry<'a>),
    /// Matches nothing above.  Preserved verbatim and skipped by scans.
    Other,
}

impl LineKind<'_> {
    pub fn is_caption(&self) -> bool {
        matches!(self, LineKind::Caption(_))
    }
}

/// The configured comment characters and the recognisers derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    comment_chars: String,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            comment_chars: DEFAULT_COMMENT_CHARS.to_string(),
        }
    }
}

impl PatternSet {
    /// Builds a pattern set from an ordered list of comment characters.
    ///
    /// The first character is used when the store comments a line out.
    ///
    /// # Errors
    ///
    /// [`PatternError::Empty`] if `comment_chars` is empty, and
    /// [`PatternError::Reserved`] for `=`, `[`, `]` or whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inistore_core::PatternSet;
    ///
    /// let patterns = PatternSet::new(";").unwrap();
    /// assert_eq!(patterns.canonical(), ';');
    /// assert!(PatternSet::new("=").is_err());
    /// ```
    pub fn new(comment_chars: &str) -> Result<Self, PatternError> {
        if comment_chars.is_empty() {
            return Err(PatternError::Empty);
        }
        if let Some(c) = comment_chars
            .chars()
            .find(|c| matches!(c, '=' | '[' | ']') || c.is_whitespace())
        {
            return Err(PatternError::Reserved(c));
        }
        Ok(Self {
            comment_chars: comment_chars.to_string(),
        })
    }

    /// The character prefixed to lines that are commented out.
    pub fn canonical(&self) -> char {
        // `new` guarantees at least one character.
        self.comment_chars.chars().next().unwrap_or('#')
    }

    pub fn comment_chars(&self) -> &str {
        &self.comment_chars
    }

    pub fn is_comment_char(&self, c: char) -> bool {
        self.comment_chars.contains(c)
    }

    /// Tags `line`.  See the module documentation for the grammar.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim();
        let Some(first) = trimmed.chars().next() else {
            return LineKind::Blank;
        };
        if self.is_comment_char(first) {
            return LineKind::Comment {
                body: &trimmed[first.len_utf8()..],
            };
        }
        if let Some(caption) = self.parse_caption(trimmed) {
            return LineKind::Caption(caption);
        }
        if let Some(entry) = self.parse_entry(trimmed) {
            return LineKind::Entry(entry);
        }
        LineKind::Other
    }

    pub fn match_caption<'a>(&self, line: &'a str) -> Option<Caption<'a>> {
        match self.classify(line) {
            LineKind::Caption(caption) => Some(caption),
            _ => None,
        }
    }

    pub fn match_entry<'a>(&self, line: &'a str) -> Option<Entry<'a>> {
        match self.classify(line) {
            LineKind::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_comment_line(&self, line: &str) -> bool {
        matches!(self.classify(line), LineKind::Comment { .. })
    }

    /// Splits a line at its first `=` into a trimmed key and the raw rest.
    ///
    /// Unlike [`match_entry`](Self::match_entry) this accepts values that
    /// contain `=` or comment characters, e.g. `url=http://host/?a=b`.
    pub fn split_assignment<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let trimmed = line.trim();
        let eq = trimmed.find('=')?;
        Some((trimmed[..eq].trim(), &trimmed[eq + 1..]))
    }

    /// The effective value of an assignment line.
    ///
    /// Pattern entries lose their trailing comment.  Other assignments return
    /// everything after the first `=`, trimmed.  `None` if there is no `=`.
    pub fn value_of<'a>(&self, line: &'a str) -> Option<&'a str> {
        if let Some(entry) = self.match_entry(line) {
            return Some(entry.value);
        }
        self.split_assignment(line).map(|(_, rest)| rest.trim())
    }

    /// The caption closes at the first `]` followed by a valid trailer, so
    /// names may contain `]` (`[a]b]` is section `a]b`) while
    /// `[A] ; see [B]` is still section `A`.
    fn parse_caption<'a>(&self, trimmed: &'a str) -> Option<Caption<'a>> {
        let rest = trimmed.strip_prefix('[')?;
        rest.match_indices(']').find_map(|(close, _)| {
            let name = rest[..close].trim();
            if name.is_empty() {
                return None;
            }
            let comment = self.trailer(&rest[close + 1..])?;
            Some(Caption { name, comment })
        })
    }

    fn parse_entry<'a>(&self, trimmed: &'a str) -> Option<Entry<'a>> {
        let eq = trimmed.find('=')?;
        if eq == 0 {
            return None;
        }
        let rest = &trimmed[eq + 1..];
        let stop = rest.find(|c: char| c == '=' || self.is_comment_char(c));
        let (value, comment) = match stop {
            None => (rest, None),
            Some(pos) if rest[pos..].starts_with('=') => return None,
            Some(pos) => (&rest[..pos], self.trailer(&rest[pos..])?),
        };
        if value.is_empty() {
            return None;
        }
        Some(Entry {
            key: trimmed[..eq].trim(),
            value: value.trim(),
            comment,
        })
    }

    /// Parses what follows a caption or value.
    ///
    /// `Some(None)`: nothing.  `Some(Some(text))`: a trailing comment.
    /// `None`: anything else, which disqualifies the line.
    fn trailer<'a>(&self, tail: &'a str) -> Option<Option<&'a str>> {
        let tail = tail.trim_start();
        let Some(first) = tail.chars().next() else {
            return Some(None);
        };
        if self.is_comment_char(first) {
            Some(Some(&tail[first.len_utf8()..]))
        } else {
            None
        }
    }
}
