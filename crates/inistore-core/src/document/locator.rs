//! Read-only scans over a [`Document`].
//!
//! Every scan walks the lines from the top and classifies them on the fly;
//! nothing is indexed or cached.  When `case_sensitive` is `false`, both the
//! query and the scanned text are lowercased before comparison.  Stored lines
//! are never modified.
//!
//! A section runs from its caption line up to, but not including, the next
//! caption line (or the end of the document).  Entry scans never cross that
//! boundary.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Range;

use super::pattern::LineKind;
use super::Document;

/// Lowercases `text` unless the comparison is case-sensitive.
pub(crate) fn fold(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

impl Document {
    /// Index of the first caption line naming `name`.
    ///
    /// Caption lines with a trailing comment (`[Flextime] ; hours`) match too;
    /// the same caption rule is used by every scan and by the tree export.
    pub fn find_caption_line(&self, name: &str, case_sensitive: bool) -> Option<usize> {
        let wanted = fold(name.trim(), case_sensitive);
        self.lines().iter().position(|line| {
            match self.patterns().classify(line) {
                LineKind::Caption(caption) => fold(caption.name, case_sensitive) == wanted,
                _ => false,
            }
        })
    }

    /// Index of the first live entry `key` inside section `section`.
    ///
    /// The section itself is always looked up case-insensitively;
    /// `case_sensitive` only applies to the key.  Blank lines, comment lines
    /// and lines without `=` are skipped.
    pub fn find_entry_line(&self, section: &str, key: &str, case_sensitive: bool) -> Option<usize> {
        let caption = self.find_caption_line(section, false)?;
        let wanted = fold(key.trim(), case_sensitive);
        self.section_body(caption).find(|&index| {
            self.lines()
                .get(index)
                .and_then(|line| self.live_key(line))
                .is_some_and(|found| fold(found, case_sensitive) == wanted)
        })
    }

    pub fn section_exists(&self, name: &str, case_sensitive: bool) -> bool {
        self.find_caption_line(name, case_sensitive).is_some()
    }

    pub fn entry_exists(&self, section: &str, key: &str, case_sensitive: bool) -> bool {
        self.find_entry_line(section, key, case_sensitive).is_some()
    }

    /// Names of all sections in document order, duplicates included.
    pub fn list_captions(&self) -> Vec<String> {
        self.lines()
            .iter()
            .filter_map(|line| self.patterns().match_caption(line))
            .map(|caption| caption.name.to_string())
            .collect()
    }

    /// All key/value pairs of the first section named `section`.
    ///
    /// Lines without `=` appear as keys with an empty value.  The result is
    /// sorted by key.  When a key occurs twice, the map keeps the **last**
    /// value; this differs from [`find_entry_line`](Self::find_entry_line),
    /// which addresses the first occurrence.
    pub fn list_entries(&self, section: &str, case_sensitive: bool) -> BTreeMap<String, String> {
        let mut entries = BTreeMap::new();
        let Some(caption) = self.find_caption_line(section, case_sensitive) else {
            return entries;
        };
        for index in self.section_body(caption) {
            let Some(line) = self.lines().get(index) else {
                continue;
            };
            let (key, value) = match self.patterns().classify(line) {
                LineKind::Blank | LineKind::Comment { .. } | LineKind::Caption(_) => continue,
                LineKind::Entry(entry) => (entry.key, entry.value),
                LineKind::Other => match self.patterns().split_assignment(line) {
                    Some((key, rest)) => (key, rest.trim()),
                    None => (line.trim(), ""),
                },
            };
            entries.insert(key.to_string(), value.to_string());
        }
        entries
    }

    /// Line indices after `caption` up to the next caption or end of document.
    pub(crate) fn section_body(&self, caption: usize) -> Range<usize> {
        let start = caption + 1;
        let end = (start..self.line_count())
            .find(|&index| {
                self.lines()
                    .get(index)
                    .is_some_and(|line| self.patterns().classify(line).is_caption())
            })
            .unwrap_or(self.line_count());
        start..end
    }

    /// Key of an uncommented assignment line, if it is one.
    fn live_key<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.patterns().classify(line) {
            LineKind::Entry(entry) => Some(entry.key),
            LineKind::Other => self.patterns().split_assignment(line).map(|(key, _)| key),
            LineKind::Blank | LineKind::Comment { .. } | LineKind::Caption(_) => None,
        }
    }
}
