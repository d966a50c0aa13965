//! Ordered, mutable storage for the raw lines of a document.
//!
//! Lines never contain a line terminator.  Input may use `\r\n` or `\n`
//! (mixed within one file is fine); output always uses [`LINE_ENDING`].
//! Text handed to `insert_at`, `replace_at` or `append_line` has any embedded
//! terminators collapsed into single spaces, so a save/load cycle can never
//! split one stored line into several.
//!
//! `insert_at` and `remove_at` shift the tail of the vector and are O(n).

use std::borrow::Cow;

/// Line terminator written by [`LineStore::to_text`].
#[cfg(target_os = "windows")]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator written by [`LineStore::to_text`].
#[cfg(not(target_os = "windows"))]
pub const LINE_ENDING: &str = "\n";

/// The line sequence backing a [`crate::Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `text` on `"\r\n"` or `"\n"`.
    ///
    /// A terminator at the very end of the text does not produce an extra
    /// empty line, so `parse(to_text())` is stable across save cycles.
    /// `parse("")` yields an empty store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inistore_core::LineStore;
    ///
    /// let store = LineStore::parse("[A]\r\nkey=1\n\nlast");
    /// assert_eq!(store.len(), 4);
    /// assert_eq!(store.get(2), Some(""));
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut store = Self::new();
        store.extend_from_text(text);
        store
    }

    /// Appends the lines of `text` using the same splitting rules as [`parse`](Self::parse).
    pub fn extend_from_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let body = text
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(text);
        self.lines.extend(
            body.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()),
        );
    }

    /// Joins the lines, writing [`LINE_ENDING`] after each one.
    pub fn to_text(&self) -> String {
        let capacity = self
            .lines
            .iter()
            .map(|l| l.len() + LINE_ENDING.len())
            .sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push_str(LINE_ENDING);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Inserts `line` before position `index`; `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_at(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, into_single_line(line.into()));
    }

    /// Overwrites the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn replace_at(&mut self, index: usize, line: impl Into<String>) {
        self.lines[index] = into_single_line(line.into());
    }

    /// Removes and returns the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> String {
        self.lines.remove(index)
    }

    pub fn append_line(&mut self, line: impl Into<String>) {
        self.lines.push(into_single_line(line.into()));
    }
}

/// Whether `text` contains `\r` or `\n`.
fn has_line_terminator(text: &str) -> bool {
    text.contains(|c: char| c == '\r' || c == '\n')
}

/// Joins the non-empty pieces of a multi-line string with single spaces.
pub(crate) fn single_line(text: &str) -> Cow<'_, str> {
    if !has_line_terminator(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.split(|c: char| c == '\r' || c == '\n')
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn into_single_line(line: String) -> String {
    if has_line_terminator(&line) {
        single_line(&line).into_owned()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_text_yields_no_lines() {
        assert!(LineStore::parse("").is_empty());
    }

    #[test]
    fn test_parse_accepts_crlf_and_lf_in_the_same_text() {
        // Arrange
        let text = "a\r\nb\nc";

        // Act
        let store = LineStore::parse(text);

        // Assert
        let lines: Vec<&str> = store.iter().collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_drops_only_one_trailing_terminator() {
        // The final "\n" closes line "b"; the blank line before it is content.
        let store = LineStore::parse("a\n\nb\n\n");
        let lines: Vec<&str> = store.iter().collect();
        assert_eq!(lines, vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_parse_single_terminator_is_one_blank_line() {
        let store = LineStore::parse("\n");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0), Some(""));
    }

    #[test]
    fn test_to_text_terminates_every_line() {
        let store = LineStore::parse("a\nb");
        assert_eq!(store.to_text(), format!("a{LINE_ENDING}b{LINE_ENDING}"));
    }

    #[test]
    fn test_text_round_trip_is_stable() {
        // Arrange
        let first = LineStore::parse("[A]\r\nkey=1\r\n\r\n; note\r\n");

        // Act
        let second = LineStore::parse(&first.to_text());
        let third = LineStore::parse(&second.to_text());

        // Assert
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_primitive_mutations() {
        let mut store = LineStore::parse("a\nc");

        store.insert_at(1, "b");
        store.append_line("d");
        store.replace_at(0, "A");
        let removed = store.remove_at(3);

        assert_eq!(removed, "d");
        let lines: Vec<&str> = store.iter().collect();
        assert_eq!(lines, vec!["A", "b", "c"]);
    }

    #[test]
    fn test_mutations_collapse_embedded_terminators() {
        // Arrange
        let mut store = LineStore::parse("a");

        // Act
        store.append_line("k=x\n[B]");
        store.insert_at(0, "one\r\ntwo");
        store.replace_at(1, "a\r");

        // Assert
        let lines: Vec<&str> = store.iter().collect();
        assert_eq!(lines, vec!["one two", "a", "k=x [B]"]);
        assert_eq!(LineStore::parse(&store.to_text()), store);
    }

    #[test]
    fn test_insert_at_len_appends() {
        let mut store = LineStore::parse("a");
        store.insert_at(1, "b");
        assert_eq!(store.get(1), Some("b"));
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        assert_eq!(LineStore::parse("a").get(1), None);
    }
}
