//! Value accessors and in-place edits on a [`Document`].
//!
//! Every edit touches exactly one line (or appends two for a new section), so
//! the rest of a hand-maintained file (comments, blank lines, ordering) stays
//! byte-for-byte the same.
//!
//! Absence is never an error: getters return an empty string or `false`, and
//! [`Document::comment_value`] / [`Document::delete_value`] report whether they
//! found anything.

use std::borrow::Cow;

use tracing::{debug, trace, warn};

use super::lines::single_line;
use super::locator::fold;
use super::pattern::LineKind;
use super::Document;

/// Lowercased values that [`Document::get_bool_value`] treats as `true`.
const TRUE_VALUES: [&str; 5] = ["true", "1", "ja", "j", "y"];

impl Document {
    /// Value of `key` in `section`, or an empty string when either is absent.
    ///
    /// The value is the text after the first `=`, trimmed.  A trailing comment
    /// (`Offset=15 ; minutes`) is not part of the value.
    pub fn get_value(&self, section: &str, key: &str, case_sensitive: bool) -> String {
        self.find_entry_line(section, key, case_sensitive)
            .and_then(|index| self.lines().get(index))
            .and_then(|line| self.patterns().value_of(line))
            .unwrap_or_default()
            .to_string()
    }

    /// Case-insensitive [`get_value`](Self::get_value).
    pub fn value(&self, section: &str, key: &str) -> String {
        self.get_value(section, key, false)
    }

    /// Interprets the value of `key` as a flag.
    ///
    /// `true`, `1`, `ja`, `j` and `y` (any case) are `true`; every other value,
    /// including a missing entry, is `false`.
    pub fn get_bool_value(&self, section: &str, key: &str) -> bool {
        let value = self.get_value(section, key, false).to_lowercase();
        TRUE_VALUES.contains(&value.as_str())
    }

    /// Writes `key=value` into `section`, creating whatever is missing.
    ///
    /// Resolution order:
    ///
    /// 1. No such section: `[section]` and `key=value` are appended to the end.
    /// 2. A live entry exists: that line is replaced.
    /// 3. With `search_comments`, a commented-out `key` whose value equals
    ///    `value` is un-commented in place and nothing else changes.  A
    ///    commented-out `key` with another value marks where the new line goes.
    /// 4. Otherwise the line is inserted just before the next section's
    ///    caption; at the end of the document it goes after the last marked
    ///    comment, or directly after the caption.
    ///
    /// Line terminators inside `section`, `key` or `value` are collapsed into
    /// single spaces before anything is written, so one call never produces
    /// more than one entry line.
    ///
    /// Always returns `true`.
    pub fn set_value(
        &mut self,
        section: &str,
        key: &str,
        value: &str,
        case_sensitive: bool,
        search_comments: bool,
    ) -> bool {
        let (section_text, key_text, value_text) =
            (single_line(section), single_line(key), single_line(value));
        if [&section_text, &key_text, &value_text]
            .iter()
            .any(|text| matches!(text, Cow::Owned(_)))
        {
            warn!(section, key, "line terminators replaced by spaces");
        }
        let (section, key, value) = (section_text.as_ref(), key_text.as_ref(), value_text.as_ref());
        let new_line = format!("{key}={value}");

        let Some(caption) = self.find_caption_line(section, false) else {
            debug!(section, key, "appending new section");
            self.lines_mut().append_line(format!("[{section}]"));
            self.lines_mut().append_line(new_line);
            return true;
        };

        if let Some(index) = self.find_entry_line(section, key, case_sensitive) {
            debug!(section, key, line = index, "replacing entry");
            self.lines_mut().replace_at(index, new_line);
            return true;
        }

        let body = self.section_body(caption);
        let wanted = fold(key.trim(), case_sensitive);
        let mut candidate = None;
        if search_comments {
            for index in body.clone() {
                let Some(line) = self.lines().get(index) else {
                    continue;
                };
                let LineKind::Comment { body: remainder } = self.patterns().classify(line) else {
                    continue;
                };
                let remainder = remainder.trim();
                let Some((found, _)) = self.patterns().split_assignment(remainder) else {
                    continue;
                };
                if fold(found, case_sensitive) != wanted {
                    continue;
                }
                if self.patterns().value_of(remainder) == Some(value) {
                    let revived = remainder.to_string();
                    debug!(section, key, line = index, "reviving commented entry");
                    self.lines_mut().replace_at(index, revived);
                    return true;
                }
                trace!(section, key, line = index, "commented entry with other value");
                candidate = Some(index);
            }
        }

        let at = if body.end < self.line_count() {
            body.end
        } else {
            candidate.map_or(caption + 1, |index| index + 1)
        };
        debug!(section, key, line = at, "inserting entry");
        self.lines_mut().insert_at(at, new_line);
        true
    }

    /// Case-insensitive [`set_value`](Self::set_value) without comment search.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> bool {
        self.set_value(section, key, value, false, false)
    }

    /// Comments out the live entry `key` by prefixing the canonical comment
    /// character.  Returns `false` if there is no such entry.
    pub fn comment_value(&mut self, section: &str, key: &str, case_sensitive: bool) -> bool {
        let Some(index) = self.find_entry_line(section, key, case_sensitive) else {
            return false;
        };
        let prefix = self.patterns().canonical();
        let Some(line) = self.lines().get(index) else {
            return false;
        };
        let commented = format!("{prefix}{line}");
        debug!(section, key, line = index, "commenting out entry");
        self.lines_mut().replace_at(index, commented);
        true
    }

    /// Removes the line holding the live entry `key`.  Returns `false` if there
    /// is no such entry.
    pub fn delete_value(&mut self, section: &str, key: &str, case_sensitive: bool) -> bool {
        let Some(index) = self.find_entry_line(section, key, case_sensitive) else {
            return false;
        };
        debug!(section, key, line = index, "deleting entry");
        self.lines_mut().remove_at(index);
        true
    }
}
