//! Section → entry tree export.
//!
//! ```text
//! root
//!  ├─ key-before-any-section = value
//!  ├─ Section
//!  │   ├─ key = value
//!  │   └─ key = value
//!  └─ Section
//! ```
//!
//! Captions become children of the root (their trailing comment is dropped);
//! entries become leaves of the most recent caption, or of the root when no
//! caption has been seen yet.  Comments, blank lines and anything that is not
//! a pattern entry are skipped.  Duplicate sections produce duplicate nodes.
//!
//! [`Node`] implements `serde::Serialize`, so callers can render the tree as
//! JSON, TOML or any other serde format.

use serde::Serialize;

use crate::document::pattern::LineKind;
use crate::Document;

/// One node of the exported tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    /// Entry value; `None` for the root and section nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// A node without content or children.
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            children: Vec::new(),
        }
    }

    /// A leaf carrying `content`.
    pub fn leaf(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }
}

impl Document {
    /// Builds the section/entry tree in a single pass over the lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inistore_core::Document;
    ///
    /// let doc = Document::parse("[Flextime]\nOffset=15 ; minutes\n");
    /// let tree = doc.export_tree("Settings");
    ///
    /// let offset = tree.child("Flextime").and_then(|s| s.child("Offset")).unwrap();
    /// assert_eq!(offset.content.as_deref(), Some("15"));
    /// ```
    pub fn export_tree(&self, root_name: &str) -> Node {
        let mut root = Node::branch(root_name);
        // Index into `root.children` of the section currently being filled.
        let mut open: Option<usize> = None;

        for line in self.lines().iter() {
            match self.patterns().classify(line) {
                LineKind::Caption(caption) => {
                    root.children.push(Node::branch(caption.name));
                    open = Some(root.children.len() - 1);
                }
                LineKind::Entry(entry) => {
                    let leaf = Node::leaf(entry.key, entry.value);
                    match open.and_then(|index| root.children.get_mut(index)) {
                        Some(section) => section.children.push(leaf),
                        None => root.children.push(leaf),
                    }
                }
                LineKind::Blank | LineKind::Comment { .. } | LineKind::Other => {}
            }
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_groups_entries_under_sections() {
        // Arrange
        let doc = Document::parse(
            "[Genaral] ; sic\nFirstRunThisDay=today\n\n[Flextime]\nMinutesToWork=480\nOffset=15\n",
        );

        // Act
        let tree = doc.export_tree("Settings");

        // Assert
        assert_eq!(tree.name, "Settings");
        assert_eq!(tree.children.len(), 2);
        let general = &tree.children[0];
        assert_eq!(general.name, "Genaral");
        assert_eq!(general.children, vec![Node::leaf("FirstRunThisDay", "today")]);
        let flextime = &tree.children[1];
        assert_eq!(
            flextime.children,
            vec![Node::leaf("MinutesToWork", "480"), Node::leaf("Offset", "15")]
        );
    }

    #[test]
    fn test_export_attaches_leading_entries_to_root() {
        let doc = Document::parse("version=2\n[A]\na=1\n");
        let tree = doc.export_tree("root");
        assert_eq!(tree.children[0], Node::leaf("version", "2"));
        assert_eq!(tree.children[1].name, "A");
    }

    #[test]
    fn test_export_skips_comments_blanks_and_other_lines() {
        let doc = Document::parse("[A]\n# c=1\n\nflag\nurl=http://h/?a=b\nk=v\n");
        let tree = doc.export_tree("root");
        assert_eq!(tree.children[0].children, vec![Node::leaf("k", "v")]);
    }

    #[test]
    fn test_export_keeps_duplicate_sections_separate() {
        let doc = Document::parse("[A]\na=1\n[A]\na=2\n");
        let tree = doc.export_tree("root");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[1].children[0].content.as_deref(), Some("2"));
    }

    #[test]
    fn test_export_does_not_modify_document() {
        let doc = Document::parse("[A]\na=1\n");
        let before = doc.clone();
        let first = doc.export_tree("root");
        let second = doc.export_tree("root");
        assert_eq!(doc, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_node_serializes_without_empty_fields() {
        let doc = Document::parse("[A]\na=1\n[Empty]\n");
        let json = serde_json::to_value(doc.export_tree("cfg")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "cfg",
                "children": [
                    { "name": "A", "children": [ { "name": "a", "content": "1" } ] },
                    { "name": "Empty" }
                ]
            })
        );
    }
}
