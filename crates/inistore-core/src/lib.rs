//! # inistore-core
//!
//! Line-oriented store for INI-style configuration files.  Reads, writes,
//! deletions and "un-commenting" of `key=value` entries happen in place, so
//! hand-written comments, blank lines and unknown content survive every edit.
//!
//! This crate has no dependencies on CLIs, environment variables or network
//! sockets.  The only I/O it performs is whole-file reads and writes in
//! [`storage`], and only when the caller asks for them.
//!
//! # Architecture overview
//!
//! - **`document`** – The [`Document`]: an ordered sequence of text lines plus
//!   the [`PatternSet`] that classifies them.  Lookups ("locator") and edits
//!   ("mutator") are methods on `Document`; every lookup re-scans the lines,
//!   so there is no cached index that could go stale.
//!
//! - **`export`** – A one-pass projection of the document into a
//!   section → entries [`Node`] tree that can be serialised with `serde`.
//!
//! - **`storage`** – [`IniFile`]: a `Document` bound to a path on disk, with
//!   load / save / save-as semantics and typed I/O errors.
//!
//! ```rust
//! use inistore_core::Document;
//!
//! let mut doc = Document::parse("[Flextime]\n#Offset=15\nMinutesToWork=480\n");
//! doc.set_value("Flextime", "Offset", "15", false, true);
//!
//! assert_eq!(doc.get_value("Flextime", "Offset", false), "15");
//! assert_eq!(doc.line_count(), 3);
//! ```

pub mod document;
pub mod export;
pub mod storage;

pub use document::lines::{LineStore, LINE_ENDING};
pub use document::pattern::{LineKind, PatternError, PatternSet};
pub use document::Document;
pub use export::tree::Node;
pub use storage::ini_file::{IniFile, StoreError};
