//! File-backed INI documents.
//!
//! [`IniFile`] pairs a [`Document`] with the path it was loaded from.  Edits
//! happen on the document; nothing reaches the disk until [`IniFile::save`],
//! [`IniFile::save_as`] or [`IniFile::save_to`] is called.
//!
//! ```ini
//! [Genaral]
//! FirstRunThisDay=06.05.2024 07:31:12
//!
//! [Flextime]
//! MinutesToWork=468
//! Offset=0
//! ; DaylyGrow=15
//! DaylyGrow=30
//! ```
//!
//! A failed write leaves the document untouched, so the caller can retry or
//! save somewhere else.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::document::pattern::PatternSet;
use crate::export::tree::Node;
use crate::Document;

/// Root name used by [`IniFile::export_tree`] when there is no file stem.
const DEFAULT_ROOT_NAME: &str = "ini";

/// Error type for INI file persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `save()` was called on a document that was never bound to a path.
    #[error("no file path is associated with this document")]
    NoPath,
}

/// An INI document bound to an optional file path.
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    path: Option<PathBuf>,
    document: Document,
}

impl IniFile {
    /// An empty, unbound document with the default comment characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty, unbound document with custom comment characters.
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self {
            path: None,
            document: Document::with_patterns(patterns),
        }
    }

    /// Reads `path` and binds the result to it.
    ///
    /// The file must be UTF-8.  Files in a legacy single-byte encoding such as
    /// Latin-1 are rejected rather than guessed at; convert them first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file does not exist or cannot be read,
    /// with kind [`std::io::ErrorKind::InvalidData`] if it is not valid UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with(path, PatternSet::default())
    }

    /// [`open`](Self::open) with custom comment characters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file does not exist or cannot be read.
    pub fn open_with(path: impl AsRef<Path>, patterns: PatternSet) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = read_text(path)?;
        let document = Document::parse_with(&text, patterns);
        debug!(path = %path.display(), lines = document.line_count(), "loaded ini file");
        Ok(Self {
            path: Some(path.to_path_buf()),
            document,
        })
    }

    /// Appends the lines of another file.  The bound path does not change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if `path` cannot be read.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let text = read_text(path.as_ref())?;
        self.document.extend_from_text(&text);
        Ok(())
    }

    /// Writes the document back to its bound path.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoPath`] if the document is unbound, [`StoreError::Io`] if
    /// the write fails.
    pub fn save(&self) -> Result<(), StoreError> {
        let path = self.path.as_deref().ok_or(StoreError::NoPath)?;
        self.write_to(path)
    }

    /// Writes a copy to `path`.  The bound path is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the write fails.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.write_to(path.as_ref())
    }

    /// Writes to `path` and, on success, binds the document to it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the write fails; the binding is then kept.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory containing the bound file.
    pub fn file_directory(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }

    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Tree export whose root is named after the file stem
    /// (`Settings.ini` → `Settings`).
    pub fn export_tree(&self) -> Node {
        let root = self
            .path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string());
        self.document.export_tree(&root)
    }

    fn write_to(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::write(path, self.document.to_text()).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), lines = self.document.line_count(), "saved ini file");
        Ok(())
    }
}

fn read_text(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
