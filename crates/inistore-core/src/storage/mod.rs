//! Storage infrastructure: reading and writing INI files.
//!
//! The document itself knows nothing about files.  [`ini_file::IniFile`]
//! brackets the in-memory edits with a whole-file read at open time and a
//! whole-file write when the caller asks for it.  There is no partial or
//! incremental persistence.

pub mod ini_file;
