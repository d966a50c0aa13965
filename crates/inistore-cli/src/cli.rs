//! Command-line argument definitions.
//!
//! ```text
//! inistore [OPTIONS] <FILE> <COMMAND>
//!
//! Commands:
//!   get       Print the value of an entry
//!   bool      Print an entry interpreted as a flag (true/false)
//!   set       Write an entry, creating the section or file if needed
//!   delete    Remove an entry
//!   comment   Comment an entry out
//!   sections  List all section names
//!   entries   List the entries of a section
//!   export    Print the section/entry tree as JSON
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Read and edit INI files in place, keeping comments and formatting.
#[derive(Debug, Parser)]
#[command(name = "inistore", version)]
pub struct Cli {
    /// Tool configuration file.
    ///
    /// Defaults to `<config dir>/inistore/config.toml`; a missing default file
    /// is not an error.
    #[arg(long, env = "INISTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comment characters, canonical first (overrides the config file).
    #[arg(long)]
    pub comment_chars: Option<String>,

    /// The INI file to operate on.
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Key-matching options shared by the entry commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct MatchArgs {
    /// Compare keys case-sensitively (section names never are).
    #[arg(long, conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,
    /// Compare keys case-insensitively, even if the config says otherwise.
    #[arg(long)]
    pub case_insensitive: bool,
}

impl MatchArgs {
    /// Key case sensitivity: an explicit flag wins over `config_default`.
    pub fn resolve(&self, config_default: bool) -> bool {
        if self.case_sensitive {
            true
        } else if self.case_insensitive {
            false
        } else {
            config_default
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value of an entry (empty if absent).
    Get {
        section: String,
        key: String,
        #[command(flatten)]
        matching: MatchArgs,
    },

    /// Print an entry interpreted as a flag: true for true/1/ja/j/y.
    Bool { section: String, key: String },

    /// Write an entry and save the file.
    Set {
        section: String,
        key: String,
        value: String,
        #[command(flatten)]
        matching: MatchArgs,
        /// Un-comment a commented-out entry that already has this value.
        #[arg(long, conflicts_with = "no_revive")]
        revive: bool,
        /// Never look at commented-out entries.
        #[arg(long)]
        no_revive: bool,
    },

    /// Remove an entry and save the file.
    Delete {
        section: String,
        key: String,
        #[command(flatten)]
        matching: MatchArgs,
    },

    /// Comment an entry out and save the file.
    Comment {
        section: String,
        key: String,
        #[command(flatten)]
        matching: MatchArgs,
    },

    /// List section names in file order.
    Sections,

    /// List `key=value` pairs of a section, sorted by key.
    Entries {
        section: String,
        #[command(flatten)]
        matching: MatchArgs,
    },

    /// Print the section/entry tree as JSON.
    Export {
        /// Single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
}

impl Command {
    /// Whether the command changes the file.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Set { .. } | Command::Delete { .. } | Command::Comment { .. }
        )
    }
}
