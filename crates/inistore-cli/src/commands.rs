//! Executes one parsed [`Cli`] invocation against an INI file.
//!
//! [`run`] returns the text to print instead of printing it, so the whole
//! command layer can be tested without capturing stdout.  Edits are saved
//! back to the file before `run` returns; read-only commands never write.

use std::path::Path;

use anyhow::{bail, Context};
use inistore_core::{IniFile, PatternSet};
use tracing::{debug, info};

use crate::cli::{Cli, Command};
use crate::config::ToolConfig;

/// Runs `cli.command` and returns its output (possibly empty).
///
/// # Errors
///
/// Fails if the comment characters are invalid, the file cannot be read or
/// written, or `delete` / `comment` find no such entry.
pub fn run(cli: &Cli, config: &ToolConfig) -> anyhow::Result<String> {
    let comment_chars = cli
        .comment_chars
        .as_deref()
        .unwrap_or(&config.store.comment_chars);
    let patterns = PatternSet::new(comment_chars)
        .with_context(|| format!("invalid comment characters {comment_chars:?}"))?;

    let mut file = open_file(&cli.file, patterns, matches!(cli.command, Command::Set { .. }))?;
    let case_default = config.store.case_sensitive;
    let doc = file.document_mut();

    let output = match &cli.command {
        Command::Get { section, key, matching } => {
            let value = doc.get_value(section, key, matching.resolve(case_default));
            format!("{value}\n")
        }
        Command::Bool { section, key } => format!("{}\n", doc.get_bool_value(section, key)),
        Command::Set {
            section,
            key,
            value,
            matching,
            revive,
            no_revive,
        } => {
            let search_comments = *revive || (config.store.search_comments && !*no_revive);
            doc.set_value(
                section,
                key,
                value,
                matching.resolve(case_default),
                search_comments,
            );
            String::new()
        }
        Command::Delete { section, key, matching } => {
            if !doc.delete_value(section, key, matching.resolve(case_default)) {
                bail!("no entry '{key}' in section [{section}]");
            }
            String::new()
        }
        Command::Comment { section, key, matching } => {
            if !doc.comment_value(section, key, matching.resolve(case_default)) {
                bail!("no entry '{key}' in section [{section}]");
            }
            String::new()
        }
        Command::Sections => doc
            .list_captions()
            .into_iter()
            .map(|name| format!("{name}\n"))
            .collect(),
        Command::Entries { section, matching } => doc
            .list_entries(section, matching.resolve(case_default))
            .into_iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect(),
        Command::Export { compact } => {
            let tree = file.export_tree();
            let json = if *compact {
                serde_json::to_string(&tree)
            } else {
                serde_json::to_string_pretty(&tree)
            }
            .context("failed to serialise tree")?;
            format!("{json}\n")
        }
    };

    if cli.command.is_mutating() {
        file.save_to(&cli.file)
            .with_context(|| format!("failed to save {}", cli.file.display()))?;
        info!(path = %cli.file.display(), "saved");
    }
    Ok(output)
}

/// Opens `path`; with `create_missing`, a nonexistent file starts empty.
fn open_file(path: &Path, patterns: PatternSet, create_missing: bool) -> anyhow::Result<IniFile> {
    if create_missing && !path.exists() {
        debug!(path = %path.display(), "file does not exist, starting empty");
        return Ok(IniFile::with_patterns(patterns));
    }
    IniFile::open_with(path, patterns).with_context(|| format!("failed to open {}", path.display()))
}
