//! inistore-cli library entry point.
//!
//! Re-exports all modules so that integration tests in `tests/` and the
//! binary entry point in `main.rs` share the same module tree.
//!
//! - **`cli`**      – `clap` argument definitions.
//! - **`config`**   – The tool's own `config.toml` (defaults for comment
//!   characters, case sensitivity, comment revival and log level).
//! - **`commands`** – Runs one parsed command against an INI file and returns
//!   the text to print.

pub mod cli;
pub mod commands;
pub mod config;
