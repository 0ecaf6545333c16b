// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for loadenv-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! loadenv [options] <ENV_FILE> <COMMAND> [ARGS]...
//! ```
//!
//! There are no subcommands. Everything after COMMAND is trailing and
//! reaches the child byte for byte, including tokens that look like
//! options of ours.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// `cronsh` Environment Loader - Rust Port
///
/// Loads variables from an env file, then replaces itself with a command.
#[derive(Debug, Parser)]
#[command(
    name = "loadenv",
    author,
    version,
    about = "cronsh Environment Loader",
    long_about = "loadenv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Loads KEY=VALUE lines from ENV_FILE into a copy of the current\n\
                  environment, then replaces itself with COMMAND. A KEY= line with\n\
                  an empty value unsets the variable; lines starting with `#` and\n\
                  lines without `=` are ignored. A missing ENV_FILE loads nothing\n\
                  and is not an error: COMMAND still runs, in the unchanged\n\
                  environment.",
    after_help = "CONFIG FILES:\n\n\
                  By default, loadenv will look for an optional `loadenv.toml` in\n\
                  the current directory. Additional files can be specified with\n\
                  --config; those are loaded afterwards and override it, in the\n\
                  order given. Use --no-default-config to disable auto detection\n\
                  and only use --config. Command-line flags override all files.\n\
                  No environment variables are consulted."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// File with one KEY=VALUE per line. May be absent.
    #[arg(value_name = "ENV_FILE")]
    pub env_file: PathBuf,

    /// Program to execute once the environment is prepared, followed by
    /// its arguments, passed through untouched.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command_line: Vec<OsString>,
}

impl Cli {
    /// The program to execute. clap guarantees at least one trailing
    /// value, so the empty fallback is never reached in practice.
    #[must_use]
    pub fn command(&self) -> &std::ffi::OsStr {
        self.command_line
            .first()
            .map_or_else(|| std::ffi::OsStr::new(""), OsString::as_os_str)
    }

    /// Arguments for the program, in order.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        self.command_line.get(1..).unwrap_or_default()
    }
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
