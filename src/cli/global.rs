// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options, all optional.
//!
//! # Option Precedence
//!
//! ```text
//! -c/--config FILE  ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Enable the file logging layer
//! --strict-lines    ← Overlong env-file lines become errors
//!
//! Precedence: CLI flags > --config > loadenv.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Options that tune the launcher itself, never the child.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of loadenv.toml from the current directory,
    /// only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Treats env-file lines longer than the read buffer as errors
    /// instead of splitting them into multiple chunks.
    #[arg(long = "strict-lines")]
    pub strict_lines: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// Each entry is a dotted config key and the value to force, applied
    /// on top of every file source.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push((
                "global.output_log_level",
                config::Value::from(i64::from(level)),
            ));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push((
                "global.file_log_level",
                config::Value::from(i64::from(level)),
            ));
        }

        if let Some(ref path) = self.log_file {
            overrides.push((
                "global.log_file",
                config::Value::from(path.display().to_string()),
            ));
        }

        if self.strict_lines {
            overrides.push(("envfile.line_mode", config::Value::from("strict")));
        }

        overrides
    }
}
