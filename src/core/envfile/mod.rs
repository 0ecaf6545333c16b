// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file loading.
//!
//! # Architecture
//!
//! ```text
//! apply_from_file(path, &mut Env, mode)
//!        |
//!        v  (missing file -> empty load, not an error)
//!   BoundedLineReader --chunks--> parse_line --Directive--> Env
//!        |                                                   |
//!        v                                                   v
//!   EnvFileError (open/read/utf8/too-long)            EnvError (apply)
//!        |
//!        v
//!   LoadSummary { found, lines, set, unset, skipped }
//! ```
//!
//! Format, line by line:
//! - `# ...` comment (first byte only), ignored
//! - `NAME=VALUE` set, overwriting
//! - `NAME=` unset
//! - anything without `=` ignored
//!
//! The file handle is closed before this module returns, so nothing
//! leaks into the command that gets exec'd afterwards.

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::env::container::Env;
use crate::error::{ConfigError, EnvError, EnvFileError, LoadenvResult};

pub mod parser;
pub(crate) mod reader;


pub use parser::{Directive, parse_line};

/// How lines longer than the read buffer are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMode {
    /// Oversized lines are read as multiple independent chunks, exactly
    /// like the original `fgets` loop. Compatible, occasionally surprising.
    #[default]
    Split,
    /// Oversized lines are an error.
    Strict,
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Split => write!(f, "split"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for LineMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "split" => Ok(Self::Split),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::InvalidValue {
                section: "envfile".to_string(),
                key: "line_mode".to_string(),
                message: format!("expected 'split' or 'strict', got '{s}'"),
            }),
        }
    }
}

/// What a load did, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Whether the env file existed at all.
    pub found: bool,
    /// Chunks examined (equals physical lines unless a line was split).
    pub lines: usize,
    /// Variables set.
    pub set: usize,
    /// Variables unset.
    pub unset: usize,
    /// Chunks ignored (comments and lines without `=`).
    pub skipped: usize,
}

/// Loads `path` and applies every directive to `env`.
///
/// A missing file is not an error: the command should still be launched,
/// just with an unmodified environment. Every other failure mode is.
///
/// # Errors
///
/// Returns [`EnvFileError`] variants for open/read/decode problems and
/// [`EnvError`] variants when a directive cannot become an environment
/// variable.
pub fn apply_from_file(path: &Path, env: &mut Env, mode: LineMode) -> LoadenvResult<LoadSummary> {
    // Not named `display`: the event macros import `tracing::field::display`
    // into their expansion, which would shadow the local.
    let origin = path.display().to_string();

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %origin, "env file not found, environment left unchanged");
            return Ok(LoadSummary::default());
        }
        Err(source) => {
            return Err(EnvFileError::Open {
                path: origin,
                source,
            }
            .into());
        }
    };

    apply_from_reader(std::io::BufReader::new(file), &origin, env, mode)
}

/// Applies directives from any buffered reader. Seam for tests and for
/// callers that already hold the data in memory.
///
/// # Errors
///
/// Same as [`apply_from_file`], minus the open step.
pub fn apply_from_reader<R: BufRead>(
    input: R,
    origin: &str,
    env: &mut Env,
    mode: LineMode,
) -> LoadenvResult<LoadSummary> {
    let mut reader = reader::BoundedLineReader::new(input, origin, mode);
    let mut summary = LoadSummary {
        found: true,
        ..LoadSummary::default()
    };

    while let Some(chunk) = reader.next_chunk()? {
        summary.lines += 1;
        match parse_line(&chunk.text) {
            None => summary.skipped += 1,
            Some(directive) => {
                apply_directive(env, &directive, chunk.line)?;
                match directive {
                    Directive::Set { .. } => summary.set += 1,
                    Directive::Unset { .. } => summary.unset += 1,
                }
            }
        }
    }

    Ok(summary)
}

/// Applies one directive, validating that it can cross the exec boundary.
fn apply_directive(env: &mut Env, directive: &Directive, line: usize) -> Result<(), EnvError> {
    let name = directive.name();
    if name.is_empty() {
        return Err(EnvError::EmptyName { line });
    }
    if name.contains('\0') {
        return Err(EnvError::NulInName { line });
    }

    match directive {
        Directive::Set { name, value } => {
            if value.contains('\0') {
                return Err(EnvError::NulInValue {
                    name: name.clone(),
                    line,
                });
            }
            debug!(name = %name, line, "set");
            env.set(name.clone(), value.clone());
        }
        Directive::Unset { name } => {
            debug!(name = %name, line, "unset");
            env.remove(name);
        }
    }

    Ok(())
}
