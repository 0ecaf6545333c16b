// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder.
//!
//! ```text
//! ProcessBuilder
//!  • new(program)  -- verbatim from the command line
//!  • args(argv)    -- OsString, passed through byte for byte
//!  • env(Env)      -- becomes the child's entire environment
//!  • resolve()     -- bare names via the child's PATH, paths untouched
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::error::ExecError;

/// Builder for the command that replaces this process.
///
/// Arguments stay `OsString` end to end; they are never decoded, so the
/// child sees exactly the bytes that were on the command line.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Program exactly as given on the command line
    program: PathBuf,
    /// Command-line arguments
    args: Vec<OsString>,
    /// Environment for the child (None = inherit as-is)
    env: Option<Env>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the
    /// executable name. Bare names are resolved via PATH by
    /// [`resolve`](Self::resolve).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: None,
        }
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_os_string());
        }
        self
    }

    /// Sets the environment variables for the child.
    ///
    /// The child gets exactly these variables and nothing else; the
    /// parent's own environment is not consulted at spawn time.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Resolves the program to the path that will be executed.
    ///
    /// Follows `execvp` rules: a name containing a path separator is
    /// used as a path unchanged, so the OS produces the usual errors
    /// for it; a bare name is looked up in PATH. The PATH consulted is
    /// the attached environment's, since that is what the child runs
    /// under; only without an attached environment does the parent's
    /// PATH apply.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::NotFound`] if a bare name is not in that
    /// PATH.
    pub fn resolve(&self) -> Result<PathBuf, ExecError> {
        if is_explicit_path(&self.program) {
            return Ok(self.program.clone());
        }

        // The lookup uses the PATH the child will see, not the one this
        // process started with.
        let search_path = match &self.env {
            Some(env) => env.get("PATH").map(OsString::from),
            None => std::env::var_os("PATH"),
        };
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let raw = self.program.as_os_str();
        which::which_in(raw, search_path, cwd).map_err(|_| ExecError::NotFound {
            name: raw.to_string_lossy().into_owned(),
        })
    }

    /// Returns the full command line as a string (for logging).
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = self.program.display().to_string();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    // Getters for field access within the process module

    /// Returns the program exactly as given.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    pub(super) fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    /// Returns a reference to the environment, if set.
    pub(super) const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    /// The name to report in diagnostics: the program as typed.
    pub(super) fn reported_name(&self) -> String {
        self.program.display().to_string()
    }
}

/// Returns true if the program names a path `execvp` would use without
/// a PATH search (it contains a path separator).
#[must_use]
pub fn is_explicit_path(program: &Path) -> bool {
    program
        .as_os_str()
        .to_string_lossy()
        .contains(std::path::is_separator)
}
