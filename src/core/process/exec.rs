// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process replacement.
//!
//! ```text
//! launch()
//!    |
//!    v
//! resolve() -- bare name -> PATH lookup, path -> untouched
//!    |
//!    v
//! std::process::Command
//!   env_clear() + env(k, v) for the whole container
//!   stdin/stdout/stderr inherited
//!    |
//!    +-- Unix:  CommandExt::exec()  -- never returns on success
//!    +-- other: spawn + wait, exit with the child's status
//! ```

use std::convert::Infallible;
use std::process::Command;

use crate::error::{ExecError, LoadenvResult};

use super::builder::ProcessBuilder;

impl ProcessBuilder {
    /// Replaces this process with the configured command.
    ///
    /// On success this function does not return: on Unix the process
    /// image is replaced, and on other platforms the child is awaited
    /// and its exit status becomes ours. The `Infallible` success type
    /// records that; only the error arm is ever observable.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::NotFound`] when a bare program name is not
    /// in PATH, and [`ExecError::Failed`] when the OS rejects the exec
    /// (missing file, permission, not executable).
    pub fn launch(self) -> LoadenvResult<Infallible> {
        let program = self.resolve()?;
        let mut command = self.build_command(&program);

        Err(exec_replace(&mut command, self.reported_name()).into())
    }

    /// Builds the `std::process::Command`, applying the environment.
    fn build_command(&self, program: &std::path::Path) -> Command {
        let mut command = Command::new(program);

        // execvp keeps the name as typed in argv[0] even after the PATH
        // search resolved it to something else
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(self.program());
        }

        // Arguments, byte for byte
        command.args(self.args_slice());

        // Environment: the container is the child's whole world
        if let Some(env) = self.environment() {
            command.env_clear();
            for (key, value) in env.iter() {
                command.env(key, value);
            }
        }

        // stdin/stdout/stderr stay inherited: the child owns the terminal
        command
    }
}

/// Replaces the process image. Only returns on failure.
#[cfg(unix)]
fn exec_replace(command: &mut Command, name: String) -> ExecError {
    use std::os::unix::process::CommandExt;

    // exec only comes back when it failed
    let source = command.exec();
    ExecError::Failed {
        command: name,
        source,
    }
}

/// No exec outside Unix: run the child to completion and forward its
/// exit status, so callers still never see a successful return.
#[cfg(not(unix))]
fn exec_replace(command: &mut Command, name: String) -> ExecError {
    let status = match command.status() {
        Ok(status) => status,
        Err(source) => {
            return ExecError::Failed {
                command: name,
                source,
            };
        }
    };

    std::process::exit(status.code().unwrap_or(1));
}
