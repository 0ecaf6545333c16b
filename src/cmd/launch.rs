// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch command implementation for loadenv-rs.
//!
//! ```text
//! current_env --> apply_from_file --> ProcessBuilder --> launch
//!                 (may be absent)     (explicit env)     (exec)
//! ```

use std::convert::Infallible;

use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::core::env::current_env;
use crate::core::envfile::apply_from_file;
use crate::core::process::builder::ProcessBuilder;
use crate::error::LoadenvResult;
use crate::logging::LogGuard;

/// Main handler for the launch: load the env file, then replace this
/// process with the requested command.
///
/// On success this function does not return; the process image is gone.
/// The `Infallible` success type makes that explicit.
///
/// # Errors
///
/// Returns an error if the env file exists but cannot be read, if a
/// directive in it is unusable, or if the command cannot be executed.
/// A nonexistent env file is not an error.
pub fn run_launch_command(
    cli: &Cli,
    config: &Config,
    log_guard: &mut LogGuard,
) -> LoadenvResult<Infallible> {
    let mut env = current_env();
    let summary = apply_from_file(&cli.env_file, &mut env, config.envfile.line_mode)?;

    if summary.found {
        info!(
            path = %cli.env_file.display(),
            set = summary.set,
            unset = summary.unset,
            skipped = summary.skipped,
            "env file applied"
        );
    } else {
        info!(path = %cli.env_file.display(), "no env file, environment unchanged");
    }

    let builder = ProcessBuilder::new(cli.command())
        .args(cli.args())
        .env(env);

    debug!(cmd = %builder.command_line(), "replacing process image");

    // exec never returns on success, so destructors never run. Push
    // pending file-layer writes out while we still can.
    log_guard.flush();

    builder.launch()
}
