// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse() --> Config --> Logging --> run_launch_command
//!                                             (exec, no return)
//! ```

use std::process::ExitCode;

use loadenv_rs::cli;
use loadenv_rs::cli::global::GlobalOptions;
use loadenv_rs::cmd::launch::run_launch_command;
use loadenv_rs::config::Config;
use loadenv_rs::config::loader::ConfigLoader;
use loadenv_rs::error::{LoadenvResult, exit};
use loadenv_rs::logging::{LogConfig, init_logging};

use clap::error::ErrorKind;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::from(exit::SETUP);
        }
    };

    let log_config = build_log_config(&config);
    let mut log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::from(exit::SETUP);
        }
    };

    // Launch only comes back on failure; success replaces this process.
    let error = match run_launch_command(&cli, &config, &mut log_guard) {
        Ok(never) => match never {},
        Err(e) => e,
    };

    eprintln!("Error: {error}");
    ExitCode::from(error.exit_code())
}

fn handle_parse_error(e: &clap::Error) -> ExitCode {
    // clap would exit 2 on its own; usage problems are exit 1 here.
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(exit::USAGE),
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("loadenv.toml");
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader
}

fn load_config(global: &GlobalOptions) -> LoadenvResult<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
