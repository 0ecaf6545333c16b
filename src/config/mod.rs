// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for loadenv-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local loadenv.toml (cwd, optional)
//! 3. --config files (in the order given)
//! 4. CLI flag overrides
//! ```
//!
//! No environment variables are consulted anywhere in this hierarchy.
//! A tool whose job is constructing a child's environment should not
//! change behavior based on its own.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LoadenvResult;

use loader::ConfigLoader;
use types::{EnvFileConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Env file handling.
    pub envfile: EnvFileConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use loadenv_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("deploy/loadenv.toml")
    ///     .add_toml_file_optional("loadenv.toml")
    ///     .build()?;
    /// # Ok::<(), loadenv_rs::error::LoadenvError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LoadenvResult<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> LoadenvResult<Self> {
        Self::builder().add_toml_str(content).build()
    }
}
