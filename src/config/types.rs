// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for loadenv-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvFileConfig
//! [global]  output_log_level, file_log_level, log_file
//! [envfile] line_mode = "split" | "strict"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::envfile::LineMode;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            // Quiet: nothing below error reaches the console unless asked
            output_log_level: LogLevel::ERROR,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Env file handling options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvFileConfig {
    /// What to do with lines longer than the read buffer.
    pub line_mode: LineMode,
}
