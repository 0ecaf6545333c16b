// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           LoadenvError (16 bytes)
//!                   |
//!     +---------+---+-----+---------+
//!     |         |         |         |
//!     v         v         v         v
//!  EnvFile     Env      Exec     Config
//!   Box        Box       Box       Box
//!
//! Sub-errors (unboxed internally):
//!   EnvFile  Open, Read, InvalidUtf8, LineTooLong
//!   Env      EmptyName, NulInName, NulInValue
//!   Exec     NotFound, Failed
//!   Config   Load, InvalidValue
//!
//! All variants boxed => LoadenvError fits in 16 bytes.
//! Each class owns one process exit code (see [`exit`]).
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LoadenvError`].
pub type LoadenvResult<T> = std::result::Result<T, LoadenvError>;

/// Process exit codes, one per error class.
///
/// A successful launch never produces an exit code of its own: on Unix the
/// process image is replaced, and elsewhere the child's status is forwarded.
pub mod exit {
    /// Command line was malformed (missing operands, unknown flag).
    pub const USAGE: u8 = 1;
    /// The env file exists but could not be opened, read, or decoded.
    pub const ENV_FILE: u8 = 2;
    /// An entry in the env file could not become an environment variable.
    pub const ENV: u8 = 3;
    /// The command could not be resolved or executed.
    pub const EXEC: u8 = 4;
    /// Configuration or logging could not be set up.
    pub const SETUP: u8 = 5;
}

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum LoadenvError {
    /// Env file access or decoding failed.
    #[error("env file error: {0}")]
    EnvFile(#[from] Box<EnvFileError>),

    /// An env file entry could not be applied to the environment.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// The command could not be launched.
    #[error("exec error: {0}")]
    Exec(#[from] Box<ExecError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl LoadenvError {
    /// The process exit code this error class maps to.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::EnvFile(_) => exit::ENV_FILE,
            Self::Env(_) => exit::ENV,
            Self::Exec(_) => exit::EXEC,
            Self::Config(_) => exit::SETUP,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LoadenvError {
                fn from(err: $error) -> Self {
                    LoadenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvFileError => EnvFile,
    EnvError => Env,
    ExecError => Exec,
    ConfigError => Config,
}

// --- Env File Errors ---

/// Errors while opening, reading, or decoding the env file.
///
/// A *missing* env file is not an error at all: the loader treats it as
/// empty and launches the command against the unmodified environment.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// The file exists but could not be opened.
    #[error("cannot open env file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the open file failed.
    #[error("failed to read env file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("env file '{path}' line {line} is not valid UTF-8")]
    InvalidUtf8 { path: String, line: usize },

    /// A line exceeds the length limit (strict mode only).
    #[error("env file '{path}' line {line} exceeds {limit} bytes")]
    LineTooLong {
        path: String,
        line: usize,
        limit: usize,
    },
}

// --- Env Errors ---

/// Errors while turning a parsed entry into an environment variable.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The entry has no name before its `=`.
    #[error("empty variable name at line {line}")]
    EmptyName { line: usize },

    /// The variable name contains a NUL byte and cannot cross exec.
    #[error("variable name at line {line} contains a NUL byte")]
    NulInName { line: usize },

    /// The value contains a NUL byte and cannot cross exec.
    #[error("value for '{name}' at line {line} contains a NUL byte")]
    NulInValue { name: String, line: usize },
}

// --- Exec Errors ---

/// Errors while resolving or executing the command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    NotFound { name: String },

    /// The OS refused to execute the command.
    #[error("failed to exec '{command}': {source}")]
    Failed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read, parsed, or deserialized.
    #[error("failed to load config: {message}")]
    Load { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::Load {
            message: err.to_string(),
        }
    }
}
