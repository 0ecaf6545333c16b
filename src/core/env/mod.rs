// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::new(), Env::from_map()
//! Ops: set/get/remove -> consumed whole by the exec layer
//! ```
//!
//! - **Case-insensitive on Windows**, exact elsewhere
//! - **UTF-8 internal**: Encoding at I/O boundaries only

pub mod container;
mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped; they
/// cannot be represented in the UTF-8 internal container. Skips are
/// logged at debug level.
#[must_use]
pub fn current_env() -> container::Env {
    let mut vars = std::collections::BTreeMap::new();
    for (key, value) in std::env::vars_os() {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => {
                vars.insert(key, value);
            }
            (Err(key), _) => {
                tracing::debug!(key = %key.to_string_lossy(), "skipping non-UTF-8 environment entry");
            }
            (Ok(key), Err(_)) => {
                tracing::debug!(key = %key, "skipping environment entry with non-UTF-8 value");
            }
        }
    }
    container::Env::from_map(vars)
}
