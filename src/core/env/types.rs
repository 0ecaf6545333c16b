// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvKey: case-sensitive on Unix, case-insensitive on Windows
//!         (PATH == Path == path only where the OS says so)
//! Stored in a BTreeMap for deterministic order
//! ```

/// An environment variable key.
///
/// Equality, ordering, and hashing follow the host platform: exact on
/// Unix, ASCII case-insensitive on Windows.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        if cfg!(windows) {
            self.0.eq_ignore_ascii_case(&other.0)
        } else {
            self.0 == other.0
        }
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        if cfg!(windows) {
            for c in self.0.chars() {
                c.to_ascii_lowercase().hash(state);
            }
        } else {
            self.0.hash(state);
        }
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if cfg!(windows) {
            self.0
                .to_ascii_lowercase()
                .cmp(&other.0.to_ascii_lowercase())
        } else {
            self.0.cmp(&other.0)
        }
    }
}
