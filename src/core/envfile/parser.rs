// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line parsing.
//!
//! # Architecture
//!
//! ```text
//! parse_line(text) -> Option<Directive>
//!
//! '#' at byte 0          -> None (comment)
//! no '='                 -> None (ignored)
//! NAME=VALUE             -> Set   (VALUE cut at first '\n')
//! NAME=                  -> Unset
//! ```
//!
//! The rules are deliberately literal: no whitespace trimming, no quote
//! handling, no escapes. `" FOO=1"` defines a variable named `" FOO"`,
//! and `"A=B=C"` assigns `"B=C"` to `A`. Crontab-style env files rely
//! on this being predictable.

/// A single instruction derived from one line of the env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Set `name` to `value`, replacing any existing value.
    Set { name: String, value: String },
    /// Remove `name` from the environment, if present.
    Unset { name: String },
}

impl Directive {
    /// The variable name this directive targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Set { name, .. } | Self::Unset { name } => name,
        }
    }
}

/// Parses one line into a [`Directive`].
///
/// Returns `None` for comments (first byte `#`) and for lines without
/// an `=`. The name is everything before the first `=`; the value is
/// everything after it, truncated at the first `'\n'`. An empty value
/// means unset.
#[must_use]
pub fn parse_line(text: &str) -> Option<Directive> {
    if text.starts_with('#') {
        return None;
    }

    let eq = text.find('=')?;
    let name = &text[..eq];
    let mut value = &text[eq + 1..];
    if let Some(pos) = value.find('\n') {
        value = &value[..pos];
    }

    if value.is_empty() {
        Some(Directive::Unset {
            name: name.to_string(),
        })
    } else {
        Some(Directive::Set {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}
