// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process resolution and replacement.
//!
//! ```text
//! ProcessBuilder::new(command)
//!   .args(argv) .env(env)
//!   .launch()
//!       --> std::process::Command
//!           env_clear + explicit environment
//!           Unix: exec (no return) / other: spawn + wait
//! ```

pub mod builder;
mod exec;
