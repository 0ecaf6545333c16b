// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment loading and process replacement.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env     envfile   process
//!     |         |         |
//!    Env    Directive  Builder
//!   EnvKey  LineMode   launch()
//!          LoadSummary
//! ```

pub mod env;
pub mod envfile;
pub mod process;
