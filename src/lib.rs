// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  Env (handle)
//!            Option<Arc<EnvData>>
//!            clone = shared store
//!                       |
//!        +--------------+--------------+
//!        v              v              v
//!     queries       mutations     composition
//!   get / is_set    set / unset   merge / with
//!   environ         (write lock)  (dual read lock,
//!   expand                         address-ordered)
//!   (read lock)
//!                       |
//!                       v
//!   +------------------------------------------+
//!   |  sources   process / slice / map /        |
//!   |            reader / file  (one filter)    |
//!   +------------------------------------------+
//!   |  foundation   error (thiserror), tracing  |
//!   +------------------------------------------+
//! ```
//!
//! A nil `Env` reads as empty and rejects every write; no operation
//! ever touches the real process environment.

pub mod env;
pub mod error;

pub use env::Env;
pub use error::{EnvyError, EnvyResult};
