// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable store.
//!
//! # Architecture
//!
//! ```text
//! Env (Option<Arc<EnvData>> handle)
//! Sources: Env::from_process(), Env::zero(), Env::from_slice(),
//!          Env::from_map(), Env::from_reader(), Env::from_file()
//! Ops: get/is_set/environ/expand + set/unset + merge/with
//! ```
//!
//! - **Nil-safe**: a nil `Env` reads as empty, writes fail
//! - **Isolated**: never writes the real process environment
//! - **Shared handle**: `Clone` aliases the same store

pub mod container;
pub mod expand;
pub mod source;
pub mod types;


pub use container::Env;
