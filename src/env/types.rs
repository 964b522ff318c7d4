// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable storage.
//!
//! # Architecture
//!
//! ```text
//! EnvData: RwLock<BTreeMap<String, String>>
//! read()/write(): guards that absorb lock poisoning
//! well_formed_key(): trimmed, non-empty, no '=', no "//" prefix
//! ```

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared backing storage for an [`super::Env`].
///
/// One instance per store; handles cloned from the same `Env` point at
/// the same `EnvData` through an `Arc`.
#[derive(Debug, Default)]
pub(super) struct EnvData {
    vars: RwLock<BTreeMap<String, String>>,
}

impl EnvData {
    pub(super) fn from_vars(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: RwLock::new(vars),
        }
    }

    /// Shared-lock access to the variables.
    ///
    /// A poisoned lock is recovered rather than propagated so that read
    /// operations keep their never-fail contract.
    pub(super) fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.vars.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive-lock access to the variables.
    pub(super) fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.vars.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reports whether a key may be stored.
///
/// The rule is checked against the trimmed form, but keys are stored as
/// given: a key with surrounding whitespace is kept verbatim as long as
/// its trimmed form is valid.
pub(super) fn well_formed_key(key: &str) -> bool {
    let trimmed = key.trim();
    !trimmed.is_empty() && !trimmed.contains('=') && !trimmed.starts_with("//")
}
