// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and its query/mutation/composition API.
//!
//! # Architecture
//!
//! ```text
//! Env (handle)
//! data: Option<Arc<EnvData>>
//! None = nil store: reads degrade to empty, writes fail
//! clone shares the Arc (explicit aliasing opt-in)
//!
//! merge(): dual read lock in Arc-address order, fresh storage out
//! with():  producer runs with no lock held
//! ```

use super::expand;
use super::types::EnvData;
use crate::error::{EnvyError, EnvyResult};
use serde::Serialize;
use serde::ser::SerializeMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A set of environment variables held in memory, detached from the
/// real process environment.
///
/// `Env` is a cheap handle: cloning it yields a second handle to the
/// same store, which is the deliberate way to share one mutable
/// environment between components. Constructors and [`Env::merge`]
/// always allocate fresh backing storage.
///
/// A nil `Env` (no backing store) is a first-class value: every read
/// returns an empty or neutral result and every mutation fails with
/// [`EnvyError::NilEnvironment`]. Use [`Env::zero`] or another
/// constructor for a store that accepts writes.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync`; the store is guarded by a single
/// reader/writer lock, so any number of handles may query and mutate
/// it concurrently.
#[derive(Debug, Clone, Default)]
pub struct Env {
    pub(super) data: Option<Arc<EnvData>>,
}

impl Env {
    /// Returns a nil `Env`: readable as empty, rejecting every write.
    #[must_use]
    pub const fn nil() -> Self {
        Self { data: None }
    }

    /// Returns a valid `Env` with no variables set, completely
    /// detached from the process environment.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_map(std::collections::BTreeMap::new())
    }

    /// Reports whether this handle has no backing store.
    ///
    /// Every other operation branches on this before touching the
    /// variables, so a nil `Env` is always safe to query.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.data.is_none()
    }

    /// Returns the value of the variable named by `key`, or the empty
    /// string when the key is absent or the `Env` is nil. Never fails.
    #[must_use]
    pub fn get(&self, key: &str) -> String {
        self.data
            .as_ref()
            .and_then(|data| data.read().get(key).cloned())
            .unwrap_or_default()
    }

    /// Reports whether `key` is present. Returns `false` for a nil `Env`.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.data
            .as_ref()
            .is_some_and(|data| data.read().contains_key(key))
    }

    /// Sets the variable named by `key` to `value`, inserting or
    /// overwriting.
    ///
    /// Keys are not re-validated here; the well-formedness filter is a
    /// construction-time rule only.
    ///
    /// # Errors
    ///
    /// Returns [`EnvyError::NilEnvironment`] if the `Env` is nil.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> EnvyResult<()> {
        let data = self.data.as_ref().ok_or(EnvyError::NilEnvironment)?;
        data.write().insert(key.into(), value.into());
        Ok(())
    }

    /// Removes the variable named by `key`. Removing an absent key is
    /// a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`EnvyError::NilEnvironment`] if the `Env` is nil.
    pub fn unset(&self, key: &str) -> EnvyResult<()> {
        let data = self.data.as_ref().ok_or(EnvyError::NilEnvironment)?;
        data.write().remove(key);
        Ok(())
    }

    /// Returns every entry as a `KEY=VALUE` string, sorted
    /// lexicographically by the full string. Deterministic across
    /// calls; empty for a nil `Env`.
    #[must_use]
    pub fn environ(&self) -> Vec<String> {
        let Some(data) = &self.data else {
            return Vec::new();
        };

        let vars = data.read();
        let mut entries: Vec<String> = vars.iter().map(|(k, v)| format!("{k}={v}")).collect();

        // BTreeMap iteration orders by key; the contract is full-string
        // order, which differs for keys containing bytes below '='.
        entries.sort_unstable();
        entries
    }

    /// Replaces `$NAME` and `${NAME}` in `input` with the stored
    /// values, substituting the empty string for absent names.
    ///
    /// Substitution is a single pass: expanded values are not
    /// re-scanned. A nil `Env` returns `input` unchanged, placeholders
    /// included.
    #[must_use]
    pub fn expand(&self, input: &str) -> String {
        let Some(data) = &self.data else {
            return input.to_owned();
        };

        let vars = data.read();
        expand::substitute(input, |name| vars.get(name).cloned())
    }

    /// Returns the number of variables set. Zero for a nil `Env`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.read().len())
    }

    /// Returns `true` if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a new `Env` containing this store's variables with
    /// every entry of `overlay` applied on top (overlay wins on key
    /// collision). Neither input is mutated; the result owns fresh
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`EnvyError::NilEnvironment`] if either side is nil.
    pub fn merge(&self, overlay: &Self) -> EnvyResult<Self> {
        let base = self.data.as_ref().ok_or(EnvyError::NilEnvironment)?;
        let over = overlay.data.as_ref().ok_or(EnvyError::NilEnvironment)?;

        let merged = if Arc::ptr_eq(base, over) {
            base.read().clone()
        } else {
            // Both read locks are taken in allocation-address order so
            // two threads merging the same pair in opposite directions
            // cannot deadlock.
            let (first, second) = if Arc::as_ptr(base) < Arc::as_ptr(over) {
                (base, over)
            } else {
                (over, base)
            };
            let first_vars = first.read();
            let second_vars = second.read();
            let (base_vars, over_vars) = if Arc::ptr_eq(first, base) {
                (&*first_vars, &*second_vars)
            } else {
                (&*second_vars, &*first_vars)
            };

            let mut vars = base_vars.clone();
            for (key, value) in over_vars {
                vars.insert(key.clone(), value.clone());
            }
            vars
        };

        trace!(entries = merged.len(), "merged environments");

        // Routed through from_map so entries smuggled past the filter
        // via set() are dropped again, as at construction.
        Ok(Self::from_map(merged))
    }

    /// Calls `producer` and merges the produced `Env` on top of this
    /// one. The producer runs with no lock held.
    ///
    /// This is the layering primitive: base map, then file A, then
    /// file B, each layer ignorant of the others.
    ///
    /// # Errors
    ///
    /// Returns [`EnvyError::NilEnvironment`] if this `Env` is nil;
    /// otherwise propagates the producer's error, then the merge's.
    pub fn with<F>(&self, producer: F) -> EnvyResult<Self>
    where
        F: FnOnce() -> EnvyResult<Self>,
    {
        if self.is_nil() {
            return Err(EnvyError::NilEnvironment);
        }

        let overlay = producer()?;
        self.merge(&overlay)
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.environ().join(";"))
    }
}

impl Serialize for Env {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let Some(data) = &self.data else {
            return serializer.serialize_map(Some(0))?.end();
        };

        let vars = data.read();
        let mut map = serializer.serialize_map(Some(vars.len()))?;
        for (key, value) in vars.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
