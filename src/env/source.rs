// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Constructors that build an [`Env`] from external representations.
//!
//! # Architecture
//!
//! ```text
//! from_process()  std::env::vars() snapshot, decoupled after capture
//! from_slice()    "KEY=VALUE" entries, trim + first-'=' split
//! from_map()      key filter, takes ownership
//! from_reader()   byte stream + single-byte separator
//! from_file()     newline-delimited file under a read-only root
//!
//! All paths funnel through from_map(), the single filter point.
//! ```

use super::container::Env;
use super::types::{self, EnvData};
use crate::error::{EnvyError, EnvyResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Component, Path};
use std::sync::Arc;
use tracing::{debug, trace};

impl Env {
    /// Returns an `Env` populated with the current process environment.
    ///
    /// The snapshot is taken once: later process changes do not show
    /// up here, and mutating the result never writes back.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_map(std::env::vars().collect())
    }

    /// Builds an `Env` from `KEY=VALUE` strings.
    ///
    /// Each entry is trimmed of surrounding whitespace and split on
    /// the first `=`; the remainder of the entry is the value, so
    /// values may themselves contain `=`. Malformed entries are
    /// silently dropped. Later duplicates overwrite earlier ones,
    /// matching conventional environment-list precedence.
    pub fn from_slice<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut vars = BTreeMap::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            let Some((key, value)) = entry.split_once('=') else {
                continue;
            };
            vars.insert(key.to_owned(), value.to_owned());
        }

        Self::from_map(vars)
    }

    /// Wraps `vars` in a new `Env`, dropping entries whose key fails
    /// the well-formedness rule (trimmed key empty, containing `=`,
    /// or starting with the `//` comment marker).
    ///
    /// The map is taken by value; to share one store between
    /// components, clone the returned handle instead.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let total = vars.len();
        let vars: BTreeMap<String, String> = vars
            .into_iter()
            .filter(|(key, _)| types::well_formed_key(key))
            .collect();

        trace!(
            kept = vars.len(),
            dropped = total - vars.len(),
            "built environment from map"
        );

        Self {
            data: Some(Arc::new(EnvData::from_vars(vars))),
        }
    }

    /// Reads entries from `reader`, splitting on the single byte
    /// `sep` and trimming whitespace around each segment. A final
    /// segment without a trailing separator is still taken.
    ///
    /// # Errors
    ///
    /// Returns [`EnvyError::StreamRead`] if reading fails or the
    /// stream contains byte sequences that are not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R, sep: u8) -> EnvyResult<Self> {
        let mut raw = Vec::new();
        reader
            .read_to_end(&mut raw)
            .map_err(|source| EnvyError::StreamRead { source })?;

        let mut entries = Vec::new();
        for segment in raw.split(|&b| b == sep) {
            let segment = str::from_utf8(segment).map_err(|err| EnvyError::StreamRead {
                source: io::Error::new(io::ErrorKind::InvalidData, err),
            })?;
            entries.push(segment.trim());
        }

        trace!(segments = entries.len(), "read environment stream");
        Ok(Self::from_slice(&entries))
    }

    /// Reads newline-delimited `KEY=VALUE` lines from `path`,
    /// resolved under the read-only root `root`. Lines failing the
    /// well-formedness rule (comments, blanks, no `=`) are silently
    /// skipped. The file is closed on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`EnvyError::InvalidInput`] if `path` is absolute or
    /// escapes `root` through `..`, and [`EnvyError::Io`] if opening
    /// or reading the file fails.
    pub fn from_file(root: impl AsRef<Path>, path: impl AsRef<Path>) -> EnvyResult<Self> {
        let root = root.as_ref();
        let path = path.as_ref();

        if path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(EnvyError::InvalidInput(format!(
                "env file path '{}' must stay under its root",
                path.display()
            )));
        }

        let full = root.join(path);
        debug!(path = %full.display(), "loading environment file");

        let file = File::open(&full).map_err(|source| EnvyError::Io {
            path: full.display().to_string(),
            source,
        })?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| EnvyError::Io {
                path: full.display().to_string(),
                source,
            })?;
            lines.push(line);
        }

        Ok(Self::from_slice(&lines))
    }
}
