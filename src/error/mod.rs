// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvyError
//!                |
//!    +-----------+-----------+-----------+
//!    v           v           v           v
//! NilEnv    InvalidInput    Io       StreamRead
//!  unit       String     path+source   source
//!
//! Reads never produce these: a nil store degrades to
//! empty/neutral results. Writes, merge, with, and the
//! reader/file constructors return them synchronously;
//! nothing is retried or logged internally.
//! ```

use thiserror::Error;

/// Result type using [`EnvyError`].
pub type EnvyResult<T> = std::result::Result<T, EnvyError>;

/// Errors produced by environment construction and mutation.
#[derive(Debug, Error)]
pub enum EnvyError {
    /// Mutation, merge, or layering attempted on a nil environment.
    #[error("nil environment")]
    NilEnvironment,

    /// A required input was rejected before any I/O was attempted,
    /// such as a file path that is absolute or escapes its root.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Opening or reading a named environment file failed.
    ///
    /// The file handle itself is closed by RAII on every exit path;
    /// read failures carry the underlying cause.
    #[error("failed to read env file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Consuming a byte stream failed mid-read, including byte
    /// sequences that are not valid UTF-8 (surfaced as
    /// [`std::io::ErrorKind::InvalidData`]).
    #[error("stream read failed: {source}")]
    StreamRead {
        #[source]
        source: std::io::Error,
    },
}
