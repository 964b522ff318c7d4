// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `$NAME` / `${NAME}` placeholder substitution.
//!
//! ```text
//! "$NAME"  or  "${NAME}"  -->  lookup(NAME) or ""
//! single pass: replacements are not re-scanned
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `${NAME}` (any text up to the closing brace) or `$NAME`
/// (identifier-shaped). A `$` followed by neither form is left alone.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([^}]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("placeholder pattern is valid")
});

/// Replaces every placeholder in `input` with `lookup(name)`,
/// substituting the empty string when the lookup returns `None`.
///
/// `replace_all` walks the input once, so substituted values are never
/// re-expanded.
pub(super) fn substitute<F>(input: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    PLACEHOLDER
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            lookup(name).unwrap_or_default()
        })
        .into_owned()
}
