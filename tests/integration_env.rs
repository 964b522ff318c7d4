// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the environment store.
//!
//! Exercises file loading, layered composition, and concurrent use
//! through the public API only.

use envy::{Env, EnvyError};
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

fn map_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// =============================================================================
// from_file
// =============================================================================

#[test]
fn from_file_valid() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("valid.env"), "KEY1=VALUE1\nKEY2=VALUE2\n").unwrap();

    let env = Env::from_file(dir.path(), "valid.env").unwrap();
    assert_eq!(env.environ(), vec!["KEY1=VALUE1", "KEY2=VALUE2"]);
}

#[test]
fn from_file_skips_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mixed.env"),
        "// header comment\n\
         KEY1=KEY1\n\
         \n\
         NOTANENTRY\n\
         KEY2=VALUE2\n\
         =NOVALUE\n\
         KEY3=VALUE3\n",
    )
    .unwrap();

    let env = Env::from_file(dir.path(), "mixed.env").unwrap();
    assert_eq!(env.environ(), vec!["KEY1=KEY1", "KEY2=VALUE2", "KEY3=VALUE3"]);
}

#[test]
fn from_file_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Env::from_file(dir.path(), "nonexistent.env").unwrap_err();
    assert!(matches!(err, EnvyError::Io { .. }));
}

#[test]
fn from_file_rejects_absolute_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = Env::from_file(dir.path(), "/etc/passwd").unwrap_err();
    assert!(matches!(err, EnvyError::InvalidInput(_)));
}

#[test]
fn from_file_rejects_root_escape() {
    let dir = tempfile::tempdir().unwrap();
    let err = Env::from_file(dir.path(), "../outside.env").unwrap_err();
    assert!(matches!(err, EnvyError::InvalidInput(_)));
}

// =============================================================================
// Layered composition
// =============================================================================

#[test]
fn layering_base_then_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("base.env"), "APP_ENV=base\nPORT=3000\n").unwrap();
    fs::write(dir.path().join("dev.env"), "APP_ENV=dev\nDEBUG=true\n").unwrap();

    let base = Env::from_map(map_of(&[("HOME", "/usr/home"), ("PORT", "80")]));
    let root = dir.path().to_path_buf();

    let merged = base
        .with(|| {
            let file_env = Env::from_file(&root, "base.env")?;
            file_env.with(|| Env::from_file(&root, "dev.env"))
        })
        .unwrap();

    assert_eq!(
        merged.environ(),
        vec!["APP_ENV=dev", "DEBUG=true", "HOME=/usr/home", "PORT=3000"]
    );

    // the base layer is untouched
    assert_eq!(base.environ(), vec!["HOME=/usr/home", "PORT=80"]);
}

#[test]
fn layering_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let base = Env::from_map(map_of(&[("KEY", "VALUE")]));
    let root = dir.path().to_path_buf();

    let err = base
        .with(|| Env::from_file(&root, "missing.env"))
        .unwrap_err();
    assert!(matches!(err, EnvyError::Io { .. }));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_writers_and_readers() {
    const WRITERS: usize = 8;
    const KEYS_PER_WRITER: usize = 50;

    let env = Env::zero();
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let env = env.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    for entry in env.environ() {
                        // every observed entry must be well formed
                        assert!(entry.contains('='), "malformed entry observed: {entry}");
                    }
                    let _ = env.get("W0_K0");
                    let _ = env.expand("probe ${W0_K0}");
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let env = env.clone();
            thread::spawn(move || {
                for k in 0..KEYS_PER_WRITER {
                    let key = format!("W{w}_K{k}");
                    env.set(&key, "set").unwrap();
                    // a write that returned must be visible to a read
                    // that starts afterwards
                    assert_eq!(env.get(&key), "set");
                    assert!(env.is_set(&key));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(env.len(), WRITERS * KEYS_PER_WRITER);
    let environ = env.environ();
    for w in 0..WRITERS {
        for k in 0..KEYS_PER_WRITER {
            assert!(environ.contains(&format!("W{w}_K{k}=set")));
        }
    }
}

#[test]
fn opposite_order_merges_do_not_deadlock() {
    const ROUNDS: usize = 200;

    let a = Env::from_map(map_of(&[("A", "1")]));
    let b = Env::from_map(map_of(&[("B", "2")]));

    let forward = {
        let (a, b) = (a.clone(), b.clone());
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                let merged = a.merge(&b).unwrap();
                assert_eq!(merged.environ(), vec!["A=1", "B=2"]);
            }
        })
    };
    let backward = {
        let (a, b) = (a.clone(), b.clone());
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                let merged = b.merge(&a).unwrap();
                assert_eq!(merged.environ(), vec!["A=1", "B=2"]);
            }
        })
    };

    forward.join().unwrap();
    backward.join().unwrap();
}

#[test]
fn concurrent_merge_with_writers() {
    const ROUNDS: usize = 100;

    let base = Env::from_map(map_of(&[("STATIC", "base")]));
    let overlay = Env::zero();

    let writer = {
        let overlay = overlay.clone();
        thread::spawn(move || {
            for i in 0..ROUNDS {
                overlay.set(format!("K{i}"), "v").unwrap();
            }
        })
    };
    let merger = {
        let (base, overlay) = (base.clone(), overlay.clone());
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                let merged = base.merge(&overlay).unwrap();
                assert_eq!(merged.get("STATIC"), "base");
            }
        })
    };

    writer.join().unwrap();
    merger.join().unwrap();

    let merged = base.merge(&overlay).unwrap();
    assert_eq!(merged.len(), 1 + ROUNDS);
}
