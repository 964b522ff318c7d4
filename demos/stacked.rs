// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layer a base map, then one env file on top of another.

use envy::Env;
use std::collections::BTreeMap;
use std::fs;

fn main() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("base.env"), "APP_ENV=base\nPORT=3000\n")?;
    fs::write(dir.path().join("dev.env"), "APP_ENV=dev\nDEBUG=true\n")?;

    let mut vars = BTreeMap::new();
    vars.insert("HOME".to_string(), "/usr/home".to_string());
    let base = Env::from_map(vars);

    println!("initial environment:");
    println!("{base}");
    println!();

    let root = dir.path().to_path_buf();
    let env = base.with(|| {
        // load base.env, then dev.env on top of it
        let file_env = Env::from_file(&root, "base.env")?;
        file_env.with(|| Env::from_file(&root, "dev.env"))
    })?;

    println!("stacked environment:");
    println!("{env}");

    Ok(())
}
