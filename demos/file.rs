// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load an environment from a newline-delimited file.

use envy::Env;
use std::fs;

fn main() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("app.env"),
        "// demo settings\nAPP_ENV=dev\nPORT=4000\n",
    )?;

    let env = Env::from_file(dir.path(), "app.env")?;
    println!("{env}");

    Ok(())
}
