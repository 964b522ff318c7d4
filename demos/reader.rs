// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build an environment from a separator-delimited byte stream.

use envy::Env;

fn main() -> anyhow::Result<()> {
    let input = "APP_ENV=dev; PORT=4000; DEBUG=true;";
    let env = Env::from_reader(input.as_bytes(), b';')?;

    println!("{env}");
    Ok(())
}
