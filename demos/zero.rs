// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A clean-slate environment, fully detached from the process.

use envy::Env;

fn main() -> anyhow::Result<()> {
    let env = Env::zero();
    println!("entries: {}", env.len());

    env.set("ONLY", "this")?;
    println!("{env}");

    Ok(())
}
