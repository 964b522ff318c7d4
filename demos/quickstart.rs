// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Snapshot the process environment, then mutate the copy only.

use envy::Env;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // new env based on the current process environment
    let env = Env::from_process();
    println!("HOME: {}", env.get("HOME"));

    // set a new HOME variable; the real process is untouched
    env.set("HOME", "/tmp/home")?;
    println!("Updated HOME: {}", env.get("HOME"));
    println!("Process HOME: {}", std::env::var("HOME")?);

    Ok(())
}
