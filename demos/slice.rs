// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build an environment from "KEY=VALUE" strings.

use envy::Env;

fn main() {
    let env = Env::from_slice(&[
        "APP_ENV=dev",
        "PORT=4000",
        "// comments are skipped",
        "MALFORMED",
        "FLAGS=a=b=c",
    ]);

    println!("{env}");
    println!("FLAGS: {}", env.get("FLAGS"));
}
