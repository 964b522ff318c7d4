// envy-rs: Isolated In-Memory Environments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build an environment from a map; malformed keys are dropped.

use envy::Env;
use std::collections::BTreeMap;

fn main() {
    let mut vars = BTreeMap::new();
    vars.insert("APP_ENV".to_string(), "dev".to_string());
    vars.insert("PORT".to_string(), "4000".to_string());
    vars.insert("//comment".to_string(), "dropped".to_string());

    let env = Env::from_map(vars);
    for entry in env.environ() {
        println!("{entry}");
    }
}
