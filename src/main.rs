// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finsan::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = Store::open()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", store.path().display());
        }
        Some(("signup", sub)) => commands::session::signup(&mut store, sub)?,
        Some(("login", sub)) => commands::session::login(&mut store, sub)?,
        Some(("logout", _)) => commands::session::logout(&mut store)?,
        Some(("whoami", _)) => commands::session::whoami(&store)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut store, sub)?,
        Some(("invest", sub)) => commands::portfolio::handle(&mut store, sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(&mut store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("prefs", sub)) => commands::prefs::handle(&mut store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
