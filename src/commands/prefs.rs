// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{Store, touch};
use anyhow::{Context, Result};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", _)) => show(store)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let currency = sub.get_one::<String>("currency").map(|s| s.to_uppercase());
    let locale = sub.get_one::<String>("locale").cloned();
    let refresh = sub.get_one::<u64>("refresh-interval-ms").copied();
    if currency.is_none() && locale.is_none() && refresh.is_none() {
        println!("Nothing to change.");
        return Ok(());
    }

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let prefs = &mut user.finance.preferences;
    if let Some(ccy) = currency {
        prefs.currency = ccy;
    }
    if let Some(loc) = locale {
        prefs.locale = loc;
    }
    if let Some(ms) = refresh {
        prefs.refresh_interval_ms = ms;
    }
    touch(user);
    store.save()?;
    show(store)
}

fn show(store: &Store) -> Result<()> {
    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let prefs = &user.finance.preferences;
    println!(
        "currency {} | locale {} | refresh {} ms",
        prefs.currency, prefs.locale, prefs.refresh_interval_ms
    );
    Ok(())
}
