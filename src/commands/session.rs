// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::store::Store;
use anyhow::Result;

pub fn signup(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let name = sub.get_one::<String>("name").map(|s| s.as_str());
    let currency = sub.get_one::<String>("currency").unwrap().to_uppercase();

    let token = auth::signup(&mut store.db, email, password, name, &currency)?;
    store.save()?;
    store.set_session(&token)?;
    if let Some(user) = store.current_user() {
        println!("Welcome, {} <{}>", user.name, user.email);
    }
    Ok(())
}

pub fn login(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();

    let token = auth::login(&mut store.db, email, password)?;
    store.save()?;
    store.set_session(&token)?;
    if let Some(user) = store.current_user() {
        println!("Signed in as {} <{}>", user.name, user.email);
    }
    Ok(())
}

pub fn logout(store: &mut Store) -> Result<()> {
    if let Some(token) = store.session_token().map(|t| t.to_string()) {
        auth::logout(&mut store.db, &token);
        store.save()?;
    }
    store.clear_session()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(store: &Store) -> Result<()> {
    match store.current_user() {
        Some(user) => {
            println!(
                "{} <{}> (currency {}, member since {})",
                user.name, user.email, user.finance.preferences.currency, user.created_at
            );
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
