// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Goal, new_id};
use crate::store::{Store, touch};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap().trim())?.abs();
    let current = parse_decimal(sub.get_one::<String>("current").unwrap().trim())?.abs();

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    user.finance.goals.push(Goal {
        id: new_id(),
        title: title.clone(),
        target,
        current,
    });
    touch(user);
    store.save()?;
    println!("Added goal '{}' ({} / {})", title, current, target);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let goals = &user.finance.goals;
    if !maybe_print_json(json_flag, jsonl_flag, goals)? {
        let ccy = user.finance.preferences.currency.as_str();
        let rows: Vec<Vec<String>> = goals
            .iter()
            .map(|g| {
                vec![
                    g.title.clone(),
                    fmt_money(&g.current, ccy),
                    fmt_money(&g.target, ccy),
                    g.id.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Goal", "Current", "Target", "ID"], rows));
    }
    Ok(())
}

/// Goal progress is manual; update replaces the current amount outright.
fn update(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let current = parse_decimal(sub.get_one::<String>("current").unwrap().trim())?.abs();

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let goal = user
        .finance
        .goals
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("Goal '{}' not found", id))?;
    goal.current = current;
    let title = goal.title.clone();
    touch(user);
    store.save()?;
    println!("Updated goal '{}' to {}", title, current);
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let before = user.finance.goals.len();
    user.finance.goals.retain(|g| g.id != id);
    if user.finance.goals.len() == before {
        return Err(anyhow!("Goal '{}' not found", id));
    }
    touch(user);
    store.save()?;
    println!("Removed goal {}", id);
    Ok(())
}
