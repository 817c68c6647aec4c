// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar;
use crate::models::{FinanceRecord, Frequency, RecurringRule, Transaction, TxType, new_id};
use crate::store::{Store, touch};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

/// Marker prepended to every materialized entry's description.
pub const RECURRING_PREFIX: &str = "[Recurring] ";

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("apply", _)) => apply(store)?,
        _ => {}
    }
    Ok(())
}

/// A rule that has never fired is due immediately. Otherwise it is due once
/// 7 (weekly) or 30 (monthly) whole days have elapsed since it last fired;
/// deliberately a day-count approximation, not calendar alignment.
pub fn is_due(rule: &RecurringRule, today: NaiveDate) -> bool {
    let Some(last) = rule.last_applied.as_deref() else {
        return true;
    };
    let Some(diff) = calendar::elapsed_days(last, today) else {
        // Unparsable last_applied never comes due.
        return false;
    };
    match rule.frequency {
        Frequency::Weekly => diff >= 7,
        Frequency::Monthly => diff >= 30,
    }
}

/// Materialize every due rule into a transaction dated today, prepend the
/// batch newest-first, and stamp the due rules. One pass, all or nothing.
pub fn apply_due(record: &mut FinanceRecord, today: NaiveDate) -> usize {
    let date = today.format("%Y-%m-%d").to_string();
    let mut additions = Vec::new();
    for rule in &mut record.recurring {
        if !is_due(rule, today) {
            continue;
        }
        additions.push(Transaction {
            id: new_id(),
            date: date.clone(),
            description: format!("{}{}", RECURRING_PREFIX, rule.description),
            amount: rule.amount,
            r#type: rule.r#type,
            category: rule.category.clone(),
        });
        rule.last_applied = Some(date.clone());
    }
    let count = additions.len();
    let mut merged = additions;
    merged.append(&mut record.transactions);
    record.transactions = merged;
    count
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?.abs();
    let r#type: TxType = sub.get_one::<String>("type").unwrap().parse().map_err(|e: String| anyhow!(e))?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let frequency: Frequency = sub.get_one::<String>("frequency").unwrap().parse().map_err(|e: String| anyhow!(e))?;

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    user.finance.recurring.push(RecurringRule {
        id: new_id(),
        description: description.clone(),
        amount,
        r#type,
        category,
        frequency,
        last_applied: None,
    });
    touch(user);
    store.save()?;
    println!("Added {} recurring entry '{}' ({})", frequency, description, amount);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let rules = &user.finance.recurring;
    if !maybe_print_json(json_flag, jsonl_flag, rules)? {
        let rows: Vec<Vec<String>> = rules
            .iter()
            .map(|r| {
                vec![
                    r.description.clone(),
                    r.frequency.to_string(),
                    r.r#type.to_string(),
                    r.category.clone(),
                    r.amount.to_string(),
                    r.last_applied.clone().unwrap_or_else(|| "never".into()),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Description", "Frequency", "Type", "Category", "Amount", "Last Applied", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let before = user.finance.recurring.len();
    user.finance.recurring.retain(|r| r.id != id);
    if user.finance.recurring.len() == before {
        return Err(anyhow!("Recurring entry '{}' not found", id));
    }
    touch(user);
    store.save()?;
    println!("Removed recurring entry {}", id);
    Ok(())
}

fn apply(store: &mut Store) -> Result<()> {
    let today = calendar::today();
    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let count = apply_due(&mut user.finance, today);
    touch(user);
    store.save()?;
    println!("Applied {} due recurring entries.", count);
    Ok(())
}
