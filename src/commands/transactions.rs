// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar;
use crate::models::{FinanceRecord, Transaction, TxType, new_id};
use crate::store::{Store, touch};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    // Sign lives on the type, never the amount.
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?.abs();
    let r#type: TxType = sub.get_one::<String>("type").unwrap().parse().map_err(|e: String| anyhow!(e))?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    user.finance.transactions.insert(
        0,
        Transaction {
            id: new_id(),
            date: date.to_string(),
            description: description.clone(),
            amount,
            r#type,
            category,
        },
    );
    touch(user);
    store.save()?;
    println!("Recorded {} {} on {} ('{}')", r#type, amount, date, description);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub r#type: String,
    pub amount: String,
}

/// Rows in stored (newest-first) order, optionally filtered by `YYYY-MM`
/// month and category, truncated to `limit`.
pub fn query_rows(record: &FinanceRecord, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data = Vec::new();
    for t in &record.transactions {
        if let Some(ref m) = month {
            if !calendar::in_month(&t.date, m) {
                continue;
            }
        }
        if let Some(cat) = category {
            if &t.category != cat {
                continue;
            }
        }
        data.push(TransactionRow {
            id: t.id.clone(),
            date: t.date.clone(),
            description: t.description.clone(),
            category: t.category.clone(),
            r#type: t.r#type.to_string(),
            amount: t.amount.to_string(),
        });
        if let Some(n) = limit {
            if data.len() >= n {
                break;
            }
        }
    }
    Ok(data)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let data = query_rows(&user.finance, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Type", "Amount", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let before = user.finance.transactions.len();
    user.finance.transactions.retain(|t| t.id != id);
    if user.finance.transactions.len() == before {
        return Err(anyhow!("Transaction '{}' not found", id));
    }
    touch(user);
    store.save()?;
    println!("Removed transaction {}", id);
    Ok(())
}
