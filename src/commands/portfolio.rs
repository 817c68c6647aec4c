// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::market;
use crate::models::{FinanceRecord, Holding, new_id};
use crate::store::{Store, touch};
use crate::utils::{http_client, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("refresh", sub)) => refresh(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// One holding per ticker. Re-adding a ticker replaces quantity, cost and
/// price outright; this is not a weighted-average cost update.
pub fn upsert(
    record: &mut FinanceRecord,
    ticker: &str,
    quantity: Decimal,
    avg_cost: Decimal,
    price: Decimal,
) -> bool {
    let ticker = ticker.trim().to_uppercase();
    if let Some(existing) = record.investments.iter_mut().find(|h| h.ticker == ticker) {
        existing.quantity = quantity;
        existing.avg_cost = avg_cost;
        existing.price = price;
        true
    } else {
        record.investments.push(Holding {
            id: new_id(),
            ticker,
            quantity,
            avg_cost,
            price,
            as_of: None,
            source: None,
        });
        false
    }
}

#[derive(Debug, Serialize)]
pub struct PositionRow {
    pub ticker: String,
    pub quantity: Decimal,
    pub avg_cost: Decimal,
    pub price: Decimal,
    pub value: Decimal,
    pub profit_loss: Decimal,
    pub source: Option<String>,
}

pub fn positions(record: &FinanceRecord) -> Vec<PositionRow> {
    record
        .investments
        .iter()
        .map(|h| PositionRow {
            ticker: h.ticker.clone(),
            quantity: h.quantity,
            avg_cost: h.avg_cost,
            price: h.price,
            value: h.quantity * h.price,
            profit_loss: (h.price - h.avg_cost) * h.quantity,
            source: h.source.clone(),
        })
        .collect()
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let ticker = sub.get_one::<String>("ticker").unwrap();
    let quantity = parse_decimal(sub.get_one::<String>("quantity").unwrap().trim())?.abs();
    let avg_cost = parse_decimal(sub.get_one::<String>("cost").unwrap().trim())?.abs();
    let price = parse_decimal(sub.get_one::<String>("price").unwrap().trim())?.abs();

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let replaced = upsert(&mut user.finance, ticker, quantity, avg_cost, price);
    touch(user);
    store.save()?;
    if replaced {
        println!("Updated holding {}", ticker.trim().to_uppercase());
    } else {
        println!("Added holding {}", ticker.trim().to_uppercase());
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let data = positions(&user.finance);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.ticker.clone(),
                    format!("{:.4}", p.quantity),
                    format!("{:.2}", p.avg_cost),
                    format!("{:.2}", p.price),
                    format!("{:.2}", p.value),
                    format!("{:.2}", p.profit_loss),
                    p.source.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Ticker", "Qty", "Avg Cost", "Price", "Value", "P/L", "Source"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let ticker = sub.get_one::<String>("ticker").unwrap().trim().to_uppercase();
    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let before = user.finance.investments.len();
    user.finance.investments.retain(|h| h.ticker != ticker);
    if user.finance.investments.len() == before {
        return Err(anyhow!("Holding '{}' not found", ticker));
    }
    touch(user);
    store.save()?;
    println!("Removed holding {}", ticker);
    Ok(())
}

/// Pull a fresh snapshot for one ticker (or all holdings), stamp it onto
/// the holding and cache it on the record. Provider failures degrade to
/// marked fallback prices instead of erroring.
fn refresh(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let only = sub
        .get_one::<String>("ticker")
        .map(|s| s.trim().to_uppercase());
    let client = http_client()?;

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    let tickers: Vec<String> = user
        .finance
        .investments
        .iter()
        .map(|h| h.ticker.clone())
        .filter(|t| only.as_deref().map_or(true, |o| o == t))
        .collect();
    if tickers.is_empty() {
        return Err(anyhow!("No matching holdings to refresh"));
    }

    let mut rows = Vec::new();
    for ticker in tickers {
        let snap = market::snapshot(&client, &ticker);
        if let Some(holding) = user
            .finance
            .investments
            .iter_mut()
            .find(|h| h.ticker == snap.symbol)
        {
            holding.price = snap.price;
            holding.as_of = Some(snap.as_of.clone());
            holding.source = Some(snap.source.clone());
        }
        rows.push(vec![
            snap.symbol.clone(),
            format!("{:.2}", snap.price),
            snap.source.clone(),
            snap.as_of.clone(),
        ]);
        user.finance.snapshots.insert(snap.symbol.clone(), snap);
    }
    touch(user);
    store.save()?;
    println!(
        "{}",
        pretty_table(&["Ticker", "Price", "Source", "As Of"], rows)
    );
    Ok(())
}
