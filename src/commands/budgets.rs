// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FinanceRecord, TxType};
use crate::store::{Store, touch};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("status", sub)) => status_cmd(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub percent_used: Decimal,
}

/// Spend per budgeted category. Spent is the all-time expense total, not
/// scoped to the current month; the limit is labeled monthly but the
/// comparison never was. Preserved until product says otherwise.
pub fn status(record: &FinanceRecord) -> Vec<BudgetStatus> {
    let hundred = Decimal::ONE_HUNDRED;
    record
        .budgets
        .iter()
        .map(|(category, limit)| {
            let spent: Decimal = record
                .transactions
                .iter()
                .filter(|t| t.r#type == TxType::Expense && &t.category == category)
                .map(|t| t.amount)
                .sum();
            let percent_used = if limit.is_zero() {
                Decimal::ZERO
            } else {
                (spent / limit * hundred).min(hundred)
            };
            BudgetStatus {
                category: category.clone(),
                limit: *limit,
                spent,
                percent_used,
            }
        })
        .collect()
}

fn set(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap().trim())?.abs();

    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    user.finance.budgets.insert(category.clone(), limit);
    touch(user);
    store.save()?;
    println!("Budget set for {} = {}", category, limit);
    Ok(())
}

fn status_cmd(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let data = status(&user.finance);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = user.finance.preferences.currency.as_str();
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| {
                vec![
                    b.category.clone(),
                    fmt_money(&b.spent, ccy),
                    fmt_money(&b.limit, ccy),
                    format!("{:.1}%", b.percent_used),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Limit", "Used"], rows)
        );
    }
    Ok(())
}

/// Removing a budget drops the category key; there is no distinct
/// zero-limit state.
fn remove(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().trim();
    let user = store.current_user_mut().context("Not signed in. Run `finsan login` first.")?;
    if user.finance.budgets.remove(category).is_none() {
        return Err(anyhow!("No budget for category '{}'", category));
    }
    touch(user);
    store.save()?;
    println!("Removed budget for {}", category);
    Ok(())
}
