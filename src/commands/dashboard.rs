// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calendar;
use crate::models::{FinanceRecord, Transaction, TxType};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net_worth: Decimal,
    /// Raw rate; can go negative when expenses exceed income. Clamped to
    /// zero at display time only.
    pub savings_rate: Decimal,
    pub category_breakdown: Vec<(String, Decimal)>,
    pub recent: Vec<Transaction>,
}

/// Recomputed from scratch on every call; no caching anywhere.
pub fn summarize(record: &FinanceRecord, month: &str) -> DashboardSummary {
    let hundred = Decimal::ONE_HUNDRED;

    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut cashflow = Decimal::ZERO;
    let mut by_category: HashMap<String, Decimal> = HashMap::new();

    for t in &record.transactions {
        let in_month = calendar::in_month(&t.date, month);
        match t.r#type {
            TxType::Income => {
                cashflow += t.amount;
                if in_month {
                    income += t.amount;
                }
            }
            TxType::Expense => {
                cashflow -= t.amount;
                if in_month {
                    expenses += t.amount;
                }
                *by_category.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
            }
        }
    }

    let portfolio: Decimal = record
        .investments
        .iter()
        .map(|h| h.quantity * h.price)
        .sum();

    let savings_rate = if income > Decimal::ZERO {
        (income - expenses) / income * hundred
    } else {
        Decimal::ZERO
    };

    let mut category_breakdown: Vec<(String, Decimal)> = by_category.into_iter().collect();
    category_breakdown.sort_by(|a, b| b.1.cmp(&a.1));
    category_breakdown.truncate(6);

    DashboardSummary {
        month: month.to_string(),
        income,
        expenses,
        net_worth: cashflow + portfolio,
        savings_rate,
        category_breakdown,
        recent: record.transactions.iter().take(5).cloned().collect(),
    }
}

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => calendar::month_key(calendar::today()),
    };

    let user = store.current_user().context("Not signed in. Run `finsan login` first.")?;
    let summary = summarize(&user.finance, &month);
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let ccy = user.finance.preferences.currency.as_str();
    let shown_rate = summary.savings_rate.max(Decimal::ZERO);
    println!(
        "{}",
        pretty_table(
            &["Metric", "Value"],
            vec![
                vec!["Net Worth".into(), fmt_money(&summary.net_worth, ccy)],
                vec![format!("Income ({})", summary.month), fmt_money(&summary.income, ccy)],
                vec![format!("Expenses ({})", summary.month), fmt_money(&summary.expenses, ccy)],
                vec!["Savings Rate".into(), format!("{:.1}%", shown_rate)],
            ],
        )
    );

    let recent: Vec<Vec<String>> = summary
        .recent
        .iter()
        .map(|t| {
            let sign = match t.r#type {
                TxType::Expense => "-",
                TxType::Income => "+",
            };
            vec![
                t.date.clone(),
                t.description.clone(),
                format!("{}{}", sign, fmt_money(&t.amount, ccy)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Date", "Description", "Amount"], recent));

    let breakdown: Vec<Vec<String>> = summary
        .category_breakdown
        .iter()
        .map(|(cat, total)| vec![cat.clone(), fmt_money(total, ccy)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], breakdown));
    Ok(())
}
