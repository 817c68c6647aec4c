// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finsan::commands::transactions;
use finsan::models::{FinanceRecord, Transaction, TxType, new_id};
use finsan::cli;
use rust_decimal::Decimal;

fn record_with_three() -> FinanceRecord {
    let mut record = FinanceRecord::default();
    for (i, cat) in ["Food", "Transport", "Food"].iter().enumerate() {
        // Newest first, like the app stores them.
        record.transactions.push(Transaction {
            id: new_id(),
            date: format!("2025-01-0{}", 3 - i),
            description: format!("t{}", i),
            amount: Decimal::from(10),
            r#type: TxType::Expense,
            category: cat.to_string(),
        });
    }
    record
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let record = record_with_three();
    let sub = list_matches(&["finsan", "tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(&record, &sub).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_by_category() {
    let record = record_with_three();
    let sub = list_matches(&["finsan", "tx", "list", "--category", "Food"]);
    let rows = transactions::query_rows(&record, &sub).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.category == "Food"));
}

#[test]
fn list_filters_by_month_prefix() {
    let mut record = record_with_three();
    record.transactions.push(Transaction {
        id: new_id(),
        date: "2024-12-31".into(),
        description: "old".into(),
        amount: Decimal::from(5),
        r#type: TxType::Income,
        category: "Salary".into(),
    });

    let sub = list_matches(&["finsan", "tx", "list", "--month", "2025-01"]);
    let rows = transactions::query_rows(&record, &sub).unwrap();
    assert_eq!(rows.len(), 3);

    let sub = list_matches(&["finsan", "tx", "list", "--month", "2024-12"]);
    let rows = transactions::query_rows(&record, &sub).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "old");
}

#[test]
fn bad_month_argument_is_rejected() {
    let record = record_with_three();
    let sub = list_matches(&["finsan", "tx", "list", "--month", "January"]);
    assert!(transactions::query_rows(&record, &sub).is_err());
}
