// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finsan::commands::dashboard::summarize;
use finsan::models::{FinanceRecord, Holding, Transaction, TxType, new_id};
use rust_decimal::Decimal;

fn tx(date: &str, amount: i64, r#type: TxType, category: &str) -> Transaction {
    Transaction {
        id: new_id(),
        date: date.into(),
        description: format!("{} {}", category, amount),
        amount: Decimal::from(amount),
        r#type,
        category: category.into(),
    }
}

#[test]
fn monthly_metrics_and_breakdown() {
    let mut record = FinanceRecord::default();
    record.transactions.push(tx("2024-05-01", 100, TxType::Income, "Salary"));
    record.transactions.push(tx("2024-05-02", 40, TxType::Expense, "Food"));

    let s = summarize(&record, "2024-05");
    assert_eq!(s.income, Decimal::from(100));
    assert_eq!(s.expenses, Decimal::from(40));
    assert_eq!(s.savings_rate, Decimal::from(60));
    assert_eq!(s.net_worth, Decimal::from(60));
    assert_eq!(s.category_breakdown, vec![("Food".to_string(), Decimal::from(40))]);
}

#[test]
fn net_worth_spans_all_months_and_includes_holdings() {
    let mut record = FinanceRecord::default();
    record.transactions.push(tx("2023-11-15", 500, TxType::Income, "Salary"));
    record.transactions.push(tx("2024-05-02", 200, TxType::Expense, "Housing"));
    record.investments.push(Holding {
        id: new_id(),
        ticker: "VTI".into(),
        quantity: Decimal::from(2),
        avg_cost: Decimal::from(100),
        price: Decimal::from(150),
        as_of: None,
        source: None,
    });

    let s = summarize(&record, "2024-05");
    // 500 - 200 cashflow plus 2 x 150 portfolio.
    assert_eq!(s.net_worth, Decimal::from(600));
    // Income is month-scoped, so May income is zero.
    assert_eq!(s.income, Decimal::ZERO);
    assert_eq!(s.savings_rate, Decimal::ZERO);
}

#[test]
fn cashflow_is_order_independent() {
    let mut a = FinanceRecord::default();
    a.transactions.push(tx("2024-01-01", 300, TxType::Income, "Salary"));
    a.transactions.push(tx("2024-02-01", 120, TxType::Expense, "Food"));
    a.transactions.push(tx("2024-03-01", 80, TxType::Expense, "Transport"));

    let mut b = FinanceRecord::default();
    let mut reversed = a.transactions.clone();
    reversed.reverse();
    b.transactions = reversed;

    assert_eq!(summarize(&a, "2024-03").net_worth, summarize(&b, "2024-03").net_worth);
}

#[test]
fn savings_rate_can_go_negative_in_the_raw_summary() {
    let mut record = FinanceRecord::default();
    record.transactions.push(tx("2024-05-01", 100, TxType::Income, "Salary"));
    record.transactions.push(tx("2024-05-02", 150, TxType::Expense, "Housing"));

    let s = summarize(&record, "2024-05");
    assert_eq!(s.savings_rate, Decimal::from(-50));
}

#[test]
fn breakdown_is_sorted_descending_and_capped_at_six() {
    let mut record = FinanceRecord::default();
    let cats = [
        "Housing", "Food", "Transport", "Utilities", "Healthcare", "Entertainment", "Other",
    ];
    for (i, cat) in cats.iter().enumerate() {
        record.transactions.push(tx("2024-05-01", (i as i64 + 1) * 10, TxType::Expense, cat));
    }

    let s = summarize(&record, "2024-05");
    assert_eq!(s.category_breakdown.len(), 6);
    assert_eq!(s.category_breakdown[0].0, "Other");
    assert_eq!(s.category_breakdown[0].1, Decimal::from(70));
    // The smallest category fell off the end.
    assert!(s.category_breakdown.iter().all(|(c, _)| c != "Housing"));
    let totals: Vec<Decimal> = s.category_breakdown.iter().map(|(_, v)| *v).collect();
    let mut sorted = totals.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(totals, sorted);
}

#[test]
fn recent_returns_first_five_in_stored_order() {
    let mut record = FinanceRecord::default();
    for i in 0..8 {
        record.transactions.push(tx("2024-05-01", 10 + i, TxType::Expense, "Food"));
    }

    let s = summarize(&record, "2024-05");
    assert_eq!(s.recent.len(), 5);
    let amounts: Vec<Decimal> = s.recent.iter().map(|t| t.amount).collect();
    let expected: Vec<Decimal> = (0..5).map(|i| Decimal::from(10 + i)).collect();
    assert_eq!(amounts, expected);
}
