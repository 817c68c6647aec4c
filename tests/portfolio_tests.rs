// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finsan::commands::portfolio::{positions, upsert};
use finsan::models::FinanceRecord;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn value_and_profit_loss_per_holding() {
    let mut record = FinanceRecord::default();
    upsert(&mut record, "AAPL", dec("10"), dec("100"), dec("150"));

    let p = positions(&record);
    assert_eq!(p.len(), 1);
    assert_eq!(p[0].value, dec("1500"));
    assert_eq!(p[0].profit_loss, dec("500"));
}

#[test]
fn losing_position_reports_negative_profit() {
    let mut record = FinanceRecord::default();
    upsert(&mut record, "MEME", dec("4"), dec("50"), dec("30"));

    let p = positions(&record);
    assert_eq!(p[0].profit_loss, dec("-80"));
}

#[test]
fn re_adding_a_ticker_replaces_not_merges() {
    let mut record = FinanceRecord::default();
    assert!(!upsert(&mut record, "AAPL", dec("10"), dec("100"), dec("150")));
    let original_id = record.investments[0].id.clone();

    assert!(upsert(&mut record, "AAPL", dec("5"), dec("120"), dec("160")));
    assert_eq!(record.investments.len(), 1);
    let h = &record.investments[0];
    assert_eq!(h.quantity, dec("5"));
    assert_eq!(h.avg_cost, dec("120"));
    assert_eq!(h.price, dec("160"));
    assert_eq!(h.id, original_id);
}

#[test]
fn tickers_are_uppercased_and_matched_case_insensitively() {
    let mut record = FinanceRecord::default();
    upsert(&mut record, "aapl", dec("10"), dec("100"), dec("150"));
    assert_eq!(record.investments[0].ticker, "AAPL");

    assert!(upsert(&mut record, " AAPL ", dec("2"), dec("90"), dec("95")));
    assert_eq!(record.investments.len(), 1);
    assert_eq!(record.investments[0].quantity, dec("2"));
}

#[test]
fn fractional_quantities_compute_exactly() {
    let mut record = FinanceRecord::default();
    upsert(&mut record, "VTI", dec("2.5"), dec("200"), dec("220.40"));

    let p = positions(&record);
    assert_eq!(p[0].value, dec("551.000"));
    assert_eq!(p[0].profit_loss, dec("51.000"));
}
