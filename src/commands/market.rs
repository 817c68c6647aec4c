// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::PriceSnapshot;
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;

pub const SOURCE_LIVE: &str = "live";
pub const SOURCE_FALLBACK: &str = "fallback";

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: Option<QuoteBody>,
}

#[derive(Debug, Deserialize)]
struct QuoteBody {
    #[serde(default)]
    result: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

pub fn fetch_quote(client: &reqwest::blocking::Client, symbol: &str) -> Result<Decimal> {
    let url = format!(
        "https://query1.finance.yahoo.com/v7/finance/quote?symbols={}",
        symbol
    );
    let resp = client.get(url).send()?.error_for_status()?;
    let envelope: QuoteEnvelope = resp.json()?;
    let price = envelope
        .quote_response
        .and_then(|b| b.result.into_iter().next())
        .and_then(|q| q.regular_market_price)
        .ok_or_else(|| anyhow!("No quote for '{}'", symbol))?;
    Decimal::try_from(price).with_context(|| format!("Invalid quote price {} for {}", price, symbol))
}

/// Pseudo price in [20, 320), the stand-in when the provider is down.
fn fallback_price() -> Decimal {
    let pseudo: f64 = rand::thread_rng().gen_range(20.0..320.0);
    Decimal::try_from(pseudo)
        .unwrap_or(Decimal::ONE_HUNDRED)
        .round_dp(2)
}

/// A price observation that never fails: a live quote when the provider
/// answers, a marked fallback otherwise.
pub fn snapshot(client: &reqwest::blocking::Client, symbol: &str) -> PriceSnapshot {
    let symbol = symbol.trim().to_uppercase();
    let (price, source) = match fetch_quote(client, &symbol) {
        Ok(p) => (p, SOURCE_LIVE),
        Err(_) => (fallback_price(), SOURCE_FALLBACK),
    };
    PriceSnapshot {
        symbol,
        price,
        as_of: Utc::now().to_rfc3339(),
        source: source.to_string(),
    }
}
