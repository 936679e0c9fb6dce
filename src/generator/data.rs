//! Fabricated test data
//!
//! Every value is visibly synthetic: identifiers carry a `TEST-` prefix and
//! card numbers start with `0000`, which no issuer uses.

use chrono::{Duration, Utc};
use rand::Rng;
use serde_json::{json, Value};

const DESCRIPTIONS: &[&str] = &[
    "Synthetic test payment",
    "Test invoice settlement",
    "Sample utility bill payment",
    "Test payroll deposit",
    "Fixture merchant refund",
    "Sample savings transfer",
];

const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Record shapes the fabricator knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestDataKind {
    BankTransaction,
    CreditCard,
    Generic,
}

impl TestDataKind {
    pub fn from_str(s: &str) -> Self {
        match s {
            "bank_transaction" => TestDataKind::BankTransaction,
            "credit_card" => TestDataKind::CreditCard,
            _ => TestDataKind::Generic,
        }
    }
}

/// Produce `count` records of `data_type`
pub fn fabricate<R: Rng>(data_type: &str, count: usize, rng: &mut R) -> Vec<Value> {
    let kind = TestDataKind::from_str(data_type);
    (0..count)
        .map(|i| match kind {
            TestDataKind::BankTransaction => bank_transaction(rng),
            TestDataKind::CreditCard => credit_card(i, rng),
            TestDataKind::Generic => json!({
                "id": i,
                "data": pick(DESCRIPTIONS, rng),
            }),
        })
        .collect()
}

fn bank_transaction<R: Rng>(rng: &mut R) -> Value {
    let age = Duration::seconds(rng.random_range(0..SECONDS_PER_YEAR));
    json!({
        "transaction_id": format!("TEST-TXN-{:08X}", rng.random::<u32>()),
        "amount": round2(rng.random_range(10.0..=10_000.0)),
        "from_account": test_account(rng),
        "to_account": test_account(rng),
        "description": pick(DESCRIPTIONS, rng),
        "timestamp": (Utc::now() - age).to_rfc3339(),
    })
}

fn credit_card<R: Rng>(index: usize, rng: &mut R) -> Value {
    json!({
        "card_number": format!(
            "0000-{:04}-{:04}-{:04}",
            rng.random_range(0..10_000),
            rng.random_range(0..10_000),
            rng.random_range(0..10_000)
        ),
        "expiry_date": format!(
            "{:02}/{:02}",
            rng.random_range(1..=12),
            rng.random_range(26..=35)
        ),
        "cvv": format!("{:03}", rng.random_range(0..1000)),
        "cardholder_name": format!("Test Holder {:03}", index + 1),
        "credit_limit": round2(rng.random_range(1_000.0..=50_000.0)),
    })
}

fn test_account<R: Rng>(rng: &mut R) -> String {
    format!("TEST-ACCT-{:010}", rng.random_range(0..10_000_000_000u64))
}

fn pick<'a, R: Rng>(items: &[&'a str], rng: &mut R) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
