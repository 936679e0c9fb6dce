//! Currency exchange client over a fixed rate table

use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;

use crate::models::ApiResponse;
use crate::utils::Timer;

/// Rates against USD
const DEFAULT_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("JPY", 110.0),
    ("CAD", 1.25),
];

/// Exchange client computing cross rates through a common base currency
#[derive(Clone, Debug)]
pub struct CurrencyExchangeClient {
    rates: BTreeMap<String, f64>,
}

impl CurrencyExchangeClient {
    pub fn new() -> Self {
        Self::with_rates(
            DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        )
    }

    pub fn with_rates(rates: BTreeMap<String, f64>) -> Self {
        Self { rates }
    }

    /// `rate = table[to] / table[from]`, rounded to four decimals
    pub fn get_exchange_rate(&self, from: &str, to: &str) -> ApiResponse {
        let timer = Timer::start();

        match (self.rates.get(from), self.rates.get(to)) {
            (Some(from_rate), Some(to_rate)) if *from_rate != 0.0 => {
                let rate = round4(to_rate / from_rate);
                ApiResponse::ok(
                    json!({
                        "from": from,
                        "to": to,
                        "rate": rate,
                        "timestamp": Utc::now().to_rfc3339(),
                    }),
                    timer.elapsed_secs(),
                )
            }
            _ => ApiResponse::error(400, "Unsupported currency", timer.elapsed_secs()),
        }
    }
}

impl Default for CurrencyExchangeClient {
    fn default() -> Self {
        Self::new()
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
