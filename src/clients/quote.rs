//! Stock quote client for the Alpha Vantage GLOBAL_QUOTE endpoint

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, warn};

use super::http::{HttpClient, HttpRequest};
use crate::config::MarketDataConfig;
use crate::models::ApiResponse;
use crate::utils::Timer;

/// Market data client. Every failure is folded into a failed `ApiResponse`.
#[derive(Clone)]
pub struct StockQuoteClient {
    client: HttpClient,
    base_url: String,
    api_key: String,
}

impl StockQuoteClient {
    pub fn new(config: &MarketDataConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_timeout(config.timeout_secs)?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn build_request(&self, symbol: &str) -> HttpRequest {
        HttpRequest::get(&self.base_url)
            .query("function", "GLOBAL_QUOTE")
            .query("symbol", symbol)
            .query("apikey", &self.api_key)
    }

    pub async fn get_stock_price(&self, symbol: &str) -> ApiResponse {
        let timer = Timer::start();
        debug!("Fetching quote for {}", symbol);

        let response = match self.client.send(self.build_request(symbol)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Quote request for {} failed: {}", symbol, e);
                return ApiResponse::transport_error(e.to_string(), timer.elapsed_secs());
            }
        };

        match response.json::<Value>() {
            Ok(body) => ApiResponse::new(
                response.status_code,
                body,
                response.headers,
                timer.elapsed_secs(),
                response.status_code == 200,
            ),
            Err(e) => {
                warn!("Quote response for {} was not JSON: {}", symbol, e);
                ApiResponse::transport_error(e.to_string(), timer.elapsed_secs())
            }
        }
    }
}
