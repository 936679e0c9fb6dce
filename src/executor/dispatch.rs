//! Executes one test case against the client matching its API spec

use anyhow::Result;
use tracing::{error, info};

use super::test_data::{number_or, string_or};
use crate::clients::{CurrencyExchangeClient, MockBankingApi, StockQuoteClient};
use crate::config::MarketDataConfig;
use crate::models::{ApiKind, ApiSpec, TestAction, TestCase, TestResult};

const NOT_IMPLEMENTED: &str = "Test not implemented";

/// Executes test cases. `execute` never fails; errors become `error` results.
#[derive(Clone, Debug, Default)]
pub struct TestExecutor {
    market_data: MarketDataConfig,
}

impl TestExecutor {
    pub fn new(market_data: MarketDataConfig) -> Self {
        Self { market_data }
    }

    pub async fn execute(&self, test_case: &TestCase, spec: &ApiSpec) -> TestResult {
        info!("Running {}", test_case);

        let result = match self.dispatch(test_case, spec).await {
            Ok(result) => result,
            Err(e) => {
                error!("Test {} failed with error: {:#}", test_case.name, e);
                TestResult::error(test_case, format!("{e:#}"))
            }
        };

        info!("  {}", result);
        result
    }

    async fn dispatch(&self, test_case: &TestCase, spec: &ApiSpec) -> Result<TestResult> {
        match &spec.kind {
            ApiKind::Stock => {
                let client = StockQuoteClient::new(&self.market_data)?;
                run_stock(&client, test_case).await
            }
            ApiKind::Banking => {
                // Fresh store per case
                let mut client = MockBankingApi::new();
                run_banking(&mut client, test_case)
            }
            ApiKind::Currency => run_currency(&CurrencyExchangeClient::new(), test_case),
            ApiKind::Other(kind) => Ok(TestResult::skip(
                test_case,
                format!("Unknown API type: {kind}"),
            )),
        }
    }
}

async fn run_stock(client: &StockQuoteClient, test_case: &TestCase) -> Result<TestResult> {
    match test_case.action {
        TestAction::StockPrice => {
            let symbol = string_or(test_case, "symbol", "AAPL")?;
            let response = client.get_stock_price(&symbol).await;
            Ok(TestResult::from_outcome(
                test_case,
                response.success(),
                format!("Stock price API response: {}", response.status_code()),
                response.response_time(),
            ))
        }
        _ => Ok(TestResult::skip(test_case, NOT_IMPLEMENTED)),
    }
}

fn run_banking(client: &mut MockBankingApi, test_case: &TestCase) -> Result<TestResult> {
    let response = match test_case.action {
        TestAction::AccountBalance => {
            let account_id = string_or(test_case, "account_id", "ACC001")?;
            ("Balance", client.get_balance(&account_id))
        }
        TestAction::Transfer => {
            let from = string_or(test_case, "from_account", "ACC001")?;
            let to = string_or(test_case, "to_account", "ACC002")?;
            let amount = number_or(test_case, "amount", 100.0)?;
            ("Transfer", client.transfer(&from, &to, amount))
        }
        _ => return Ok(TestResult::skip(test_case, NOT_IMPLEMENTED)),
    };

    let (label, response) = response;
    Ok(TestResult::from_outcome(
        test_case,
        response.success(),
        format!("{label} API response: {}", response.status_code()),
        response.response_time(),
    ))
}

fn run_currency(client: &CurrencyExchangeClient, test_case: &TestCase) -> Result<TestResult> {
    match test_case.action {
        TestAction::ExchangeRate => {
            let from = string_or(test_case, "from_currency", "USD")?;
            let to = string_or(test_case, "to_currency", "EUR")?;
            let response = client.get_exchange_rate(&from, &to);
            Ok(TestResult::from_outcome(
                test_case,
                response.success(),
                format!("Exchange rate API response: {}", response.status_code()),
                response.response_time(),
            ))
        }
        _ => Ok(TestResult::skip(test_case, NOT_IMPLEMENTED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TestStatus};
    use serde_json::json;

    fn case(name: &str) -> TestCase {
        TestCase::new(name, "d", "functional", Priority::High)
    }

    fn offline_executor() -> TestExecutor {
        TestExecutor::new(MarketDataConfig {
            base_url: "http://127.0.0.1:9/query".to_string(),
            api_key: "demo".to_string(),
            timeout_secs: 2,
        })
    }

    fn banking() -> ApiSpec {
        ApiSpec::new("Banking API", ApiKind::Banking)
    }

    #[tokio::test]
    async fn test_transfer_without_data_uses_defaults() {
        let executor = TestExecutor::default();
        let result = executor.execute(&case("Banking transfer"), &banking()).await;

        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.message, "Transfer API response: 200");
    }

    #[tokio::test]
    async fn test_transfer_over_balance_fails() {
        let executor = TestExecutor::default();
        let transfer = case("Large transfer").with_test_data(json!({"amount": 1_000_000.0}));
        let result = executor.execute(&transfer, &banking()).await;

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.message, "Transfer API response: 400");
    }

    #[tokio::test]
    async fn test_bad_test_data_is_error() {
        let executor = TestExecutor::default();
        let transfer = case("transfer").with_test_data(json!({"amount": "a lot"}));
        let result = executor.execute(&transfer, &banking()).await;

        assert_eq!(result.status, TestStatus::Error);
        assert!(result.message.contains("test_data.amount"));
        assert_eq!(result.response_time, 0.0);
    }

    #[tokio::test]
    async fn test_non_object_test_data_is_error() {
        let executor = TestExecutor::default();
        let lookup = case("balance").with_test_data(json!(["ACC002"]));
        let result = executor.execute(&lookup, &banking()).await;

        assert_eq!(result.status, TestStatus::Error);
        assert_eq!(result.message, "test_data must be an object, got [\"ACC002\"]");
    }

    #[tokio::test]
    async fn test_balance_of_missing_account_fails() {
        let executor = TestExecutor::default();
        let lookup = case("balance").with_test_data(json!({"account_id": "ACC404"}));
        let result = executor.execute(&lookup, &banking()).await;

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.message, "Balance API response: 404");
    }

    #[tokio::test]
    async fn test_unknown_api_type_is_skipped() {
        let executor = TestExecutor::default();
        let spec = ApiSpec::new("Crypto API", "crypto_api");
        let result = executor.execute(&case("transfer"), &spec).await;

        assert_eq!(result.status, TestStatus::Skipped);
        assert_eq!(result.message, "Unknown API type: crypto_api");
    }

    #[tokio::test]
    async fn test_unmatched_action_is_skipped() {
        let executor = TestExecutor::default();
        let result = executor
            .execute(&case("Banking API Happy Path Test"), &banking())
            .await;
        assert_eq!(result.status, TestStatus::Skipped);
        assert_eq!(result.message, "Test not implemented");

        let spec = ApiSpec::new("Currency Exchange API", ApiKind::Currency);
        let result = executor.execute(&case("transfer"), &spec).await;
        assert_eq!(result.status, TestStatus::Skipped);
    }

    #[tokio::test]
    async fn test_exchange_rate() {
        let executor = TestExecutor::default();
        let spec = ApiSpec::new("Currency Exchange API", ApiKind::Currency);

        let result = executor.execute(&case("exchange_rate default"), &spec).await;
        assert_eq!(result.status, TestStatus::Passed);
        assert_eq!(result.message, "Exchange rate API response: 200");

        let unsupported = case("exchange_rate XYZ").with_test_data(json!({"to_currency": "XYZ"}));
        let result = executor.execute(&unsupported, &spec).await;
        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.message, "Exchange rate API response: 400");
    }

    #[tokio::test]
    async fn test_stock_network_failure_is_failed_not_error() {
        let executor = offline_executor();
        let spec = ApiSpec::new("Stock Market API", ApiKind::Stock);
        let result = executor.execute(&case("get_stock_price AAPL"), &spec).await;

        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.message, "Stock price API response: 500");
    }

    #[tokio::test]
    async fn test_explicit_action_overrides_name() {
        let executor = TestExecutor::default();
        let mut lookup = case("Account lookup");
        lookup.action = TestAction::AccountBalance;
        let result = executor.execute(&lookup, &banking()).await;
        assert_eq!(result.status, TestStatus::Passed);
    }
}
