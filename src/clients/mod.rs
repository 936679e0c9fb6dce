//! API clients exercised by generated tests
//!
//! The banking and exchange clients are in-memory mocks; the quote client
//! issues a real HTTP call through the shared `HttpClient`.

mod banking;
mod exchange;
pub mod http;
mod quote;

pub use banking::MockBankingApi;
pub use exchange::CurrencyExchangeClient;
pub use http::HttpClient;
pub use quote::StockQuoteClient;
