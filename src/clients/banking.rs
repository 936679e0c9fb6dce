//! In-memory mock banking API
//!
//! Accounts and an append-only transaction log live for the lifetime of a
//! `MockBankingApi` value. Mutation goes through `&mut self`, so only one
//! caller can transfer at a time; share the store behind a lock if tests are
//! ever run in parallel.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::ApiResponse;
use crate::utils::Timer;

/// A bank account held by the mock store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
    pub currency: String,
    pub status: String,
}

impl Account {
    pub fn new(
        account_id: impl Into<String>,
        account_number: impl Into<String>,
        account_type: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            account_number: account_number.into(),
            account_type: account_type.into(),
            balance,
            currency: "USD".to_string(),
            status: "active".to_string(),
        }
    }
}

/// A completed transfer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    fn touches(&self, account_id: &str) -> bool {
        self.from_account == account_id || self.to_account == account_id
    }
}

/// Mock banking API backed by an in-memory account store
#[derive(Clone, Debug)]
pub struct MockBankingApi {
    accounts: BTreeMap<String, Account>,
    transactions: Vec<Transaction>,
}

impl MockBankingApi {
    /// Store seeded with ACC001 (checking, 5000.00) and ACC002 (savings, 15000.00)
    pub fn new() -> Self {
        Self::with_accounts(vec![
            Account::new("ACC001", "1234567890", "checking", 5000.00),
            Account::new("ACC002", "2345678901", "savings", 15000.00),
        ])
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.account_id.clone(), a))
                .collect(),
            transactions: Vec::new(),
        }
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// Sum of every balance in the store
    pub fn total_balance(&self) -> f64 {
        self.accounts.values().map(|a| a.balance).sum()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get_balance(&self, account_id: &str) -> ApiResponse {
        let timer = Timer::start();

        match self.accounts.get(account_id) {
            Some(account) => ApiResponse::ok(
                json!({
                    "account_id": account_id,
                    "balance": account.balance,
                    "currency": account.currency,
                    "timestamp": Utc::now().to_rfc3339(),
                }),
                timer.elapsed_secs(),
            ),
            None => ApiResponse::error(404, "Account not found", timer.elapsed_secs()),
        }
    }

    /// Move `amount` from one account to another.
    ///
    /// Every check runs before either balance changes, so a rejected
    /// transfer leaves the store untouched.
    pub fn transfer(&mut self, from_id: &str, to_id: &str, amount: f64) -> ApiResponse {
        let timer = Timer::start();

        let Some(from) = self.accounts.get(from_id) else {
            return ApiResponse::error(404, "Source account not found", timer.elapsed_secs());
        };
        if !self.accounts.contains_key(to_id) {
            return ApiResponse::error(404, "Destination account not found", timer.elapsed_secs());
        }
        if !amount.is_finite() {
            return ApiResponse::error(400, "Invalid amount", timer.elapsed_secs());
        }
        if amount > from.balance {
            return ApiResponse::error(400, "Insufficient funds", timer.elapsed_secs());
        }

        if let Some(from) = self.accounts.get_mut(from_id) {
            from.balance -= amount;
        }
        if let Some(to) = self.accounts.get_mut(to_id) {
            to.balance += amount;
        }

        let transaction = Transaction {
            transaction_id: self.next_transaction_id(),
            from_account: from_id.to_string(),
            to_account: to_id.to_string(),
            amount,
            status: "completed".to_string(),
            timestamp: Utc::now(),
        };
        debug!(
            "Transfer {} {} -> {} ({:.2})",
            transaction.transaction_id, from_id, to_id, amount
        );

        let payload = serde_json::to_value(&transaction).unwrap_or_default();
        self.transactions.push(transaction);

        ApiResponse::ok(payload, timer.elapsed_secs())
    }

    /// Most recent `limit` transactions touching the account, in insertion order
    pub fn history(&self, account_id: &str, limit: usize) -> ApiResponse {
        let timer = Timer::start();

        let matching: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.touches(account_id))
            .collect();
        let start = matching.len().saturating_sub(limit);

        ApiResponse::ok(
            json!({
                "account_id": account_id,
                "transactions": &matching[start..],
                "total_count": matching.len(),
            }),
            timer.elapsed_secs(),
        )
    }

    fn next_transaction_id(&self) -> String {
        let mut rng = rand::rng();
        loop {
            let id = format!("TXN{}", rng.random_range(100_000..=999_999));
            if !self.transactions.iter().any(|t| t.transaction_id == id) {
                return id;
            }
        }
    }
}

impl Default for MockBankingApi {
    fn default() -> Self {
        Self::new()
    }
}
