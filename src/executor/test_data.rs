//! Typed access to a test case's free-form `test_data`

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::TestCase;

#[derive(Error, Debug, PartialEq)]
pub enum TestDataError {
    #[error("test_data.{key} must be {expected}, got {found}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: String,
    },
    #[error("test_data must be an object, got {0}")]
    NotAnObject(String),
}

fn wrong_type(key: &str, expected: &'static str, value: &Value) -> TestDataError {
    TestDataError::WrongType {
        key: key.to_string(),
        expected,
        found: value.to_string(),
    }
}

fn fields(case: &TestCase) -> Result<Option<&Map<String, Value>>, TestDataError> {
    match &case.test_data {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(TestDataError::NotAnObject(other.to_string())),
    }
}

fn lookup<'a>(case: &'a TestCase, key: &str) -> Result<Option<&'a Value>, TestDataError> {
    Ok(fields(case)?.and_then(|map| map.get(key)))
}

/// String value for `key`, or `default` when absent or null
pub fn string_or(case: &TestCase, key: &str, default: &str) -> Result<String, TestDataError> {
    match lookup(case, key)? {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(wrong_type(key, "a string", other)),
    }
}

/// Numeric value for `key`, or `default` when absent or null
pub fn number_or(case: &TestCase, key: &str, default: f64) -> Result<f64, TestDataError> {
    match lookup(case, key)? {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| wrong_type(key, "a number", value)),
    }
}
