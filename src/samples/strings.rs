//! Raw string literals and multi-line formatting.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::SampleResult;

// Quotes need no escaping inside r#"..."#
const EMPLOYEE_JSON: &str = r#"{
    "name": "John Doe",
    "age": 30,
    "isEmployee": true
}"#;

pub fn format_json_string() -> &'static str {
    EMPLOYEE_JSON
}

pub fn parse_json_sample() -> SampleResult<Value> {
    Ok(serde_json::from_str(format_json_string())?)
}

/// Three-line greeting with the date spelled out, e.g. "January 01, 2023".
pub fn format_welcome_message(name: &str, date: NaiveDate) -> String {
    format!(
        "Hello, {}.\nWelcome on {}.\nEnjoy your stay!",
        name,
        date.format("%B %d, %Y")
    )
}

/// Windows-style path; backslashes stay literal in a raw string.
pub fn raw_path() -> &'static str {
    r"C:\Users\samples\data.json"
}
