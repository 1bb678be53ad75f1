//
//  launchpad-client
//  cli/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Parsing of `key=value` arguments.

use anyhow::{bail, Result};
use serde_json::Value;

/// Parses `key=value`, inferring a JSON type for the value.
///
/// `true`, `false`, `null`, numbers, and values starting with `[` or `{`
/// that parse as JSON keep their JSON type; everything else is a string.
pub fn parse_field(field: &str) -> Result<(String, Value)> {
    let (key, value_str) = split_pair(field)?;

    let value = if value_str == "true" {
        Value::Bool(true)
    } else if value_str == "false" {
        Value::Bool(false)
    } else if value_str == "null" {
        Value::Null
    } else if let Ok(n) = value_str.parse::<i64>() {
        Value::Number(n.into())
    } else if let Ok(n) = value_str.parse::<f64>() {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::String(value_str.to_string()))
    } else if value_str.starts_with('[') || value_str.starts_with('{') {
        serde_json::from_str(value_str).unwrap_or(Value::String(value_str.to_string()))
    } else {
        Value::String(value_str.to_string())
    };

    Ok((key.to_string(), value))
}

/// Parses `key=value` keeping the value as a raw string.
pub fn parse_param(field: &str) -> Result<(String, String)> {
    let (key, value) = split_pair(field)?;
    Ok((key.to_string(), value.to_string()))
}

fn split_pair(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}
