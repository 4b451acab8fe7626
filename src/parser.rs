//! Parsers for grade lists given as text.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parses a grade collection from text.
///
/// Accepts either a JSON array (`[4, "x", null]`) or a comma and/or
/// whitespace separated list (`4, 6.5 abc`). List tokens that are JSON
/// scalars keep their JSON type; anything else is kept as text so the
/// admissibility check can reject it later.
///
/// # Errors
///
/// Returns an error if the input looks like a JSON array but does not parse.
pub fn parse_grades(input: &str) -> Result<Vec<Value>> {
    let trimmed = input.trim();
    if trimmed.starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(trimmed).context("Malformed JSON grade array")?;
        return Ok(values);
    }

    Ok(split_tokens(trimmed).map(parse_token).collect())
}

/// Parses a strictly numeric list, as required for rescaling.
///
/// # Errors
///
/// Returns an error naming the first token that is not a number.
pub fn parse_numbers(input: &str) -> Result<Vec<f64>> {
    split_tokens(input.trim())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("'{token}' is not a number"))
        })
        .collect()
}

fn split_tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn parse_token(token: &str) -> Value {
    match serde_json::from_str::<Value>(token) {
        Ok(value) if !value.is_array() && !value.is_object() => value,
        _ => Value::String(token.to_string()),
    }
}
