//! Conversion of raw query-string parameters into exact-match document filters.
//!
//! Query strings only carry text, while documents store typed JSON. Fields
//! listed in [`NUMERIC_FIELDS`] are coerced to JSON numbers so `?rating=8`
//! matches a stored `8` and never a stored `"8"`.

use std::collections::HashMap;

use serde_json::{Number, Value};

use crate::types::Document;

/// Query parameters that are always compared as numbers.
pub const NUMERIC_FIELDS: &[&str] = &["rating"];

/// Build an exact-match filter from query parameters.
///
/// Returns `None` when a numeric field holds text that is not a finite
/// number. No stored document can match such a filter, so callers should
/// answer with an empty result instead of querying.
///
/// An empty value for a numeric field is kept as an empty string, the same
/// as any other text parameter.
pub fn filter_from_query(params: &HashMap<String, String>) -> Option<Document> {
    let mut filter = Document::new();

    for (key, raw) in params {
        let value = if NUMERIC_FIELDS.contains(&key.as_str()) && !raw.is_empty() {
            Value::Number(coerce_number(raw)?)
        } else {
            Value::String(raw.clone())
        };
        filter.insert(key.clone(), value);
    }

    Some(filter)
}

/// Parse text into a JSON number, preferring an integer representation.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected
/// because JSON cannot represent them.
pub fn coerce_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();

    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Number::from(int));
    }

    let float = trimmed.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        return Some(Number::from(float as i64));
    }
    Number::from_f64(float)
}
