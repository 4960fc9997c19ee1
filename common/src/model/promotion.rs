use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// A promotion as returned by the promotions service.
///
/// The record is owned by the server; the client only ever holds read-only
/// copies of it, either decoded into the form or listed in the search results.
///
/// `available` and `discount` are kept as raw JSON because the service is not
/// strict about their types: availability only counts when it is the literal
/// boolean `true`, and the discount may arrive as a number or a string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Promotion {
    /// Server-assigned identifier.
    pub id: PromotionId,
    /// Product the promotion applies to. Older service builds emit `product_id`.
    #[serde(default, alias = "product_id")]
    pub productid: String,
    /// Free-form category (e.g. percentage, dollar amount off).
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub available: Value,
    #[serde(default)]
    pub discount: Value,
}

impl Promotion {
    /// `true` only when the service sent the boolean `true`.
    pub fn is_available(&self) -> bool {
        self.available == Value::Bool(true)
    }
}

/// Opaque identifier of a promotion; numeric in practice but never inspected.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PromotionId {
    Number(Number),
    Text(String),
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionId::Number(n) => f.write_str(&display_number(n)),
            PromotionId::Text(s) => f.write_str(s),
        }
    }
}

/// Body sent on create and update. The identifier travels in the URL.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PromotionPayload {
    pub productid: String,
    pub category: String,
    pub available: bool,
    pub discount: String,
}

/// Renders a JSON value the way the results table shows it: strings verbatim,
/// numbers without a trailing `.0`, everything else in its JSON spelling.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => display_number(n),
        other => other.to_string(),
    }
}

/// Like `display_value`, but a missing value shows as an empty input.
pub fn form_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => display_value(other),
    }
}

fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        display_float(f)
    } else {
        n.to_string()
    }
}

/// Number-to-string as a browser does it: plain decimals for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign outside, and no
/// negative zero.
fn display_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let scientific = format!("{f:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => scientific,
    }
}
