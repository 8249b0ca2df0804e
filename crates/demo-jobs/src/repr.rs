//! Representation rules used for parameter comparison
//!
//! Matching compares the *rendered* form of sequence-wrapped values rather
//! than their structure. A sequence renders as its element renderings joined
//! with `,`; nested sequences flatten through the same rule; a null element
//! renders as the empty string. As a result `["a,b"]` and `["a", "b"]` are
//! equal, and so are `5` and `["5"]`.

use serde_json::{Number, Value};

use crate::types::UiValue;

const SEPARATOR: &str = ",";
const OBJECT_REPR: &str = "[object Object]";
const FILE_REPR: &str = "[object File]";

/// Render a sequence of already-rendered elements
#[inline]
#[must_use]
pub fn sequence(elements: &[String]) -> String {
    elements.join(SEPARATOR)
}

/// Render a recorded JSON sequence
#[must_use]
pub fn json_sequence(values: &[Value]) -> String {
    values
        .iter()
        .map(json_element)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render one recorded JSON value as a sequence element
#[must_use]
pub fn json_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => json_sequence(items),
        Value::Object(_) => OBJECT_REPR.to_string(),
    }
}

/// Render one live UI value as a sequence element
#[must_use]
pub fn ui_element(value: &UiValue) -> String {
    match value {
        UiValue::Text(s) => s.clone(),
        UiValue::File(_) => FILE_REPR.to_string(),
        UiValue::List(items) => items
            .iter()
            .map(ui_element)
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    }
}

/// Integers render plainly; floats follow [`float`]
fn number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), float)
}

/// Shortest round-trip digits laid out like ECMAScript `Number::toString`
///
/// With `k` significant digits and decimal exponent `n` (value is
/// `0.d1..dk * 10^n`):
/// - `k <= n <= 21`: digits padded with zeros (`1e20` -> `100000000000000000000`)
/// - `0 < n <= 21`: decimal point inside the digits (`123.456`)
/// - `-6 < n <= 0`: leading `0.` and zeros (`0.000001`)
/// - otherwise exponent form with an explicit sign (`1e-7`, `1.5e+21`)
fn float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat(usize::try_from(n - k).unwrap_or(0)))
    } else if (1..=21).contains(&n) {
        let (int, frac) = digits.split_at(usize::try_from(n).unwrap_or(0));
        format!("{int}.{frac}")
    } else if (-5..=0).contains(&n) {
        format!("0.{}{digits}", "0".repeat(usize::try_from(-n).unwrap_or(0)))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        let exp = (n - 1).abs();
        if rest.is_empty() {
            format!("{lead}e{sign}{exp}")
        } else {
            format!("{lead}.{rest}e{sign}{exp}")
        }
    };

    if f.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}
