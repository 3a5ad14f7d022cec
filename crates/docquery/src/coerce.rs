//! Value coercion.
//!
//! Request parameters carry no type information. [`coerce`] infers a
//! concrete [`Value`] from the raw text and the operator it will be used
//! with, so numeric and temporal comparisons work without a schema.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::op::Operator;
use crate::value::{List, Value};

/// Formats tried for timestamps that carry their own UTC offset.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
];

/// Formats tried for timestamps without an offset; these are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d %b %Y", "%Y/%m/%d"];

/// Infers a typed value for `raw` in the context of `op`.
///
/// - `regex` operands and empty strings are returned verbatim.
/// - `null` / `nil` (any case) become [`Value::Null`].
/// - `in` / `nin` operands are split on `,` and typed only when every
///   element coerces to the same type (integer, then float, then
///   timestamp); otherwise the list stays a list of strings.
/// - Scalars try integer, float, boolean, then timestamp, and fall back
///   to the raw string.
pub fn coerce(raw: &str, op: Operator) -> Value {
    if op == Operator::Regex || raw.is_empty() {
        return Value::String(raw.to_string());
    }

    if raw.eq_ignore_ascii_case("null") || raw.eq_ignore_ascii_case("nil") {
        return Value::Null;
    }

    if op.is_list_op() {
        Value::List(coerce_list(raw))
    } else {
        coerce_scalar(raw)
    }
}

fn coerce_list(raw: &str) -> List {
    let items: Vec<&str> = raw.split(',').collect();

    if let Some(ints) = all(&items, parse_int) {
        return List::Int(ints);
    }
    if let Some(floats) = all(&items, parse_float) {
        return List::Float(floats);
    }
    if let Some(times) = all(&items, parse_timestamp) {
        return List::Timestamp(times);
    }
    List::String(items.into_iter().map(str::to_string).collect())
}

fn coerce_scalar(raw: &str) -> Value {
    if let Some(n) = parse_int(raw) {
        return Value::Int(n);
    }
    if let Some(n) = parse_float(raw) {
        return Value::Float(n);
    }
    if let Some(b) = parse_bool(raw) {
        return Value::Bool(b);
    }
    if let Some(t) = parse_timestamp(raw) {
        return Value::Timestamp(t);
    }
    Value::String(raw.to_string())
}

/// Applies `parse` to every item, succeeding only if all items parse.
fn all<T>(items: &[&str], parse: fn(&str) -> Option<T>) -> Option<Vec<T>> {
    items.iter().map(|item| parse(item)).collect()
}

/// Parses a signed integer literal.
///
/// Accepts decimal digits and the `0x`, `0o` and `0b` radix prefixes,
/// each with an optional leading sign.
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, body) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match body.get(..2) {
        Some("0x") | Some("0X") => (16, &body[2..]),
        Some("0o") | Some("0O") => (8, &body[2..]),
        Some("0b") | Some("0B") => (2, &body[2..]),
        _ => (10, body),
    };

    // from_str_radix accepts its own sign; reject a second one
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Parses a finite floating point literal.
pub fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses the boolean spellings `1`, `t`, `true`, `0`, `f`, `false`
/// (with `TRUE`/`True` style capitalization).
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Parses a timestamp in one of the common textual layouts.
///
/// RFC 3339 and RFC 2822 are tried first, then ISO-like layouts with and
/// without an offset, then bare dates (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(s) {
        return Some(t.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(t) = DateTime::parse_from_str(s, format) {
            return Some(t.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Some(t.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return d.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
        }
    }
    None
}
