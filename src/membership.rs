// File: src/membership.rs
// "Is x in this list?" helpers, strict and coercive
use serde_json::Value;

/// True if any element equals `target`.
pub fn is_in<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}

/// True if `pred` holds for any element. Lets call sites bring their own
/// notion of equality (case folding, id-only comparison, ...).
pub fn is_in_by<T, F>(items: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(pred)
}

/// Membership under [`loose_eq`], so `"1"` is found in `[1, 2, 3]`.
pub fn is_in_loose(items: &[Value], target: &Value) -> bool {
    items.iter().any(|item| loose_eq(item, target))
}

/// Coercive equality between JSON values, the way browser-side chart code
/// compares values coming from query strings against numeric data.
///
/// * `null` only equals `null`.
/// * A string compared to a number is read as a number (trimmed, empty is 0).
/// * Booleans become 0 / 1 before any mixed comparison.
/// * Arrays compared to a primitive use their comma-joined text.
/// * Arrays and objects compare structurally with their own kind; an object
///   never equals a primitive.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,

        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => a == b,

        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loose_eq(&Value::from(u8::from(*x)), other)
        }

        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match (n.as_f64(), string_to_number(s)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }

        (Value::Array(items), other) | (other, Value::Array(items)) => match other {
            Value::Object(_) => false,
            _ => loose_eq(&Value::String(join_array(items)), other),
        },

        (Value::Object(_), _) | (_, Value::Object(_)) => false,
    }
}

/// Numeric reading of a string; `None` stands for NaN.
fn string_to_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust also accepts "inf" / "nan"; only plain decimal notation counts here
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn join_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match n.as_f64() {
                Some(f) => f.to_string(),
                None => n.to_string(),
            },
            Value::Array(inner) => join_array(inner),
            Value::Object(_) => "[object Object]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
