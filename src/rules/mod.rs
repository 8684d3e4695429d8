//! Rule library: named predicates over request field values.
//!
//! Every rule is a pure `(parameter, value) -> bool` predicate. Dispatch
//! goes through an explicit registry table mapping rule names to function
//! references; there is no dynamic method lookup. `optional` is a field
//! flag consulted by the engine and has no entry here.
//!
//! Predicates never panic: a malformed parameter or an alien value kind
//! resolves to `false`.

mod time;

pub(crate) use time::is_known_pattern;

use serde_json::Value;

use crate::value;

/// A rule predicate: `(parameter, value) -> bool`.
pub type RuleFn = fn(param: &Value, value: &Value) -> bool;

/// Type names the `type` rule recognizes. Arrays are matched only by the
/// literal name `array`, never by `object`.
pub(crate) const TYPE_NAMES: &[&str] = &["number", "string", "boolean", "object", "array"];

/// Rule registry: rule name to predicate.
const RULES: &[(&str, RuleFn)] = &[
    ("type", type_matches),
    ("length", length_exact),
    ("maxLength", max_length),
    ("minLength", min_length),
    ("maxValue", max_value),
    ("minValue", min_value),
    ("valueBetween", value_between),
    ("equalTo", equal_to),
    ("timeFormat", time::time_format),
];

/// Looks up a rule predicate by name.
///
/// Unknown names return `None`; the engine skips them during dispatch.
pub fn lookup(name: &str) -> Option<RuleFn> {
    RULES.iter().find(|(rule, _)| *rule == name).map(|(_, f)| *f)
}

/// Whether the given rule name is in the registry.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

fn type_matches(param: &Value, value: &Value) -> bool {
    match param.as_str() {
        Some(expected) if TYPE_NAMES.contains(&expected) => value::kind_name(value) == expected,
        _ => false,
    }
}

fn length_exact(param: &Value, value: &Value) -> bool {
    param
        .as_f64()
        .map_or(false, |expected| value::length_of(value) as f64 == expected)
}

fn max_length(param: &Value, value: &Value) -> bool {
    param
        .as_f64()
        .map_or(false, |limit| value::length_of(value) as f64 <= limit)
}

fn min_length(param: &Value, value: &Value) -> bool {
    param
        .as_f64()
        .map_or(false, |minimum| value::length_of(value) as f64 >= minimum)
}

fn max_value(param: &Value, value: &Value) -> bool {
    match (value.as_f64(), param.as_f64()) {
        (Some(actual), Some(limit)) => actual <= limit,
        _ => false,
    }
}

fn min_value(param: &Value, value: &Value) -> bool {
    match (value.as_f64(), param.as_f64()) {
        (Some(actual), Some(minimum)) => actual >= minimum,
        _ => false,
    }
}

fn value_between(param: &Value, value: &Value) -> bool {
    // Parameter must be an ordered [min, max] pair; anything else fails.
    let bounds = match param.as_array() {
        Some(bounds) if bounds.len() == 2 => bounds,
        _ => return false,
    };

    match (value.as_f64(), bounds[0].as_f64(), bounds[1].as_f64()) {
        (Some(actual), Some(minimum), Some(maximum)) => {
            minimum <= actual && actual <= maximum
        }
        _ => false,
    }
}

fn equal_to(param: &Value, value: &Value) -> bool {
    match (param, value) {
        // Numbers compare numerically so that 1 equals 1.0
        (Value::Number(expected), Value::Number(actual)) => {
            expected.as_f64() == actual.as_f64()
        }
        (Value::String(expected), Value::String(actual)) => expected == actual,
        (Value::Bool(expected), Value::Bool(actual)) => expected == actual,
        _ => false,
    }
}
