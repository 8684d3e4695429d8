//! Kind-normalized value helpers shared by the rule library and the engine.

use serde_json::Value;

/// Returns the normalized "length" of a value regardless of its kind.
///
/// - numbers: character count of the decimal string representation
///   (`-12` has length 3, `100` has length 3)
/// - strings: character count
/// - arrays: element count
/// - objects: own key count
/// - booleans and null: 0 (no length concept, deliberate fallback)
pub fn length_of(value: &Value) -> usize {
    match value {
        Value::Number(n) => n.to_string().len(),
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::Bool(_) | Value::Null => 0,
    }
}

/// Truthiness as request payloads use it: null, `false`, zero and the
/// empty string are falsy; arrays and objects are always truthy, even when
/// empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Runtime kind name of a value, as the `type` rule understands it.
///
/// Arrays have their own kind and are never reported as `object`.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_length_of_numbers_counts_decimal_digits() {
        assert_eq!(length_of(&json!(100)), 3);
        assert_eq!(length_of(&json!(-12)), 3);
        assert_eq!(length_of(&json!(12345)), 5);
        assert_eq!(length_of(&json!(0)), 1);
    }

    #[test]
    fn test_length_of_strings_counts_characters() {
        assert_eq!(length_of(&json!("abcde")), 5);
        assert_eq!(length_of(&json!("")), 0);
        // character count, not byte count
        assert_eq!(length_of(&json!("héllo")), 5);
    }

    #[test]
    fn test_length_of_collections() {
        assert_eq!(length_of(&json!([1, 2, 3])), 3);
        assert_eq!(length_of(&json!({"a": 1, "b": 2})), 2);
        assert_eq!(length_of(&json!([])), 0);
    }

    #[test]
    fn test_length_of_unsized_kinds_is_zero() {
        assert_eq!(length_of(&json!(true)), 0);
        assert_eq!(length_of(&json!(false)), 0);
        assert_eq!(length_of(&Value::Null), 0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&json!(1)), "number");
        assert_eq!(kind_name(&json!("s")), "string");
        assert_eq!(kind_name(&json!(true)), "boolean");
        assert_eq!(kind_name(&json!([1])), "array");
        assert_eq!(kind_name(&json!({})), "object");
        assert_eq!(kind_name(&Value::Null), "null");
    }
}
