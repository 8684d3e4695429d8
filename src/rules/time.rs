//! Fixed time-format patterns for the `timeFormat` rule.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// Pattern table. The 24-hour variants keep the historical 00-24 hour
/// range; the ` a` variants are 12-hour with an uppercase AM/PM suffix.
/// All patterns are anchored: the whole string must match.
const PATTERNS: &[(&str, &str)] = &[
    ("hh:mm", r"^([0-1]\d|2[0-4]):[0-5]\d$"),
    ("hh:mm:ss", r"^([0-1]\d|2[0-4]):[0-5]\d:[0-5]\d$"),
    ("hh:mm a", r"^(0[1-9]|1[0-2]):[0-5]\d (AM|PM)$"),
    ("hh:mm:ss a", r"^(0[1-9]|1[0-2]):[0-5]\d:[0-5]\d (AM|PM)$"),
];

/// Compiled patterns, built once on first use.
fn compiled() -> &'static HashMap<&'static str, Regex> {
    static COMPILED: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|(name, pattern)| {
                let regex = Regex::new(pattern).expect("fixed time pattern compiles");
                (*name, regex)
            })
            .collect()
    })
}

/// Whether the pattern name is one of the recognized formats.
pub(crate) fn is_known_pattern(name: &str) -> bool {
    PATTERNS.iter().any(|(known, _)| *known == name)
}

/// The `timeFormat` predicate: value must be a string fully matching the
/// named pattern. Unknown pattern names and non-string values yield false.
pub(crate) fn time_format(param: &Value, value: &Value) -> bool {
    let (Some(name), Some(text)) = (param.as_str(), value.as_str()) else {
        return false;
    };
    compiled().get(name).map_or(false, |regex| regex.is_match(text))
}
