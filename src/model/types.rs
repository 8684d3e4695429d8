//! Model type definitions.
//!
//! Recognized rule names: `type`, `optional`, `length`, `maxLength`,
//! `minLength`, `maxValue`, `minValue`, `valueBetween`, `equalTo`,
//! `timeFormat`. `type` is conventionally declared first but the engine
//! does not require it. Unknown names are representable and skipped at
//! dispatch time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules;
use crate::value;

/// The set of named rules declared for one field.
///
/// Rule names map to their parameters in declaration order. `optional` is
/// an engine flag rather than a predicate; a truthy parameter marks the
/// field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, Value>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, builder style.
    pub fn rule(mut self, name: impl Into<String>, param: impl Into<Value>) -> Self {
        self.rules.insert(name.into(), param.into());
        self
    }

    /// Marks the field optional.
    pub fn optional(self) -> Self {
        self.rule("optional", true)
    }

    /// Whether the field is optional: a truthy `optional` parameter.
    pub fn is_optional(&self) -> bool {
        self.rules.get("optional").map_or(false, value::is_truthy)
    }

    /// The parameter declared for a rule name, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.rules.get(name)
    }

    /// Declared (name, parameter) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.rules.iter().map(|(name, param)| (name.as_str(), param))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A declarative request model: field names to rule sets.
///
/// Field names are case-sensitive and matched exactly. Iteration follows
/// declaration order, which is also the order the engine scans fields in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model {
    fields: IndexMap<String, RuleSet>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field, builder style.
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// The rule set declared for a field, if any.
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.fields.get(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names that must be present in every payload.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, rules)| !rules.is_optional())
            .map(|(name, _)| name.as_str())
    }

    /// Checks the model itself, not a payload.
    ///
    /// Rejects rule parameters that can never succeed: an unrecognized
    /// `type` name, an unrecognized `timeFormat` name, or a `valueBetween`
    /// parameter that is not a two-number pair. Unknown rule names and
    /// non-boolean `optional` flags are only warned about, since the
    /// engine has defined behavior for both.
    pub fn validate_structure(&self) -> Result<(), String> {
        for (field, rules) in self.fields() {
            for (name, param) in rules.iter() {
                match name {
                    "optional" => {
                        if !param.is_boolean() {
                            log::warn!("model field '{}': non-boolean optional flag", field);
                        }
                    }
                    "type" => {
                        let known = param
                            .as_str()
                            .map_or(false, |t| rules::TYPE_NAMES.contains(&t));
                        if !known {
                            return Err(format!(
                                "field '{}': unknown type parameter {}",
                                field, param
                            ));
                        }
                    }
                    "timeFormat" => {
                        let known = param.as_str().map_or(false, rules::is_known_pattern);
                        if !known {
                            return Err(format!(
                                "field '{}': unknown time format {}",
                                field, param
                            ));
                        }
                    }
                    "valueBetween" => {
                        let pair = param.as_array().map_or(false, |bounds| {
                            bounds.len() == 2 && bounds.iter().all(Value::is_number)
                        });
                        if !pair {
                            return Err(format!(
                                "field '{}': valueBetween expects a [min, max] pair",
                                field
                            ));
                        }
                    }
                    _ if !rules::is_known(name) => {
                        log::warn!(
                            "model field '{}': unknown rule '{}' will be skipped",
                            field,
                            name
                        );
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
