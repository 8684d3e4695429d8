//! Request validation engine.
//!
//! Validation runs in three steps:
//!
//! 1. every non-optional model field must be a payload key
//! 2. the payload may not hold more keys than the model declares fields
//! 3. every declared rule is dispatched against the field value
//!
//! Step 2 is an arity comparison only, not a key-subset check: a payload
//! whose key count equals the model's passes it even when the key sets
//! differ. Step 3 scans every field and rule without stopping, so a later
//! failure overwrites an earlier one in the reported message. Both
//! behaviors are contract; callers depend on the exact messages and
//! semantics.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::Model;
use crate::rules;
use crate::value;

// Verdict messages are external contract; callers surface them verbatim.
const MSG_OK: &str = "Ok";
const MSG_MISSING_REQUIRED: &str = "Request don't obey to the model requirement.";
const MSG_EXCESS_PROPERTIES: &str = "Request has more properties then model.";

/// The single pass/fail result of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    fn ok() -> Self {
        Self {
            valid: true,
            message: MSG_OK.to_string(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    fn rule_failure(field: &str, rule: &str) -> Self {
        Self::fail(format!(
            "Request didn't pass on {} {} validation.",
            field, rule
        ))
    }
}

/// Validates request payloads against one declarative model.
///
/// The validator owns its model and keeps no other state; `validate`
/// reads only the model and the passed-in payload, so a single instance
/// can serve concurrent callers without synchronization.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    model: Model,
}

impl RequestValidator {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Validates a payload, producing exactly one verdict.
    pub fn validate(&self, payload: &Map<String, Value>) -> Verdict {
        if !self.required_keys_present(payload) {
            log::debug!("payload missing a required field");
            return Verdict::fail(MSG_MISSING_REQUIRED);
        }

        if self.model.len() < payload.len() {
            log::debug!(
                "payload has {} keys, model declares {}",
                payload.len(),
                self.model.len()
            );
            return Verdict::fail(MSG_EXCESS_PROPERTIES);
        }

        let mut verdict = Verdict::ok();

        for (field, rule_set) in self.model.fields() {
            let field_value = payload.get(field);
            // A failing rule is ignored when the field is optional and its
            // value is absent or falsy.
            let skip_failures =
                rule_set.is_optional() && !field_value.map_or(false, value::is_truthy);

            for (rule, param) in rule_set.iter() {
                if rule == "optional" {
                    continue;
                }
                let Some(predicate) = rules::lookup(rule) else {
                    log::debug!("skipping unknown rule '{}' on field '{}'", rule, field);
                    continue;
                };

                let passed = predicate(param, field_value.unwrap_or(&Value::Null));
                if !passed && !skip_failures {
                    log::debug!("field '{}' failed rule '{}'", field, rule);
                    verdict = Verdict::rule_failure(field, rule);
                }
            }
        }

        verdict
    }

    fn required_keys_present(&self, payload: &Map<String, Value>) -> bool {
        self.model
            .required_fields()
            .all(|field| payload.contains_key(field))
    }
}
