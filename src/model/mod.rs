//! Declarative request models.
//!
//! A model maps field names to rule sets and is the only configuration a
//! validator takes. Models are plain JSON objects on the wire, keep their
//! declaration order, and are immutable once registered.

mod errors;
mod registry;
mod types;

pub use errors::{ModelError, ModelResult};
pub use registry::ModelRegistry;
pub use types::{Model, RuleSet};
