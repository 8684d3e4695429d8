//! Validator engine.
//!
//! # Design principles
//!
//! - One call, one verdict; no partial validation
//! - Never panics, never returns an error: malformed input is a failed
//!   verdict, not an exception
//! - Stateless across calls beyond the immutable model
//! - Deterministic: fields and rules are scanned in declaration order

mod engine;

pub use engine::{RequestValidator, Verdict};
