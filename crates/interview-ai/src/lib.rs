//! Heuristic engines and workflow services for interview practice.
//!
//! The crate is organized around the practice workflow: a role-aware question
//! selector, a rule-based answer scorer, a personality insight analyzer, and
//! the session service that composes them behind an HTTP router.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
