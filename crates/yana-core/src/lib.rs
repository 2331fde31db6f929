//! Core of the Yana prototyping backend: the flow scoring subsystem.
//!
//! A [`judge::JudgeService`] rates a generated service [`model::Flow`]
//! against the Diia Flow Scoring Rubric. The LLM-backed judge is tried
//! first; a deterministic rule-based scorer guarantees a complete
//! [`model::Evaluation`] when the judge is unreachable.

pub mod config;
pub mod errors;
pub mod judge;
pub mod model;
pub mod providers;
pub mod retry;
pub mod rubric;
pub mod validate;

pub use errors::{ConfigError, JudgeError};
pub use judge::JudgeService;
pub use model::{Evaluation, Flow, RetrievalContext};
