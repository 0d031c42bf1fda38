//! SAYC bidding decision engine.
//!
//! Given an auction in progress and the hand of the seat to act, the
//! engine produces the next call with a human-readable rationale.
//! Evaluation is a pure function of (auction, hand, vulnerability);
//! nothing is cached between turns and nothing reads ambient state.

pub mod config;
pub mod context;
pub mod conventions;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod phase;
pub mod producers;
pub mod safety;
pub mod trace;

pub use config::EngineConfig;
pub use context::ConventionContext;
pub use conventions::ConventionKind;
pub use engine::{Decision, Engine};
pub use error::EngineError;
pub use phase::Phase;
pub use producers::Candidate;
pub use trace::DecisionTrace;
