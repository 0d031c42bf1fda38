//! Phase producers: the natural-bidding fallbacks that run when no
//! convention detector claims the turn. Each producer returns a single
//! candidate; the safety layer has the final word.

mod competitive;
mod opening;
mod rebid;
mod response;

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::ConventionKind;
use crate::error::EngineError;
use crate::phase::Phase;
use sayc_core::{Auction, Call, Hand};
use serde::{Deserialize, Serialize};

/// A proposed call with its rationale. Conventional candidates carry
/// their convention, which exempts them from the escalation clamp but
/// not from the slam strength gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub call: Call,
    pub reason: String,
    pub convention: Option<ConventionKind>,
}

impl Candidate {
    pub fn new(call: Call, reason: impl Into<String>) -> Self {
        Self {
            call,
            reason: reason.into(),
            convention: None,
        }
    }

    pub fn conventional(call: Call, reason: impl Into<String>, kind: ConventionKind) -> Self {
        Self {
            call,
            reason: reason.into(),
            convention: Some(kind),
        }
    }

    pub fn pass(reason: impl Into<String>) -> Self {
        Self::new(Call::Pass, reason)
    }
}

/// Dispatch a phase to its producer. Every live phase has one; the two
/// synthetic phases report a coverage gap instead of guessing.
pub fn produce(
    phase: Phase,
    ctx: &ConventionContext,
    auction: &Auction,
    hand: &Hand,
    config: &EngineConfig,
) -> Result<Candidate, EngineError> {
    match phase {
        Phase::Opening => Ok(opening::choose(ctx, hand)),
        Phase::FirstResponse => Ok(response::first_response(ctx, auction, hand)),
        Phase::OpenerRebid => Ok(rebid::opener_rebid(ctx, auction, hand, config)),
        Phase::ResponderRebid => Ok(rebid::responder_rebid(ctx, auction, hand, config)),
        Phase::Overcall => Ok(competitive::overcall(ctx, auction, hand)),
        Phase::Advance => Ok(competitive::advance(ctx, auction, hand)),
        Phase::CompetitiveContinuation => {
            Ok(competitive::continuation(ctx, auction, hand, config))
        }
        Phase::ConventionResponse(_) | Phase::Terminal => {
            Err(EngineError::NoApplicableProducer { phase })
        }
    }
}
