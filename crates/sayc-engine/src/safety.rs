//! The last line of defense. Every candidate, conventional or natural,
//! passes through here before it becomes the engine's answer. A failed
//! check never escalates: the substitute is always Pass, with the
//! rejection recorded for the trace.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::error::EngineError;
use crate::evaluator::{min_combined_for_nt, min_combined_for_suited};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Strain};

/// The vetted outcome: the call to make, and the rejection that forced
/// a Pass substitution, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vetted {
    pub call: Call,
    pub rejection: Option<EngineError>,
}

impl Vetted {
    fn clean(call: Call) -> Self {
        Self {
            call,
            rejection: None,
        }
    }

    fn rejected(rejection: EngineError) -> Self {
        Self {
            call: Call::Pass,
            rejection: Some(rejection),
        }
    }
}

pub fn vet(
    candidate: &Candidate,
    auction: &Auction,
    ctx: &ConventionContext,
    hand: &Hand,
    config: &EngineConfig,
) -> Vetted {
    // Legality first: a call the auction rejects never goes out.
    let mut trial = auction.clone();
    if trial.try_call(candidate.call).is_err() {
        let rejection = EngineError::IllegalCallAttempted {
            call: candidate.call,
        };
        tracing::warn!(call = %candidate.call, "substituting Pass: {}", rejection);
        return Vetted::rejected(rejection);
    }

    let Some(level) = candidate.call.level() else {
        return Vetted::clean(candidate.call);
    };

    // Escalation clamp: natural bids may not leap more than the
    // configured delta over the standing level. Conventional calls are
    // exempt; their shapes are fixed by agreement.
    if candidate.convention.is_none() && ctx.current_level > 0 {
        let jump = level.saturating_sub(ctx.current_level);
        if jump > config.escalation_delta {
            let rejection = EngineError::EscalationRejected {
                call: candidate.call,
                jump,
                max: config.escalation_delta,
            };
            tracing::warn!(call = %candidate.call, "substituting Pass: {}", rejection);
            return Vetted::rejected(rejection);
        }
    }

    // Slam gates apply to everything, conventions included.
    if level >= 6 {
        let required = if level == 7 {
            config.grand_slam_hcp
        } else {
            config.slam_hcp
        };
        let table = if candidate.call.strain() == Some(Strain::NoTrump) {
            min_combined_for_nt(level)
        } else {
            min_combined_for_suited(level)
        };
        let required = required.max(table);
        let estimated = ctx.combined_estimate(hand);
        if estimated < required {
            let rejection = EngineError::InsufficientStrengthForLevel {
                call: candidate.call,
                required,
                estimated,
            };
            tracing::warn!(call = %candidate.call, "substituting Pass: {}", rejection);
            return Vetted::rejected(rejection);
        }
    }

    Vetted::clean(candidate.call)
}
