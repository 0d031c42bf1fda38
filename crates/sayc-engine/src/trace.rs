//! Serializable decision traces: everything a caller needs to see why
//! the engine chose a call.

use crate::context::ShownRange;
use crate::conventions::ConventionKind;
use crate::error::EngineError;
use crate::phase::Phase;
use crate::producers::Candidate;
use sayc_core::{Call, Hand, Seat};
use serde::{Deserialize, Serialize};

/// Enough of the hand to audit the decision without leaking the full
/// holding into every log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hcp: u8,
    /// Suit lengths in clubs, diamonds, hearts, spades order.
    pub distribution: [u8; 4],
    pub aces: u8,
    pub balanced: bool,
}

impl From<&Hand> for HandSummary {
    fn from(hand: &Hand) -> Self {
        Self {
            hcp: hand.hcp(),
            distribution: hand.distribution(),
            aces: hand.aces(),
            balanced: hand.is_balanced(),
        }
    }
}

/// One detector's verdict this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorCheck {
    pub kind: ConventionKind,
    pub applied: bool,
}

/// The full record of one turn's evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTrace {
    pub seat: Seat,
    pub phase: Phase,
    pub hand: HandSummary,
    pub partner_range: ShownRange,
    pub combined_estimate: u8,
    /// Every detector consulted, in precedence order.
    pub detectors: Vec<DetectorCheck>,
    /// What the producer or detector proposed.
    pub candidate: Candidate,
    /// Why the safety layer overrode the candidate, when it did.
    pub rejection: Option<EngineError>,
    /// The call actually made.
    pub call: Call,
}
