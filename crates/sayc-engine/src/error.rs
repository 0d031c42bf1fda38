use crate::phase::Phase;
use sayc_core::Call;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine error taxonomy. The first three kinds are recovered by the
/// safety layer, which substitutes Pass and records the rejection in the
/// decision trace. `NoApplicableProducer` indicates a coverage gap in the
/// phase dispatch and is the only kind that surfaces to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EngineError {
    #[error("producer proposed {call}, which is not legal here")]
    IllegalCallAttempted { call: Call },

    #[error("{call} jumps {jump} levels above the auction; at most {max} allowed without a convention")]
    EscalationRejected { call: Call, jump: u8, max: u8 },

    #[error("{call} needs ~{required} combined points, partnership shows ~{estimated}")]
    InsufficientStrengthForLevel {
        call: Call,
        required: u8,
        estimated: u8,
    },

    #[error("no producer covers phase {phase:?}")]
    NoApplicableProducer { phase: Phase },
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_core::Strain;

    #[test]
    fn test_messages_name_the_call() {
        let err = EngineError::EscalationRejected {
            call: Call::bid(7, Strain::NoTrump),
            jump: 4,
            max: 2,
        };
        assert!(err.to_string().contains("7N"));
        assert!(err.to_string().contains("4 levels"));
    }
}
