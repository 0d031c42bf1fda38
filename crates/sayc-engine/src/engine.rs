//! The decision engine: one pure entry point that turns an auction and
//! a hand into the next call.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::{registry, Convention};
use crate::error::EngineError;
use crate::phase::{route, Phase};
use crate::producers::{self, Candidate};
use crate::safety;
use crate::trace::{DecisionTrace, DetectorCheck, HandSummary};
use sayc_core::{Auction, Call, Hand, Vulnerability};

/// The engine's answer for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub call: Call,
    pub reason: String,
    pub trace: DecisionTrace,
}

/// A configured decision engine. Holds only configuration and the
/// detector registry; every call to [`Engine::next_call`] re-derives
/// its view of the auction from scratch.
pub struct Engine {
    config: EngineConfig,
    conventions: Vec<Box<dyn Convention>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            conventions: registry(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide the next call for the seat on turn.
    ///
    /// Pure in (auction, hand, vulnerability): the same inputs always
    /// produce the same decision, and nothing is remembered afterward.
    pub fn next_call(
        &self,
        auction: &Auction,
        hand: &Hand,
        vulnerability: Vulnerability,
    ) -> Result<Decision, EngineError> {
        let seat = auction.current_seat();
        let phase = route(auction, seat);
        if phase == Phase::Terminal {
            return Err(EngineError::NoApplicableProducer { phase });
        }
        let ctx = ConventionContext::derive(auction, seat).with_vulnerability(vulnerability);

        let mut detectors = Vec::with_capacity(self.conventions.len());
        let mut conventional: Option<Candidate> = None;
        for detector in &self.conventions {
            if !detector.enabled(&self.config) {
                continue;
            }
            let applies = detector.applies(&ctx, auction, hand);
            detectors.push(DetectorCheck {
                kind: detector.kind(),
                applied: applies,
            });
            if applies && conventional.is_none() {
                conventional = detector.respond(&ctx, auction, hand, &self.config);
            }
        }

        let (phase, candidate) = match conventional {
            Some(candidate) => {
                let kind = candidate.convention;
                (
                    kind.map_or(phase, Phase::ConventionResponse),
                    candidate,
                )
            }
            None => (
                phase,
                producers::produce(phase, &ctx, auction, hand, &self.config)?,
            ),
        };

        let vetted = safety::vet(&candidate, auction, &ctx, hand, &self.config);
        let reason = match &vetted.rejection {
            None => candidate.reason.clone(),
            Some(rejection) => format!("passing instead: {}", rejection),
        };
        tracing::debug!(
            %seat,
            call = %vetted.call,
            phase = ?phase,
            "{}",
            reason
        );

        Ok(Decision {
            call: vetted.call,
            reason,
            trace: DecisionTrace {
                seat,
                phase,
                hand: HandSummary::from(hand),
                partner_range: ctx.partner_range,
                combined_estimate: ctx.combined_estimate(hand),
                detectors,
                candidate,
                rejection: vetted.rejection,
                call: vetted.call,
            },
        })
    }
}
