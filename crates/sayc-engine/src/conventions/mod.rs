//! Convention detectors. Each detector decides from the live auction
//! whether its convention is in force for the seat to act, and if so
//! produces the conventional call. Detection is recomputed from scratch
//! every turn; no detector holds state between calls.

mod blackwood;
mod doubles;
mod michaels;
mod stayman;
mod transfers;

pub use blackwood::{Blackwood, BlackwoodContinuation, BlackwoodResponse};
pub use doubles::{NegativeDouble, TakeoutDouble};
pub use michaels::Michaels;
pub use stayman::{Stayman, StaymanResponse};
pub use transfers::{JacobyTransfer, TransferCompletion};

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::producers::Candidate;
use sayc_core::{Auction, Hand};
use serde::{Deserialize, Serialize};

/// Which convention a detector implements. Ordering here is cosmetic;
/// precedence is the registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConventionKind {
    BlackwoodResponse,
    BlackwoodContinuation,
    TransferCompletion,
    StaymanResponse,
    Stayman,
    JacobyTransfer,
    Blackwood,
    /// Direct notrump slam raises; produced by the response producer
    /// rather than a detector, but conventional for the safety layer.
    Quantitative,
    Michaels,
    NegativeDouble,
    TakeoutDouble,
}

/// A convention detector. `applies` judges the auction shape alone;
/// `respond` additionally consults the hand and may still decline, in
/// which case the phase producers take over.
pub trait Convention: Send + Sync {
    fn kind(&self) -> ConventionKind;

    fn enabled(&self, config: &EngineConfig) -> bool;

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, hand: &Hand) -> bool;

    fn respond(
        &self,
        ctx: &ConventionContext,
        auction: &Auction,
        hand: &Hand,
        config: &EngineConfig,
    ) -> Option<Candidate>;
}

/// All detectors in precedence order. Obligatory replies (answering an
/// ace ask, completing a transfer) come before initiations so that a
/// hand which could start a new convention still honors the one in
/// progress.
pub fn registry() -> Vec<Box<dyn Convention>> {
    vec![
        Box::new(BlackwoodResponse),
        Box::new(BlackwoodContinuation),
        Box::new(TransferCompletion),
        Box::new(StaymanResponse),
        Box::new(Stayman),
        Box::new(JacobyTransfer),
        Box::new(Blackwood),
        Box::new(Michaels),
        Box::new(NegativeDouble),
        Box::new(TakeoutDouble),
    ]
}
