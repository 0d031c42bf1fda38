//! Blackwood 4NT: the ace ask, the response ladder, and the asker's
//! continuation once the answer is on the table.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::{Convention, ConventionKind};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Strain, Suit};

const FOUR_NT: Call = Call::Bid {
    level: 4,
    strain: Strain::NoTrump,
};

/// The suit the partnership would play a slam in: the agreed trump, or
/// failing explicit agreement the first suit the side bid.
fn slam_suit(ctx: &ConventionContext, auction: &Auction) -> Option<Suit> {
    ctx.agreed_trump.or_else(|| {
        auction
            .iter()
            .filter(|(s, _)| s.partnership() == ctx.seat.partnership())
            .find_map(|(_, call)| call.suit())
    })
}

/// Initiate the ask: trump agreed, slam-range combined strength, 4NT
/// still available.
pub struct Blackwood;

impl Convention for Blackwood {
    fn kind(&self) -> ConventionKind {
        ConventionKind::Blackwood
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.blackwood
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        ctx.blackwood_available
            && ctx.agreed_trump.is_some()
            && !ctx.ace_ask_outstanding
            && ctx.blackwood_answer.is_none()
            && !auction.bids_made_by(ctx.seat).contains(&FOUR_NT)
            && auction.next_legal_bid_at_or_above(4, Strain::NoTrump) == Some(FOUR_NT)
    }

    fn respond(
        &self,
        ctx: &ConventionContext,
        auction: &Auction,
        hand: &Hand,
        config: &EngineConfig,
    ) -> Option<Candidate> {
        if ctx.combined_estimate(hand) < config.slam_hcp {
            return None;
        }
        let trump = slam_suit(ctx, auction)?;
        Some(Candidate::conventional(
            FOUR_NT,
            format!("Blackwood: asking for aces with {} agreed", trump),
            ConventionKind::Blackwood,
        ))
    }
}

/// Answer partner's ace ask on the step ladder: 5C shows zero or four
/// aces, 5D one, 5H two, 5S three.
pub struct BlackwoodResponse;

impl Convention for BlackwoodResponse {
    fn kind(&self) -> ConventionKind {
        ConventionKind::BlackwoodResponse
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.blackwood
    }

    fn applies(&self, ctx: &ConventionContext, _auction: &Auction, _hand: &Hand) -> bool {
        ctx.ace_ask_outstanding
    }

    fn respond(
        &self,
        _ctx: &ConventionContext,
        _auction: &Auction,
        hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        let suit = match hand.aces() {
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            // Zero and four share the cheapest step.
            _ => Suit::Clubs,
        };
        Some(Candidate::conventional(
            Call::bid(5, Strain::from_suit(suit)),
            format!("Blackwood response: showing {} ace(s)", hand.aces()),
            ConventionKind::BlackwoodResponse,
        ))
    }
}

/// The asker's next call once partner has answered: count aces, place
/// the contract.
pub struct BlackwoodContinuation;

impl Convention for BlackwoodContinuation {
    fn kind(&self) -> ConventionKind {
        ConventionKind::BlackwoodContinuation
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.blackwood
    }

    fn applies(&self, ctx: &ConventionContext, _auction: &Auction, _hand: &Hand) -> bool {
        ctx.blackwood_answer.is_some()
    }

    fn respond(
        &self,
        ctx: &ConventionContext,
        auction: &Auction,
        hand: &Hand,
        config: &EngineConfig,
    ) -> Option<Candidate> {
        let answer_suit = ctx.blackwood_answer.and_then(|c| c.suit())?;
        // 5C is ambiguous between zero and four; read it as zero so a
        // missing-ace grand is never bid on a guess.
        let shown = match answer_suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        let total = hand.aces() + shown;
        let trump = slam_suit(ctx, auction)?;
        let strain = Strain::from_suit(trump);
        let combined = ctx.combined_estimate(hand);

        if total >= 4 && combined >= config.grand_slam_hcp {
            return Some(Candidate::conventional(
                Call::bid(7, strain),
                format!("all four aces and {} combined: grand slam", combined),
                ConventionKind::BlackwoodContinuation,
            ));
        }
        if total >= 3 && combined >= config.slam_hcp {
            return Some(Candidate::conventional(
                Call::bid(6, strain),
                format!("{} aces between us: small slam", total),
                ConventionKind::BlackwoodContinuation,
            ));
        }

        // Missing two or more aces: stop at five of trump if that is
        // still below us, otherwise take the answer as the contract.
        let missing = 4u8.saturating_sub(total);
        if answer_suit == trump {
            return Some(Candidate::conventional(
                Call::Pass,
                format!("missing {} aces; partner's answer is already our trump", missing),
                ConventionKind::BlackwoodContinuation,
            ));
        }
        match auction.next_legal_bid_at_or_above(5, strain) {
            Some(call) if call == Call::bid(5, strain) => Some(Candidate::conventional(
                call,
                format!("missing {} aces; signing off below slam", missing),
                ConventionKind::BlackwoodContinuation,
            )),
            _ => Some(Candidate::conventional(
                Call::Pass,
                format!("missing {} aces and no signoff below slam", missing),
                ConventionKind::BlackwoodContinuation,
            )),
        }
    }
}
