//! Michaels cuebid: a direct cue of the opponents' one-level suit
//! opening showing a two-suited hand.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::{Convention, ConventionKind};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Strain, Suit};

pub struct Michaels;

impl Michaels {
    /// The two suits shown over this opening suit, if the hand has them
    /// both with five cards or more.
    fn shown_suits(opened: Suit, hand: &Hand) -> Option<(Suit, Suit)> {
        let pairs: &[(Suit, Suit)] = if opened.is_minor() {
            // Both majors.
            &[(Suit::Hearts, Suit::Spades)]
        } else if opened == Suit::Hearts {
            &[
                (Suit::Spades, Suit::Clubs),
                (Suit::Spades, Suit::Diamonds),
            ]
        } else {
            &[
                (Suit::Hearts, Suit::Clubs),
                (Suit::Hearts, Suit::Diamonds),
            ]
        };
        pairs
            .iter()
            .copied()
            .find(|&(a, b)| hand.length(a) >= 5 && hand.length(b) >= 5)
    }
}

impl Convention for Michaels {
    fn kind(&self) -> ConventionKind {
        ConventionKind::Michaels
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.michaels
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        // Direct seat only: their one-level suit opening is the last
        // action, and neither we nor partner have acted.
        if ctx.we_opened_auction
            || auction.actions_by(ctx.seat) != 0
            || auction.has_acted(ctx.seat.partner())
        {
            return false;
        }
        // The opening must be the call immediately before us.
        match ctx.their_opening {
            Some((seat, call @ Call::Bid { level: 1, .. })) if call.suit().is_some() => {
                auction.iter().last() == Some((seat, call))
            }
            _ => false,
        }
    }

    fn respond(
        &self,
        ctx: &ConventionContext,
        _auction: &Auction,
        hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        let opened = ctx.their_opening.and_then(|(_, c)| c.suit())?;
        if !(8..=15).contains(&hand.hcp()) {
            return None;
        }
        let (high, low) = Self::shown_suits(opened, hand)?;
        Some(Candidate::conventional(
            Call::bid(2, Strain::from_suit(opened)),
            format!("Michaels: at least five {} and five {}", high, low),
            ConventionKind::Michaels,
        ))
    }
}
