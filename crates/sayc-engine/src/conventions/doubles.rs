//! Conventional doubles: negative (after partner opens and the
//! opponents overcall) and takeout (directly over their opening).

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::{Convention, ConventionKind};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Suit};

/// Partner opened one of a suit, the opponents overcalled a suit at or
/// below the two level, and we hold an unbid four-card major.
pub struct NegativeDouble;

impl NegativeDouble {
    fn overcall_after_partner_opening(
        ctx: &ConventionContext,
        auction: &Auction,
    ) -> Option<(Suit, Suit)> {
        if !ctx.partner_opened || auction.actions_by(ctx.seat) != 0 {
            return None;
        }
        let opened = match auction.bids_made_by(ctx.seat.partner()).first() {
            Some(call) if call.level() == Some(1) => call.suit()?,
            _ => return None,
        };
        match auction.last_action() {
            Some((seat, call))
                if seat.partnership() != ctx.seat.partnership()
                    && call.is_bid()
                    && call.level().is_some_and(|l| l <= 2) =>
            {
                Some((opened, call.suit()?))
            }
            _ => None,
        }
    }
}

impl Convention for NegativeDouble {
    fn kind(&self) -> ConventionKind {
        ConventionKind::NegativeDouble
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.negative_doubles
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        Self::overcall_after_partner_opening(ctx, auction).is_some()
    }

    fn respond(
        &self,
        ctx: &ConventionContext,
        auction: &Auction,
        hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        let (opened, overcalled) = Self::overcall_after_partner_opening(ctx, auction)?;
        if hand.hcp() < 6 {
            return None;
        }
        let unbid_major = [Suit::Hearts, Suit::Spades]
            .into_iter()
            .find(|&m| m != opened && m != overcalled && hand.length(m) >= 4)?;
        Some(Candidate::conventional(
            Call::Double,
            format!("negative double: four or more {}", unbid_major),
            ConventionKind::NegativeDouble,
        ))
    }
}

/// Direct double of their opening bid: opening strength, short in their
/// suit, support for everything else.
pub struct TakeoutDouble;

impl TakeoutDouble {
    fn their_suit_opening(ctx: &ConventionContext, auction: &Auction) -> Option<Suit> {
        if ctx.we_opened_auction
            || auction.actions_by(ctx.seat) != 0
            || auction.has_acted(ctx.seat.partner())
        {
            return None;
        }
        let (seat, opening) = ctx.their_opening?;
        if opening.level() != Some(1) {
            return None;
        }
        // Double only when their bid is still the one on the table.
        match auction.last_action() {
            Some((s, call)) if s == seat && call == opening => opening.suit(),
            _ => None,
        }
    }
}

impl Convention for TakeoutDouble {
    fn kind(&self) -> ConventionKind {
        ConventionKind::TakeoutDouble
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.takeout_doubles
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        Self::their_suit_opening(ctx, auction).is_some()
    }

    fn respond(
        &self,
        ctx: &ConventionContext,
        auction: &Auction,
        hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        let their_suit = Self::their_suit_opening(ctx, auction)?;
        if hand.hcp() < 12 || hand.length(their_suit) > 2 {
            return None;
        }
        let supports_the_rest = Suit::ALL
            .iter()
            .filter(|&&s| s != their_suit)
            .all(|&s| hand.length(s) >= 3);
        if !supports_the_rest {
            return None;
        }
        Some(Candidate::conventional(
            Call::Double,
            format!("takeout double: short in {}", their_suit),
            ConventionKind::TakeoutDouble,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_core::Seat;

    fn ctx_for(auction: &Auction) -> ConventionContext {
        ConventionContext::derive(auction, auction.current_seat())
    }

    #[test]
    fn test_negative_double_shows_unbid_major() {
        // Partner opened 1C, RHO overcalled 1S; double shows hearts.
        let auction = Auction::bidding(Seat::North, "1C 1S");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("532.KQ42.A765.82").unwrap();
        assert!(NegativeDouble.applies(&ctx, &auction, &hand));
        let candidate = NegativeDouble
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::Double);
    }

    #[test]
    fn test_negative_double_declines_without_major() {
        let auction = Auction::bidding(Seat::North, "1C 1S");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("532.K42.AQ765.82").unwrap();
        assert!(NegativeDouble
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .is_none());
    }

    #[test]
    fn test_negative_double_not_over_high_overcall() {
        let auction = Auction::bidding(Seat::North, "1C 3S");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("532.KQ42.A765.82").unwrap();
        assert!(!NegativeDouble.applies(&ctx, &auction, &hand));
    }

    #[test]
    fn test_takeout_double_classic_shape() {
        let auction = Auction::bidding(Seat::North, "1H");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ42.2.AJ76.K982").unwrap();
        assert!(TakeoutDouble.applies(&ctx, &auction, &hand));
        let candidate = TakeoutDouble
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::Double);
    }

    #[test]
    fn test_takeout_double_declines_with_their_suit_length() {
        let auction = Auction::bidding(Seat::North, "1H");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ4.A842.AJ7.982").unwrap();
        assert!(TakeoutDouble
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .is_none());
    }

    #[test]
    fn test_takeout_double_declines_weak() {
        let auction = Auction::bidding(Seat::North, "1H");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ42.2.J765.9832").unwrap();
        assert!(TakeoutDouble
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .is_none());
    }

    #[test]
    fn test_no_takeout_double_after_partner_acts() {
        let auction = Auction::bidding(Seat::North, "1H 1S P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ42.2.AJ76.K982").unwrap();
        assert!(!TakeoutDouble.applies(&ctx, &auction, &hand));
    }
}
