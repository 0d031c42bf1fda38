//! Stayman 2C over partner's 1NT opening, and the opener's reply.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::{Convention, ConventionKind};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Seat, Strain, Suit};

const ONE_NT: Call = Call::Bid {
    level: 1,
    strain: Strain::NoTrump,
};

/// Seat opened 1NT and that is their only bid so far, with the
/// opponents silent throughout.
fn opened_one_nt_uncontested(auction: &Auction, opener: Seat, ctx: &ConventionContext) -> bool {
    !ctx.opponents_have_acted && auction.bids_made_by(opener) == vec![ONE_NT]
}

/// Responder's 2C ask: at least invitational values and exactly one
/// four-card major to find. Five-card majors transfer instead.
pub struct Stayman;

impl Convention for Stayman {
    fn kind(&self) -> ConventionKind {
        ConventionKind::Stayman
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.stayman
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        ctx.partner_opened
            && opened_one_nt_uncontested(auction, ctx.seat.partner(), ctx)
            && auction.actions_by(ctx.seat) == 0
    }

    fn respond(
        &self,
        _ctx: &ConventionContext,
        _auction: &Auction,
        hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        if hand.hcp() < 8 {
            return None;
        }
        let four_card_major = [Suit::Hearts, Suit::Spades]
            .into_iter()
            .any(|s| hand.length(s) == 4);
        let five_card_major = [Suit::Hearts, Suit::Spades]
            .into_iter()
            .any(|s| hand.length(s) >= 5);
        if !four_card_major || five_card_major {
            return None;
        }
        Some(Candidate::conventional(
            Call::bid(2, Strain::Clubs),
            "Stayman: asking for a four-card major".to_string(),
            ConventionKind::Stayman,
        ))
    }
}

/// Opener's reply to 2C: bid a four-card major, hearts first, else 2D.
pub struct StaymanResponse;

impl Convention for StaymanResponse {
    fn kind(&self) -> ConventionKind {
        ConventionKind::StaymanResponse
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.stayman
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        ctx.we_opened_auction
            && !ctx.partner_opened
            && opened_one_nt_uncontested(auction, ctx.seat, ctx)
            && auction.last_action()
                == Some((ctx.seat.partner(), Call::bid(2, Strain::Clubs)))
    }

    fn respond(
        &self,
        _ctx: &ConventionContext,
        _auction: &Auction,
        hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        let call = if hand.length(Suit::Hearts) >= 4 {
            Call::bid(2, Strain::Hearts)
        } else if hand.length(Suit::Spades) >= 4 {
            Call::bid(2, Strain::Spades)
        } else {
            Call::bid(2, Strain::Diamonds)
        };
        Some(Candidate::conventional(
            call,
            "Stayman reply".to_string(),
            ConventionKind::StaymanResponse,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_for(auction: &Auction) -> ConventionContext {
        ConventionContext::derive(auction, auction.current_seat())
    }

    #[test]
    fn test_stayman_fires_with_four_card_major() {
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ32.J42.A765.82").unwrap();
        assert!(Stayman.applies(&ctx, &auction, &hand));
        let candidate = Stayman
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Clubs));
    }

    #[test]
    fn test_stayman_declines_with_five_card_major() {
        // Transfer territory, not Stayman.
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ532.J42.A76.82").unwrap();
        assert!(Stayman
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .is_none());
    }

    #[test]
    fn test_stayman_declines_weak() {
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("Q432.J42.9765.82").unwrap();
        assert!(Stayman
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .is_none());
    }

    #[test]
    fn test_stayman_off_over_interference() {
        let auction = Auction::bidding(Seat::North, "1N 2C");
        let ctx = ConventionContext::derive(&auction, Seat::South);
        let hand = Hand::from_holding("KQ32.J42.A765.82").unwrap();
        assert!(!Stayman.applies(&ctx, &auction, &hand));
    }

    #[test]
    fn test_reply_prefers_hearts() {
        let auction = Auction::bidding(Seat::North, "1N P 2C P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("AQ32.KQ42.A7.Q82").unwrap();
        assert!(StaymanResponse.applies(&ctx, &auction, &hand));
        let candidate = StaymanResponse
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Hearts));
    }

    #[test]
    fn test_reply_denies_with_2d() {
        let auction = Auction::bidding(Seat::North, "1N P 2C P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("AQ2.KQ2.A765.Q82").unwrap();
        let candidate = StaymanResponse
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Diamonds));
    }

    #[test]
    fn test_responder_is_not_the_replier() {
        // South bid the 2C; the reply detector must not fire for South
        // on a later turn shape.
        let auction = Auction::bidding(Seat::North, "1N P 2C P");
        let ctx = ConventionContext::derive(&auction, Seat::South);
        let hand = Hand::from_holding("KQ32.J42.A765.82").unwrap();
        assert!(!StaymanResponse.applies(&ctx, &auction, &hand));
    }
}
