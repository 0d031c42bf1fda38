//! Jacoby transfers over partner's 1NT opening, and the opener's
//! obligatory completion.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::conventions::{Convention, ConventionKind};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Seat, Strain, Suit};

const ONE_NT: Call = Call::Bid {
    level: 1,
    strain: Strain::NoTrump,
};

fn opened_one_nt_uncontested(auction: &Auction, opener: Seat, ctx: &ConventionContext) -> bool {
    !ctx.opponents_have_acted && auction.bids_made_by(opener) == vec![ONE_NT]
}

/// Responder's transfer: with a five-card major, bid the suit below it
/// and let the strong hand declare.
pub struct JacobyTransfer;

impl Convention for JacobyTransfer {
    fn kind(&self) -> ConventionKind {
        ConventionKind::JacobyTransfer
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.jacoby_transfers
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
        let hearts = hand.length(Suit::Hearts);
        let spades = hand.length(Suit::Spades);
        if hearts < 5 && spades < 5 {
            return None;
        }
        // Longer major; spades when equal.
        let (major, transfer) = if spades >= hearts {
            (Suit::Spades, Call::bid(2, Strain::Hearts))
        } else {
            (Suit::Hearts, Call::bid(2, Strain::Diamonds))
        };
        Some(Candidate::conventional(
            transfer,
            format!("Jacoby transfer to {}", major),
            ConventionKind::JacobyTransfer,
        ))
    }
}

/// Opener's completion: 2D becomes 2H, 2H becomes 2S, no judgment
/// involved.
pub struct TransferCompletion;

impl Convention for TransferCompletion {
    fn kind(&self) -> ConventionKind {
        ConventionKind::TransferCompletion
    }

    fn enabled(&self, config: &EngineConfig) -> bool {
        config.jacoby_transfers
    }

    fn applies(&self, ctx: &ConventionContext, auction: &Auction, _hand: &Hand) -> bool {
        if !ctx.we_opened_auction
            || ctx.partner_opened
            || !opened_one_nt_uncontested(auction, ctx.seat, ctx)
        {
            return false;
        }
        matches!(
            auction.last_action(),
            Some((seat, Call::Bid { level: 2, strain: Strain::Diamonds | Strain::Hearts }))
                if seat == ctx.seat.partner()
        )
    }

    fn respond(
        &self,
        _ctx: &ConventionContext,
        auction: &Auction,
        _hand: &Hand,
        _config: &EngineConfig,
    ) -> Option<Candidate> {
        let (_, transfer) = auction.last_action()?;
        let (call, major) = match transfer.strain()? {
            Strain::Diamonds => (Call::bid(2, Strain::Hearts), Suit::Hearts),
            Strain::Hearts => (Call::bid(2, Strain::Spades), Suit::Spades),
            _ => return None,
        };
        Some(Candidate::conventional(
            call,
            format!("completing the transfer to {}", major),
            ConventionKind::TransferCompletion,
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
    fn test_transfer_to_spades() {
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ532.J42.765.82").unwrap();
        let candidate = JacobyTransfer
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Hearts));
    }

    #[test]
    fn test_transfer_to_hearts_even_dead_weak() {
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("532.J8642.765.82").unwrap();
        let candidate = JacobyTransfer
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Diamonds));
    }

    #[test]
    fn test_equal_length_prefers_spades() {
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("KQ532.QJ642.7.82").unwrap();
        let candidate = JacobyTransfer
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Hearts));
    }

    #[test]
    fn test_no_transfer_without_a_major() {
        let auction = Auction::bidding(Seat::North, "1N P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("K53.J42.A7652.82").unwrap();
        assert!(JacobyTransfer
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .is_none());
    }

    #[test]
    fn test_completion_is_automatic() {
        let auction = Auction::bidding(Seat::North, "1N P 2D P");
        let ctx = ctx_for(&auction);
        let hand = Hand::from_holding("AQ2.K42.A765.Q82").unwrap();
        assert!(TransferCompletion.applies(&ctx, &auction, &hand));
        let candidate = TransferCompletion
            .respond(&ctx, &auction, &hand, &EngineConfig::default())
            .unwrap();
        assert_eq!(candidate.call, Call::bid(2, Strain::Hearts));
    }

    #[test]
    fn test_completion_off_after_interference() {
        let auction = Auction::bidding(Seat::North, "1N P 2D X");
        let ctx = ConventionContext::derive(&auction, Seat::North);
        let hand = Hand::from_holding("AQ2.K42.A765.Q82").unwrap();
        assert!(!TransferCompletion.applies(&ctx, &auction, &hand));
    }

    #[test]
    fn test_natural_2d_is_not_a_transfer_shape() {
        // Opener bid a suit, not 1NT; 2D here is natural.
        let auction = Auction::bidding(Seat::North, "1S P 2D P");
        let ctx = ConventionContext::derive(&auction, Seat::North);
        let hand = Hand::from_holding("AQ872.K42.A6.Q82").unwrap();
        assert!(!TransferCompletion.applies(&ctx, &auction, &hand));
    }
}
