//! Calls over the opponents' opening: overcalls, advances of partner's
//! action, and later competitive turns.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::evaluator::min_combined_for_suited;
use crate::producers::rebid::{raise_toward_game, rebid_suit};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Strain, Suit, SuitQuality};

/// Direct action over their opening once the takeout double and
/// Michaels detectors have declined.
pub fn overcall(ctx: &ConventionContext, auction: &Auction, hand: &Hand) -> Candidate {
    let hcp = hand.hcp();
    let their_suit = ctx.their_opening.and_then(|(_, c)| c.suit());

    // 1NT overcall: a strong notrump with their suit stopped.
    if (15..=18).contains(&hcp)
        && hand.is_balanced()
        && their_suit.is_some_and(|s| hand.has_stopper(s))
    {
        if let Some(call) = auction.cheapest_bid_in(Strain::NoTrump) {
            if call.level() == Some(1) {
                return Candidate::new(call, format!("{} HCP with their suit stopped", hcp));
            }
        }
    }

    if let Some(suit) = overcall_suit(hand, their_suit) {
        if let Some(call) = auction.cheapest_bid_in(Strain::from_suit(suit)) {
            let enough = match call.level() {
                Some(1) => hcp >= 8,
                Some(2) => hcp >= 10,
                _ => false,
            };
            if enough {
                return Candidate::new(
                    call,
                    format!("overcall: {}-card {} suit", hand.length(suit), suit),
                );
            }
        }
    }

    Candidate::pass("nothing safe to say over their opening")
}

/// Partner overcalled or doubled; keep the side in the auction.
pub fn advance(ctx: &ConventionContext, auction: &Auction, hand: &Hand) -> Candidate {
    let their_suit = ctx.their_opening.and_then(|(_, c)| c.suit());

    if ctx.partner_last_call == Some(Call::Double) {
        return answer_takeout(ctx, auction, hand, their_suit);
    }

    // Raise partner's overcalled suit with support.
    if let Some(suit) = ctx.partner_last_call.and_then(|c| c.suit()) {
        if hand.length(suit) >= 3 {
            let est = hand.support_points(suit) + ctx.partner_range.midpoint();
            if let Some(call) = auction.cheapest_bid_in(Strain::from_suit(suit)) {
                if call
                    .level()
                    .is_some_and(|l| est >= min_combined_for_suited(l))
                {
                    return Candidate::new(call, format!("raising partner on {} combined", est));
                }
            }
        }
    }

    // A good suit of our own.
    if hand.hcp() >= 10 {
        if let Some(suit) = overcall_suit(hand, their_suit) {
            if let Some(call) = auction.cheapest_bid_in(Strain::from_suit(suit)) {
                if call.level().is_some_and(|l| l <= 2) {
                    return Candidate::new(call, format!("showing our own {} suit", suit));
                }
            }
        }
    }

    Candidate::pass("nothing to add to partner's action")
}

/// Later competitive turns: keep bidding only while the count and the
/// fit both hold up.
pub fn continuation(
    ctx: &ConventionContext,
    auction: &Auction,
    hand: &Hand,
    config: &EngineConfig,
) -> Candidate {
    if let Some(trump) = ctx.agreed_trump {
        let est = hand.support_points(trump) + ctx.partner_range.midpoint();
        if let Some(candidate) =
            raise_toward_game(auction, ctx, Strain::from_suit(trump), est, config)
        {
            return candidate;
        }
        return Candidate::pass("the count does not carry another level");
    }

    if let Some(suit) = ctx.partner_last_call.and_then(|c| c.suit()) {
        if hand.length(suit) >= 3 {
            let est = hand.support_points(suit) + ctx.partner_range.midpoint();
            if let Some(candidate) =
                raise_toward_game(auction, ctx, Strain::from_suit(suit), est, config)
            {
                return candidate;
            }
        }
    }

    let longest = hand.longest_suit();
    if hand.length(longest) >= 6 {
        if let Some(candidate) = rebid_suit(auction, ctx, hand, longest) {
            return candidate;
        }
    }

    Candidate::pass("competing further would outrun the hand")
}

/// Partner's takeout double asks for our best suit; with no intervening
/// bid we must answer even on nothing.
fn answer_takeout(
    ctx: &ConventionContext,
    auction: &Auction,
    hand: &Hand,
    their_suit: Option<Suit>,
) -> Candidate {
    let forced = auction.last_action() == Some((ctx.seat.partner(), Call::Double));
    if !forced && hand.hcp() < 6 {
        return Candidate::pass("off the hook after their bid");
    }
    let mut best: Option<Suit> = None;
    for &suit in &Suit::ALL {
        if Some(suit) == their_suit {
            continue;
        }
        let better = match best {
            None => true,
            Some(b) => {
                hand.length(suit) > hand.length(b)
                    || (hand.length(suit) == hand.length(b) && suit.is_major() && !b.is_major())
            }
        };
        if better {
            best = Some(suit);
        }
    }
    match best.and_then(|s| {
        auction
            .cheapest_bid_in(Strain::from_suit(s))
            .map(|c| (c, s))
    }) {
        Some((call, suit)) => Candidate::new(
            call,
            format!("answering the takeout double in {}", suit),
        ),
        None => Candidate::pass("no suit left to answer in"),
    }
}

fn overcall_suit(hand: &Hand, their_suit: Option<Suit>) -> Option<Suit> {
    let mut best: Option<Suit> = None;
    for &suit in &Suit::ALL {
        if Some(suit) == their_suit || hand.length(suit) < 5 {
            continue;
        }
        if hand.suit_quality(suit) < SuitQuality::Decent {
            continue;
        }
        let better = match best {
            None => true,
            Some(b) => hand.length(suit) > hand.length(b),
        };
        if better {
            best = Some(suit);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_core::Seat;

    fn call_for(calls: &str, holding: &str) -> Call {
        let auction = Auction::bidding(Seat::North, calls);
        let seat = auction.current_seat();
        let ctx = ConventionContext::derive(&auction, seat);
        let hand = Hand::from_holding(holding).unwrap();
        let config = EngineConfig::default();
        match crate::phase::route(&auction, seat) {
            crate::phase::Phase::Overcall => overcall(&ctx, &auction, &hand).call,
            crate::phase::Phase::Advance => advance(&ctx, &auction, &hand).call,
            _ => continuation(&ctx, &auction, &hand, &config).call,
        }
    }

    #[test]
    fn test_simple_overcall() {
        assert_eq!(
            call_for("1D", "KQJ32.T98.A4.J76"),
            Call::bid(1, Strain::Spades)
        );
    }

    #[test]
    fn test_two_level_overcall_needs_more() {
        assert_eq!(
            call_for("1S", "32.KQJ92.A54.J76"),
            Call::bid(2, Strain::Hearts)
        );
        assert_eq!(call_for("1S", "32.KQJ92.854.J76"), Call::Pass);
    }

    #[test]
    fn test_notrump_overcall_with_stopper() {
        assert_eq!(
            call_for("1H", "KQ32.AJ8.KQ54.J6"),
            Call::bid(1, Strain::NoTrump)
        );
    }

    #[test]
    fn test_overcall_passes_without_a_suit() {
        assert_eq!(call_for("1D", "K432.T98.54.QJ76"), Call::Pass);
    }

    #[test]
    fn test_advance_raises_the_overcall() {
        assert_eq!(
            call_for("1D 1S P", "K432.A98.54.Q876"),
            Call::bid(2, Strain::Spades)
        );
    }

    #[test]
    fn test_forced_answer_to_takeout_double() {
        // Nothing at all, but partner's double forces a call.
        assert_eq!(
            call_for("1H X P", "9432.432.8765.32"),
            Call::bid(1, Strain::Spades)
        );
    }

    #[test]
    fn test_not_forced_after_their_bid() {
        assert_eq!(call_for("1H X 2H", "9432.432.8765.32"), Call::Pass);
    }

    #[test]
    fn test_continuation_competes_with_a_fit() {
        assert_eq!(
            call_for("1D 1S 2D 2S 3D P P", "QT532.A98.5.Q876"),
            Call::bid(3, Strain::Spades)
        );
    }

    #[test]
    fn test_continuation_gives_up_without_the_count() {
        assert_eq!(
            call_for("1D 1S 2D 2S 3D P P", "QT532.J98.54.876"),
            Call::Pass
        );
    }
}
