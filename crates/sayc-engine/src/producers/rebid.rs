//! Second-round calls for the opening side: the opener's rebid and the
//! responder's rebid. Both are floor-driven; when the combined count
//! does not carry the next level, the answer is Pass, never a smaller
//! lie.

use crate::config::EngineConfig;
use crate::context::ConventionContext;
use crate::evaluator::{game_level, min_combined_for_nt, min_combined_for_suited};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Strain, Suit};

pub fn opener_rebid(
    ctx: &ConventionContext,
    auction: &Auction,
    hand: &Hand,
    config: &EngineConfig,
) -> Candidate {
    let partner = ctx.seat.partner();
    let partner_suit = auction
        .bids_made_by(partner)
        .iter()
        .find_map(|c| c.suit());

    // Raise partner's suit with four-card support.
    if let Some(suit) = partner_suit {
        if hand.length(suit) >= 4 {
            let strain = Strain::from_suit(suit);
            let est = hand.support_points(suit) + ctx.partner_range.midpoint();
            if let Some(candidate) = raise_toward_game(auction, ctx, strain, est, config) {
                return candidate;
            }
        }
    }

    // Balanced minimum: the cheapest notrump tells the story.
    if hand.is_balanced() {
        if let Some(call) = cheapest_bid(auction, Strain::NoTrump) {
            let level = call.level().unwrap_or(1);
            let est = ctx.combined_estimate(hand);
            if est >= min_combined_for_nt(level) {
                return Candidate::new(call, format!("balanced rebid, {} combined", est));
            }
        }
    }

    // Six-card suit: rebid it.
    let longest = hand.longest_suit();
    if hand.length(longest) >= 6 {
        if let Some(candidate) = rebid_suit(auction, ctx, hand, longest) {
            return candidate;
        }
    }

    // A second four-card suit at or below the two level.
    if let Some(candidate) = second_suit(auction, ctx, hand, partner_suit) {
        return candidate;
    }

    Candidate::pass("nothing descriptive left to say")
}

pub fn responder_rebid(
    ctx: &ConventionContext,
    auction: &Auction,
    hand: &Hand,
    config: &EngineConfig,
) -> Candidate {
    let est = ctx.combined_estimate(hand);

    if let Some(trump) = ctx.agreed_trump {
        let strain = Strain::from_suit(trump);
        let game = game_level(strain);
        if ctx.current_level >= game {
            return Candidate::pass("game already reached");
        }
        let est = hand.support_points(trump) + ctx.partner_range.midpoint();
        if let Some(candidate) = raise_toward_game(auction, ctx, strain, est, config) {
            return candidate;
        }
        return Candidate::pass(format!("{} combined will not carry a higher contract", est));
    }

    // No fit yet: notrump when the count is there.
    if hand.is_balanced() || partner_shows_notrump(auction, ctx) {
        for level in [3u8, 2, 1] {
            if ctx.current_level > level {
                continue;
            }
            if est < min_combined_for_nt(level) {
                continue;
            }
            if let Some(call) = exact_bid(auction, level, Strain::NoTrump) {
                return Candidate::new(call, format!("{} combined, no fit", est));
            }
        }
    }

    // Our own six-card suit is still worth showing.
    let longest = hand.longest_suit();
    if hand.length(longest) >= 6 {
        if let Some(candidate) = rebid_suit(auction, ctx, hand, longest) {
            return candidate;
        }
    }

    Candidate::pass("no call improves the contract")
}

fn partner_shows_notrump(auction: &Auction, ctx: &ConventionContext) -> bool {
    auction
        .bids_made_by(ctx.seat.partner())
        .iter()
        .any(|c| c.strain() == Some(Strain::NoTrump))
}

/// Raise toward game in an agreed strain: game when the count carries
/// it and the jump stays honest, otherwise the cheapest raise the count
/// affords.
pub(super) fn raise_toward_game(
    auction: &Auction,
    ctx: &ConventionContext,
    strain: Strain,
    est: u8,
    config: &EngineConfig,
) -> Option<Candidate> {
    let low = cheapest_bid(auction, strain)?.level()?;
    let game = game_level(strain);
    let cap = game.min(ctx.current_level + config.escalation_delta);
    if low > cap {
        return None;
    }
    // Game when the count carries it (capped so the raise never jumps
    // more than the clamp allows; partner can finish the job), an
    // invitation one below that, otherwise the cheapest raise.
    let target = if est >= min_combined_for_suited(game) {
        game.min(cap)
    } else if est + 1 >= min_combined_for_suited(game) && low + 1 <= cap {
        low + 1
    } else if est >= min_combined_for_suited(low) {
        low
    } else {
        return None;
    };
    let call = exact_bid(auction, target.max(low), strain)?;
    let reason = if target >= game {
        format!("raising to game on {} combined", est)
    } else {
        format!("raising on {} combined", est)
    };
    Some(Candidate::new(call, reason))
}

pub(super) fn rebid_suit(
    auction: &Auction,
    ctx: &ConventionContext,
    hand: &Hand,
    suit: Suit,
) -> Option<Candidate> {
    let call = cheapest_bid(auction, Strain::from_suit(suit))?;
    let level = call.level()?;
    let est = ctx.combined_estimate(hand) + hand.length(suit).saturating_sub(4);
    if est >= min_combined_for_suited(level) {
        return Some(Candidate::new(
            call,
            format!("rebidding the {}-card {} suit", hand.length(suit), suit),
        ));
    }
    None
}

fn second_suit(
    auction: &Auction,
    ctx: &ConventionContext,
    hand: &Hand,
    partner_suit: Option<Suit>,
) -> Option<Candidate> {
    let first_shown = auction
        .bids_made_by(ctx.seat)
        .iter()
        .find_map(|c| c.suit());
    for &suit in &Suit::ALL {
        if Some(suit) == partner_suit || Some(suit) == first_shown || hand.length(suit) < 4 {
            continue;
        }
        let Some(call) = cheapest_bid(auction, Strain::from_suit(suit)) else {
            continue;
        };
        if call.level().is_some_and(|l| l <= 2) {
            return Some(Candidate::new(
                call,
                format!("showing the second suit, {}", suit),
            ));
        }
    }
    None
}

fn cheapest_bid(auction: &Auction, strain: Strain) -> Option<Call> {
    auction.cheapest_bid_in(strain)
}

fn exact_bid(auction: &Auction, level: u8, strain: Strain) -> Option<Call> {
    match auction.next_legal_bid_at_or_above(level, strain) {
        Some(call) if call == Call::bid(level, strain) => Some(call),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_core::Seat;

    fn rebid_opener(calls: &str, holding: &str) -> Call {
        let auction = Auction::bidding(Seat::North, calls);
        let seat = auction.current_seat();
        let ctx = ConventionContext::derive(&auction, seat);
        let hand = Hand::from_holding(holding).unwrap();
        opener_rebid(&ctx, &auction, &hand, &EngineConfig::default()).call
    }

    fn rebid_responder(calls: &str, holding: &str) -> Call {
        let auction = Auction::bidding(Seat::North, calls);
        let seat = auction.current_seat();
        let ctx = ConventionContext::derive(&auction, seat);
        let hand = Hand::from_holding(holding).unwrap();
        responder_rebid(&ctx, &auction, &hand, &EngineConfig::default()).call
    }

    #[test]
    fn test_opener_raises_responder_major() {
        // 1C - 1S, four-card support, minimum: single raise.
        assert_eq!(
            rebid_opener("1C P 1S P", "K432.A8.Q54.QJ76"),
            Call::bid(2, Strain::Spades)
        );
    }

    #[test]
    fn test_opener_jump_raises_with_a_maximum() {
        // Game values, but a direct 1C-1S-4S would jump three levels;
        // the raise stops at 3S and responder carries on.
        assert_eq!(
            rebid_opener("1C P 1S P", "KQ43.A8.AQ5.AJ76"),
            Call::bid(3, Strain::Spades)
        );
    }

    #[test]
    fn test_opener_balanced_rebids_notrump() {
        assert_eq!(
            rebid_opener("1D P 1S P", "K43.AQ8.QJ54.K76"),
            Call::bid(1, Strain::NoTrump)
        );
    }

    #[test]
    fn test_opener_rebids_long_suit() {
        assert_eq!(
            rebid_opener("1S P 1N P", "KQJ543.A82.54.A6"),
            Call::bid(2, Strain::Spades)
        );
    }

    #[test]
    fn test_opener_shows_second_suit() {
        assert_eq!(
            rebid_opener("1S P 1N P", "KQ543.2.54.AKJ76"),
            Call::bid(2, Strain::Clubs)
        );
    }

    #[test]
    fn test_responder_carries_fit_to_game() {
        // 1S - 2S back to a responder shape is not this phase; use
        // responder with an agreed suit instead: 1S P 2S P 3S P, and
        // the responder holds game-going support.
        assert_eq!(
            rebid_responder("1S P 2S P 3S P", "K432.A87.Q54.K76"),
            Call::bid(4, Strain::Spades)
        );
    }

    #[test]
    fn test_responder_stops_below_game_when_thin() {
        assert_eq!(
            rebid_responder("1S P 2S P 3S P", "K432.987.Q54.J76"),
            Call::Pass
        );
    }

    #[test]
    fn test_responder_bids_3nt_on_power_without_fit() {
        // The old runaway shape: P 1C P 1S P 3C P must end in a sane
        // spot, not an escalating spiral.
        assert_eq!(
            rebid_responder("P 1C P 1S P 3C P", "KQ32.A43.KJ5.876"),
            Call::bid(3, Strain::NoTrump)
        );
    }

    #[test]
    fn test_responder_passes_without_resources() {
        assert_eq!(
            rebid_responder("P 1C P 1S P 2C P", "Q932.T43.J85.876"),
            Call::Pass
        );
    }
}
