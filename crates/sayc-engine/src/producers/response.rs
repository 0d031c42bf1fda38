//! Natural first responses to partner's opening. Conventional replies
//! (Stayman, transfers, negative doubles) have already had their turn
//! by the time this producer runs.

use crate::context::ConventionContext;
use crate::conventions::ConventionKind;
use crate::evaluator::{game_level, min_combined_for_suited};
use crate::producers::Candidate;
use sayc_core::{Auction, Call, Hand, Strain, Suit};

pub fn first_response(ctx: &ConventionContext, auction: &Auction, hand: &Hand) -> Candidate {
    let partner = ctx.seat.partner();
    let Some(opening) = auction.bids_made_by(partner).first().copied() else {
        return Candidate::pass("no opening to respond to");
    };
    match opening {
        Call::Bid {
            level: 1,
            strain: Strain::NoTrump,
        } => notrump_response(hand),
        Call::Bid {
            level: 2,
            strain: Strain::Clubs,
        } => waiting_response(auction),
        Call::Bid { level: 1, strain } => match strain.to_suit() {
            Some(suit) => suit_response(auction, hand, suit),
            None => Candidate::pass("nothing useful to say"),
        },
        Call::Bid { strain, .. } => match strain.to_suit() {
            Some(suit) => preempt_response(ctx, auction, hand, suit),
            None => Candidate::pass("nothing useful to say"),
        },
        _ => Candidate::pass("nothing useful to say"),
    }
}

/// Point ladder opposite a 15-17 notrump, for hands with no major-suit
/// interest. The slam raises are agreed shapes, not judgment calls, so
/// they go out as conventional candidates; the strength gate still
/// vets the 6NT.
fn notrump_response(hand: &Hand) -> Candidate {
    let hcp = hand.hcp();
    if hcp >= 17 {
        Candidate::conventional(
            Call::bid(6, Strain::NoTrump),
            format!("{} HCP opposite 15-17: slam values", hcp),
            ConventionKind::Quantitative,
        )
    } else if hcp >= 15 {
        Candidate::conventional(
            Call::bid(4, Strain::NoTrump),
            "quantitative slam invitation",
            ConventionKind::Quantitative,
        )
    } else if hcp >= 10 {
        Candidate::new(Call::bid(3, Strain::NoTrump), "game values".to_string())
    } else if hcp >= 8 {
        Candidate::new(
            Call::bid(2, Strain::NoTrump),
            "inviting game".to_string(),
        )
    } else {
        Candidate::pass("too weak to move over 1NT")
    }
}

/// 2D waiting over the artificial 2C.
fn waiting_response(auction: &Auction) -> Candidate {
    match auction.next_legal_bid_at_or_above(2, Strain::Diamonds) {
        Some(call) if call == Call::bid(2, Strain::Diamonds) => {
            Candidate::new(call, "waiting".to_string())
        }
        _ => Candidate::pass("waiting bid unavailable"),
    }
}

fn suit_response(auction: &Auction, hand: &Hand, opened: Suit) -> Candidate {
    let hcp = hand.hcp();
    if hcp < 6 {
        return Candidate::pass("too weak to respond");
    }

    // Raise with a fit: three cards for a major, five for a minor.
    let support_needed = if opened.is_major() { 3 } else { 5 };
    if hand.length(opened) >= support_needed {
        let pts = hand.support_points(opened);
        let strain = Strain::from_suit(opened);
        if pts >= 11 {
            if let Some(call) = raise_to(auction, strain, 3) {
                return Candidate::new(call, format!("jump raise: fit with {} points", pts));
            }
        }
        if pts >= 6 && pts <= 10 {
            if let Some(call) = raise_to(auction, strain, 2) {
                return Candidate::new(call, format!("single raise: fit with {} points", pts));
            }
        }
    }

    if let Some((call, suit)) = new_suit_call(auction, hand, opened, hcp) {
        return Candidate::new(call, format!("showing {} cards in {}", hand.length(suit), suit));
    }

    // No fit, no biddable suit: notrump ladder.
    let nt = if hcp >= 13 {
        Call::bid(3, Strain::NoTrump)
    } else if hcp >= 11 {
        Call::bid(2, Strain::NoTrump)
    } else {
        Call::bid(1, Strain::NoTrump)
    };
    match auction.next_legal_bid_at_or_above(nt.level().unwrap_or(1), Strain::NoTrump) {
        Some(call) if call == nt => Candidate::new(call, format!("{} HCP, no fit", hcp)),
        _ => Candidate::pass("no descriptive call available"),
    }
}

/// Raise partner's preempt only when the combined count carries the
/// higher level; a weak two promises very little.
fn preempt_response(
    ctx: &ConventionContext,
    auction: &Auction,
    hand: &Hand,
    opened: Suit,
) -> Candidate {
    if hand.length(opened) < 3 {
        return Candidate::pass("no fit for partner's preempt");
    }
    let strain = Strain::from_suit(opened);
    let estimate = ctx.combined_estimate(hand);
    let game = game_level(strain);
    if estimate >= min_combined_for_suited(game) {
        if let Some(call) = raise_to(auction, strain, game) {
            return Candidate::new(call, format!("raising the preempt to game on {}", estimate));
        }
    }
    let next = ctx.current_level + 1;
    if estimate >= min_combined_for_suited(next) && hand.length(opened) >= 4 {
        if let Some(call) = raise_to(auction, strain, next) {
            return Candidate::new(call, "extending the preempt".to_string());
        }
    }
    Candidate::pass("nothing to add over the preempt")
}

/// The exact raise, or None when the auction has moved past it.
fn raise_to(auction: &Auction, strain: Strain, level: u8) -> Option<Call> {
    match auction.next_legal_bid_at_or_above(level, strain) {
        Some(call) if call == Call::bid(level, strain) => Some(call),
        _ => None,
    }
}

/// Cheapest descriptive new suit: four cards at the one level, five
/// and ten points at the two level. Longer suits first, then up the
/// line.
fn new_suit_call(
    auction: &Auction,
    hand: &Hand,
    opened: Suit,
    hcp: u8,
) -> Option<(Call, Suit)> {
    let mut best: Option<(Call, Suit)> = None;
    for &suit in &Suit::ALL {
        if suit == opened || hand.length(suit) < 4 {
            continue;
        }
        let Some(call) = auction.cheapest_bid_in(Strain::from_suit(suit)) else {
            continue;
        };
        let ok = match call.level() {
            Some(1) => hcp >= 6,
            Some(2) => hcp >= 10 && hand.length(suit) >= 5,
            _ => false,
        };
        if !ok {
            continue;
        }
        best = match best {
            None => Some((call, suit)),
            Some((b_call, b_suit)) => {
                let better = hand.length(suit) > hand.length(b_suit)
                    || (hand.length(suit) == hand.length(b_suit) && call < b_call);
                if better {
                    Some((call, suit))
                } else {
                    Some((b_call, b_suit))
                }
            }
        };
    }
    best
}
