//! Opening bids: strong 2C, notrump ranges, one-of-a-suit, weak twos
//! and preempts, in that order of priority.

use crate::context::ConventionContext;
use crate::producers::Candidate;
use sayc_core::{Call, Hand, Strain, Suit, SuitQuality};

pub fn choose(ctx: &ConventionContext, hand: &Hand) -> Candidate {
    let hcp = hand.hcp();

    if hcp >= 22 {
        return Candidate::new(
            Call::bid(2, Strain::Clubs),
            format!("{} HCP: artificial strong opening", hcp),
        );
    }
    if hand.is_balanced() {
        if (15..=17).contains(&hcp) {
            return Candidate::new(
                Call::bid(1, Strain::NoTrump),
                format!("balanced {} HCP", hcp),
            );
        }
        if (20..=21).contains(&hcp) {
            return Candidate::new(
                Call::bid(2, Strain::NoTrump),
                format!("balanced {} HCP", hcp),
            );
        }
    }
    if hand.length_points() >= 13 || (hcp >= 12 && hand.rule_of_twenty() >= 20) {
        let suit = opening_suit(hand);
        return Candidate::new(
            Call::bid(1, Strain::from_suit(suit)),
            format!("opening values, {} is the suit to show", suit),
        );
    }

    if (5..=10).contains(&hcp) {
        let longest = hand.longest_suit();
        let len = hand.length(longest);
        let quality = hand.suit_quality(longest);
        let floor = if ctx.vulnerable {
            SuitQuality::Good
        } else {
            SuitQuality::Decent
        };
        if len >= 7 && quality >= floor {
            return Candidate::new(
                Call::bid(3, Strain::from_suit(longest)),
                format!("preempt: seven-card {} suit", longest),
            );
        }
        if len == 6 && longest != Suit::Clubs && quality >= floor {
            return Candidate::new(
                Call::bid(2, Strain::from_suit(longest)),
                format!("weak two in {}", longest),
            );
        }
    }

    Candidate::pass("not worth an opening bid")
}

/// SAYC suit choice: five-card majors first, spades on 5-5; otherwise
/// the longer minor, diamonds with 4-4, clubs with 3-3.
fn opening_suit(hand: &Hand) -> Suit {
    let spades = hand.length(Suit::Spades);
    let hearts = hand.length(Suit::Hearts);
    if spades >= 5 || hearts >= 5 {
        return if spades >= hearts {
            Suit::Spades
        } else {
            Suit::Hearts
        };
    }
    let diamonds = hand.length(Suit::Diamonds);
    let clubs = hand.length(Suit::Clubs);
    match diamonds.cmp(&clubs) {
        std::cmp::Ordering::Greater => Suit::Diamonds,
        std::cmp::Ordering::Less => Suit::Clubs,
        std::cmp::Ordering::Equal => {
            if diamonds >= 4 {
                Suit::Diamonds
            } else {
                Suit::Clubs
            }
        }
    }
}
