use crate::card::Card;
use crate::hand::Hand;
use crate::seat::{Seat, Vulnerability};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A full board: dealer, vulnerability, and four 13-card hands. Cloned
/// snapshots go to the play engine once the auction closes; the bidding
/// engine never mutates a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    hands: [Hand; 4],
}

impl Deal {
    /// Build a deal, rejecting anything that is not the full 52 cards
    /// split into four valid hands.
    pub fn new(
        dealer: Seat,
        vulnerability: Vulnerability,
        hands: [Hand; 4],
    ) -> Result<Self, String> {
        let mut seen: HashSet<Card> = HashSet::with_capacity(52);
        for hand in &hands {
            if hand.cards.len() != 13 {
                return Err(format!("hand has {} cards, expected 13", hand.cards.len()));
            }
            for card in &hand.cards {
                if !seen.insert(*card) {
                    return Err(format!("card {} dealt twice", card));
                }
            }
        }
        Ok(Self {
            dealer,
            vulnerability,
            hands,
        })
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.idx()]
    }

    /// Immutable snapshot for the play engine.
    pub fn snapshot(&self) -> Deal {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_deck() -> [Hand; 4] {
        let deck = Card::deck();
        let mut hands: [Hand; 4] = Default::default();
        for (i, card) in deck.into_iter().enumerate() {
            hands[i % 4].cards.push(card);
        }
        hands
    }

    #[test]
    fn test_valid_deal() {
        let deal = Deal::new(Seat::North, Vulnerability::None, split_deck()).unwrap();
        for seat in Seat::ALL {
            assert_eq!(deal.hand(seat).cards.len(), 13);
        }
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let mut hands = split_deck();
        hands[1].cards[0] = hands[0].cards[0];
        assert!(Deal::new(Seat::North, Vulnerability::None, hands).is_err());
    }

    #[test]
    fn test_short_hand_rejected() {
        let mut hands = split_deck();
        hands[2].cards.pop();
        assert!(Deal::new(Seat::North, Vulnerability::None, hands).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let deal = Deal::new(Seat::East, Vulnerability::Both, split_deck()).unwrap();
        let json = serde_json::to_string(&deal).unwrap();
        let back: Deal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dealer, Seat::East);
        assert_eq!(back.hand(Seat::North), deal.hand(Seat::North));
    }
}
