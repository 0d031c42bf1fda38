use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Quality ladder for a single suit, used when a convention needs a
/// "good" long suit (weak twos, preempts, overcalls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SuitQuality {
    Poor,
    Decent,
    Good,
    Excellent,
}

/// Thirteen cards, fixed at deal time. The bidding engine only reads a
/// hand; card removal belongs to the play engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build a full dealt hand, rejecting anything that is not 13 unique cards.
    pub fn dealt(cards: Vec<Card>) -> Result<Self, String> {
        if cards.len() != 13 {
            return Err(format!("expected 13 cards, got {}", cards.len()));
        }
        let unique: HashSet<_> = cards.iter().collect();
        if unique.len() != 13 {
            return Err("duplicate card in hand".to_string());
        }
        Ok(Self { cards })
    }

    /// Parse dotted holdings, spades first: "AKQ2.T98.543.J76".
    pub fn from_holding(s: &str) -> Option<Self> {
        let suits: Vec<&str> = s.split('.').collect();
        if suits.len() != 4 {
            return None;
        }
        let suit_order = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
        let mut cards = Vec::new();
        for (holding, &suit) in suits.iter().zip(suit_order.iter()) {
            for c in holding.chars() {
                cards.push(Card::new(suit, Rank::from_char(c)?));
            }
        }
        Some(Self { cards })
    }

    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    /// Suit lengths in clubs, diamonds, hearts, spades order.
    pub fn distribution(&self) -> [u8; 4] {
        let mut dist = [0u8; 4];
        for card in &self.cards {
            dist[card.suit.idx()] += 1;
        }
        dist
    }

    pub fn aces(&self) -> u8 {
        self.cards.iter().filter(|c| c.rank == Rank::Ace).count() as u8
    }

    /// Balanced: no void, no singleton, at most one doubleton.
    pub fn is_balanced(&self) -> bool {
        let dist = self.distribution();
        let doubletons = dist.iter().filter(|&&l| l == 2).count();
        dist.iter().all(|&l| l >= 2) && doubletons <= 1
    }

    pub fn longest_suit(&self) -> Suit {
        let mut longest = Suit::Clubs;
        let mut max_len = 0;
        for suit in Suit::ALL {
            let len = self.length(suit);
            if len > max_len {
                max_len = len;
                longest = suit;
            }
        }
        longest
    }

    /// All suits tied for the longest length.
    pub fn longest_suits(&self) -> Vec<Suit> {
        let dist = self.distribution();
        let max_len = *dist.iter().max().unwrap_or(&0);
        Suit::ALL
            .iter()
            .copied()
            .filter(|s| dist[s.idx()] == max_len)
            .collect()
    }

    /// Opening-context points: HCP plus one per card beyond four in each suit.
    pub fn length_points(&self) -> u8 {
        let length: u8 = self
            .distribution()
            .iter()
            .map(|&l| l.saturating_sub(4))
            .sum();
        self.hcp() + length
    }

    /// Support-context points once a trump fit exists: HCP plus shortness
    /// outside trumps (void 5, singleton 3, doubleton 1).
    pub fn support_points(&self, trump: Suit) -> u8 {
        let mut shortness = 0;
        for suit in Suit::ALL {
            if suit == trump {
                continue;
            }
            shortness += match self.length(suit) {
                0 => 5,
                1 => 3,
                2 => 1,
                _ => 0,
            };
        }
        self.hcp() + shortness
    }

    /// Honor count in a suit (A, K, Q, J, T).
    pub fn honors_in(&self, suit: Suit) -> u8 {
        self.cards
            .iter()
            .filter(|c| c.suit == suit && c.rank.is_honor())
            .count() as u8
    }

    /// How good a suit is for standing on its own as trumps.
    pub fn suit_quality(&self, suit: Suit) -> SuitQuality {
        let top_three = self
            .cards
            .iter()
            .filter(|c| c.suit == suit && c.rank >= Rank::Queen)
            .count() as u8;
        let honors = self.honors_in(suit);
        if top_three >= 2 && honors >= 3 {
            SuitQuality::Excellent
        } else if top_three >= 1 && honors >= 2 {
            SuitQuality::Good
        } else if honors >= 1 {
            SuitQuality::Decent
        } else {
            SuitQuality::Poor
        }
    }

    /// Rule of 20: HCP plus the lengths of the two longest suits.
    pub fn rule_of_twenty(&self) -> u8 {
        let mut dist = self.distribution();
        dist.sort_unstable_by(|a, b| b.cmp(a));
        self.hcp() + dist[0] + dist[1]
    }

    /// A likely stopper: A, Kx, Qxx, or Jxxx.
    pub fn has_stopper(&self, suit: Suit) -> bool {
        let len = self.length(suit);
        let top = |rank| self.cards.iter().any(|c| c.suit == suit && c.rank == rank);
        top(Rank::Ace)
            || (top(Rank::King) && len >= 2)
            || (top(Rank::Queen) && len >= 3)
            || (top(Rank::Jack) && len >= 4)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
            if !first {
                write!(f, ".")?;
            }
            first = false;
            let mut ranks: Vec<Rank> = self
                .cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.rank)
                .collect();
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            for rank in ranks {
                write!(f, "{}", rank.to_char())?;
            }
        }
        Ok(())
    }
}
