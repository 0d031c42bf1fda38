//! Shared helpers for the command-line bidding tools: hand and auction
//! formatting, argument parsing, and random dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use sayc_core::{Card, Deal, Hand, Seat, Suit, Vulnerability};
use std::fmt::Write;

/// One line per suit, spades first: "S: AKQ2".
pub fn hand_suit_lines(hand: &Hand) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
        let mut ranks: Vec<_> = hand
            .cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let cards: String = ranks.iter().map(|r| r.to_char()).collect();
        lines.push(format!(
            "{}: {}",
            suit.to_char(),
            if cards.is_empty() { "-".to_string() } else { cards }
        ));
    }
    lines
}

/// The four hands laid out around a table, North at the top.
pub fn format_deal_table(deal: &Deal) -> String {
    let mut out = String::new();
    let n = hand_suit_lines(deal.hand(Seat::North));
    let e = hand_suit_lines(deal.hand(Seat::East));
    let s = hand_suit_lines(deal.hand(Seat::South));
    let w = hand_suit_lines(deal.hand(Seat::West));

    let indent = "        ";
    writeln!(out, "{}North", indent).ok();
    for line in &n {
        writeln!(out, "{}{}", indent, line).ok();
    }
    writeln!(out).ok();
    writeln!(out, "{:<20} East", "West").ok();
    for i in 0..4 {
        writeln!(out, "{:<20} {}", w[i], e[i]).ok();
    }
    writeln!(out).ok();
    writeln!(out, "{}South", indent).ok();
    for line in &s {
        writeln!(out, "{}{}", indent, line).ok();
    }
    out
}

/// One decision line in the bidding table.
pub fn format_row(index: usize, seat: Seat, call: &str, reason: &str) -> String {
    format!("{:>3}  {}  {:<4} {}", index, seat.to_char(), call, reason)
}

pub fn format_table_header() -> String {
    format!("{:>3}  {}  {:<4} {}", "#", " ", "call", "reason")
}

/// Parse a dealer argument like "N" or "north".
pub fn parse_seat(s: &str) -> Result<Seat, String> {
    let c = s
        .chars()
        .next()
        .ok_or_else(|| "empty seat".to_string())?
        .to_ascii_uppercase();
    Seat::from_char(c).ok_or_else(|| format!("unknown seat: {}", s))
}

/// Parse a vulnerability argument: none, ns, ew, both.
pub fn parse_vulnerability(s: &str) -> Result<Vulnerability, String> {
    match s.to_ascii_lowercase().as_str() {
        "none" | "-" => Ok(Vulnerability::None),
        "ns" => Ok(Vulnerability::NS),
        "ew" => Ok(Vulnerability::EW),
        "both" | "all" => Ok(Vulnerability::Both),
        _ => Err(format!("unknown vulnerability: {}", s)),
    }
}

/// Deal four hands from a seeded shuffle.
pub fn random_deal(
    seed: u64,
    dealer: Seat,
    vulnerability: Vulnerability,
) -> Result<Deal, String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut deck = Card::deck();
    deck.shuffle(&mut rng);
    let mut hands: Vec<Hand> = Vec::with_capacity(4);
    for chunk in deck.chunks(13) {
        hands.push(Hand::dealt(chunk.to_vec())?);
    }
    let hands: [Hand; 4] = hands
        .try_into()
        .map_err(|_| "deck did not split into four hands".to_string())?;
    Deal::new(dealer, vulnerability, hands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_deal_is_reproducible() {
        let a = random_deal(11, Seat::North, Vulnerability::None).unwrap();
        let b = random_deal(11, Seat::North, Vulnerability::None).unwrap();
        for seat in Seat::ALL {
            assert_eq!(a.hand(seat), b.hand(seat));
        }
        let c = random_deal(12, Seat::North, Vulnerability::None).unwrap();
        assert!(Seat::ALL.iter().any(|&s| a.hand(s) != c.hand(s)));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_seat("n").unwrap(), Seat::North);
        assert_eq!(parse_seat("West").unwrap(), Seat::West);
        assert!(parse_seat("x").is_err());
        assert_eq!(parse_vulnerability("ns").unwrap(), Vulnerability::NS);
        assert_eq!(parse_vulnerability("Both").unwrap(), Vulnerability::Both);
        assert!(parse_vulnerability("sideways").is_err());
    }

    #[test]
    fn test_hand_lines_mark_voids() {
        let hand = Hand::from_holding("AKQJT98765432...").unwrap();
        let lines = hand_suit_lines(&hand);
        assert_eq!(lines[0], "S: AKQJT98765432");
        assert_eq!(lines[1], "H: -");
    }
}
