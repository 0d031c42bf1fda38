use crate::call::Call;
use crate::contract::{Contract, DoubleStatus};
use crate::seat::{Partnership, Seat};
use crate::strain::Strain;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Error returned when a call would break auction legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllegalCall {
    pub call: Call,
}

impl fmt::Display for IllegalCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal call {} in this auction", self.call)
    }
}

impl std::error::Error for IllegalCall {}

/// An ordered, append-only call sequence starting at the dealer. Calls are
/// validated before commit; a constructed auction never contains a
/// legal-rule violation.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Auction {
    pub dealer: Seat,
    calls: Vec<Call>,
}

/// Deserialization replays every call through `try_call`, so an auction
/// built from untrusted data carries the same legality guarantee as one
/// built call by call.
impl<'de> Deserialize<'de> for Auction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            dealer: Seat,
            calls: Vec<Call>,
        }
        let raw = Raw::deserialize(deserializer)?;
        let mut auction = Auction::new(raw.dealer);
        for call in raw.calls {
            auction.try_call(call).map_err(serde::de::Error::custom)?;
        }
        Ok(auction)
    }
}

impl Auction {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Iterate (seat, call) pairs from the dealer onward.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, Call)> + '_ {
        let mut seat = self.dealer;
        self.calls.iter().map(move |&call| {
            let s = seat;
            seat = seat.next();
            (s, call)
        })
    }

    /// Append a call, validating legality first.
    pub fn try_call(&mut self, call: Call) -> Result<(), IllegalCall> {
        if self.is_legal(call) {
            self.calls.push(call);
            Ok(())
        } else {
            Err(IllegalCall { call })
        }
    }

    /// Parse and add a single call like "1C", "P", or "X".
    /// Panics on invalid input; for tests and known-good data only.
    pub fn bid(&mut self, s: &str) {
        let call = s.parse().expect("invalid call");
        self.try_call(call).expect("illegal call");
    }

    /// Parse and add space-separated calls like "P 1C P".
    /// Panics on invalid input; for tests and known-good data only.
    pub fn bids(&mut self, s: &str) {
        for token in s.split_whitespace() {
            self.bid(token);
        }
    }

    /// Build an auction from space-separated calls like "P 1C P 2C".
    /// Panics on invalid input; for tests and known-good data only.
    pub fn bidding(dealer: Seat, calls: &str) -> Self {
        let mut auction = Self::new(dealer);
        auction.bids(calls);
        auction
    }

    /// The seat whose turn it is to call.
    pub fn current_seat(&self) -> Seat {
        let mut seat = self.dealer;
        for _ in 0..self.calls.len() {
            seat = seat.next();
        }
        seat
    }

    /// Three passes after any bid, or four passes with no contract.
    pub fn is_finished(&self) -> bool {
        if self.calls.len() < 4 {
            return false;
        }
        self.calls[self.calls.len() - 3..]
            .iter()
            .all(|c| *c == Call::Pass)
    }

    /// A bid has been made by anyone.
    pub fn is_open(&self) -> bool {
        self.calls.iter().any(|c| c.is_bid())
    }

    /// The seat that made the first bid of the auction.
    pub fn opener(&self) -> Option<Seat> {
        self.iter().find(|(_, call)| call.is_bid()).map(|(s, _)| s)
    }

    /// The most recent bid and who made it.
    pub fn last_bid(&self) -> Option<(Seat, Call)> {
        self.iter().filter(|(_, call)| call.is_bid()).last()
    }

    /// The most recent non-pass call and who made it.
    pub fn last_action(&self) -> Option<(Seat, Call)> {
        self.iter().filter(|(_, call)| *call != Call::Pass).last()
    }

    /// Highest bid level so far, zero when no bid has been made.
    pub fn current_level(&self) -> u8 {
        self.last_bid().and_then(|(_, c)| c.level()).unwrap_or(0)
    }

    /// Number of non-pass calls a seat has made. The router keys off this,
    /// never off auction length modulo four: any pass that is not at index
    /// zero breaks the modulo assumption.
    pub fn actions_by(&self, seat: Seat) -> usize {
        self.iter()
            .filter(|(s, call)| *s == seat && *call != Call::Pass)
            .count()
    }

    pub fn has_acted(&self, seat: Seat) -> bool {
        self.actions_by(seat) > 0
    }

    /// A partnership's first bid (never an assumption about index zero).
    pub fn first_bid_by(&self, partnership: Partnership) -> Option<(Seat, Call)> {
        self.iter()
            .find(|(s, call)| s.partnership() == partnership && call.is_bid())
    }

    /// Every bid a seat has made, in order.
    pub fn bids_made_by(&self, seat: Seat) -> Vec<Call> {
        self.iter()
            .filter(|(s, call)| *s == seat && call.is_bid())
            .map(|(_, call)| call)
            .collect()
    }

    /// Whether a partnership has named the given strain in any bid.
    pub fn side_has_bid_suit(&self, partnership: Partnership) -> bool {
        self.iter().any(|(s, call)| {
            s.partnership() == partnership && call.is_bid() && call.suit().is_some()
        })
    }

    fn is_legal(&self, call: Call) -> bool {
        if self.is_finished() {
            return false;
        }
        match call {
            Call::Pass => true,
            Call::Bid { level, strain } => {
                if !(1..=7).contains(&level) {
                    return false;
                }
                match self.last_bid() {
                    None => true,
                    Some((_, last)) => Call::Bid { level, strain } > last,
                }
            }
            Call::Double => {
                // Only an opponent's bid, not yet doubled, may be doubled.
                matches!(
                    self.last_action(),
                    Some((seat, last)) if last.is_bid()
                        && seat.partnership() != self.current_seat().partnership()
                )
            }
            Call::Redouble => {
                // Only an opponent's double may be redoubled.
                matches!(
                    self.last_action(),
                    Some((seat, Call::Double))
                        if seat.partnership() != self.current_seat().partnership()
                )
            }
        }
    }

    /// Every call that would be legal as the next call.
    pub fn legal_calls(&self) -> Vec<Call> {
        if self.is_finished() {
            return Vec::new();
        }
        let mut result = vec![Call::Pass];
        for level in 1..=7u8 {
            for strain in Strain::ALL {
                let call = Call::Bid { level, strain };
                if self.is_legal(call) {
                    result.push(call);
                }
            }
        }
        for call in [Call::Double, Call::Redouble] {
            if self.is_legal(call) {
                result.push(call);
            }
        }
        result
    }

    /// The cheapest legal bid in exactly the given strain, if any level
    /// of it is still available.
    pub fn cheapest_bid_in(&self, strain: Strain) -> Option<Call> {
        (1..=7u8)
            .map(|level| Call::Bid { level, strain })
            .find(|&call| self.is_legal(call))
    }

    /// The minimal legal bid at or above the requested one, in any
    /// strain. Callers wanting a specific strain must use
    /// `cheapest_bid_in` or check the result for equality; this helper
    /// never silently substitutes for a semantically decided bid.
    pub fn next_legal_bid_at_or_above(&self, level: u8, strain: Strain) -> Option<Call> {
        let wanted = Call::Bid { level, strain };
        self.legal_calls()
            .into_iter()
            .filter(|c| c.is_bid() && *c >= wanted)
            .min()
    }

    /// The auction as it stood after the first `len` calls.
    pub fn prefix(&self, len: usize) -> Auction {
        Auction {
            dealer: self.dealer,
            calls: self.calls[..len.min(self.calls.len())].to_vec(),
        }
    }

    /// The contract as it stands, with declarer and double status.
    pub fn current_contract(&self) -> Option<Contract> {
        let mut last_bid = None;
        let mut double_status = DoubleStatus::Undoubled;
        // First seat on each side to name each strain, for declarer tracking.
        let mut first_namer = [[None; 5]; 2];

        for (seat, call) in self.iter() {
            match call {
                Call::Bid { level, strain } => {
                    let side = seat.partnership().idx();
                    let declarer = *first_namer[side][strain.idx()].get_or_insert(seat);
                    last_bid = Some((level, strain, declarer));
                    double_status = DoubleStatus::Undoubled;
                }
                Call::Double => double_status = DoubleStatus::Doubled,
                Call::Redouble => double_status = DoubleStatus::Redoubled,
                Call::Pass => {}
            }
        }

        last_bid.map(|(level, strain, declarer)| Contract {
            level,
            strain,
            double_status,
            declarer,
        })
    }

    /// The final contract of a finished auction; None when passed out or
    /// still live.
    pub fn final_contract(&self) -> Option<Contract> {
        if self.is_finished() {
            self.current_contract()
        } else {
            None
        }
    }
}

impl fmt::Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.calls.iter().map(|c| c.render()).collect();
        write!(f, "{}: {}", self.dealer, rendered.join(" "))
    }
}
