//! Per-turn auction analysis. Everything here is recomputed from the
//! immutable auction on every invocation; nothing carries over between
//! turns, so stale convention state cannot leak across calls.

use sayc_core::{Auction, Call, Hand, Partnership, Seat, Strain, Suit, Vulnerability};
use serde::{Deserialize, Serialize};

/// An HCP range a player has shown through their calls. Starts fully
/// open and narrows as calls accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShownRange {
    pub min: u8,
    pub max: u8,
}

impl Default for ShownRange {
    fn default() -> Self {
        Self { min: 0, max: 40 }
    }
}

impl ShownRange {
    pub fn narrow(&mut self, min: u8, max: u8) {
        self.min = self.min.max(min);
        self.max = self.max.min(max);
        if self.max < self.min {
            // Contradictory shows: trust the later, stronger statement.
            self.max = self.min;
        }
    }

    /// The working estimate of the hand. An open-ended show is read
    /// just above its floor rather than averaged against the 40-point
    /// ceiling, which would wildly inflate slam arithmetic.
    pub fn midpoint(self) -> u8 {
        if self.max >= 40 {
            self.min + 4
        } else {
            (self.min + self.max) / 2
        }
    }
}

/// Derived snapshot of the auction from one seat's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConventionContext {
    pub seat: Seat,
    /// A suit both partners have named, if any (first such in the auction).
    pub agreed_trump: Option<Suit>,
    /// Our side's first bid, found by scanning actual calls.
    pub side_first_bid: Option<(Seat, Call)>,
    /// Whether 4NT by our side is ace-asking rather than quantitative.
    pub blackwood_available: bool,
    /// Partner's 4NT ace-ask is awaiting our answer.
    pub ace_ask_outstanding: bool,
    /// We asked with 4NT and partner's answer is the call before us.
    pub blackwood_answer: Option<Call>,
    pub partner_range: ShownRange,
    pub partner_opened: bool,
    pub we_opened_auction: bool,
    pub partner_last_call: Option<Call>,
    pub opponents_have_acted: bool,
    /// The opponents' opening bid, when they opened the auction.
    pub their_opening: Option<(Seat, Call)>,
    pub current_level: u8,
    /// Whether this seat's side is vulnerable; set by the engine.
    pub vulnerable: bool,
}

impl ConventionContext {
    pub fn derive(auction: &Auction, seat: Seat) -> Self {
        let partner = seat.partner();
        let side = seat.partnership();
        let opener = auction.opener();

        let mut partner_range = ShownRange::default();
        for (i, (caller, call)) in auction.iter().enumerate() {
            if caller != partner {
                continue;
            }
            let prefix = auction.prefix(i);
            if let Some((min, max)) = shown_range(&prefix, caller, call) {
                partner_range.narrow(min, max);
            }
        }

        let partner_last_call = auction
            .iter()
            .filter(|(s, _)| *s == partner)
            .map(|(_, c)| c)
            .last();

        Self {
            seat,
            agreed_trump: agreed_trump_in(auction, side),
            side_first_bid: auction.first_bid_by(side),
            blackwood_available: blackwood_available_in(auction, side),
            ace_ask_outstanding: ace_ask_outstanding(auction, seat),
            blackwood_answer: blackwood_answer(auction, seat),
            partner_range,
            partner_opened: opener == Some(partner),
            we_opened_auction: opener.map(|o| o.partnership()) == Some(side),
            partner_last_call,
            opponents_have_acted: Seat::ALL
                .iter()
                .any(|&s| s.partnership() != side && auction.has_acted(s)),
            their_opening: match opener {
                Some(o) if o.partnership() != side => {
                    auction.first_bid_by(o.partnership())
                }
                _ => None,
            },
            current_level: auction.current_level(),
            vulnerable: false,
        }
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerable = vulnerability.is_vulnerable(self.seat);
        self
    }

    /// Partnership strength estimate: our HCP plus the midpoint of what
    /// partner has shown.
    pub fn combined_estimate(&self, hand: &Hand) -> u8 {
        hand.hcp() + self.partner_range.midpoint()
    }
}

/// The first suit named by both members of a partnership, in auction order.
fn agreed_trump_in(auction: &Auction, side: Partnership) -> Option<Suit> {
    let mut named = [[false; 4]; 4];
    for (seat, call) in auction.iter() {
        if seat.partnership() != side {
            continue;
        }
        if let Some(suit) = call.suit() {
            if named[seat.partner().idx()][suit.idx()] {
                return Some(suit);
            }
            named[seat.idx()][suit.idx()] = true;
        }
    }
    None
}

/// 4NT by this side asks for aces only when a suit underpins the auction:
/// either a trump suit is agreed, or the side's first bid was a suit, or
/// the side has shown a suit since an initial NT. Otherwise 4NT is
/// quantitative.
fn blackwood_available_in(auction: &Auction, side: Partnership) -> bool {
    if agreed_trump_in(auction, side).is_some() {
        return true;
    }
    match auction.first_bid_by(side) {
        None => false,
        Some((_, call)) if call.suit().is_some() => true,
        Some(_) => auction.side_has_bid_suit(side),
    }
}

const FOUR_NT: Call = Call::Bid {
    level: 4,
    strain: Strain::NoTrump,
};

/// Partner bid an ace-asking 4NT and we have not answered yet. The 4NT
/// meaning is judged on the auction as it stood when partner bid it.
fn ace_ask_outstanding(auction: &Auction, seat: Seat) -> bool {
    let partner = seat.partner();
    let len = auction.len();
    if len < 2 {
        return false;
    }
    let Some((ask_seat, call)) = auction.iter().nth(len - 2) else {
        return false;
    };
    if ask_seat != partner || call != FOUR_NT {
        return false;
    }
    blackwood_available_in(&auction.prefix(len - 2), seat.partnership())
}

/// Partner's answer to our ace-asking 4NT, when it is the call before us.
fn blackwood_answer(auction: &Auction, seat: Seat) -> Option<Call> {
    let partner = seat.partner();
    let len = auction.len();
    if len < 2 {
        return None;
    }
    // Our 4NT must be on the table and judged ace-asking when bid.
    let (ask_index, _) = auction
        .iter()
        .enumerate()
        .filter(|(_, (s, call))| *s == seat && *call == FOUR_NT)
        .last()?;
    if !blackwood_available_in(&auction.prefix(ask_index), seat.partnership()) {
        return None;
    }
    let (answer_seat, answer) = auction.iter().nth(len - 2)?;
    if answer_seat != partner {
        return None;
    }
    match answer {
        Call::Bid { level: 5, strain } if strain.to_suit().is_some() => Some(answer),
        _ => None,
    }
}

/// What HCP range a single call shows, judged against the auction as it
/// stood before the call. Later calls that refine shape but not strength
/// return None.
fn shown_range(prefix: &Auction, caller: Seat, call: Call) -> Option<(u8, u8)> {
    let partner = caller.partner();
    let side = caller.partnership();
    let open_before = prefix.is_open();
    let first_action = prefix.actions_by(caller) == 0;

    match call {
        Call::Pass => {
            // A pass of the opening decision caps the hand.
            if !open_before && first_action {
                Some((0, 12))
            } else {
                None
            }
        }
        Call::Double => {
            if !first_action {
                None
            } else if prefix.has_acted(partner) {
                Some((6, 40)) // negative double
            } else {
                Some((12, 40)) // takeout double
            }
        }
        Call::Redouble => Some((10, 40)),
        Call::Bid { level, strain } => {
            if !first_action {
                return None;
            }
            if !open_before {
                return Some(opening_range(level, strain));
            }
            let our_side_silent =
                !prefix.has_acted(partner) && prefix.first_bid_by(side).is_none();
            if our_side_silent {
                // Overcall seat.
                return match strain {
                    Strain::NoTrump => Some((15, 18)),
                    _ => Some((8, 16)),
                };
            }
            response_range(prefix, partner, level, strain)
        }
    }
}

fn opening_range(level: u8, strain: Strain) -> (u8, u8) {
    match (level, strain) {
        (1, Strain::NoTrump) => (15, 17),
        (2, Strain::NoTrump) => (20, 21),
        (2, Strain::Clubs) => (22, 40),
        (1, _) => (12, 21),
        _ => (5, 10), // weak twos and preempts
    }
}

/// Range shown by a first response to partner's action.
fn response_range(prefix: &Auction, partner: Seat, level: u8, strain: Strain) -> Option<(u8, u8)> {
    if let Some(suit) = strain.to_suit() {
        let raising = prefix
            .bids_made_by(partner)
            .iter()
            .any(|b| b.suit() == Some(suit));
        let cheapest = prefix
            .cheapest_bid_in(strain)
            .and_then(|c| c.level())
            .unwrap_or(level);
        if raising {
            return if level > cheapest {
                Some((10, 12)) // jump raise, invitational
            } else {
                Some((6, 10)) // single raise
            };
        }
        return match level {
            1 => Some((6, 40)),
            2 => Some((10, 40)),
            _ => None,
        };
    }
    match level {
        1 => Some((6, 10)),
        2 => Some((11, 12)),
        3 => Some((13, 15)),
        _ => None,
    }
}
