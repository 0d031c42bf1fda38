//! Phase routing: which producer owns the current turn.

use crate::conventions::ConventionKind;
use sayc_core::{Auction, Seat};
use serde::{Deserialize, Serialize};

/// Auction phase for the seat to act. Computed fresh each turn, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Opening,
    FirstResponse,
    OpenerRebid,
    ResponderRebid,
    Overcall,
    Advance,
    CompetitiveContinuation,
    ConventionResponse(ConventionKind),
    Terminal,
}

/// Route a live auction to the phase owning this seat's call.
///
/// The first-call/rebid split keys off the seat's actual non-pass call
/// count (`actions_by`), never off auction length modulo four: a single
/// pass anywhere but index zero breaks the modulo assumption.
pub fn route(auction: &Auction, seat: Seat) -> Phase {
    if auction.is_finished() {
        return Phase::Terminal;
    }
    let Some(opener) = auction.opener() else {
        return Phase::Opening;
    };

    let our_side = seat.partnership();
    let we_opened = opener.partnership() == our_side;
    let actions = auction.actions_by(seat);
    let opponents_acted = Seat::ALL
        .iter()
        .any(|&s| s.partnership() != our_side && auction.has_acted(s));

    if we_opened {
        if seat == opener {
            if actions >= 2 && opponents_acted {
                Phase::CompetitiveContinuation
            } else {
                Phase::OpenerRebid
            }
        } else {
            match actions {
                0 => Phase::FirstResponse,
                1 => Phase::ResponderRebid,
                _ if opponents_acted => Phase::CompetitiveContinuation,
                _ => Phase::ResponderRebid,
            }
        }
    } else if actions == 0 {
        if auction.has_acted(seat.partner()) {
            Phase::Advance
        } else {
            Phase::Overcall
        }
    } else {
        Phase::CompetitiveContinuation
    }
}
