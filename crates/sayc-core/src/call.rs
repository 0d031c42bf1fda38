use crate::strain::Strain;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One action in the auction. `Bid` variants order by (level, strain);
/// the non-bid calls are legality-gated rather than ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    pub fn bid(level: u8, strain: Strain) -> Self {
        debug_assert!((1..=7).contains(&level));
        Call::Bid { level, strain }
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(*strain),
            _ => None,
        }
    }

    /// The suit of this call, if it is a suited bid.
    pub fn suit(&self) -> Option<Suit> {
        self.strain().and_then(|s| s.to_suit())
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.to_char()),
        }
    }
}

impl FromStr for Call {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        match s.as_str() {
            "P" | "PASS" => return Ok(Call::Pass),
            "X" | "DBL" | "DOUBLE" => return Ok(Call::Double),
            "XX" | "RDBL" | "REDOUBLE" => return Ok(Call::Redouble),
            _ => {}
        }
        let mut chars = s.chars();
        let level = chars.next().and_then(|c| c.to_digit(10)).ok_or(())? as u8;
        if !(1..=7).contains(&level) {
            return Err(());
        }
        let strain = chars.next().and_then(Strain::from_char).ok_or(())?;
        // Trailing "T" as in "1NT" is tolerated.
        match chars.next() {
            None => Ok(Call::Bid { level, strain }),
            Some('T') if strain == Strain::NoTrump && chars.next().is_none() => {
                Ok(Call::Bid { level, strain })
            }
            Some(_) => Err(()),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_parsing() {
        assert_eq!("P".parse(), Ok(Call::Pass));
        assert_eq!("pass".parse(), Ok(Call::Pass));
        assert_eq!("X".parse(), Ok(Call::Double));
        assert_eq!("XX".parse(), Ok(Call::Redouble));
        assert_eq!("1C".parse(), Ok(Call::bid(1, Strain::Clubs)));
        assert_eq!("4N".parse(), Ok(Call::bid(4, Strain::NoTrump)));
        assert_eq!("1NT".parse(), Ok(Call::bid(1, Strain::NoTrump)));
        assert_eq!("8C".parse::<Call>(), Err(()));
        assert_eq!("1Z".parse::<Call>(), Err(()));
    }

    #[test]
    fn test_bid_ordering() {
        let one_nt = Call::bid(1, Strain::NoTrump);
        let two_clubs = Call::bid(2, Strain::Clubs);
        let one_spade = Call::bid(1, Strain::Spades);
        assert!(one_spade < one_nt);
        assert!(one_nt < two_clubs);
    }

    #[test]
    fn test_render() {
        assert_eq!(Call::bid(3, Strain::Hearts).render(), "3H");
        assert_eq!(Call::Redouble.render(), "XX");
    }
}
