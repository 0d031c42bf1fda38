//! Pure hand-evaluation helpers and the combined-point tables producers
//! consult before committing to a level.

/// Minimum combined partnership points for a suited contract at a level.
pub fn min_combined_for_suited(level: u8) -> u8 {
    match level {
        1 => 16,
        2 => 19,
        3 => 22,
        4 => 25,
        5 => 28,
        6 => 33,
        7 => 37,
        _ => 40,
    }
}

/// Minimum combined partnership points for a notrump contract at a level.
pub fn min_combined_for_nt(level: u8) -> u8 {
    match level {
        1 => 19,
        2 => 22,
        3 => 25,
        4 => 28,
        5 => 30,
        6 => 33,
        7 => 37,
        _ => 40,
    }
}

/// The level needed for game in a strain.
pub fn game_level(strain: sayc_core::Strain) -> u8 {
    use sayc_core::Strain;
    match strain {
        Strain::NoTrump => 3,
        Strain::Hearts | Strain::Spades => 4,
        Strain::Clubs | Strain::Diamonds => 5,
    }
}
