//! End-to-end auction scenarios through the public engine API.

use sayc_core::{Auction, Call, Deal, Hand, Seat, Strain, Vulnerability};
use sayc_engine::{ConventionKind, Engine, Phase};

fn decide(calls: &str, holding: &str) -> Call {
    let auction = Auction::bidding(Seat::North, calls);
    let hand = Hand::from_holding(holding).unwrap();
    Engine::default()
        .next_call(&auction, &hand, Vulnerability::None)
        .unwrap()
        .call
}

#[test]
fn quantitative_4nt_is_not_answered_with_aces() {
    // 1NT - 4NT with no suit shown anywhere: the 4NT is an invitation,
    // and the opener must never bid a 5-level "answer".
    let auction = Auction::bidding(Seat::North, "1N P 4N P");
    let hand = Hand::from_holding("AQ32.KJ4.KQ5.J82").unwrap();
    let decision = Engine::default()
        .next_call(&auction, &hand, Vulnerability::None)
        .unwrap();
    assert!(!matches!(
        decision.trace.phase,
        Phase::ConventionResponse(ConventionKind::BlackwoodResponse)
    ));
    assert_ne!(decision.call, Call::bid(5, Strain::Clubs));
    assert_ne!(decision.call, Call::bid(5, Strain::Diamonds));
}

#[test]
fn blackwood_4nt_after_suit_agreement_is_answered() {
    // Spades agreed, partner asks: the ladder answer comes back.
    for (holding, answer) in [
        ("KQJ2.KQJ.KQJ.QJ2", Strain::Clubs),
        ("AQJ2.KQJ.KQJ.QJ2", Strain::Diamonds),
        ("AQJ2.AQJ.KQJ.QJ2", Strain::Hearts),
        ("AQJ2.AQJ.AQJ.QJ2", Strain::Spades),
        ("AQJ2.AQJ.AQJ.AJ2", Strain::Clubs),
    ] {
        assert_eq!(
            decide("1S P 3S P 4N P", holding),
            Call::bid(5, answer),
            "holding {}",
            holding
        );
    }
}

#[test]
fn quantitative_raises_reach_the_table() {
    // The slam raises over 1NT are jumps past the natural clamp; they
    // must still come through the full engine pipeline.
    assert_eq!(
        decide("1N P", "AQ2.K98.A543.QJ6"),
        Call::bid(4, Strain::NoTrump)
    );
    assert_eq!(
        decide("1N P", "AQ2.K98.A543.KJ6"),
        Call::bid(6, Strain::NoTrump)
    );
}

#[test]
fn suit_underpinned_4nt_is_blackwood_even_after_notrump() {
    // Opener showed spades before the notrump calls, so responder's 4NT
    // asks for aces. Two aces: 5H.
    assert_eq!(
        decide("1S P 2N P 3N P 4N P", "AQJ32.A54.KQ2.32"),
        Call::bid(5, Strain::Hearts)
    );
}

#[test]
fn blackwood_continuation_places_the_slam() {
    // Asker holds two aces, partner shows two: 6S.
    assert_eq!(
        decide("1S P 3S P 4N P 5H P", "AKQJ2.A43.KQJ.Q2"),
        Call::bid(6, Strain::Spades)
    );
    // Partner shows none: sign off in 5S.
    assert_eq!(
        decide("1S P 3S P 4N P 5C P", "AKQJ2.K43.KQJ.Q2"),
        Call::bid(5, Strain::Spades)
    );
}

#[test]
fn stayman_finds_the_major_fit() {
    // Responder asks, opener shows hearts.
    assert_eq!(decide("1N P", "KQ32.J42.A765.82"), Call::bid(2, Strain::Clubs));
    assert_eq!(
        decide("1N P 2C P", "AQ32.KQ42.A7.Q82"),
        Call::bid(2, Strain::Hearts)
    );
}

#[test]
fn transfer_flow_completes_and_rests() {
    // Weak responder with five spades transfers...
    assert_eq!(decide("1N P", "QT532.942.765.82"), Call::bid(2, Strain::Hearts));
    // ...opener completes without judgment...
    assert_eq!(
        decide("1N P 2H P", "AQ2.K42.AJ65.Q82"),
        Call::bid(2, Strain::Spades)
    );
    // ...and the weak hand lets it rest.
    assert_eq!(decide("1N P 2H P 2S P", "QT532.942.765.82"), Call::Pass);
}

#[test]
fn responder_rebid_stays_sane_on_the_old_runaway_shape() {
    // The auction shape that once produced 4NT-5C-7NT spirals: a
    // responder's second turn after a leading pass. Whatever the call,
    // it must stay at or below game and legal.
    let auction = Auction::bidding(Seat::North, "P 1C P 1S P 3C P");
    let hand = Hand::from_holding("KQ32.A43.KJ5.876").unwrap();
    let decision = Engine::default()
        .next_call(&auction, &hand, Vulnerability::None)
        .unwrap();
    assert_eq!(decision.trace.phase, Phase::ResponderRebid);
    if let Some(level) = decision.call.level() {
        assert!(level <= 4, "level {} is a runaway", level);
    }
    let mut replay = auction.clone();
    assert!(replay.try_call(decision.call).is_ok());
}

#[test]
fn takeout_double_and_forced_answer() {
    assert_eq!(decide("1H", "KQ42.2.AJ76.K982"), Call::Double);
    // Advancer answers even with nothing when the double stands.
    assert_eq!(decide("1H X P", "9432.432.8765.32"), Call::bid(1, Strain::Spades));
}

#[test]
fn michaels_shows_both_majors_over_a_minor() {
    assert_eq!(decide("1D", "KQ532.KJ642.7.82"), Call::bid(2, Strain::Diamonds));
}

#[test]
fn negative_double_shows_the_unbid_major() {
    assert_eq!(decide("1C 1S", "532.KQ42.A765.82"), Call::Double);
}

#[test]
fn full_deal_bids_to_a_quiet_finish() {
    let hands = [
        Hand::from_holding("AKQ32.K2.432.T98").unwrap(),
        Hand::from_holding("JT9.AQ54.KQ.7654").unwrap(),
        Hand::from_holding("876.JT93.A8.AKQ2").unwrap(),
        Hand::from_holding("54.876.JT9765.J3").unwrap(),
    ];
    let deal = Deal::new(Seat::North, Vulnerability::None, hands).unwrap();
    let engine = Engine::default();
    let mut auction = Auction::new(deal.dealer);

    while !auction.is_finished() {
        assert!(auction.len() < 100, "auction failed to terminate");
        let seat = auction.current_seat();
        let decision = engine
            .next_call(&auction, deal.hand(seat), deal.vulnerability)
            .unwrap();
        auction.try_call(decision.call).unwrap();
    }

    // Plenty of points at the table: someone plays something.
    let contract = auction.final_contract().expect("deal should not pass out");
    assert!(contract.level >= 1);
}

#[test]
fn passed_out_board_stays_passed_out() {
    // Ten flat points in every seat: nobody has an opening bid.
    let hands = [
        Hand::from_holding("A543.K87.Q92.JT6").unwrap(),
        Hand::from_holding("K87.Q92.JT6.A543").unwrap(),
        Hand::from_holding("Q92.JT6.A543.K87").unwrap(),
        Hand::from_holding("JT6.A543.K87.Q92").unwrap(),
    ];
    let deal = Deal::new(Seat::North, Vulnerability::Both, hands).unwrap();
    let engine = Engine::default();
    let mut auction = Auction::new(deal.dealer);
    while !auction.is_finished() {
        assert!(auction.len() < 100);
        let seat = auction.current_seat();
        let decision = engine
            .next_call(&auction, deal.hand(seat), deal.vulnerability)
            .unwrap();
        auction.try_call(decision.call).unwrap();
    }
    assert_eq!(auction.len(), 4);
    assert!(auction.final_contract().is_none());
    // A closed auction refuses further decisions.
    let hand = deal.hand(Seat::North);
    assert!(engine
        .next_call(&auction, hand, deal.vulnerability)
        .is_err());
}
