use std::cmp::Ordering;

use hupl_engine::cards::Card;
use hupl_engine::hand::{compare_hands, evaluate_hand, find_winner, HandCategory};

fn cards(texts: &[&str]) -> Vec<Card> {
    texts
        .iter()
        .map(|t| Card::parse(t).expect("test card"))
        .collect()
}

#[test]
fn detects_royal_flush() {
    let hand = evaluate_hand(&cards(&["As", "Ks", "Qs", "Js", "Ts"]));
    assert_eq!(hand.category, HandCategory::RoyalFlush);
    assert_eq!(hand.tiebreakers, vec![14]);
    assert_eq!(hand.name(), "Royal Flush");
}

#[test]
fn four_of_a_kind_tiebreakers_are_quad_then_kicker() {
    let hand = evaluate_hand(&cards(&["Kd", "Kh", "Ks", "Kc", "2d"]));
    assert_eq!(hand.category, HandCategory::FourOfAKind);
    assert_eq!(hand.tiebreakers, vec![13, 2]);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let hand = evaluate_hand(&cards(&["Ah", "2c", "3d", "4s", "5h"]));
    assert_eq!(hand.category, HandCategory::Straight);
    assert_eq!(hand.tiebreakers, vec![5], "the ace plays low in a wheel");
    assert_eq!(hand.name(), "Straight, Five high");

    // a six-high straight beats the wheel
    let six_high = cards(&["2h", "3c", "4d", "5s", "6h"]);
    let wheel = cards(&["Ah", "2c", "3d", "4s", "5h"]);
    assert_eq!(compare_hands(&six_high, &wheel), Ordering::Greater);
}

#[test]
fn full_house_tiebreakers_are_trips_then_pair() {
    let hand = evaluate_hand(&cards(&["Kd", "Kh", "Ks", "Qc", "Qd"]));
    assert_eq!(hand.category, HandCategory::FullHouse);
    assert_eq!(hand.tiebreakers, vec![13, 12]);
    assert_eq!(hand.name(), "Full House, Kings over Queens");
}

#[test]
fn two_pair_orders_high_pair_first() {
    let hand = evaluate_hand(&cards(&["9d", "9h", "4s", "4c", "Ad"]));
    assert_eq!(hand.category, HandCategory::TwoPair);
    assert_eq!(hand.tiebreakers, vec![9, 4, 14]);
}

#[test]
fn flush_uses_all_five_ranks_for_ties() {
    let a = evaluate_hand(&cards(&["Ah", "Jh", "9h", "6h", "3h"]));
    let b = evaluate_hand(&cards(&["Ad", "Jd", "9d", "6d", "2d"]));
    assert_eq!(a.category, HandCategory::Flush);
    assert!(a > b, "the last kicker decides");
}

#[test]
fn seven_cards_pick_the_best_five() {
    // the pair of aces on the board is beaten by the spade flush in hand
    let hand = evaluate_hand(&cards(&["As", "Ks", "Ah", "7s", "2s", "9s", "2d"]));
    assert_eq!(hand.category, HandCategory::Flush);
    assert_eq!(hand.tiebreakers, vec![14, 13, 9, 7, 2]);
}

#[test]
fn six_cards_are_supported() {
    let hand = evaluate_hand(&cards(&["Qd", "Qh", "Qs", "8c", "8d", "2h"]));
    assert_eq!(hand.category, HandCategory::FullHouse);
    assert_eq!(hand.tiebreakers, vec![12, 8]);
}

#[test]
fn straight_flush_below_ace_is_not_royal() {
    let hand = evaluate_hand(&cards(&["9h", "8h", "7h", "6h", "5h", "2c", "2d"]));
    assert_eq!(hand.category, HandCategory::StraightFlush);
    assert_eq!(hand.tiebreakers, vec![9]);
}

#[test]
fn category_ordering_is_correct() {
    let quads = cards(&["Ac", "Ad", "Ah", "As", "Kc", "Qd", "2h"]);
    let full_house = cards(&["Kc", "Kd", "Kh", "Qc", "Qd", "2h", "3s"]);
    assert_eq!(compare_hands(&quads, &full_house), Ordering::Greater);

    let straight = cards(&["5c", "6h", "7c", "8h", "9d"]);
    let trips = cards(&["Qc", "Qh", "Qd", "2s", "3c"]);
    assert_eq!(compare_hands(&straight, &trips), Ordering::Greater);

    let pair = cards(&["Ac", "Ah", "2s", "3d", "4c"]);
    let high = cards(&["Ac", "Kh", "9s", "8d", "7c"]);
    assert_eq!(compare_hands(&pair, &high), Ordering::Greater);
}

#[test]
fn exact_ties_compare_equal() {
    let a = cards(&["Ah", "Kd", "Qc", "Js", "9h"]);
    let b = cards(&["Ad", "Kh", "Qs", "Jc", "9d"]);
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn find_winner_returns_all_tied_players() {
    // both players play the board straight
    let board = ["Tc", "Jd", "Qh", "Ks", "Ac"];
    let mut alice = cards(&["2h", "3d"]);
    alice.extend(cards(&board));
    let mut bob = cards(&["4c", "5s"]);
    bob.extend(cards(&board));
    let entries = vec![("alice".to_string(), alice), ("bob".to_string(), bob)];
    let winners = find_winner(&entries);
    assert_eq!(winners, vec!["alice".to_string(), "bob".to_string()]);
}

#[test]
fn find_winner_picks_the_stronger_hand() {
    let entries = vec![
        (
            "alice".to_string(),
            cards(&["Ah", "Ad", "7c", "8d", "2s", "Jc", "3h"]),
        ),
        (
            "bob".to_string(),
            cards(&["Kh", "Kd", "7c", "8d", "2s", "Jc", "3h"]),
        ),
    ];
    assert_eq!(find_winner(&entries), vec!["alice".to_string()]);
}
