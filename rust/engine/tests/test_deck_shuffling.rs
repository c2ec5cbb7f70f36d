use std::collections::HashSet;

use hupl_engine::cards::Card;
use hupl_engine::deck::Deck;
use hupl_engine::errors::GameError;

#[test]
fn fresh_deck_has_52_unique_cards() {
    let mut deck = Deck::new(Some(42));
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_one().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new(Some(12345));
    let mut d2 = Deck::new(Some(12345));
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal(10).unwrap();
    let b: Vec<Card> = d2.deal(10).unwrap();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new(Some(1));
    let mut d2 = Deck::new(Some(2));
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal(10).unwrap();
    let b: Vec<Card> = d2.deal(10).unwrap();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn dealing_moves_cards_to_the_dealt_log() {
    let mut deck = Deck::new(Some(7));
    deck.shuffle();
    let dealt = deck.deal(5).unwrap();
    assert_eq!(deck.remaining(), 47);
    assert_eq!(deck.dealt(), dealt.as_slice());

    // every card is in exactly one of {remaining, dealt}
    let rest = deck.deal(47).unwrap();
    let mut set: HashSet<Card> = dealt.into_iter().collect();
    for c in rest {
        assert!(set.insert(c));
    }
    assert_eq!(set.len(), 52);
}

#[test]
fn overdealing_fails_with_insufficient_cards() {
    let mut deck = Deck::new(Some(9));
    deck.deal(50).unwrap();
    let err = deck.deal(3).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientCards {
            requested: 3,
            remaining: 2
        }
    );
    // the failed deal must not consume anything
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn reset_restores_canonical_order_without_reshuffling() {
    let mut deck = Deck::new(Some(11));
    deck.shuffle();
    deck.deal(20).unwrap();
    deck.reset();
    assert_eq!(deck.remaining(), 52);
    assert!(deck.dealt().is_empty());
    // canonical order starts with the two of clubs
    assert_eq!(deck.deal_one().unwrap().to_string(), "2c");
    assert_eq!(deck.deal_one().unwrap().to_string(), "3c");
}
