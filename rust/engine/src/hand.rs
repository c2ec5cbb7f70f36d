use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// The ten hand categories, ordered weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// The strength of a best 5-card hand: category first, then the
/// category-specific tiebreaker ranks compared lexicographically.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: HandCategory,
    // tiebreakers: ordered high -> low within their category's layout
    pub tiebreakers: Vec<u8>,
}

impl HandStrength {
    /// Human-readable description, e.g. "Full House, Kings over Queens".
    pub fn name(&self) -> String {
        let rank = |i: usize| Rank::from_u8(self.tiebreakers[i]).name();
        match self.category {
            HandCategory::RoyalFlush => "Royal Flush".to_string(),
            HandCategory::StraightFlush => format!("Straight Flush, {} high", rank(0)),
            HandCategory::FourOfAKind => format!("Four of a Kind, {}s", rank(0)),
            HandCategory::FullHouse => format!("Full House, {}s over {}s", rank(0), rank(1)),
            HandCategory::Flush => format!("Flush, {} high", rank(0)),
            HandCategory::Straight => format!("Straight, {} high", rank(0)),
            HandCategory::ThreeOfAKind => format!("Three of a Kind, {}s", rank(0)),
            HandCategory::TwoPair => format!("Two Pair, {}s and {}s", rank(0), rank(1)),
            HandCategory::OnePair => format!("Pair of {}s", rank(0)),
            HandCategory::HighCard => format!("{} high", rank(0)),
        }
    }
}

/// Evaluates the best 5-card hand from 5-7 cards.
///
/// Exactly five cards are classified directly; for six or seven, every
/// 5-card subset is classified and the maximal `(category, tiebreakers)`
/// kept.
///
/// # Panics
///
/// Panics if fewer than five cards are supplied.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    assert!(
        cards.len() >= 5,
        "hand evaluation needs at least 5 cards, got {}",
        cards.len()
    );
    if cards.len() == 5 {
        return evaluate_five(cards);
    }
    let mut best = evaluate_five(&cards[..5]);
    for combo in cards.iter().copied().combinations(5) {
        let strength = evaluate_five(&combo);
        if strength > best {
            best = strength;
        }
    }
    best
}

/// Orders two 5-7 card hands by their best 5-card strength.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Ordering {
    evaluate_hand(a).cmp(&evaluate_hand(b))
}

/// Returns the name(s) holding the best hand; several on an exact tie.
pub fn find_winner(players_hands: &[(String, Vec<Card>)]) -> Vec<String> {
    let strengths: Vec<HandStrength> = players_hands
        .iter()
        .map(|(_, cards)| evaluate_hand(cards))
        .collect();
    let Some(best) = strengths.iter().max().cloned() else {
        return Vec::new();
    };
    players_hands
        .iter()
        .zip(&strengths)
        .filter(|(_, strength)| **strength == best)
        .map(|((name, _), _)| name.clone())
        .collect()
}

fn evaluate_five(cards: &[Card]) -> HandStrength {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let (is_straight, straight_high) = check_straight(&ranks);

    if is_straight && is_flush {
        if straight_high == 14 {
            return HandStrength {
                category: HandCategory::RoyalFlush,
                tiebreakers: vec![14],
            };
        }
        return HandStrength {
            category: HandCategory::StraightFlush,
            tiebreakers: vec![straight_high],
        };
    }

    // (count, rank) groups, largest group first, higher rank first within a size
    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if groups[0].0 == 4 {
        return HandStrength {
            category: HandCategory::FourOfAKind,
            tiebreakers: vec![groups[0].1, groups[1].1],
        };
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return HandStrength {
            category: HandCategory::FullHouse,
            tiebreakers: vec![groups[0].1, groups[1].1],
        };
    }
    if is_flush {
        return HandStrength {
            category: HandCategory::Flush,
            tiebreakers: ranks,
        };
    }
    if is_straight {
        return HandStrength {
            category: HandCategory::Straight,
            tiebreakers: vec![straight_high],
        };
    }
    if groups[0].0 == 3 {
        return HandStrength {
            category: HandCategory::ThreeOfAKind,
            tiebreakers: vec![groups[0].1, groups[1].1, groups[2].1],
        };
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        return HandStrength {
            category: HandCategory::TwoPair,
            tiebreakers: vec![groups[0].1, groups[1].1, groups[2].1],
        };
    }
    if groups[0].0 == 2 {
        return HandStrength {
            category: HandCategory::OnePair,
            tiebreakers: vec![groups[0].1, groups[1].1, groups[2].1, groups[3].1],
        };
    }
    HandStrength {
        category: HandCategory::HighCard,
        tiebreakers: ranks,
    }
}

fn check_straight(ranks_desc: &[u8]) -> (bool, u8) {
    let distinct = ranks_desc.windows(2).all(|w| w[0] != w[1]);
    if distinct && ranks_desc[0] - ranks_desc[4] == 4 {
        return (true, ranks_desc[0]);
    }
    // the wheel A-2-3-4-5 ranks as a 5-high straight, not ace-high
    if ranks_desc == [14, 5, 4, 3, 2] {
        return (true, 5);
    }
    (false, 0)
}
