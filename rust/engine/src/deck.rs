use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A standard 52-card deck with a dealt log. Every card is in exactly one of
/// {remaining, dealt} at any time; the deck exclusively owns all 52 cards.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds the deck in canonical (suit, then rank) order. A seed makes
    /// every subsequent shuffle reproducible; without one the RNG is drawn
    /// from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self {
            cards: full_deck(),
            dealt: Vec::new(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals `n` cards from the front, moving them to the dealt log.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientCards`] if fewer than `n` remain.
    /// 52 cards always suffice for heads-up play, so hitting this mid-hand
    /// indicates a programming error in the caller.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let dealt: Vec<Card> = self.cards.drain(..n).collect();
        self.dealt.extend_from_slice(&dealt);
        Ok(dealt)
    }

    pub fn deal_one(&mut self) -> Result<Card, GameError> {
        Ok(self.deal(1)?[0])
    }

    /// Restores the full 52-card canonical order and clears the dealt log.
    /// Does not reshuffle.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.dealt.clear();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }
}
