//! # hupl-engine: Heads-Up Pot-Limit Hold'em Rules Engine
//!
//! A rules engine for two-player Pot-Limit Texas Hold'em. Deals cards,
//! enforces legal betting under pot-limit constraints, drives a hand from
//! blinds through showdown and ranks poker hands, with reproducible RNG for
//! deterministic replay and testing.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the text format
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG and a dealt log
//! - [`player`] - Player state, stack management and the betting primitives
//! - [`rules`] - Pot-limit legal actions, raise bounds and validation
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`round`] - The betting state machine driving one hand
//! - [`game`] - Match orchestration: dealer rotation, bust detection
//! - [`logger`] - Hand-history records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! Play a full hand with a scripted decision source:
//!
//! ```rust
//! use hupl_engine::game::{Game, GameConfig};
//! use hupl_engine::player::{ActionKind, Player};
//! use hupl_engine::round::Street;
//! use hupl_engine::rules::LegalActions;
//!
//! let mut game = Game::new(GameConfig {
//!     seed: Some(42),
//!     ..GameConfig::default()
//! });
//!
//! // Passive source: check when possible, call otherwise.
//! let mut source = |_player: &Player, legal: &LegalActions, _street: Street| {
//!     if legal.check {
//!         (ActionKind::Check, 0)
//!     } else {
//!         (ActionKind::Call, 0)
//!     }
//! };
//! let result = game.play_hand(&mut source).unwrap();
//! assert!(!result.winners.is_empty());
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use hupl_engine::cards::Card;
//! use hupl_engine::hand::{evaluate_hand, HandCategory};
//!
//! let cards: Vec<Card> = ["As", "Ks", "Qs", "Js", "Ts"]
//!     .iter()
//!     .map(|s| Card::parse(s).unwrap())
//!     .collect();
//! assert_eq!(evaluate_hand(&cards).category, HandCategory::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All outcomes are reproducible under a seeded RNG:
//!
//! ```rust
//! use hupl_engine::deck::Deck;
//!
//! let mut a = Deck::new(Some(7));
//! let mut b = Deck::new(Some(7));
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal(5).unwrap(), b.deal(5).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
