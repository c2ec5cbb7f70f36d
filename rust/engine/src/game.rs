use chrono::Utc;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::{format_hand_id, HandLogger, HandRecord};
use crate::player::Player;
use crate::round::{ActionSource, PlayerState, Round, RoundResult};

/// Match parameters. The defaults mirror a 1000-chip, 10/20 cash game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub player1_name: String,
    pub player2_name: String,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Seed for the deck RNG; supply one for reproducible matches
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            starting_stack: 1000,
            small_blind: 10,
            big_blind: 20,
            seed: None,
        }
    }
}

/// Serializable snapshot of the match for external consumers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub hand_number: u32,
    pub dealer_position: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub game_over: bool,
    pub players: Vec<PlayerState>,
}

/// Orchestrates a heads-up match across many hands: dealer rotation, bust
/// detection and hand history. Owns the two players and the deck; each hand
/// runs through a [`Round`] borrowing both.
pub struct Game {
    players: [Player; 2],
    deck: Deck,
    small_blind: u32,
    big_blind: u32,
    starting_stack: u32,
    seed: Option<u64>,
    dealer_position: usize,
    hand_number: u32,
    hand_history: Vec<HandRecord>,
    logger: Option<HandLogger>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            players: [
                Player::new(config.player1_name, config.starting_stack),
                Player::new(config.player2_name, config.starting_stack),
            ],
            deck: Deck::new(config.seed),
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            starting_stack: config.starting_stack,
            seed: config.seed,
            dealer_position: 0,
            hand_number: 0,
            hand_history: Vec::new(),
            logger: None,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn dealer_position(&self) -> usize {
        self.dealer_position
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn hand_history(&self) -> &[HandRecord] {
        &self.hand_history
    }

    /// Attaches a JSONL sink; every completed hand is appended to it.
    pub fn attach_logger(&mut self, logger: HandLogger) {
        self.logger = Some(logger);
    }

    /// Starts the next hand: deals, posts blinds, and hands back the live
    /// [`Round`] for turn-by-turn play. The round borrows the game's players
    /// and deck until it is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once either player has busted.
    pub fn start_new_hand(&mut self) -> Result<Round<'_>, GameError> {
        if self.players.iter().any(|p| p.stack() == 0) {
            return Err(GameError::GameOver);
        }
        self.hand_number += 1;
        info!(
            "hand #{} started, dealer: {}",
            self.hand_number,
            self.players[self.dealer_position].name()
        );
        let mut round = Round::new(
            &mut self.players,
            &mut self.deck,
            self.small_blind,
            self.big_blind,
            self.dealer_position,
        );
        round.start_hand()?;
        Ok(round)
    }

    /// Plays one complete hand through the action source, records it in the
    /// hand history, rotates the dealer button and returns the result.
    pub fn play_hand(&mut self, source: &mut dyn ActionSource) -> Result<RoundResult, GameError> {
        let dealer = self.players[self.dealer_position].name().to_string();

        let (result, actions, board) = {
            let mut round = self.start_new_hand()?;
            let result = round.play(source)?;
            (
                result,
                round.actions().to_vec(),
                round.community_cards().to_vec(),
            )
        };

        let hand_id = match &mut self.logger {
            Some(logger) => logger.next_id(),
            None => format_hand_id(&Utc::now().format("%Y%m%d").to_string(), self.hand_number),
        };
        let record = HandRecord {
            hand_id,
            hand_number: self.hand_number,
            seed: self.seed,
            dealer,
            actions,
            board,
            winners: result.winners.clone(),
            pot: result.pot,
            winning_hand: result.winning_hand.clone(),
            ts: None,
            showdown: if result.hands.is_empty() {
                None
            } else {
                Some(result.hands.clone())
            },
        };
        if let Some(logger) = &mut self.logger {
            // a failing sink must not undo a finished hand
            if let Err(e) = logger.write(&record) {
                warn!("hand log write failed: {}", e);
            }
        }
        self.hand_history.push(record);

        self.dealer_position = 1 - self.dealer_position;
        Ok(result)
    }

    /// True once either player has busted.
    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|p| p.stack() == 0)
    }

    /// The player still holding chips, once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_game_over() {
            return None;
        }
        self.players.iter().find(|p| p.stack() > 0)
    }

    /// Snapshot of the match for UIs, bots and logs.
    pub fn state(&self) -> GameState {
        GameState {
            hand_number: self.hand_number,
            dealer_position: self.dealer_position,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            game_over: self.is_game_over(),
            players: self
                .players
                .iter()
                .map(|p| PlayerState {
                    name: p.name().to_string(),
                    stack: p.stack(),
                    position: p.position(),
                    hole_cards: p.hole_cards().iter().map(|c| c.to_string()).collect(),
                    current_bet: p.current_bet(),
                    total_bet: p.total_bet(),
                    is_active: p.is_active(),
                    is_all_in: p.is_all_in(),
                    has_folded: p.has_folded(),
                })
                .collect(),
        }
    }

    /// Restores both players to the starting stack and clears all match
    /// progress, keeping the configured blinds and seed.
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.set_stack(self.starting_stack);
            player.reset_for_new_hand();
        }
        self.deck = Deck::new(self.seed);
        self.dealer_position = 0;
        self.hand_number = 0;
        self.hand_history.clear();
        info!("game reset");
    }
}
