use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, HandStrength};
use crate::player::{ActionKind, BlindKind, Player, Position};
use crate::rules::{self, LegalActions};

/// Represents a betting street in Texas Hold'em poker, plus the terminal
/// showdown phase. Streets only ever advance forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before the flop (hole cards dealt)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
    /// Hands are revealed and the pot awarded
    Showdown,
}

/// Records a single action during a hand, keyed to the street it happened on.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    pub action: ActionKind,
    pub amount: u32,
    pub street: Street,
}

/// The external decision-maker the betting loop blocks on: a UI, a bot, a
/// test script. Given the acting player, their legal actions and the street,
/// it returns the chosen `(action, amount)`; amounts are street totals.
///
/// The engine imposes no timeout or retry semantics. An illegal decision
/// surfaces as [`GameError::IllegalAction`] to whoever drives the round.
pub trait ActionSource {
    fn act(&mut self, player: &Player, legal: &LegalActions, street: Street) -> (ActionKind, u32);
}

impl<F> ActionSource for F
where
    F: FnMut(&Player, &LegalActions, Street) -> (ActionKind, u32),
{
    fn act(&mut self, player: &Player, legal: &LegalActions, street: Street) -> (ActionKind, u32) {
        self(player, legal, street)
    }
}

/// A player's hand as revealed at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShownHand {
    pub player: String,
    /// Hole cards in display form
    pub cards: Vec<String>,
    pub strength: HandStrength,
    pub hand_name: String,
}

/// The outcome of one completed hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winners: Vec<String>,
    pub pot: u32,
    /// Each winner's share of the pot (before the odd chip, if any)
    pub pot_share: u32,
    pub winning_hand: String,
    /// Revealed hands; empty when the hand ended on a fold
    pub hands: Vec<ShownHand>,
}

/// Serializable public snapshot of a player for UIs, bots and logs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub stack: u32,
    pub position: Option<Position>,
    pub hole_cards: Vec<String>,
    pub current_bet: u32,
    pub total_bet: u32,
    pub is_active: bool,
    pub is_all_in: bool,
    pub has_folded: bool,
}

/// Serializable snapshot of the round for external consumers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub street: Street,
    pub pot: u32,
    pub current_bet: u32,
    pub community_cards: Vec<String>,
    pub players: Vec<PlayerState>,
    pub is_complete: bool,
    pub winners: Vec<String>,
    pub winning_hand: String,
    pub hands: Vec<ShownHand>,
}

/// Drives a single hand from deal to showdown: dealing, blind posting, the
/// betting rounds on each street, street advancement and winner
/// determination. Borrows the two players and the shared deck from the game
/// for the duration of the hand.
#[derive(Debug)]
pub struct Round<'a> {
    players: &'a mut [Player; 2],
    deck: &'a mut Deck,
    small_blind: u32,
    big_blind: u32,
    dealer_position: usize,
    pot: u32,
    current_bet: u32,
    street: Street,
    community_cards: Vec<Card>,
    actions: Vec<ActionRecord>,
    /// Which players have taken a voluntary (non-blind) action this street.
    /// A raise clears the opponent's mark: they must act again.
    acted_this_street: [bool; 2],
    is_complete: bool,
    winners: Vec<String>,
    winning_hand: String,
    shown_hands: Vec<ShownHand>,
}

impl<'a> Round<'a> {
    pub fn new(
        players: &'a mut [Player; 2],
        deck: &'a mut Deck,
        small_blind: u32,
        big_blind: u32,
        dealer_position: usize,
    ) -> Self {
        Self {
            players,
            deck,
            small_blind,
            big_blind,
            dealer_position,
            pot: 0,
            current_bet: 0,
            street: Street::Preflop,
            community_cards: Vec::new(),
            actions: Vec::new(),
            acted_this_street: [false, false],
            is_complete: false,
            winners: Vec::new(),
            winning_hand: String::new(),
            shown_hands: Vec::new(),
        }
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
    pub fn players(&self) -> &[Player; 2] {
        self.players
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Actions taken on one street, in order.
    pub fn street_actions(&self, street: Street) -> Vec<&ActionRecord> {
        self.actions.iter().filter(|a| a.street == street).collect()
    }

    /// Resets the players and deck, deals hole cards, assigns positions
    /// (dealer is the small blind heads-up) and posts both blinds. Leaves
    /// the big blind as the bet to match.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        for player in self.players.iter_mut() {
            player.reset_for_new_hand();
        }
        self.deck.reset();
        self.deck.shuffle();

        for player in self.players.iter_mut() {
            let hole = self.deck.deal(2)?;
            player.deal_hole_cards(hole);
        }

        let sb = self.dealer_position;
        let bb = 1 - self.dealer_position;
        self.players[sb].set_position(Position::Button);
        self.players[bb].set_position(Position::BigBlind);

        let sb_added = self.players[sb].post_blind(self.small_blind, BlindKind::Small);
        let bb_added = self.players[bb].post_blind(self.big_blind, BlindKind::Big);
        self.pot += sb_added + bb_added;
        self.current_bet = self.big_blind;

        let sb_posted = self.players[sb].current_bet();
        let bb_posted = self.players[bb].current_bet();
        self.record_action(sb, ActionKind::SmallBlind, sb_posted);
        self.record_action(bb, ActionKind::BigBlind, bb_posted);
        debug!(
            "blinds posted: {} {} / {} {}",
            self.players[sb].name(),
            sb_posted,
            self.players[bb].name(),
            bb_posted
        );
        Ok(())
    }

    fn acting_order(&self) -> [usize; 2] {
        // Heads-up asymmetry: the dealer (small blind) opens preflop, but is
        // last to act on every later street.
        if self.street == Street::Preflop {
            [self.dealer_position, 1 - self.dealer_position]
        } else {
            [1 - self.dealer_position, self.dealer_position]
        }
    }

    /// The next player who owes a decision, or `None` when the betting round
    /// is complete. A player owes a decision while they are short of the bet
    /// to match or have not voluntarily acted this street; blind postings do
    /// not count, which preserves the big blind's preflop option.
    pub fn next_to_act(&self) -> Option<usize> {
        for &idx in &self.acting_order() {
            let player = &self.players[idx];
            if !player.can_act() {
                continue;
            }
            if player.current_bet() < self.current_bet || !self.acted_this_street[idx] {
                return Some(idx);
            }
        }
        None
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Runs one street's betting to completion: ask the source, validate,
    /// apply, repeat. Returns whether more than one player is still
    /// contesting the pot.
    ///
    /// # Errors
    ///
    /// Surfaces [`GameError::IllegalAction`] when the source returns a
    /// decision the rules reject; the engine never substitutes an action.
    pub fn run_betting_round(&mut self, source: &mut dyn ActionSource) -> Result<bool, GameError> {
        loop {
            if self.active_count() <= 1 {
                return Ok(self.active_count() > 1);
            }
            let Some(idx) = self.next_to_act() else {
                return Ok(true);
            };

            let legal = rules::legal_actions(
                &self.players[..],
                idx,
                self.current_bet,
                self.pot,
                self.big_blind,
            );
            let (action, amount) = source.act(&self.players[idx], &legal, self.street);
            rules::validate_action(action, amount, &legal)?;

            let added =
                rules::apply_action(&mut self.players[..], idx, action, amount, self.current_bet)?;
            self.pot += added;

            match action {
                ActionKind::Bet | ActionKind::Raise => {
                    // adopt the actual committed total, and reopen the
                    // betting for the opponent
                    self.current_bet = self.players[idx].current_bet();
                    self.acted_this_street = [false, false];
                    self.acted_this_street[idx] = true;
                }
                _ => {
                    self.acted_this_street[idx] = true;
                }
            }

            let recorded_amount = match action {
                ActionKind::Fold | ActionKind::Check => 0,
                _ => self.players[idx].current_bet(),
            };
            self.record_action(idx, action, recorded_amount);
            debug!(
                "{} {:?} {} (pot {})",
                self.players[idx].name(),
                action,
                recorded_amount,
                self.pot
            );

            if action == ActionKind::Fold {
                return Ok(self.active_count() > 1);
            }
        }
    }

    /// Moves to the next street: zeroes the street bets, deals the community
    /// cards (3 on the flop, then 1 and 1) and steps the street forward.
    pub fn advance_street(&mut self) -> Result<(), GameError> {
        for player in self.players.iter_mut() {
            player.reset_current_bet();
        }
        self.current_bet = 0;
        self.acted_this_street = [false, false];

        match self.street {
            Street::Preflop => {
                self.community_cards = self.deck.deal(3)?;
                self.street = Street::Flop;
            }
            Street::Flop => {
                self.community_cards.push(self.deck.deal_one()?);
                self.street = Street::Turn;
            }
            Street::Turn => {
                self.community_cards.push(self.deck.deal_one()?);
                self.street = Street::River;
            }
            Street::River => {
                self.street = Street::Showdown;
            }
            Street::Showdown => {}
        }
        Ok(())
    }

    /// Deals out every remaining street with no further betting, used when
    /// all-in players have closed the action for the rest of the hand.
    pub fn run_out_board(&mut self) -> Result<(), GameError> {
        while self.street != Street::Showdown {
            self.advance_street()?;
            if !self.community_cards.is_empty() {
                debug!(
                    "board: {}",
                    self.community_cards
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                );
            }
        }
        Ok(())
    }

    /// Plays the whole hand through the given action source: betting on each
    /// street, automatic runout once betting is closed by all-ins, then
    /// winner determination. Assumes [`Round::start_hand`] has run.
    pub fn play(&mut self, source: &mut dyn ActionSource) -> Result<RoundResult, GameError> {
        loop {
            let contested = self.run_betting_round(source)?;
            if !contested {
                break;
            }
            if self.players.iter().any(|p| p.is_active() && p.is_all_in()) {
                info!("betting closed by all-in, running out the board");
                self.run_out_board()?;
                break;
            }
            self.advance_street()?;
            if self.street == Street::Showdown {
                break;
            }
        }
        Ok(self.determine_winner())
    }

    /// Awards the pot. One live player left wins without showing (fold win);
    /// otherwise the best evaluated hand takes it, with exact ties splitting
    /// the pot evenly and the odd chip going to the earlier-acting winner.
    pub fn determine_winner(&mut self) -> RoundResult {
        let active: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.players[i].is_active())
            .collect();

        if active.len() == 1 {
            let winner = &mut self.players[active[0]];
            winner.win_pot(self.pot);
            self.winners = vec![winner.name().to_string()];
            self.winning_hand = "opponent folded".to_string();
            self.is_complete = true;
            info!("{} wins {} uncontested", self.winners[0], self.pot);
            return RoundResult {
                winners: self.winners.clone(),
                pot: self.pot,
                pot_share: self.pot,
                winning_hand: self.winning_hand.clone(),
                hands: Vec::new(),
            };
        }

        // Walk in postflop acting order so the first listed winner is the
        // out-of-position player, who also receives the odd chip on a split.
        let order = [1 - self.dealer_position, self.dealer_position];
        let mut shown: Vec<(usize, ShownHand)> = Vec::new();
        for &idx in &order {
            let player = &self.players[idx];
            if !player.is_active() {
                continue;
            }
            let mut full_hand: Vec<Card> = player.hole_cards().to_vec();
            full_hand.extend_from_slice(&self.community_cards);
            let strength = evaluate_hand(&full_hand);
            shown.push((
                idx,
                ShownHand {
                    player: player.name().to_string(),
                    cards: player.hole_cards().iter().map(|c| c.to_string()).collect(),
                    hand_name: strength.name(),
                    strength,
                },
            ));
        }

        let mut best = &shown[0].1.strength;
        for (_, hand) in &shown[1..] {
            if hand.strength > *best {
                best = &hand.strength;
            }
        }
        let best = best.clone();

        let winner_idxs: Vec<usize> = shown
            .iter()
            .filter(|(_, hand)| hand.strength == best)
            .map(|(idx, _)| *idx)
            .collect();

        let share = self.pot / winner_idxs.len() as u32;
        let remainder = self.pot % winner_idxs.len() as u32;
        for (nth, &idx) in winner_idxs.iter().enumerate() {
            let mut won = share;
            if nth == 0 {
                won += remainder;
            }
            self.players[idx].win_pot(won);
        }

        self.winners = winner_idxs
            .iter()
            .map(|&idx| self.players[idx].name().to_string())
            .collect();
        self.winning_hand = shown
            .iter()
            .filter(|(idx, _)| *idx == winner_idxs[0])
            .map(|(_, hand)| hand.hand_name.clone())
            .next()
            .unwrap_or_default();
        self.shown_hands = shown.into_iter().map(|(_, hand)| hand).collect();
        self.is_complete = true;
        info!(
            "{} win(s) {} with {}",
            self.winners.join(", "),
            self.pot,
            self.winning_hand
        );

        RoundResult {
            winners: self.winners.clone(),
            pot: self.pot,
            pot_share: share,
            winning_hand: self.winning_hand.clone(),
            hands: self.shown_hands.clone(),
        }
    }

    /// Snapshot of the round for UIs, bots and logs.
    pub fn state(&self) -> RoundState {
        RoundState {
            street: self.street,
            pot: self.pot,
            current_bet: self.current_bet,
            community_cards: self
                .community_cards
                .iter()
                .map(|c| c.to_string())
                .collect(),
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
            is_complete: self.is_complete,
            winners: self.winners.clone(),
            winning_hand: self.winning_hand.clone(),
            hands: self.shown_hands.clone(),
        }
    }

    // Recording history is an unconditional side effect of every applied
    // action; there is no fallback path that skips it.
    fn record_action(&mut self, player_idx: usize, action: ActionKind, amount: u32) {
        self.actions.push(ActionRecord {
            player: self.players[player_idx].name().to_string(),
            action,
            amount,
            street: self.street,
        });
    }
}
