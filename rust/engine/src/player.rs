use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Represents a player's position at the table in heads-up poker.
/// Button posts the small blind and acts first preflop.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Button position (small blind in heads-up)
    Button,
    /// Big blind position
    BigBlind,
}

/// The kind of action a player can take or record during a hand.
/// `SmallBlind`/`BigBlind` are forced postings and never count as
/// voluntary actions for turn-order purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Open the betting on a street (amount is the new total committed)
    Bet,
    /// Raise an outstanding bet (amount is the new total committed)
    Raise,
    SmallBlind,
    BigBlind,
}

/// Which blind is being posted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlindKind {
    Small,
    Big,
}

/// One entry in a player's per-hand action log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub action: ActionKind,
    pub amount: u32,
}

/// Per-hand mutable player state: chip stack, hole cards, committed bets and
/// status flags. All wagering routes through [`Player::place_bet`], which
/// caps the amount at the remaining stack (forced all-in).
///
/// Invariants: `has_folded` implies not active; `stack + total_bet` equals
/// the stack at hand start; all-in implies an empty stack.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    stack: u32,
    initial_stack: u32,
    position: Option<Position>,
    hole: Vec<Card>,
    is_active: bool,
    is_all_in: bool,
    has_folded: bool,
    /// Amount committed in the current betting round, reset each street
    current_bet: u32,
    /// Amount committed over the whole hand, monotonic within a hand
    total_bet: u32,
    /// True once current_bet includes a voluntary bet/raise (not a blind);
    /// drives the pot-limit own-bet subtraction
    has_raised_this_street: bool,
    actions: Vec<ActionEntry>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            initial_stack: stack,
            position: None,
            hole: Vec::new(),
            is_active: true,
            is_all_in: false,
            has_folded: false,
            current_bet: 0,
            total_bet: 0,
            has_raised_this_street: false,
            actions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn initial_stack(&self) -> u32 {
        self.initial_stack
    }
    pub fn position(&self) -> Option<Position> {
        self.position
    }
    pub fn set_position(&mut self, pos: Position) {
        self.position = Some(pos);
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn has_raised_this_street(&self) -> bool {
        self.has_raised_this_street
    }
    pub fn actions(&self) -> &[ActionEntry] {
        &self.actions
    }

    pub fn deal_hole_cards(&mut self, cards: Vec<Card>) {
        self.hole = cards;
    }

    /// Clears all hand-scoped state while preserving the stack. The stack at
    /// this point becomes the new conservation baseline.
    pub fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.is_active = true;
        self.is_all_in = false;
        self.has_folded = false;
        self.current_bet = 0;
        self.total_bet = 0;
        self.has_raised_this_street = false;
        self.actions.clear();
        self.initial_stack = self.stack;
    }

    /// Zeroes the street-scoped bet at street advance; `total_bet` persists.
    pub fn reset_current_bet(&mut self) {
        self.current_bet = 0;
        self.has_raised_this_street = false;
    }

    /// Commits chips up to `target` total for this street. The delta over
    /// the current street bet is deducted from the stack; if the stack
    /// cannot cover it the player is put all-in for whatever remains and
    /// the actual total falls short of the target. Returns the chips
    /// actually added, which is what callers must add to the pot.
    pub fn place_bet(&mut self, target: u32) -> u32 {
        let mut additional = target.saturating_sub(self.current_bet);
        if additional >= self.stack {
            additional = self.stack;
            self.is_all_in = true;
        }
        self.stack -= additional;
        self.current_bet += additional;
        self.total_bet += additional;
        additional
    }

    pub fn fold(&mut self) {
        self.is_active = false;
        self.has_folded = true;
        self.record(ActionKind::Fold, 0);
    }

    pub fn check(&mut self) {
        self.record(ActionKind::Check, 0);
    }

    /// Matches the outstanding bet (or as much of it as the stack covers).
    /// Returns the chips added to the pot.
    pub fn call(&mut self, target: u32) -> u32 {
        let added = self.place_bet(target);
        self.record(ActionKind::Call, self.current_bet);
        added
    }

    /// Bets or raises to `target` total for this street. Returns the chips
    /// added to the pot.
    pub fn raise_to(&mut self, target: u32, kind: ActionKind) -> u32 {
        let added = self.place_bet(target);
        self.has_raised_this_street = true;
        self.record(kind, self.current_bet);
        added
    }

    /// Posts a forced blind; a short stack posts all-in for less. Returns
    /// the chips added to the pot.
    pub fn post_blind(&mut self, amount: u32, kind: BlindKind) -> u32 {
        let added = self.place_bet(amount);
        let action = match kind {
            BlindKind::Small => ActionKind::SmallBlind,
            BlindKind::Big => ActionKind::BigBlind,
        };
        self.record(action, self.current_bet);
        added
    }

    pub fn win_pot(&mut self, amount: u32) {
        self.stack += amount;
    }

    pub(crate) fn set_stack(&mut self, stack: u32) {
        self.stack = stack;
    }

    /// True iff the player can still be asked for a decision: active in the
    /// hand and not all-in. Gates turn eligibility everywhere.
    pub fn can_act(&self) -> bool {
        self.is_active && !self.is_all_in
    }

    fn record(&mut self, action: ActionKind, amount: u32) {
        self.actions.push(ActionEntry { action, amount });
    }
}
