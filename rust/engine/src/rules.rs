use serde::{Deserialize, Serialize};

use crate::errors::ActionError;
use crate::player::{ActionKind, Player};

/// Inclusive raise window in total-bet-to terms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RaiseBounds {
    pub min: u32,
    pub max: u32,
}

/// The closed set of actions currently available to a player. Amounts are
/// always totals committed for the street, never increments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegalActions {
    pub fold: bool,
    pub check: bool,
    pub call: bool,
    pub raise: Option<RaiseBounds>,
}

/// Computes the legal actions for `players[actor]` under pot-limit rules.
///
/// Pure over its inputs: repeated calls with unchanged state return the same
/// result. Legality follows heads-up convention:
///
/// - `check` iff the player already matches the outstanding bet
/// - `call` iff there is an outstanding difference; a stack too short to
///   cover it still calls, going all-in for less
/// - `fold` only when there is a bet to face
/// - `raise` iff the window computed by [`raise_bounds`] is non-empty and
///   the player holds more than a mere call
///
/// # Examples
///
/// ```
/// use hupl_engine::player::Player;
/// use hupl_engine::rules::legal_actions;
///
/// // Postflop, nothing bet yet: check or open up to the pot.
/// let players = [Player::new("a", 1000), Player::new("b", 1000)];
/// let legal = legal_actions(&players, 0, 0, 60, 20);
/// assert!(legal.check && !legal.fold);
/// let bounds = legal.raise.unwrap();
/// assert_eq!((bounds.min, bounds.max), (20, 60));
/// ```
pub fn legal_actions(
    players: &[Player],
    actor: usize,
    current_bet: u32,
    pot: u32,
    big_blind: u32,
) -> LegalActions {
    let player = &players[actor];
    if !player.can_act() {
        return LegalActions {
            fold: true,
            check: false,
            call: false,
            raise: None,
        };
    }

    let to_call = current_bet.saturating_sub(player.current_bet());
    let can_check = to_call == 0;
    let can_call = to_call > 0;

    let bounds = raise_bounds(players, actor, current_bet, pot, big_blind);
    let can_raise = bounds.max >= bounds.min && player.stack() > to_call;

    LegalActions {
        // folding with no bet to face is never legal; check instead
        fold: !can_check,
        check: can_check,
        call: can_call,
        raise: if can_raise { Some(bounds) } else { None },
    }
}

/// Computes the pot-limit raise window in total-bet-to terms.
///
/// With no outstanding bet the window is `[big_blind, pot]` (a pot-sized
/// open). Facing a bet, the minimum is `current_bet + big_blind` and the
/// maximum follows the pot-limit formula
/// `3 * current_bet + (pot - current_bet)`: three times the outstanding bet
/// plus the pot that existed before it. A player whose street bet was built
/// by their own earlier voluntary bet or raise has that amount subtracted;
/// blind postings never are, which is what makes the formula yield 70 for
/// the 10/20 post-blind scenario without any special casing.
///
/// The result is capped at the actor's committable chips and at the
/// smallest committable total among live opponents (heads-up, a bet nobody
/// can match buys nothing). If capping inverts the window, the minimum
/// collapses down to the maximum, leaving a single all-in raise amount.
pub fn raise_bounds(
    players: &[Player],
    actor: usize,
    current_bet: u32,
    pot: u32,
    big_blind: u32,
) -> RaiseBounds {
    let player = &players[actor];

    let mut min;
    let mut max;
    if current_bet == 0 {
        min = big_blind;
        max = pot;
    } else {
        // a "raise" to exactly the call amount is a call, not a raise
        min = current_bet + big_blind;
        let pot_before_bet = pot.saturating_sub(current_bet);
        max = 3 * current_bet + pot_before_bet;
        if player.has_raised_this_street()
            && player.current_bet() > 0
            && player.current_bet() != current_bet
        {
            // their own earlier bet is already inside the pot figure
            max = max.saturating_sub(player.current_bet());
        }
    }

    max = max.min(player.stack() + player.current_bet());

    let opponent_cap = players
        .iter()
        .enumerate()
        .filter(|(i, p)| *i != actor && p.is_active())
        .map(|(_, p)| p.stack() + p.current_bet())
        .min();
    if let Some(cap) = opponent_cap {
        max = max.min(cap);
    }

    if min > max {
        min = max;
    }
    RaiseBounds { min, max }
}

/// Checks an `(action, amount)` decision against the legal-actions result.
///
/// # Errors
///
/// Returns the specific [`ActionError`] reason when the pair is
/// inconsistent with what the rules allow.
pub fn validate_action(
    action: ActionKind,
    amount: u32,
    legal: &LegalActions,
) -> Result<(), ActionError> {
    match action {
        ActionKind::Fold => {
            if !legal.fold {
                return Err(ActionError::NoBetToFace);
            }
            Ok(())
        }
        ActionKind::Check => {
            if !legal.check {
                return Err(ActionError::MustCallOrFold);
            }
            Ok(())
        }
        ActionKind::Call => {
            if !legal.call {
                return Err(ActionError::CannotCall);
            }
            Ok(())
        }
        ActionKind::Bet | ActionKind::Raise => {
            let Some(bounds) = legal.raise else {
                return Err(ActionError::CannotRaise);
            };
            if amount < bounds.min {
                return Err(ActionError::RaiseTooSmall { min: bounds.min });
            }
            if amount > bounds.max {
                return Err(ActionError::RaiseTooLarge { max: bounds.max });
            }
            Ok(())
        }
        ActionKind::SmallBlind | ActionKind::BigBlind => Err(ActionError::UnknownAction),
    }
}

/// Applies a validated action to `players[actor]`, delegating to the player
/// primitives. Returns the chips added to the pot; the caller is responsible
/// for adopting the new street total as the bet to match after a bet/raise.
///
/// # Errors
///
/// Returns [`ActionError::UnknownAction`] for action kinds that cannot be
/// chosen by a player (blind postings).
pub fn apply_action(
    players: &mut [Player],
    actor: usize,
    action: ActionKind,
    amount: u32,
    current_bet: u32,
) -> Result<u32, ActionError> {
    let player = &mut players[actor];
    match action {
        ActionKind::Fold => {
            player.fold();
            Ok(0)
        }
        ActionKind::Check => {
            player.check();
            Ok(0)
        }
        ActionKind::Call => Ok(player.call(current_bet)),
        ActionKind::Bet | ActionKind::Raise => Ok(player.raise_to(amount, action)),
        ActionKind::SmallBlind | ActionKind::BigBlind => Err(ActionError::UnknownAction),
    }
}
