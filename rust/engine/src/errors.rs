use thiserror::Error;

/// Named reasons for rejecting a player decision during validation.
/// Surfaced to the action source, which is expected to retry with a
/// legal action; the engine never substitutes a fallback on its own.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("cannot fold - no bet to face (use check instead)")]
    NoBetToFace,
    #[error("cannot check - must call or fold")]
    MustCallOrFold,
    #[error("cannot call")]
    CannotCall,
    #[error("cannot raise")]
    CannotRaise,
    #[error("raise too small (min: {min})")]
    RaiseTooSmall { min: u32 },
    #[error("raise too large (max: {max})")]
    RaiseTooLarge { max: u32 },
    #[error("unknown action")]
    UnknownAction,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid card format: {0:?}")]
    InvalidCardFormat(String),
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("illegal action: {0}")]
    IllegalAction(#[from] ActionError),
    #[error("game over - a player has no chips")]
    GameOver,
}
