use thiserror::Error;

use crate::rules::TurnAction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty, cannot deal any more cards")]
    EmptyDeck,
    #[error("Not enough balance to place this bet (requested {requested}, available {available})")]
    InsufficientBalance { requested: u64, available: u64 },
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u64, minimum: u64 },
    #[error("Cannot {action} now: {reason}")]
    InvalidAction {
        action: TurnAction,
        reason: &'static str,
    },
    #[error("No turn in progress")]
    NoTurnInProgress,
    #[error("A turn is already in progress")]
    TurnInProgress,
    #[error("Betting is closed for this round")]
    BettingClosed,
    #[error("No round has been dealt")]
    RoundNotDealt,
    #[error("Round already dealt; open betting first")]
    RoundAlreadyDealt,
    #[error("No active players at the table")]
    NoActivePlayers,
    #[error("No player at seat {0}")]
    PlayerNotFound(usize),
    #[error("Input closed")]
    InputClosed,
    #[error("Failed to write round history: {0}")]
    History(String),
}

impl GameError {
    /// Errors caused by a bad choice at the table; the same actor can simply
    /// be asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InsufficientBalance { .. }
                | GameError::InvalidBetAmount { .. }
                | GameError::InvalidAction { .. }
        )
    }
}
