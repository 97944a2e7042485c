use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{Hand, BLACKJACK};

/// The dealer draws while below this total.
pub const DEALER_STANDS_ON: u32 = 17;

/// Cards kept in reserve on top of two per seat before a fresh set is added.
pub const RESERVE_CARDS: usize = 15;

/// A move a player can make on an active hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    Hit,
    Stand,
    DoubleDown,
    Split,
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TurnAction::Hit => "hit",
            TurnAction::Stand => "stand",
            TurnAction::DoubleDown => "double down",
            TurnAction::Split => "split",
        })
    }
}

/// Where a single hand is in its turn.
///
/// `AwaitingAction` is the only non-terminal state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandState {
    AwaitingAction,
    Stood,
    Busted,
    DoubledDown,
}

impl HandState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, HandState::AwaitingAction)
    }
}

/// Result of a main bet against the dealer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

/// Optional wagers judged apart from the main hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideBetKind {
    /// Dealer finishes over 21. Pays 3:1.
    DealerBust,
    /// First two cards share a rank but not a suit. Pays 5:1.
    MixedPair,
    /// First two cards share rank and suit. Pays 12:1.
    SamePair,
}

impl SideBetKind {
    pub const ALL: [SideBetKind; 3] = [
        SideBetKind::DealerBust,
        SideBetKind::MixedPair,
        SideBetKind::SamePair,
    ];

    /// Winnings per unit staked ("12:1" for Same Pair). A winning side bet
    /// also gets its stake back on top.
    pub fn multiplier(self) -> u64 {
        match self {
            SideBetKind::DealerBust => 3,
            SideBetKind::MixedPair => 5,
            SideBetKind::SamePair => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SideBetKind::DealerBust => "Dealer Bust",
            SideBetKind::MixedPair => "Mixed Pair",
            SideBetKind::SamePair => "Same Pair",
        }
    }

    /// Whether this side bet wins given the player's opening cards and the
    /// dealer's final total.
    pub fn wins(self, opening: [Card; 2], dealer_total: u32) -> bool {
        let [a, b] = opening;
        match self {
            SideBetKind::DealerBust => dealer_total > BLACKJACK,
            SideBetKind::MixedPair => a.rank == b.rank && a.suit != b.suit,
            SideBetKind::SamePair => a.rank == b.rank && a.suit == b.suit,
        }
    }
}

impl fmt::Display for SideBetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checks a main bet against the table minimum and the player's balance.
///
/// ```
/// use blackjack_engine::rules::validate_bet;
/// use blackjack_engine::errors::GameError;
///
/// assert_eq!(validate_bet(100, 1, 50), Ok(50));
/// assert!(matches!(validate_bet(100, 10, 5), Err(GameError::InvalidBetAmount { .. })));
/// assert!(matches!(validate_bet(100, 1, 500), Err(GameError::InsufficientBalance { .. })));
/// ```
pub fn validate_bet(balance: u64, min_bet: u64, amount: u64) -> Result<u64, GameError> {
    if amount < min_bet.max(1) {
        return Err(GameError::InvalidBetAmount {
            amount,
            minimum: min_bet.max(1),
        });
    }
    if amount > balance {
        return Err(GameError::InsufficientBalance {
            requested: amount,
            available: balance,
        });
    }
    Ok(amount)
}

/// Checks whether `action` is legal on `hand`.
///
/// Split hands may only hit or stand. Doubling needs exactly two cards and
/// enough balance to match the current bet; splitting needs a pair.
pub fn validate_action(
    hand: &Hand,
    is_split_hand: bool,
    balance: u64,
    current_bet: u64,
    action: TurnAction,
) -> Result<TurnAction, GameError> {
    let invalid = |reason: &'static str| -> Result<TurnAction, GameError> {
        Err(GameError::InvalidAction { action, reason })
    };
    match action {
        TurnAction::Hit | TurnAction::Stand => Ok(action),
        TurnAction::DoubleDown => {
            if is_split_hand {
                invalid("split hands cannot double down")
            } else if hand.len() != 2 {
                invalid("doubling down needs exactly two cards")
            } else if current_bet > balance {
                Err(GameError::InsufficientBalance {
                    requested: current_bet,
                    available: balance,
                })
            } else {
                Ok(action)
            }
        }
        TurnAction::Split => {
            if is_split_hand {
                invalid("split hands cannot be split again")
            } else if !hand.is_pair() {
                invalid("splitting needs two cards of the same rank")
            } else {
                Ok(action)
            }
        }
    }
}

pub fn dealer_should_hit(total: u32) -> bool {
    total < DEALER_STANDS_ON
}

/// True when the deck is too thin to deal a round to `seats` hands
/// (players plus the dealer) with the reserve intact.
pub fn needs_replenish(remaining: usize, seats: usize) -> bool {
    remaining < seats * 2 + RESERVE_CARDS
}

/// Settles a main bet from the final totals.
pub fn main_bet_outcome(player_total: u32, dealer_total: u32) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::Lose
    } else if dealer_total > BLACKJACK || player_total > dealer_total {
        Outcome::Win
    } else if player_total < dealer_total {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}
