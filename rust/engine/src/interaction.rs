//! Contracts between the table and whoever is sitting at it.
//!
//! The engine never reads input or prints on its own. A [`GameSession`]
//! asks an [`Interaction`] for every decision and announces what happens
//! through it. The CLI implements this over stdin/stdout; tests implement it
//! with scripted answers.
//!
//! [`GameSession`]: crate::game::GameSession

use crate::errors::GameError;
use crate::player::Player;
use crate::rules::{SideBetKind, TurnAction};

pub trait Interaction {
    /// Number of players joining the table (at least one).
    fn prompt_player_count(&mut self) -> Result<usize, GameError>;

    /// Name for the player at `index` (zero-based).
    fn prompt_player_name(&mut self, index: usize) -> Result<String, GameError>;

    /// Main bet amount. The engine validates it and asks again when it is
    /// rejected.
    fn prompt_bet_amount(&mut self, player: &Player) -> Result<u64, GameError>;

    fn prompt_side_bet_choice(
        &mut self,
        player: &Player,
        kind: SideBetKind,
    ) -> Result<bool, GameError>;

    fn prompt_side_bet_amount(
        &mut self,
        player: &Player,
        kind: SideBetKind,
    ) -> Result<u64, GameError>;

    /// Next move for the player's active hand.
    fn prompt_turn_action(&mut self, player: &Player) -> Result<TurnAction, GameError>;

    /// Whether to play another round.
    fn prompt_continue(&mut self) -> Result<bool, GameError>;

    /// Shows a hand. With `reveal_all` false the dealer's hole card stays hidden.
    fn display_hand(&mut self, player: &Player, reveal_all: bool);

    fn display_message(&mut self, text: &str);
}
