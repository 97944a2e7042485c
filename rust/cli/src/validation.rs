//! Parsing of the answers typed at the table.
//!
//! Every parser returns `Err` with a message meant for the player, who is then
//! asked again.

use blackjack_engine::rules::TurnAction;

/// Most seats a table offers.
pub const MAX_PLAYERS: usize = 7;

/// Parses a turn action (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "d", "double" or "double down" → DoubleDown
/// - "sp" or "split" → Split
///
/// ```rust
/// # use blackjack_cli::validation::parse_turn_action;
/// use blackjack_engine::rules::TurnAction;
///
/// assert_eq!(parse_turn_action("H"), Ok(TurnAction::Hit));
/// assert_eq!(parse_turn_action("sp"), Ok(TurnAction::Split));
/// assert!(parse_turn_action("fold").is_err());
/// ```
pub fn parse_turn_action(input: &str) -> Result<TurnAction, String> {
    match input.trim().to_lowercase().as_str() {
        "h" | "hit" => Ok(TurnAction::Hit),
        "s" | "stand" => Ok(TurnAction::Stand),
        "d" | "double" | "double down" => Ok(TurnAction::DoubleDown),
        "sp" | "split" => Ok(TurnAction::Split),
        _ => Err(
            "Invalid input, please choose [H]it, [S]tand, [D]ouble Down, or [SP]lit.".to_string(),
        ),
    }
}

pub fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Please answer Y or N.".to_string()),
    }
}

/// A whole number of dollars, zero allowed.
pub fn parse_amount(input: &str) -> Result<u64, String> {
    let input = input.trim().trim_start_matches('$');
    if input.is_empty() {
        return Err("Please enter an amount.".to_string());
    }
    input
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a valid amount.", input))
}

/// Number of players, between 1 and [`MAX_PLAYERS`].
pub fn parse_player_count(input: &str) -> Result<usize, String> {
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a number of players.".to_string())?;
    validate_player_count(n)
}

pub fn validate_player_count(n: usize) -> Result<usize, String> {
    if (1..=MAX_PLAYERS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("players must be between 1 and {}", MAX_PLAYERS))
    }
}
