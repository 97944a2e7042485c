//! `deal`: one opening round, no bets, every card face up.

use std::io::Write;

use blackjack_engine::engine::RoundEngine;

use crate::config;
use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::validate_player_count;

/// Deals two cards to each of `players` seats and to the dealer, then prints
/// them. The same seed always prints the same table.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let players = validate_player_count(players).map_err(CliError::InvalidInput)?;
    let seed = seed.unwrap_or_else(rand::random);

    let mut eng = RoundEngine::new(Some(seed), config::Config::default().table_rules());
    for i in 1..=players {
        eng.add_player(format!("Player {}", i));
    }
    eng.deal_round()?;

    writeln!(out, "Seed: {}", seed)?;
    for p in eng.players() {
        writeln!(
            out,
            "{}: {} total {}",
            p.name(),
            format_cards(p.hand().cards()),
            p.total()
        )?;
    }
    let dealer = eng.dealer();
    writeln!(
        out,
        "Dealer: {} total {}",
        format_cards(dealer.hand().cards()),
        dealer.total()
    )?;
    writeln!(out, "Cards left: {}", eng.deck_remaining())?;
    Ok(())
}
