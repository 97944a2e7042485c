//! # Play Command
//!
//! An interactive blackjack session on stdin/stdout: players are seated,
//! rounds are played until everyone declines to continue or runs out of
//! money, and the final balances are printed.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use blackjack_engine::engine::RoundEngine;
use blackjack_engine::game::{GameSession, SessionSummary};
use blackjack_engine::logger::RoundLogger;
use tracing::info;

use crate::config;
use crate::console::ConsoleTable;
use crate::error::CliError;
use crate::validation::validate_player_count;

/// Flags accepted by `play`; unset values fall back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub balance: Option<u64>,
    pub min_bet: Option<u64>,
    pub history: Option<PathBuf>,
}

/// Handle the play command.
///
/// # Errors
///
/// - `CliError::InvalidInput` for a bad `--players` value
/// - `CliError::Config` when configuration and flags do not combine into
///   valid table rules
/// - `CliError::Io` when the history file cannot be opened
/// - `CliError::Interrupted` when input ends before players are seated
pub fn handle_play_command(
    opts: PlayOptions,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(n) = opts.players {
        validate_player_count(n).map_err(CliError::InvalidInput)?;
    }

    let cfg = config::load_with_sources()
        .and_then(|r| r.with_overrides(opts.balance, opts.min_bet, opts.seed))
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let rules = cfg.table_rules();

    writeln!(
        out,
        "play: seed={} balance={} min_bet={}",
        seed, rules.starting_balance, rules.min_bet
    )?;

    let mut session = GameSession::new(RoundEngine::new(Some(seed), rules));
    if let Some(path) = &opts.history {
        let logger = RoundLogger::create(path)?;
        info!(path = %path.display(), "writing round history");
        session = session.with_history(logger);
    }

    let summary = {
        let mut table = ConsoleTable::new(stdin, out);
        if let Some(n) = opts.players {
            session.seat_named_players(n, &mut table)?;
        }
        session.run(&mut table)?
    };

    write_summary(&summary, out)?;
    Ok(())
}

fn write_summary(summary: &SessionSummary, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Rounds played: {}", summary.rounds_played)?;
    if summary.standings.is_empty() {
        writeln!(out, "No players left at the table.")?;
        return Ok(());
    }
    writeln!(out, "Final balances:")?;
    for (name, balance) in &summary.standings {
        writeln!(out, "  {}: ${}", name, balance)?;
    }
    Ok(())
}
