//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Multi-player blackjack at the terminal"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on stdin/stdout
    Play {
        /// Number of players (skips the prompt)
        #[arg(long)]
        players: Option<usize>,
        /// Seed for the deck shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance for every player
        #[arg(long)]
        balance: Option<u64>,
        /// Smallest main bet accepted
        #[arg(long)]
        min_bet: Option<u64>,
        /// Append a JSON record per settled round to this file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Deal one opening round and print every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        players: usize,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        BlackjackCli::command().debug_assert();
    }

    #[test]
    fn play_flags_parse() {
        let cli = BlackjackCli::try_parse_from([
            "blackjack",
            "play",
            "--players",
            "2",
            "--min-bet",
            "5",
            "--history",
            "rounds.jsonl",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                players,
                min_bet,
                history,
                seed,
                balance,
            } => {
                assert_eq!(players, Some(2));
                assert_eq!(min_bet, Some(5));
                assert_eq!(history, Some(PathBuf::from("rounds.jsonl")));
                assert_eq!(seed, None);
                assert_eq!(balance, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
