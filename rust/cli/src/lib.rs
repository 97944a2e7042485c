//! # Blackjack CLI Library
//!
//! Terminal front end for `blackjack-engine`: an interactive multi-player
//! table plus a couple of inspection commands.
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive session on stdin/stdout
//! - `deal`: Deal one opening round for inspection
//! - `cfg`: Display the resolved configuration
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["blackjack", "deal", "--seed", "42"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use clap::Parser;
use cli::{BlackjackCli, Commands};
use commands::{PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "cfg"];

/// Main entry point: parses `args` and runs the subcommand, reading player
/// input from the process stdin.
///
/// Returns the exit code: `0` for success, `2` for errors, `130` when input
/// closed before a session could start.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with player input taken from `input`.
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("Ann\n10\nn\nn\nn\ns\nn\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = blackjack_cli::run_with_input(
///     ["blackjack", "play", "--players", "1", "--seed", "3"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Thanks for playing!"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: blackjack <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: blackjack --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            players,
            seed,
            balance,
            min_bet,
            history,
        } => {
            let opts = PlayOptions {
                players,
                seed,
                balance,
                min_bet,
                history,
            };
            handle_play_command(opts, input, out)
        }
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
