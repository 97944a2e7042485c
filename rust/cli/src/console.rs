//! The interactive table over a line-based terminal.
//!
//! [`ConsoleTable`] implements the engine's [`Interaction`] on top of any
//! `BufRead`/`Write` pair. Unparseable answers are reported and asked again;
//! they never reach the engine. End of input becomes
//! [`GameError::InputClosed`].

use std::io::{BufRead, Write};

use blackjack_engine::errors::GameError;
use blackjack_engine::interaction::Interaction;
use blackjack_engine::player::Player;
use blackjack_engine::rules::{SideBetKind, TurnAction};

use crate::formatters::format_hand_line;
use crate::io_utils::read_stdin_line;
use crate::validation::{parse_amount, parse_player_count, parse_turn_action, parse_yes_no};

pub struct ConsoleTable<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> ConsoleTable<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// Prompts until `parse` accepts a line.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, GameError> {
        loop {
            // a closed stdout leaves nobody to answer
            write!(self.out, "{}", prompt).map_err(|_| GameError::InputClosed)?;
            self.out.flush().map_err(|_| GameError::InputClosed)?;
            let line = read_stdin_line(self.input).ok_or(GameError::InputClosed)?;
            match parse(&line) {
                Ok(v) => return Ok(v),
                Err(msg) => self.say(&msg),
            }
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl Interaction for ConsoleTable<'_> {
    fn prompt_player_count(&mut self) -> Result<usize, GameError> {
        self.ask("How many players are playing? ", parse_player_count)
    }

    fn prompt_player_name(&mut self, index: usize) -> Result<String, GameError> {
        let seat = index + 1;
        self.ask(&format!("Enter name for Player {}: ", seat), |s| {
            Ok(if s.is_empty() {
                format!("Player {}", seat)
            } else {
                s.to_string()
            })
        })
    }

    fn prompt_bet_amount(&mut self, player: &Player) -> Result<u64, GameError> {
        self.ask(
            &format!("{}, how much would you like to bet? ", player.name()),
            parse_amount,
        )
    }

    fn prompt_side_bet_choice(
        &mut self,
        player: &Player,
        kind: SideBetKind,
    ) -> Result<bool, GameError> {
        if kind == SideBetKind::ALL[0] {
            self.say(&format!(
                "\n{}, you can place the following side bets:",
                player.name()
            ));
        }
        self.ask(
            &format!(
                "Do you want to place a '{}' bet? ({}:1 payout) (Y/N): ",
                kind,
                kind.multiplier()
            ),
            parse_yes_no,
        )
    }

    fn prompt_side_bet_amount(
        &mut self,
        _player: &Player,
        kind: SideBetKind,
    ) -> Result<u64, GameError> {
        self.ask(
            &format!("Enter the amount to bet on {} (0 to skip): ", kind),
            parse_amount,
        )
    }

    fn prompt_turn_action(&mut self, player: &Player) -> Result<TurnAction, GameError> {
        self.ask(
            &format!(
                "{}, do you want to [H]it, [S]tand, [D]ouble Down, or [SP]lit (if allowed)? ",
                player.name()
            ),
            parse_turn_action,
        )
    }

    fn prompt_continue(&mut self) -> Result<bool, GameError> {
        self.ask("Do you want to play another round? [Y/N] ", parse_yes_no)
    }

    fn display_hand(&mut self, player: &Player, reveal_all: bool) {
        let line = format_hand_line(player, reveal_all);
        self.say(&line);
    }

    fn display_message(&mut self, text: &str) {
        self.say(text);
    }
}
