use tracing::{debug, info};

use crate::engine::{ActionResult, RoundEngine, RoundReport};
use crate::errors::GameError;
use crate::interaction::Interaction;
use crate::logger::{RoundLogger, RoundRecord};
use crate::rules::{HandState, Outcome, SideBetKind, TurnAction};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    /// Players still seated with their balances.
    pub standings: Vec<(String, u64)>,
}

/// Drives a [`RoundEngine`] round after round through an [`Interaction`].
///
/// Rounds run strictly one after another; the only way out is declining to
/// play on, running out of players, or the input closing.
#[derive(Debug)]
pub struct GameSession {
    engine: RoundEngine,
    history: Option<RoundLogger>,
}

impl GameSession {
    pub fn new(engine: RoundEngine) -> Self {
        Self {
            engine,
            history: None,
        }
    }

    /// Writes a [`RoundRecord`] for every settled round.
    pub fn with_history(mut self, logger: RoundLogger) -> Self {
        self.history = Some(logger);
        self
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Asks how many players there are, then their names.
    pub fn seat_players(&mut self, io: &mut dyn Interaction) -> Result<usize, GameError> {
        let count = io.prompt_player_count()?.max(1);
        self.seat_named_players(count, io)
    }

    /// Asks for `count` names and seats them.
    pub fn seat_named_players(
        &mut self,
        count: usize,
        io: &mut dyn Interaction,
    ) -> Result<usize, GameError> {
        for i in 0..count {
            let name = io.prompt_player_name(i)?;
            self.engine.add_player(name);
        }
        Ok(count)
    }

    /// Plays rounds until nobody is left or nobody wants to continue.
    pub fn run(&mut self, io: &mut dyn Interaction) -> Result<SessionSummary, GameError> {
        if self.engine.players().is_empty() {
            self.seat_players(io)?;
        }
        let mut rounds_played = 0;
        loop {
            if self.engine.players().is_empty() {
                io.display_message("All players are out of money. Game over!");
                break;
            }
            match self.play_round(io) {
                Ok(_) => rounds_played += 1,
                Err(GameError::InputClosed) => {
                    if self.engine.abandon_round() > 0 {
                        io.display_message("Round abandoned. All stakes returned.");
                    }
                    break;
                }
                Err(e) => return Err(e),
            }
            if self.engine.players().is_empty() {
                io.display_message("All players are out of money. Game over!");
                break;
            }
            match io.prompt_continue() {
                Ok(true) => continue,
                Ok(false) | Err(GameError::InputClosed) => {
                    io.display_message("Thanks for playing!");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        info!(rounds_played, "session finished");
        Ok(SessionSummary {
            rounds_played,
            standings: self
                .engine
                .players()
                .iter()
                .map(|p| (p.name().to_string(), p.balance()))
                .collect(),
        })
    }

    /// One full round: bets, deal, player turns, dealer, settlement.
    pub fn play_round(&mut self, io: &mut dyn Interaction) -> Result<RoundReport, GameError> {
        self.engine.open_betting();
        for seat in 0..self.engine.players().len() {
            self.take_main_bet(seat, io)?;
            self.take_side_bets(seat, io)?;
        }

        let before = self.engine.deck_remaining();
        if self.engine.deal_round()?.is_some() {
            io.display_message(&format!(
                "Adding an additional deck due to low card count ({} cards left)...",
                before
            ));
            io.display_message(&format!(
                "Added an additional deck. Total cards now: {}",
                before + crate::cards::DECK_SIZE
            ));
        }
        for p in self.engine.players() {
            io.display_hand(p, true);
        }
        io.display_hand(self.engine.dealer(), false);

        for seat in 0..self.engine.players().len() {
            self.play_turn(seat, io)?;
        }

        io.display_message("Dealer's turn...");
        io.display_hand(self.engine.dealer(), true);
        while self.engine.dealer_draw()?.is_some() {
            io.display_hand(self.engine.dealer(), true);
        }

        let report = self.engine.settle_round()?;
        announce(&report, io);
        if let Some(logger) = &mut self.history {
            let record = RoundRecord::new(logger.next_id(), self.engine.seed(), report.clone());
            logger
                .write(&record)
                .map_err(|e| GameError::History(e.to_string()))?;
        }
        Ok(report)
    }

    fn take_main_bet(&mut self, seat: usize, io: &mut dyn Interaction) -> Result<(), GameError> {
        let player = self.engine.player(seat)?;
        io.display_message(&format!(
            "{}, your current balance: ${}",
            player.name(),
            player.balance()
        ));
        loop {
            let amount = io.prompt_bet_amount(self.engine.player(seat)?)?;
            match self.engine.place_bet(seat, amount) {
                Ok(_) => return Ok(()),
                Err(e) if e.is_recoverable() => io.display_message(&e.to_string()),
                Err(e) => return Err(e),
            }
        }
    }

    fn take_side_bets(&mut self, seat: usize, io: &mut dyn Interaction) -> Result<(), GameError> {
        for kind in SideBetKind::ALL {
            if !io.prompt_side_bet_choice(self.engine.player(seat)?, kind)? {
                continue;
            }
            loop {
                let amount = io.prompt_side_bet_amount(self.engine.player(seat)?, kind)?;
                if amount == 0 {
                    io.display_message(&format!("No {} bet placed.", kind));
                    break;
                }
                match self.engine.place_side_bet(seat, kind, amount) {
                    Ok(stake) => {
                        let name = self.engine.player(seat)?.name();
                        io.display_message(&format!(
                            "{} placed a {} bet of ${}.",
                            name, kind, stake
                        ));
                        break;
                    }
                    Err(e) if e.is_recoverable() => io.display_message(&e.to_string()),
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }

    fn play_turn(&mut self, seat: usize, io: &mut dyn Interaction) -> Result<(), GameError> {
        self.engine.begin_turn(seat)?;
        loop {
            let action = io.prompt_turn_action(self.engine.player(seat)?)?;
            match self.engine.apply_action(action) {
                Ok(result) => {
                    self.narrate(seat, &result, io)?;
                    if result.turn_over {
                        return Ok(());
                    }
                }
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "action rejected");
                    io.display_message(&e.to_string());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn narrate(
        &self,
        seat: usize,
        result: &ActionResult,
        io: &mut dyn Interaction,
    ) -> Result<(), GameError> {
        let player = self.engine.player(seat)?;
        let name = player.name();
        match result.action {
            TurnAction::Hit => {
                if result.next_hand.is_none() {
                    io.display_hand(player, true);
                }
            }
            TurnAction::Stand => io.display_message(&format!(
                "{} stands with a total of {}.",
                name, result.total
            )),
            TurnAction::DoubleDown => {
                io.display_message(&format!("{} doubles down!", name));
                if result.next_hand.is_none() {
                    io.display_hand(player, true);
                }
            }
            TurnAction::Split => {
                io.display_message(&format!("{} splits the hand!", name));
                io.display_message(&format!("Playing hand 1 for {}:", name));
                io.display_hand(player, true);
            }
        }
        if result.state == HandState::Busted {
            let was_split = result.next_hand.is_some() || !player.split_hands().is_empty();
            if was_split {
                io.display_message(&format!(
                    "Hand {} busted for {} with a total of {}.",
                    result.hand_number, name, result.total
                ));
            } else {
                io.display_message(&format!("{} busted!", name));
            }
        }
        if let Some(n) = result.next_hand {
            io.display_message(&format!("Playing hand {} for {}:", n, name));
            io.display_hand(player, true);
        }
        Ok(())
    }
}

fn announce(report: &RoundReport, io: &mut dyn Interaction) {
    for s in &report.settlements {
        let line = match s.outcome {
            Outcome::Lose if s.total > crate::hand::BLACKJACK => {
                format!("{} busted. Dealer wins!", s.name)
            }
            Outcome::Win => format!("{} wins against the dealer!", s.name),
            Outcome::Lose => format!("Dealer wins against {}.", s.name),
            Outcome::Push => format!("{} ties with the dealer. Bet returned.", s.name),
        };
        io.display_message(&line);
        for sb in s.side_bets.iter().filter(|sb| sb.won) {
            io.display_message(&format!("{} wins the '{}' side bet!", s.name, sb.kind));
        }
    }
    for name in &report.eliminated {
        let left = report
            .settlements
            .iter()
            .find(|s| &s.name == name)
            .map_or(0, |s| s.balance);
        if left == 0 {
            io.display_message(&format!("{} is out of money and leaves the table.", name));
        } else {
            io.display_message(&format!(
                "{} has ${} left, below the minimum bet, and leaves the table.",
                name, left
            ));
        }
    }
}
