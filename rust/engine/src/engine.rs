use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::ledger::STARTING_BALANCE;
use crate::player::Player;
use crate::rules::{
    self, dealer_should_hit, main_bet_outcome, needs_replenish, HandState, Outcome, SideBetKind,
    TurnAction,
};

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 0xB1AC_4A11;

/// A player never holds more than this many hands in one turn (one split).
pub const MAX_HANDS_PER_TURN: usize = 2;

/// Table limits shared by every seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    pub starting_balance: u64,
    pub min_bet: u64,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            min_bet: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Betting,
    Dealt,
    Settled,
}

/// The hand being played right now and what is still waiting behind it.
#[derive(Debug)]
struct ActiveTurn {
    seat: usize,
    state: HandState,
    split: bool,
    queue: VecDeque<Hand>,
    played: Vec<Hand>,
}

/// What happened after one action on the active hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub action: TurnAction,
    /// 1-based hand the action applied to (2 only after a split).
    pub hand_number: usize,
    pub state: HandState,
    pub total: u32,
    /// Set when a queued split hand became active after this action.
    pub next_hand: Option<usize>,
    pub turn_over: bool,
}

/// Outcome of one side bet at settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBetResult {
    pub kind: SideBetKind,
    pub stake: u64,
    pub won: bool,
    /// Amount credited back (stake plus winnings), zero when lost.
    pub payout: u64,
}

/// How one player's round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
    pub cards: Vec<Card>,
    pub total: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub split_hands: Vec<Vec<Card>>,
    pub bet: u64,
    pub outcome: Outcome,
    #[serde(default)]
    pub side_bets: Vec<SideBetResult>,
    pub balance: u64,
}

/// Everything decided when a round is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub dealer_cards: Vec<Card>,
    pub dealer_total: u32,
    pub settlements: Vec<Settlement>,
    #[serde(default)]
    pub eliminated: Vec<String>,
}

/// Runs rounds of blackjack at one table.
///
/// Owns the deck, the seated players and the dealer. A round goes
/// [`open_betting`](RoundEngine::open_betting) → bets →
/// [`deal_round`](RoundEngine::deal_round) → one turn per seat
/// ([`begin_turn`](RoundEngine::begin_turn) /
/// [`apply_action`](RoundEngine::apply_action)) →
/// [`play_dealer`](RoundEngine::play_dealer) →
/// [`settle_round`](RoundEngine::settle_round).
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::{RoundEngine, TableRules};
/// use blackjack_engine::rules::TurnAction;
///
/// let mut engine = RoundEngine::new(Some(42), TableRules::default());
/// let seat = engine.add_player("Ann");
/// engine.open_betting();
/// engine.place_bet(seat, 100).unwrap();
/// engine.deal_round().unwrap();
///
/// engine.begin_turn(seat).unwrap();
/// let result = engine.apply_action(TurnAction::Stand).unwrap();
/// assert!(result.turn_over);
///
/// engine.play_dealer().unwrap();
/// let report = engine.settle_round().unwrap();
/// assert_eq!(report.settlements.len(), 1);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    deck: Deck,
    players: Vec<Player>,
    dealer: Player,
    rules: TableRules,
    seed: Option<u64>,
    round: u32,
    phase: Phase,
    turn: Option<ActiveTurn>,
}

impl RoundEngine {
    /// New table with a freshly shuffled seeded deck.
    pub fn new(seed: Option<u64>, rules: TableRules) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let mut engine = Self::with_deck(deck, rules);
        engine.seed = Some(seed);
        engine
    }

    /// New table around an existing deck, used as-is.
    pub fn with_deck(deck: Deck, rules: TableRules) -> Self {
        Self {
            deck,
            players: Vec::new(),
            dealer: Player::dealer(),
            rules,
            seed: None,
            round: 0,
            phase: Phase::Betting,
            turn: None,
        }
    }

    /// Seats a new player with the table's starting balance and returns the seat.
    pub fn add_player(&mut self, name: impl Into<String>) -> usize {
        self.players
            .push(Player::new(name, self.rules.starting_balance));
        self.players.len() - 1
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.players.get(seat).ok_or(GameError::PlayerNotFound(seat))
    }
    pub fn dealer(&self) -> &Player {
        &self.dealer
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn rules(&self) -> TableRules {
        self.rules
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Rounds dealt so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Hands still to play in the current turn, the active one included.
    pub fn pending_hands(&self) -> usize {
        self.turn.as_ref().map_or(0, |t| t.queue.len() + 1)
    }

    pub fn active_seat(&self) -> Option<usize> {
        self.turn.as_ref().map(|t| t.seat)
    }

    /// Clears last round's cards and wagers and accepts new bets.
    pub fn open_betting(&mut self) {
        for p in &mut self.players {
            p.reset_round();
        }
        self.dealer.reset_round();
        self.turn = None;
        self.phase = Phase::Betting;
    }

    fn seat_mut(&mut self, seat: usize) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(seat)
            .ok_or(GameError::PlayerNotFound(seat))
    }

    pub fn place_bet(&mut self, seat: usize, amount: u64) -> Result<u64, GameError> {
        if self.phase != Phase::Betting {
            return Err(GameError::BettingClosed);
        }
        let min_bet = self.rules.min_bet;
        let player = self.seat_mut(seat)?;
        rules::validate_bet(player.balance(), min_bet, amount)?;
        let stake = player.place_bet(amount)?;
        debug!(player = player.name(), stake, "main bet placed");
        Ok(stake)
    }

    pub fn place_side_bet(
        &mut self,
        seat: usize,
        kind: SideBetKind,
        amount: u64,
    ) -> Result<u64, GameError> {
        if self.phase != Phase::Betting {
            return Err(GameError::BettingClosed);
        }
        if amount == 0 {
            return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
        }
        let player = self.seat_mut(seat)?;
        let stake = player.place_side_bet(kind, amount)?;
        debug!(player = player.name(), ?kind, stake, "side bet placed");
        Ok(stake)
    }

    /// Adds a fresh card set when the deck is too thin for the seated players.
    ///
    /// Returns the number of cards that were left before topping up.
    pub fn replenish_if_needed(&mut self) -> Option<usize> {
        let seats = self.players.len() + 1;
        let before = self.deck.remaining();
        if !needs_replenish(before, seats) {
            return None;
        }
        self.deck.add_deck();
        warn!(
            before,
            after = self.deck.remaining(),
            "deck low, added a fresh set"
        );
        Some(before)
    }

    /// Tops up the deck if needed, then deals two cards to every player in
    /// seat order and two to the dealer.
    ///
    /// Returns what [`replenish_if_needed`](RoundEngine::replenish_if_needed) reported.
    pub fn deal_round(&mut self) -> Result<Option<usize>, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoActivePlayers);
        }
        if self.phase != Phase::Betting {
            return Err(GameError::RoundAlreadyDealt);
        }
        let replenished = self.replenish_if_needed();
        for p in &mut self.players {
            p.clear_cards();
        }
        self.dealer.clear_cards();

        for p in &mut self.players {
            for _ in 0..2 {
                p.add_card(self.deck.deal()?);
            }
        }
        for _ in 0..2 {
            self.dealer.add_card(self.deck.deal()?);
        }
        self.round += 1;
        self.phase = Phase::Dealt;
        debug!(
            round = self.round,
            remaining = self.deck.remaining(),
            "round dealt"
        );
        Ok(replenished)
    }

    /// Starts `seat`'s turn on the hand it was dealt.
    pub fn begin_turn(&mut self, seat: usize) -> Result<(), GameError> {
        if self.phase != Phase::Dealt {
            return Err(GameError::RoundNotDealt);
        }
        if self.turn.is_some() {
            return Err(GameError::TurnInProgress);
        }
        self.player(seat)?;
        self.turn = Some(ActiveTurn {
            seat,
            state: HandState::AwaitingAction,
            split: false,
            queue: VecDeque::with_capacity(MAX_HANDS_PER_TURN - 1),
            played: Vec::with_capacity(MAX_HANDS_PER_TURN),
        });
        Ok(())
    }

    /// Applies one action to the active hand.
    ///
    /// Illegal actions and unaffordable doubles are rejected before anything
    /// changes. When the hand reaches a terminal state the next split hand,
    /// if any, is dealt its second card and becomes active; otherwise the
    /// turn ends.
    pub fn apply_action(&mut self, action: TurnAction) -> Result<ActionResult, GameError> {
        let turn = self.turn.as_mut().ok_or(GameError::NoTurnInProgress)?;
        let player = &mut self.players[turn.seat];
        rules::validate_action(
            player.hand(),
            turn.split,
            player.balance(),
            player.current_bet(),
            action,
        )?;
        let hand_number = turn.played.len() + 1;

        match action {
            TurnAction::Hit => {
                player.add_card(self.deck.deal()?);
                if player.hand().is_bust() {
                    turn.state = HandState::Busted;
                }
            }
            TurnAction::Stand => turn.state = HandState::Stood,
            TurnAction::DoubleDown => {
                if self.deck.is_empty() {
                    return Err(GameError::EmptyDeck);
                }
                player.double_bet()?;
                player.add_card(self.deck.deal()?);
                turn.state = if player.hand().is_bust() {
                    HandState::Busted
                } else {
                    HandState::DoubledDown
                };
            }
            TurnAction::Split => {
                if self.deck.is_empty() {
                    return Err(GameError::EmptyDeck);
                }
                let (first, second) =
                    player
                        .hand()
                        .clone()
                        .split()
                        .ok_or(GameError::InvalidAction {
                            action,
                            reason: "splitting needs two cards of the same rank",
                        })?;
                player.replace_hand(first);
                player.add_card(self.deck.deal()?);
                turn.queue.push_back(second);
                turn.split = true;
            }
        }
        debug!(
            player = player.name(),
            %action,
            hand_number,
            total = player.total(),
            state = ?turn.state,
            "action applied"
        );

        let mut result = ActionResult {
            action,
            hand_number,
            state: turn.state,
            total: player.total(),
            next_hand: None,
            turn_over: false,
        };
        if !turn.state.is_terminal() {
            return Ok(result);
        }

        if !turn.queue.is_empty() {
            let card = self.deck.deal()?;
            if let Some(next) = turn.queue.pop_front() {
                let finished = player.replace_hand(next);
                player.add_card(card);
                turn.played.push(finished);
                turn.state = HandState::AwaitingAction;
                result.next_hand = Some(turn.played.len() + 1);
                return Ok(result);
            }
        }

        if turn.split {
            let mut hands = std::mem::take(&mut turn.played);
            hands.push(player.hand().clone());
            player.record_split_hands(hands);
        }
        self.turn = None;
        result.turn_over = true;
        Ok(result)
    }

    /// Draws one dealer card if the dealer policy calls for it.
    pub fn dealer_draw(&mut self) -> Result<Option<Card>, GameError> {
        if self.phase != Phase::Dealt {
            return Err(GameError::RoundNotDealt);
        }
        if self.turn.is_some() {
            return Err(GameError::TurnInProgress);
        }
        if !dealer_should_hit(self.dealer.total()) {
            return Ok(None);
        }
        let card = self.deck.deal()?;
        self.dealer.add_card(card);
        Ok(Some(card))
    }

    /// Dealer hits below 17 and stands otherwise. Returns the final total.
    pub fn play_dealer(&mut self) -> Result<u32, GameError> {
        while self.dealer_draw()?.is_some() {}
        Ok(self.dealer.total())
    }

    /// Returns every stake of a round that will never be settled and closes it.
    ///
    /// Does nothing once the round has settled. Returns the total refunded.
    pub fn abandon_round(&mut self) -> u64 {
        if self.phase == Phase::Settled {
            return 0;
        }
        let mut refunded = 0;
        for p in &mut self.players {
            refunded += p.refund_wagers();
        }
        self.turn = None;
        self.phase = Phase::Settled;
        if refunded > 0 {
            info!(round = self.round, refunded, "round abandoned, stakes returned");
        }
        refunded
    }

    /// Pays out main and side bets, then removes players who can no longer
    /// cover the minimum bet.
    pub fn settle_round(&mut self) -> Result<RoundReport, GameError> {
        if self.phase != Phase::Dealt {
            return Err(GameError::RoundNotDealt);
        }
        if self.turn.is_some() {
            return Err(GameError::TurnInProgress);
        }
        let dealer_total = self.dealer.total();
        let mut settlements = Vec::with_capacity(self.players.len());

        for p in &mut self.players {
            let outcome = main_bet_outcome(p.total(), dealer_total);
            match outcome {
                Outcome::Win => p.win_bet(),
                Outcome::Lose => p.lose_bet(),
                Outcome::Push => p.push_bet(),
            }

            let opening = p.opening_pair();
            let mut side_bets = Vec::new();
            for (kind, stake) in p.side_bets().placed().collect::<Vec<_>>() {
                let won = opening.is_some_and(|pair| kind.wins(pair, dealer_total));
                let before = p.balance();
                if won {
                    p.ledger_mut().pay(stake, kind.multiplier());
                }
                side_bets.push(SideBetResult {
                    kind,
                    stake,
                    won,
                    payout: p.balance() - before,
                });
            }

            settlements.push(Settlement {
                name: p.name().to_string(),
                cards: p.hand().cards().to_vec(),
                total: p.total(),
                split_hands: p
                    .split_hands()
                    .iter()
                    .map(|h| h.cards().to_vec())
                    .collect(),
                bet: p.current_bet(),
                outcome,
                side_bets,
                balance: p.balance(),
            });
        }

        let eliminated = self.eliminate_broke();
        self.phase = Phase::Settled;
        info!(
            round = self.round,
            dealer_total,
            players = settlements.len(),
            eliminated = eliminated.len(),
            "round settled"
        );
        Ok(RoundReport {
            round: self.round,
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_total,
            settlements,
            eliminated,
        })
    }

    fn eliminate_broke(&mut self) -> Vec<String> {
        let floor = self.rules.min_bet.max(1);
        let mut gone = Vec::new();
        self.players.retain(|p| {
            if p.balance() < floor {
                gone.push(p.name().to_string());
                false
            } else {
                true
            }
        });
        gone
    }
}
