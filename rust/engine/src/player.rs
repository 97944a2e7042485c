use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::ledger::Ledger;
use crate::rules::SideBetKind;

/// Whether a seat belongs to a bettor or to the house.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Regular,
    Dealer,
}

/// Stake on each side bet; zero means the bet was not placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBets {
    pub dealer_bust: u64,
    pub mixed_pair: u64,
    pub same_pair: u64,
}

impl SideBets {
    pub fn get(&self, kind: SideBetKind) -> u64 {
        match kind {
            SideBetKind::DealerBust => self.dealer_bust,
            SideBetKind::MixedPair => self.mixed_pair,
            SideBetKind::SamePair => self.same_pair,
        }
    }

    fn slot(&mut self, kind: SideBetKind) -> &mut u64 {
        match kind {
            SideBetKind::DealerBust => &mut self.dealer_bust,
            SideBetKind::MixedPair => &mut self.mixed_pair,
            SideBetKind::SamePair => &mut self.same_pair,
        }
    }

    /// Placed side bets with their stakes.
    pub fn placed(&self) -> impl Iterator<Item = (SideBetKind, u64)> + '_ {
        SideBetKind::ALL
            .into_iter()
            .map(|k| (k, self.get(k)))
            .filter(|&(_, amount)| amount > 0)
    }

    pub fn total(&self) -> u64 {
        self.dealer_bust + self.mixed_pair + self.same_pair
    }
}

/// A seat at the table: the dealer or a regular player with a bankroll.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    role: Role,
    ledger: Ledger,
    hand: Hand,
    current_bet: u64,
    side_bets: SideBets,
    opening_pair: Option<[Card; 2]>,
    split_hands: Vec<Hand>,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: u64) -> Self {
        Self {
            name: name.into(),
            role: Role::Regular,
            ledger: Ledger::new(balance),
            hand: Hand::new(),
            current_bet: 0,
            side_bets: SideBets::default(),
            opening_pair: None,
            split_hands: Vec::new(),
        }
    }

    pub fn dealer() -> Self {
        Self {
            role: Role::Dealer,
            ..Self::new("Dealer", 0)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn is_dealer(&self) -> bool {
        self.role == Role::Dealer
    }
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }
    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn total(&self) -> u32 {
        self.hand.total()
    }
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }
    pub fn side_bets(&self) -> &SideBets {
        &self.side_bets
    }
    /// The two cards dealt at the start of the round.
    pub fn opening_pair(&self) -> Option<[Card; 2]> {
        self.opening_pair
    }
    /// Every hand played this round when the opening pair was split.
    pub fn split_hands(&self) -> &[Hand] {
        &self.split_hands
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        if self.opening_pair.is_none() {
            if let [a, b] = self.hand.cards() {
                self.opening_pair = Some([*a, *b]);
            }
        }
    }

    /// Debits a main bet and records it as the current bet.
    pub fn place_bet(&mut self, amount: u64) -> Result<u64, GameError> {
        let stake = self.ledger.place_bet(amount)?;
        self.current_bet = stake;
        Ok(stake)
    }

    /// Debits the current bet a second time (double down).
    pub fn double_bet(&mut self) -> Result<u64, GameError> {
        let extra = self.ledger.place_bet(self.current_bet)?;
        self.current_bet += extra;
        Ok(self.current_bet)
    }

    pub fn place_side_bet(&mut self, kind: SideBetKind, amount: u64) -> Result<u64, GameError> {
        let stake = self.ledger.place_bet(amount)?;
        *self.side_bets.slot(kind) += stake;
        Ok(stake)
    }

    pub fn win_bet(&mut self) {
        self.ledger.win_bet(self.current_bet);
    }

    pub fn lose_bet(&mut self) {
        self.ledger.lose_bet();
    }

    pub fn push_bet(&mut self) {
        self.ledger.push_bet(self.current_bet);
    }

    pub(crate) fn replace_hand(&mut self, hand: Hand) -> Hand {
        std::mem::replace(&mut self.hand, hand)
    }

    pub(crate) fn record_split_hands(&mut self, hands: Vec<Hand>) {
        self.split_hands = hands;
    }

    /// Clears cards and wagers ahead of a new round.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.side_bets = SideBets::default();
        self.opening_pair = None;
        self.split_hands.clear();
    }

    /// Credits the main bet and side bets back and zeroes them.
    pub(crate) fn refund_wagers(&mut self) -> u64 {
        let total = self.current_bet + self.side_bets.total();
        self.ledger.push_bet(total);
        self.current_bet = 0;
        self.side_bets = SideBets::default();
        total
    }

    /// Clears cards only, keeping the wagers already placed.
    pub(crate) fn clear_cards(&mut self) {
        self.hand.clear();
        self.opening_pair = None;
        self.split_hands.clear();
    }
}
