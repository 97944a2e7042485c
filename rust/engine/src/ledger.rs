use crate::errors::GameError;

/// Default bankroll handed to each player at the start of a session.
pub const STARTING_BALANCE: u64 = 10_000;

/// A player's money. Stakes are taken out when a bet is placed and only
/// ever come back through [`Ledger::pay`], [`Ledger::win_bet`] or
/// [`Ledger::push_bet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    balance: u64,
}

impl Ledger {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Debits `amount` and returns it as the committed stake.
    ///
    /// The balance is checked before anything changes, so a rejected bet
    /// leaves the ledger untouched.
    ///
    /// ```
    /// use blackjack_engine::errors::GameError;
    /// use blackjack_engine::ledger::Ledger;
    ///
    /// let mut ledger = Ledger::new(100);
    /// assert_eq!(ledger.place_bet(50), Ok(50));
    /// assert_eq!(ledger.balance(), 50);
    /// assert_eq!(
    ///     ledger.place_bet(80),
    ///     Err(GameError::InsufficientBalance { requested: 80, available: 50 })
    /// );
    /// assert_eq!(ledger.balance(), 50);
    /// ```
    pub fn place_bet(&mut self, amount: u64) -> Result<u64, GameError> {
        if amount > self.balance {
            return Err(GameError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(amount)
    }

    /// Returns the stake plus `multiplier` times the stake in winnings.
    pub fn pay(&mut self, stake: u64, multiplier: u64) {
        let credit = stake.saturating_mul(multiplier.saturating_add(1));
        self.balance = self.balance.saturating_add(credit);
    }

    /// Even-money win: credits twice the stake.
    pub fn win_bet(&mut self, amount: u64) {
        self.pay(amount, 1);
    }

    pub fn lose_bet(&mut self) {}

    /// Tie: the stake comes back unchanged.
    pub fn push_bet(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}
