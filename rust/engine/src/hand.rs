use std::fmt;

use crate::cards::{Card, CardValue, ACE_HIGH, ACE_LOW};

/// Highest total that is not a bust.
pub const BLACKJACK: u32 = 21;

const ACE_SWING: u32 = (ACE_HIGH - ACE_LOW) as u32;

/// Best blackjack total of `cards`.
///
/// Every Ace starts as 11; while the total is over 21 and some Ace is still
/// counted high, one Ace drops to 1. The result does not depend on card order.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::hand_value;
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Hearts),
/// ];
/// assert_eq!(hand_value(&cards), 21);
/// ```
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut total = 0u32;
    let mut high_aces = 0u32;
    for c in cards {
        match c.value() {
            CardValue::Fixed(v) => total += u32::from(v),
            CardValue::Flexible => {
                total += u32::from(ACE_HIGH);
                high_aces += 1;
            }
        }
    }
    while total > BLACKJACK && high_aces > 0 {
        total -= ACE_SWING;
        high_aces -= 1;
    }
    total
}

/// Cards held by one player (or one split hand) with a running total.
///
/// The total is kept up to date on every [`Hand::push`] and always equals
/// [`hand_value`] of the cards held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u32,
    // Aces currently counted as 11.
    high_aces: u32,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &c in cards {
            hand.push(c);
        }
        hand
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        match card.value() {
            CardValue::Fixed(v) => self.total += u32::from(v),
            CardValue::Flexible => {
                self.total += u32::from(ACE_HIGH);
                self.high_aces += 1;
            }
        }
        while self.total > BLACKJACK && self.high_aces > 0 {
            self.total -= ACE_SWING;
            self.high_aces -= 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// At least one Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.high_aces > 0
    }

    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total == BLACKJACK
    }

    /// Exactly two cards of the same rank.
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Breaks a pair into two one-card hands, first card first.
    pub(crate) fn split(self) -> Option<(Hand, Hand)> {
        match self.cards.as_slice() {
            [a, b] if a.rank == b.rank => {
                Some((Hand::from_cards(&[*a]), Hand::from_cards(&[*b])))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
