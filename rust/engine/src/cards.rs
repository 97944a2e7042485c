use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suits in a standard 52-card set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds (♦)
    Diamonds,
    /// Spades (♠)
    Spades,
    /// Clubs (♣)
    Clubs,
    /// Hearts (♥)
    Hearts,
}

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
        }
    }
}

/// Rank (face) of a playing card from Two through Ace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Blackjack value carried by a rank.
///
/// Every rank has a fixed value except the Ace, which counts as either
/// [`ACE_LOW`] or [`ACE_HIGH`] depending on the rest of the hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardValue {
    Fixed(u8),
    Flexible,
}

pub const ACE_LOW: u8 = 1;
pub const ACE_HIGH: u8 = 11;

impl Rank {
    pub fn value(self) -> CardValue {
        match self {
            Rank::Two => CardValue::Fixed(2),
            Rank::Three => CardValue::Fixed(3),
            Rank::Four => CardValue::Fixed(4),
            Rank::Five => CardValue::Fixed(5),
            Rank::Six => CardValue::Fixed(6),
            Rank::Seven => CardValue::Fixed(7),
            Rank::Eight => CardValue::Fixed(8),
            Rank::Nine => CardValue::Fixed(9),
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => CardValue::Fixed(10),
            Rank::Ace => CardValue::Flexible,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// A single playing card. Cards are plain values: once created they never change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> CardValue {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Spades, Suit::Clubs, Suit::Hearts]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Number of cards in one fresh set.
pub const DECK_SIZE: usize = 52;

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_worth_ten() {
        for r in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(r.value(), CardValue::Fixed(10));
        }
    }

    #[test]
    fn only_the_ace_is_flexible() {
        let flexible: Vec<Rank> = all_ranks()
            .into_iter()
            .filter(|r| r.value() == CardValue::Flexible)
            .collect();
        assert_eq!(flexible, vec![Rank::Ace]);
    }

    #[test]
    fn card_display_reads_rank_of_suit() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(c.to_string(), "Ace of Spades");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
    }

    #[test]
    fn full_deck_has_four_of_each_rank() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for r in all_ranks() {
            assert_eq!(deck.iter().filter(|c| c.rank == r).count(), 4);
        }
    }
}
