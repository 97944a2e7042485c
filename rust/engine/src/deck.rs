use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::errors::GameError;

/// Source of card permutations used by a [`Deck`].
///
/// The deck never touches a global RNG; whatever shuffler it is built with
/// decides the order, so tests can plug in a fixed sequence.
pub trait Shuffler: fmt::Debug + Send {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Uniform shuffling driven by a seeded ChaCha20 stream.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: ChaCha20Rng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Leaves the cards exactly where they are.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}

/// The shoe: remaining cards stored bottom-to-top, dealt from the top.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    created: usize,
    shuffler: Box<dyn Shuffler>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_shuffler(Box::new(SeededShuffler::new(seed)))
    }

    /// Builds one unshuffled 52-card set around the given shuffler.
    pub fn with_shuffler(shuffler: Box<dyn Shuffler>) -> Self {
        Self {
            cards: full_deck(),
            created: DECK_SIZE,
            shuffler,
        }
    }

    /// A deck that deals `order` front to back and never reorders it.
    ///
    /// Sets added later with [`Deck::add_deck`] go underneath, so the scripted
    /// cards on top are still dealt first.
    pub fn stacked(order: Vec<Card>) -> Self {
        let created = order.len();
        let mut cards = order;
        cards.reverse();
        Self {
            cards,
            created,
            shuffler: Box::new(NoShuffle),
        }
    }

    pub fn shuffle(&mut self) {
        self.shuffler.shuffle(&mut self.cards);
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Adds a fresh 52-card set beneath the remaining cards and reshuffles.
    pub fn add_deck(&mut self) {
        self.cards.splice(0..0, full_deck());
        self.created += DECK_SIZE;
        self.shuffle();
        debug!(remaining = self.cards.len(), "added a fresh card set");
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total number of cards this deck has ever held.
    pub fn cards_created(&self) -> usize {
        self.created
    }

    /// Remaining cards, bottom first; the last element is dealt next.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
