//! # blackjack-engine: Blackjack Table Core
//!
//! Rules engine for a single multi-player blackjack table: deck lifecycle,
//! hand valuation, betting with side bets, the hit/stand/double/split turn
//! machine, dealer policy and round settlement. Input and output go through
//! the [`interaction::Interaction`] trait, so the engine itself never blocks
//! on a terminal.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and blackjack values
//! - [`deck`] - The shoe, with injectable shuffling
//! - [`hand`] - Hand totals with soft/hard Ace resolution
//! - [`ledger`] - Player balances and bet payouts
//! - [`player`] - Seats: hand, ledger, current bet and side bets
//! - [`rules`] - Action legality, dealer policy, outcomes, side-bet conditions
//! - [`engine`] - Round orchestration (deal, turns, dealer, settlement)
//! - [`game`] - Multi-round session loop
//! - [`interaction`] - Prompts and notifications the session relies on
//! - [`logger`] - Round records and JSONL history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::hand_value;
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Clubs),
//! ];
//! assert_eq!(hand_value(&cards), 21);
//! ```
//!
//! ## Deterministic Decks
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.cards(), d2.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod interaction;
pub mod ledger;
pub mod logger;
pub mod player;
pub mod rules;
