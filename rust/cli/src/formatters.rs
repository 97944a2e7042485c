//! Card and hand formatting for terminal display.
//!
//! Short card codes (`A♠`, `T♦`) are used where a whole table is printed at
//! once, as in the `deal` command; the interactive table prints full card
//! names. Suit symbols fall back to ASCII letters on Windows consoles that
//! cannot render them.
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::{format_card, format_cards};
//!
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! assert!(format_cards(&[ace]).starts_with("[A"));
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::player::Player;

/// `true` if the terminal is expected to render suit symbols.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Single character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Cards in bracket notation, `[A♠ K♥]`, or `[]` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    let codes: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", codes.join(" "))
}

/// The line shown for a seat at the interactive table.
///
/// A dealer holding exactly two cards shows only the first one unless
/// `reveal_all` is set.
pub fn format_hand_line(player: &Player, reveal_all: bool) -> String {
    let cards = player.hand().cards();
    if player.is_dealer() && !reveal_all && cards.len() == 2 {
        return format!("Dealer's visible card: {}", cards[0]);
    }
    format!(
        "{}'s hand: {}. Total: {}",
        player.name(),
        player.hand(),
        player.total()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_format_rank_tens_and_faces() {
        assert_eq!(format_rank(Rank::Ten), "T");
        assert_eq!(format_rank(Rank::Queen), "Q");
        assert_eq!(format_rank(Rank::Two), "2");
    }

    #[test]
    fn test_format_cards_empty() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn test_dealer_hole_card_is_hidden() {
        let mut dealer = Player::dealer();
        dealer.add_card(card(Rank::King, Suit::Clubs));
        dealer.add_card(card(Rank::Six, Suit::Hearts));
        assert_eq!(
            format_hand_line(&dealer, false),
            "Dealer's visible card: King of Clubs"
        );
        assert_eq!(
            format_hand_line(&dealer, true),
            "Dealer's hand: King of Clubs, 6 of Hearts. Total: 16"
        );
    }

    #[test]
    fn test_dealer_with_more_cards_is_shown_in_full() {
        let mut dealer = Player::dealer();
        dealer.add_card(card(Rank::Two, Suit::Clubs));
        dealer.add_card(card(Rank::Three, Suit::Clubs));
        dealer.add_card(card(Rank::Four, Suit::Clubs));
        assert!(format_hand_line(&dealer, false).ends_with("Total: 9"));
    }

    #[test]
    fn test_player_hand_line() {
        let mut ann = Player::new("Ann", 100);
        ann.add_card(card(Rank::Ace, Suit::Spades));
        ann.add_card(card(Rank::King, Suit::Hearts));
        assert_eq!(
            format_hand_line(&ann, false),
            "Ann's hand: Ace of Spades, King of Hearts. Total: 21"
        );
    }
}
