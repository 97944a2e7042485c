use blackjack_engine::cards::{full_deck, Card, Rank, Suit};
use blackjack_engine::hand::{hand_value, Hand};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn ace_king_is_twenty_one_not_thirty_one() {
    let cards = [c(Rank::Ace, Suit::Spades), c(Rank::King, Suit::Hearts)];
    assert_eq!(hand_value(&cards), 21);
    assert!(Hand::from_cards(&cards).is_blackjack());
}

#[test]
fn four_aces_count_fourteen() {
    let cards = [
        c(Rank::Ace, Suit::Spades),
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ace, Suit::Clubs),
        c(Rank::Ace, Suit::Diamonds),
    ];
    assert_eq!(hand_value(&cards), 14);
    let hand = Hand::from_cards(&cards);
    assert_eq!(hand.total(), 14);
    assert!(hand.is_soft());
}

#[test]
fn aces_drop_one_at_a_time() {
    // A A 9 -> 11 + 1 + 9 = 21
    let cards = [
        c(Rank::Ace, Suit::Spades),
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Nine, Suit::Clubs),
    ];
    assert_eq!(hand_value(&cards), 21);
    // A A 9 K -> 1 + 1 + 9 + 10 = 21
    let mut more = cards.to_vec();
    more.push(c(Rank::King, Suit::Clubs));
    assert_eq!(hand_value(&more), 21);
}

#[test]
fn bust_hand_without_aces_stays_bust() {
    let cards = [
        c(Rank::King, Suit::Spades),
        c(Rank::Queen, Suit::Hearts),
        c(Rank::Two, Suit::Clubs),
    ];
    assert_eq!(hand_value(&cards), 22);
    assert!(Hand::from_cards(&cards).is_bust());
}

#[test]
fn empty_hand_is_zero() {
    assert_eq!(hand_value(&[]), 0);
    assert_eq!(Hand::new().total(), 0);
}

fn random_hand(rng: &mut ChaCha8Rng, pool: &[Card]) -> Vec<Card> {
    let len = rng.random_range(1..=8);
    (0..len)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

#[test]
fn valuation_is_order_independent() {
    let pool = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..2_000 {
        let mut cards = random_hand(&mut rng, &pool);
        let expected = hand_value(&cards);
        for _ in 0..5 {
            cards.shuffle(&mut rng);
            assert_eq!(hand_value(&cards), expected, "cards: {:?}", cards);
        }
    }
}

#[test]
fn running_total_matches_full_recount_on_every_prefix() {
    let pool = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for _ in 0..2_000 {
        let cards = random_hand(&mut rng, &pool);
        let mut hand = Hand::new();
        for (i, &card) in cards.iter().enumerate() {
            hand.push(card);
            assert_eq!(
                hand.total(),
                hand_value(&cards[..=i]),
                "prefix {:?}",
                &cards[..=i]
            );
        }
    }
}

#[test]
fn ace_heavy_hands_match_full_recount() {
    let aces = [
        c(Rank::Ace, Suit::Spades),
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ace, Suit::Clubs),
        c(Rank::Ace, Suit::Diamonds),
    ];
    let small = [
        c(Rank::Two, Suit::Spades),
        c(Rank::Five, Suit::Hearts),
        c(Rank::Nine, Suit::Clubs),
        c(Rank::King, Suit::Diamonds),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..1_000 {
        let mut cards: Vec<Card> = Vec::new();
        for _ in 0..rng.random_range(2..=7) {
            if rng.random_bool(0.5) {
                cards.push(aces[rng.random_range(0..4)]);
            } else {
                cards.push(small[rng.random_range(0..4)]);
            }
        }
        let hand = Hand::from_cards(&cards);
        assert_eq!(hand.total(), hand_value(&cards));
        assert!(hand.total() <= 21 || !hand.is_soft());
    }
}
