use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::deck::Deck;
use blackjack_engine::engine::{RoundEngine, TableRules};
use blackjack_engine::errors::GameError;
use blackjack_engine::rules::{HandState, Outcome, TurnAction};

fn hearts(rank: Rank) -> Card {
    Card::new(rank, Suit::Hearts)
}

/// One player, cards dealt in `order`: player, player, dealer, dealer, then draws.
fn one_seat(order: &[Card], balance: u64, bet: u64) -> RoundEngine {
    let mut engine = RoundEngine::with_deck(
        Deck::stacked(order.to_vec()),
        TableRules {
            starting_balance: balance,
            min_bet: 1,
        },
    );
    let seat = engine.add_player("Ann");
    engine.open_betting();
    engine.place_bet(seat, bet).unwrap();
    engine.deal_round().unwrap();
    engine.begin_turn(seat).unwrap();
    engine
}

#[test]
fn hit_past_twenty_one_busts_and_ends_the_turn() {
    let order = [Rank::Ten, Rank::Five, Rank::Ten, Rank::Six, Rank::King, Rank::Nine];
    let mut engine = one_seat(&order.map(hearts), 100, 10);

    let result = engine.apply_action(TurnAction::Hit).unwrap();
    assert_eq!(result.state, HandState::Busted);
    assert_eq!(result.total, 25);
    assert!(result.turn_over);
    assert_eq!(
        engine.apply_action(TurnAction::Hit),
        Err(GameError::NoTurnInProgress)
    );
}

#[test]
fn busted_player_loses_even_when_dealer_busts() {
    let order = [Rank::Ten, Rank::Five, Rank::Ten, Rank::Six, Rank::King, Rank::Nine];
    let mut engine = one_seat(&order.map(hearts), 100, 10);
    engine.apply_action(TurnAction::Hit).unwrap();

    assert_eq!(engine.play_dealer().unwrap(), 25);
    let report = engine.settle_round().unwrap();
    assert_eq!(report.settlements[0].outcome, Outcome::Lose);
    assert_eq!(report.settlements[0].balance, 90);
}

#[test]
fn hitting_below_twenty_one_keeps_the_turn_open() {
    let order = [Rank::Two, Rank::Three, Rank::Ten, Rank::Seven, Rank::Four];
    let mut engine = one_seat(&order.map(hearts), 100, 10);
    let result = engine.apply_action(TurnAction::Hit).unwrap();
    assert_eq!(result.state, HandState::AwaitingAction);
    assert_eq!(result.total, 9);
    assert!(!result.turn_over);
    assert_eq!(engine.pending_hands(), 1);
}

#[test]
fn double_down_doubles_stake_and_draws_exactly_one_card() {
    let order = [Rank::Five, Rank::Six, Rank::Ten, Rank::Eight, Rank::Ten];
    let mut engine = one_seat(&order.map(hearts), 100, 30);

    let result = engine.apply_action(TurnAction::DoubleDown).unwrap();
    assert_eq!(result.state, HandState::DoubledDown);
    assert_eq!(result.total, 21);
    assert!(result.turn_over);

    let ann = engine.player(0).unwrap();
    assert_eq!(ann.current_bet(), 60);
    assert_eq!(ann.balance(), 40);
    assert_eq!(ann.hand().len(), 3);

    engine.play_dealer().unwrap();
    let report = engine.settle_round().unwrap();
    assert_eq!(report.settlements[0].outcome, Outcome::Win);
    assert_eq!(report.settlements[0].balance, 160);
}

#[test]
fn unaffordable_double_changes_nothing() {
    let order = [Rank::Five, Rank::Six, Rank::Ten, Rank::Eight, Rank::Ten];
    let mut engine = one_seat(&order.map(hearts), 100, 60);
    let remaining = engine.deck_remaining();

    assert_eq!(
        engine.apply_action(TurnAction::DoubleDown),
        Err(GameError::InsufficientBalance {
            requested: 60,
            available: 40
        })
    );
    let ann = engine.player(0).unwrap();
    assert_eq!(ann.current_bet(), 60);
    assert_eq!(ann.balance(), 40);
    assert_eq!(ann.hand().len(), 2);
    assert_eq!(engine.deck_remaining(), remaining);

    // the turn is still open
    assert!(engine.apply_action(TurnAction::Stand).unwrap().turn_over);
}

#[test]
fn double_is_only_allowed_on_the_first_two_cards() {
    let order = [Rank::Two, Rank::Three, Rank::Ten, Rank::Seven, Rank::Four, Rank::Five];
    let mut engine = one_seat(&order.map(hearts), 100, 10);
    engine.apply_action(TurnAction::Hit).unwrap();
    assert!(matches!(
        engine.apply_action(TurnAction::DoubleDown),
        Err(GameError::InvalidAction {
            action: TurnAction::DoubleDown,
            ..
        })
    ));
}

#[test]
fn split_needs_a_pair() {
    let order = [Rank::Eight, Rank::Nine, Rank::Ten, Rank::Seven, Rank::Four];
    let mut engine = one_seat(&order.map(hearts), 100, 10);
    assert!(matches!(
        engine.apply_action(TurnAction::Split),
        Err(GameError::InvalidAction {
            action: TurnAction::Split,
            ..
        })
    ));
    assert_eq!(engine.player(0).unwrap().hand().len(), 2);
}

#[test]
fn split_plays_both_hands_in_order() {
    let order = [
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Spades),
        hearts(Rank::Ten),
        hearts(Rank::Seven),
        hearts(Rank::Three),
        hearts(Rank::Ten),
        hearts(Rank::King),
    ];
    let mut engine = one_seat(&order, 100, 10);

    let split = engine.apply_action(TurnAction::Split).unwrap();
    assert_eq!(split.hand_number, 1);
    assert_eq!(split.total, 11);
    assert!(!split.turn_over);
    assert_eq!(engine.pending_hands(), 2);

    // split hands cannot be doubled or split again
    assert!(matches!(
        engine.apply_action(TurnAction::DoubleDown),
        Err(GameError::InvalidAction { .. })
    ));
    assert!(matches!(
        engine.apply_action(TurnAction::Split),
        Err(GameError::InvalidAction { .. })
    ));

    let hit = engine.apply_action(TurnAction::Hit).unwrap();
    assert_eq!(hit.total, 21);
    assert!(!hit.turn_over);

    let stand = engine.apply_action(TurnAction::Stand).unwrap();
    assert_eq!(stand.hand_number, 1);
    assert_eq!(stand.next_hand, Some(2));
    assert!(!stand.turn_over);
    assert_eq!(engine.pending_hands(), 1);
    assert_eq!(engine.player(0).unwrap().total(), 18);

    let last = engine.apply_action(TurnAction::Stand).unwrap();
    assert_eq!(last.hand_number, 2);
    assert!(last.turn_over);
    assert_eq!(engine.pending_hands(), 0);

    let ann = engine.player(0).unwrap();
    assert_eq!(ann.split_hands().len(), 2);
    assert_eq!(ann.split_hands()[0].total(), 21);
    assert_eq!(ann.split_hands()[1].total(), 18);
    // no extra stake is taken for the second hand
    assert_eq!(ann.current_bet(), 10);
    assert_eq!(ann.balance(), 90);
}

#[test]
fn split_main_bet_settles_against_the_last_hand() {
    let order = [
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Spades),
        hearts(Rank::Ten),
        hearts(Rank::Seven),
        hearts(Rank::Three),
        hearts(Rank::Ten),
        hearts(Rank::King),
    ];
    let mut engine = one_seat(&order, 100, 10);
    engine.apply_action(TurnAction::Split).unwrap();
    engine.apply_action(TurnAction::Hit).unwrap();
    engine.apply_action(TurnAction::Stand).unwrap();
    engine.apply_action(TurnAction::Stand).unwrap();

    assert_eq!(engine.play_dealer().unwrap(), 17);
    let report = engine.settle_round().unwrap();
    let s = &report.settlements[0];
    assert_eq!(s.total, 18);
    assert_eq!(s.outcome, Outcome::Win);
    assert_eq!(s.split_hands.len(), 2);
    assert_eq!(s.balance, 110);
}

#[test]
fn busting_the_first_split_hand_moves_to_the_second() {
    let order = [
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Spades),
        hearts(Rank::Ten),
        hearts(Rank::Seven),
        hearts(Rank::Six),
        hearts(Rank::Nine),
        hearts(Rank::Two),
    ];
    let mut engine = one_seat(&order, 100, 10);
    engine.apply_action(TurnAction::Split).unwrap();
    let bust = engine.apply_action(TurnAction::Hit).unwrap();
    assert_eq!(bust.state, HandState::Busted);
    assert_eq!(bust.total, 23);
    assert_eq!(bust.next_hand, Some(2));
    assert!(!bust.turn_over);
    assert_eq!(engine.player(0).unwrap().total(), 10);
}

#[test]
fn turns_run_one_seat_at_a_time() {
    let order = [Rank::Ten; 8].map(hearts);
    let mut engine = RoundEngine::with_deck(Deck::stacked(order.to_vec()), TableRules::default());
    engine.add_player("Ann");
    engine.add_player("Bo");
    engine.deal_round().unwrap();
    engine.begin_turn(0).unwrap();
    assert_eq!(engine.begin_turn(1), Err(GameError::TurnInProgress));
    assert_eq!(engine.active_seat(), Some(0));
    engine.apply_action(TurnAction::Stand).unwrap();
    assert_eq!(engine.active_seat(), None);
    engine.begin_turn(1).unwrap();
    assert_eq!(engine.active_seat(), Some(1));
}
