//! Table integration tests.

use holdem::{
    Action, ActionError, Card, Deck, DrawError, HandCategory, IllegalAction, JoinError, Rank,
    ResetError, Session, StartError, Suit, Table, TableOptions, TableState,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(table: &mut Table, draws: &[Card]) {
    table.set_deck(Deck::from_cards(draws.to_vec())).unwrap();
}

fn table_with(players: &[&str]) -> Table {
    let mut table = Table::new(TableOptions::default(), 7);
    for id in players {
        table.add_player(*id, id.to_uppercase()).unwrap();
    }
    table
}

fn started(players: &[&str]) -> Table {
    let mut table = table_with(players);
    table.start().unwrap();
    table
}

fn total_chips(table: &Table) -> usize {
    let in_play = if table.state() == TableState::Ended {
        0
    } else {
        table.pot() + table.ledger().total()
    };
    table.players().iter().map(holdem::Player::cash).sum::<usize>() + in_play
}

#[test]
fn new_table_is_open_and_empty() {
    let table = Table::new(TableOptions::default(), 1);
    assert_eq!(table.state(), TableState::Open);
    assert!(table.players().is_empty());
    assert!(table.current_player().is_none());
    assert!(table.community_cards().is_empty());
    assert!(table.winner().is_none());
    assert!(table.winning_hand().is_empty());
    assert_eq!(table.cards_remaining(), holdem::DECK_SIZE);
}

#[test]
fn joining_seats_inactive_player_with_starting_stack() {
    let table = table_with(&["player1"]);
    let player = &table.players()[0];
    assert_eq!(player.id(), "player1");
    assert_eq!(player.name(), "PLAYER1");
    assert_eq!(player.cash(), 100);
    assert!(!player.is_active());
    assert!(table.player_cards("player1").is_empty());
}

#[test]
fn join_errors() {
    let mut table = Table::new(TableOptions::default().with_max_players(2), 1);
    table.add_player("a", "A").unwrap();
    assert_eq!(
        table.add_player("a", "Again").unwrap_err(),
        JoinError::DuplicatePlayer
    );
    table.add_player("b", "B").unwrap();
    assert_eq!(table.add_player("c", "C").unwrap_err(), JoinError::TableFull);

    table.start().unwrap();
    assert_eq!(
        table.add_player("d", "D").unwrap_err(),
        JoinError::InvalidState
    );
}

#[test]
fn start_deals_two_cards_and_opens_pre_flop() {
    let table = started(&["player1", "player2", "player3"]);

    assert_eq!(table.state(), TableState::PreFlop);
    assert_eq!(table.current_player().unwrap().id(), "player1");
    assert!(table.community_cards().is_empty());
    for player in table.players() {
        assert!(player.is_active());
        assert_eq!(player.cash(), 100);
        assert_eq!(player.cards().len(), 2);
        assert_eq!(table.player_cards(player.id()).len(), 2);
    }
    assert!(table.bets().values().all(|&bet| bet == 0));
    assert_eq!(table.bets().len(), 3);
    assert_eq!(table.cards_remaining(), holdem::DECK_SIZE - 6);
}

#[test]
fn start_deals_in_join_order() {
    let mut table = table_with(&["player1", "player2"]);
    let draws = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
    ];
    set_deck_from_draws(&mut table, &draws);
    table.start().unwrap();

    assert_eq!(table.player_cards("player1"), &draws[0..2]);
    assert_eq!(table.player_cards("player2"), &draws[2..4]);
}

#[test]
fn start_with_one_player_fails_with_count() {
    let mut table = table_with(&["player1"]);
    let err = table.start().unwrap_err();
    assert_eq!(err, StartError::InsufficientPlayers { count: 1 });
    assert_eq!(
        err.to_string(),
        "Insufficient number of players present, current player count 1"
    );
    assert_eq!(table.state(), TableState::Open);
}

#[test]
fn start_twice_is_rejected() {
    let mut table = started(&["player1", "player2"]);
    assert_eq!(table.start().unwrap_err(), StartError::InvalidState);
}

#[test]
fn start_rejects_short_deck_without_dealing() {
    let mut table = table_with(&["player1", "player2"]);
    set_deck_from_draws(&mut table, &[card(Rank::Two, Suit::Clubs); 8]);

    assert_eq!(
        table.start().unwrap_err(),
        StartError::Deck(DrawError::InsufficientCards {
            requested: 9,
            remaining: 8
        })
    );
    assert_eq!(table.state(), TableState::Open);
    assert!(table.player_cards("player1").is_empty());
    assert_eq!(table.cards_remaining(), 8);
}

#[test]
fn actions_before_start_are_rejected() {
    let mut table = table_with(&["player1", "player2"]);
    assert_eq!(
        table.perform_action(Action::Check).unwrap_err(),
        ActionError::InvalidState
    );
}

#[test]
fn checks_pass_the_turn_and_open_the_flop() {
    let mut table = started(&["player1", "player2"]);

    table.perform_action(Action::Check).unwrap();
    assert_eq!(table.current_player().unwrap().id(), "player2");
    assert_eq!(table.state(), TableState::PreFlop);

    table.perform_action(Action::Check).unwrap();
    assert_eq!(table.current_player().unwrap().id(), "player1");
    assert_eq!(table.state(), TableState::Flop);
    assert_eq!(table.community_cards().len(), 3);
}

#[test]
fn inactive_players_are_skipped() {
    let mut table = started(&["player1", "player2", "player3"]);
    table.player_mut("player2").unwrap().set_active(false);

    table.perform_action(Action::Check).unwrap();
    assert_eq!(table.current_player().unwrap().id(), "player3");

    table.perform_action(Action::Check).unwrap();
    assert_eq!(table.current_player().unwrap().id(), "player1");
    assert_eq!(table.state(), TableState::Flop);
    assert_eq!(table.community_cards().len(), 3);
}

#[test]
fn board_grows_street_by_street() {
    let mut table = started(&["player1", "player2"]);
    let streets = [
        (TableState::Flop, 3),
        (TableState::Turn, 4),
        (TableState::River, 5),
    ];

    for (state, board) in streets {
        table.perform_action(Action::Check).unwrap();
        table.perform_action(Action::Check).unwrap();
        assert_eq!(table.state(), state);
        assert_eq!(table.community_cards().len(), board);
        assert_eq!(table.current_player().unwrap().id(), "player1");
    }
}

#[test]
fn fold_deactivates_current_player() {
    let mut table = started(&["player1", "player2", "player3"]);
    table.perform_action(Action::Fold).unwrap();

    assert!(!table.players()[0].is_active());
    assert_eq!(table.current_player().unwrap().id(), "player2");
    assert_eq!(table.state(), TableState::PreFlop);
}

#[test]
fn last_player_standing_wins() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Check).unwrap();
    table.perform_action(Action::Fold).unwrap();
    table.perform_action(Action::Fold).unwrap();

    assert_eq!(table.state(), TableState::Ended);
    assert_eq!(table.winner().unwrap().id(), "player1");
    assert!(table.winning_hand().is_empty());
    assert!(table.current_player().is_none());
    assert!(table.result().unwrap().uncontested);
}

#[test]
fn fold_out_awards_committed_chips() {
    let mut table = started(&["player1", "player2"]);

    table.perform_action(Action::Raise { amount: 10 }).unwrap();
    table.perform_action(Action::Fold).unwrap();

    assert_eq!(table.state(), TableState::Ended);
    assert_eq!(table.pot(), 10);
    assert_eq!(table.players()[0].cash(), 100);
    assert_eq!(table.players()[1].cash(), 100);
    assert_eq!(table.result().unwrap().payouts[0].amount, 10);
}

#[test]
fn raise_commits_chips() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Raise { amount: 10 }).unwrap();

    assert_eq!(table.bets()["player1"], 10);
    assert_eq!(table.players()[0].cash(), 90);
    assert_eq!(table.ledger().highest_bet(), 10);
    assert!(table.ledger().is_raise_open());
    assert_eq!(table.current_player().unwrap().id(), "player2");
}

#[test]
fn raise_must_exceed_highest_bet() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Raise { amount: 10 }).unwrap();
    table.perform_action(Action::Raise { amount: 20 }).unwrap();

    for amount in [10, 20] {
        assert!(matches!(
            table.perform_action(Action::Raise { amount }).unwrap_err(),
            ActionError::IllegalAmount { highest_bet: 20, .. }
        ));
    }
    assert_eq!(table.players()[2].cash(), 100);
    assert_eq!(table.current_player().unwrap().id(), "player3");
}

#[test]
fn raise_cannot_exceed_own_cash() {
    let mut table = started(&["player1", "player2", "player3"]);
    assert_eq!(
        table.perform_action(Action::Raise { amount: 110 }).unwrap_err(),
        ActionError::IllegalAmount {
            amount: 110,
            highest_bet: 0,
            limit: 100
        }
    );
}

#[test]
fn raise_cannot_exceed_shortest_stack() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Raise { amount: 50 }).unwrap();
    assert_eq!(
        table.perform_action(Action::Raise { amount: 60 }).unwrap_err(),
        ActionError::IllegalAmount {
            amount: 60,
            highest_bet: 50,
            limit: 50
        }
    );
}

#[test]
fn call_before_raise_is_illegal() {
    let mut table = started(&["player1", "player2", "player3"]);

    let err = table.perform_action(Action::Call).unwrap_err();
    assert_eq!(err, ActionError::IllegalAction(IllegalAction::CallBeforeRaise));
    assert_eq!(err.to_string(), "CALL action cannot be performed before RAISE");
}

#[test]
fn check_after_bet_is_illegal() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Raise { amount: 10 }).unwrap();
    let err = table.perform_action(Action::Check).unwrap_err();
    assert_eq!(err, ActionError::IllegalAction(IllegalAction::CheckAfterBet));
    assert_eq!(
        err.to_string(),
        "Cannot perform CHECK when previous players have not performed CHECK"
    );
}

#[test]
fn call_beyond_cash_is_rejected() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Raise { amount: 20 }).unwrap();
    table.player_mut("player2").unwrap().deduct_cash(90);

    assert_eq!(
        table.perform_action(Action::Call).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(table.player("player2").unwrap().cash(), 10);
    assert_eq!(table.ledger().entry("player2"), 0);
    assert_eq!(table.ledger().highest_bet(), 20);
    assert_eq!(table.current_player().unwrap().id(), "player2");
    assert_eq!(table.state(), TableState::PreFlop);

    table.perform_action(Action::Fold).unwrap();
    assert_eq!(table.current_player().unwrap().id(), "player3");
}

#[test]
fn call_matches_highest_bet() {
    let mut table = started(&["player1", "player2", "player3"]);

    table.perform_action(Action::Raise { amount: 20 }).unwrap();
    table.perform_action(Action::Raise { amount: 30 }).unwrap();
    table.perform_action(Action::Call).unwrap();

    assert_eq!(table.players()[0].cash(), 80);
    assert_eq!(table.players()[1].cash(), 70);
    assert_eq!(table.players()[2].cash(), 70);
    assert_eq!(table.state(), TableState::PreFlop);

    table.perform_action(Action::Call).unwrap();

    for player in table.players() {
        assert_eq!(player.cash(), 70);
    }
    assert_eq!(table.state(), TableState::Flop);
    assert_eq!(table.pot(), 90);
    assert!(table.bets().values().all(|&bet| bet == 0));
    assert!(!table.ledger().is_raise_open());
    assert_eq!(total_chips(&table), 300);
}

#[test]
fn act_checks_the_turn() {
    let mut table = started(&["player1", "player2"]);

    assert_eq!(
        table.act("player2", Action::Check).unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_eq!(
        table.act("nobody", Action::Check).unwrap_err(),
        ActionError::PlayerNotFound
    );
    table.act("player1", Action::Check).unwrap();
    assert_eq!(table.current_player().unwrap().id(), "player2");
}

#[test]
fn showdown_pays_the_best_hand() {
    let mut table = table_with(&["player1", "player2"]);
    set_deck_from_draws(
        &mut table,
        &[
            card(Rank::Ace, Suit::Spades),    // player1
            card(Rank::Ace, Suit::Hearts),    // player1
            card(Rank::Two, Suit::Clubs),     // player2
            card(Rank::Seven, Suit::Diamonds), // player2
            card(Rank::King, Suit::Spades),   // flop
            card(Rank::King, Suit::Diamonds), // flop
            card(Rank::Nine, Suit::Hearts),   // flop
            card(Rank::Four, Suit::Clubs),    // turn
            card(Rank::Three, Suit::Spades),  // river
        ],
    );
    table.start().unwrap();

    table.perform_action(Action::Raise { amount: 10 }).unwrap();
    table.perform_action(Action::Call).unwrap();
    assert_eq!(table.state(), TableState::Flop);

    while table.state() != TableState::Ended {
        table.perform_action(Action::Check).unwrap();
        assert_eq!(total_chips(&table), 200);
    }

    assert_eq!(table.community_cards().len(), 5);
    assert_eq!(table.pot(), 20);
    assert_eq!(table.winner().unwrap().id(), "player1");
    assert_eq!(table.players()[0].cash(), 110);
    assert_eq!(table.players()[1].cash(), 90);

    let hand = table.winning_hand();
    assert_eq!(hand.len(), 5);
    assert!(hand.contains(&card(Rank::Ace, Suit::Spades)));
    assert!(hand.contains(&card(Rank::Ace, Suit::Hearts)));

    let result = table.result().unwrap();
    assert!(!result.uncontested);
    assert!(!result.is_split());
    assert_eq!(result.payouts[0].category, Some(HandCategory::TwoPair));
}

#[test]
fn tied_showdown_splits_the_pot() {
    let mut table = table_with(&["player1", "player2", "player3"]);
    set_deck_from_draws(
        &mut table,
        &[
            card(Rank::Two, Suit::Clubs),     // player1
            card(Rank::Three, Suit::Diamonds), // player1
            card(Rank::Four, Suit::Hearts),   // player2
            card(Rank::Five, Suit::Spades),   // player2
            card(Rank::Six, Suit::Clubs),     // player3
            card(Rank::Eight, Suit::Diamonds), // player3
            card(Rank::Ten, Suit::Spades),    // flop
            card(Rank::Jack, Suit::Diamonds), // flop
            card(Rank::Queen, Suit::Hearts),  // flop
            card(Rank::King, Suit::Clubs),    // turn
            card(Rank::Ace, Suit::Clubs),     // river
        ],
    );
    table.start().unwrap();

    table.perform_action(Action::Raise { amount: 5 }).unwrap();
    table.perform_action(Action::Raise { amount: 6 }).unwrap();
    table.perform_action(Action::Raise { amount: 7 }).unwrap();
    table.perform_action(Action::Call).unwrap();
    table.perform_action(Action::Call).unwrap();
    assert_eq!(table.state(), TableState::Flop);
    assert_eq!(table.pot(), 21);

    table.perform_action(Action::Check).unwrap();
    table.perform_action(Action::Check).unwrap();
    table.perform_action(Action::Fold).unwrap();
    assert_eq!(table.state(), TableState::Turn);

    while table.state() != TableState::Ended {
        table.perform_action(Action::Check).unwrap();
    }

    let result = table.result().unwrap();
    assert!(result.is_split());
    assert_eq!(result.pot, 21);
    assert_eq!(result.payouts[0].player_id, "player1");
    assert_eq!(result.payouts[0].amount, 11);
    assert_eq!(result.payouts[1].player_id, "player2");
    assert_eq!(result.payouts[1].amount, 10);
    assert_eq!(result.payouts[0].category, Some(HandCategory::Straight));

    assert_eq!(table.players()[0].cash(), 104);
    assert_eq!(table.players()[1].cash(), 103);
    assert_eq!(table.players()[2].cash(), 93);
    assert_eq!(total_chips(&table), 300);
}

#[test]
fn reset_hand_starts_fresh() {
    let mut table = started(&["player1", "player2"]);
    assert_eq!(table.reset_hand().unwrap_err(), ResetError::InvalidState);

    table.perform_action(Action::Raise { amount: 10 }).unwrap();
    table.perform_action(Action::Raise { amount: 20 }).unwrap();
    table.perform_action(Action::Fold).unwrap();
    table.reset_hand().unwrap();

    assert_eq!(table.state(), TableState::Open);
    assert_eq!(table.pot(), 0);
    assert!(table.result().is_none());
    assert!(table.current_player().is_none());
    assert!(table.player_cards("player1").is_empty());
    assert_eq!(table.cards_remaining(), holdem::DECK_SIZE);
    assert_eq!(table.players()[0].cash(), 90);
    assert_eq!(table.players()[1].cash(), 110);

    table.add_player("player3", "Kane").unwrap();
    table.start().unwrap();
    for player in table.players() {
        assert_eq!(player.cards().len(), 2);
    }
}

#[test]
fn single_deck_table_runs_out_of_cards() {
    let mut table = Table::new(TableOptions::default().with_fresh_deck_per_hand(false), 3);
    table.add_player("player1", "Messi").unwrap();
    table.add_player("player2", "Ronaldo").unwrap();
    set_deck_from_draws(&mut table, &[card(Rank::Two, Suit::Clubs); 12]);

    table.start().unwrap();
    table.perform_action(Action::Fold).unwrap();
    table.reset_hand().unwrap();

    assert_eq!(
        table.start().unwrap_err(),
        StartError::Deck(DrawError::InsufficientCards {
            requested: 9,
            remaining: 8
        })
    );
}

#[test]
fn session_serializes_requests() {
    let session = Session::new(TableOptions::default(), 11);
    session.join("player1", "Messi").unwrap();
    session.join("player2", "Ronaldo").unwrap();
    session.start().unwrap();

    assert_eq!(
        session.submit("player2", Action::Check).unwrap_err(),
        ActionError::NotYourTurn
    );
    session.submit("player1", Action::Raise { amount: 15 }).unwrap();

    let view = session.view(Some("player2"));
    assert_eq!(view.state, TableState::PreFlop);
    assert_eq!(view.current_player.unwrap().id, "player2");
    assert_eq!(view.player_cards.len(), 2);
    assert_eq!(view.players.len(), 2);
    assert_eq!(view.bets[0].amount, 15);
    assert_eq!(view.bets[1].amount, 0);
    assert_eq!(view.pot, 0);

    assert!(session.view(None).player_cards.is_empty());

    session.submit("player2", Action::Call).unwrap();
    let pot = session.with(|table| table.pot());
    assert_eq!(pot, 30);

    let table = session.into_table();
    assert_eq!(table.state(), TableState::Flop);
}

#[test]
fn session_is_shareable_across_threads() {
    use std::sync::Arc;

    let session = Arc::new(Session::new(TableOptions::default(), 5));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = Arc::clone(&session);
            std::thread::spawn(move || session.join(format!("player{i}"), "Guest"))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(session.view(None).players.len(), 4);
}
