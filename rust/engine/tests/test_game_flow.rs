use hupl_engine::errors::GameError;
use hupl_engine::game::{Game, GameConfig};
use hupl_engine::player::{ActionKind, Player};
use hupl_engine::round::Street;
use hupl_engine::rules::LegalActions;

fn passive(_: &Player, legal: &LegalActions, _: Street) -> (ActionKind, u32) {
    if legal.check {
        (ActionKind::Check, 0)
    } else {
        (ActionKind::Call, 0)
    }
}

#[test]
fn dealer_button_rotates_every_hand() {
    let mut game = Game::new(GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    });
    assert_eq!(game.dealer_position(), 0);
    game.play_hand(&mut passive).unwrap();
    assert_eq!(game.dealer_position(), 1);
    game.play_hand(&mut passive).unwrap();
    assert_eq!(game.dealer_position(), 0);
    assert_eq!(game.hand_number(), 2);
}

#[test]
fn chips_are_conserved_across_hands() {
    let mut game = Game::new(GameConfig {
        seed: Some(7),
        ..GameConfig::default()
    });
    for _ in 0..10 {
        if game.is_game_over() {
            break;
        }
        game.play_hand(&mut passive).unwrap();
        let total: u32 = game.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 2000);
    }
}

#[test]
fn hand_history_records_every_hand() {
    let mut game = Game::new(GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    });
    game.play_hand(&mut passive).unwrap();
    game.play_hand(&mut passive).unwrap();

    let history = game.hand_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].hand_number, 1);
    assert_eq!(history[0].dealer, "Player 1");
    assert_eq!(history[1].dealer, "Player 2", "the button moved");
    assert!(!history[0].winners.is_empty());
    assert_eq!(history[0].seed, Some(42));
    // the record opens with both forced blinds
    assert_eq!(history[0].actions[0].action, ActionKind::SmallBlind);
    assert_eq!(history[0].actions[1].action, ActionKind::BigBlind);
}

#[test]
fn busting_ends_the_game() {
    // 20-chip stacks at 10/20: every hand is all-in by the blinds alone,
    // so the match ends as soon as a hand is not a split
    let mut game = Game::new(GameConfig {
        starting_stack: 20,
        seed: Some(3),
        ..GameConfig::default()
    });
    let mut hands = 0;
    while !game.is_game_over() {
        game.play_hand(&mut passive).unwrap();
        hands += 1;
        assert!(hands < 100, "some hand must eventually bust a player");
    }

    let winner = game.winner().expect("someone holds all the chips");
    assert_eq!(winner.stack(), 40);
    let err = match game.start_new_hand() {
        Err(e) => e,
        Ok(_) => panic!("starting a hand after a bust must fail"),
    };
    assert_eq!(err, GameError::GameOver);
}

#[test]
fn winner_is_none_while_the_game_runs() {
    let game = Game::new(GameConfig::default());
    assert!(!game.is_game_over());
    assert!(game.winner().is_none());
}

#[test]
fn state_snapshot_reflects_the_match() {
    let mut game = Game::new(GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    });
    game.play_hand(&mut passive).unwrap();
    let state = game.state();
    assert_eq!(state.hand_number, 1);
    assert_eq!(state.dealer_position, 1);
    assert_eq!(state.small_blind, 10);
    assert_eq!(state.big_blind, 20);
    assert!(!state.game_over);
    assert_eq!(state.players.len(), 2);
    assert_eq!(
        state.players[0].stack + state.players[1].stack,
        2000,
        "pots are settled between hands"
    );
}

#[test]
fn reset_restores_the_starting_state() {
    let mut game = Game::new(GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    });
    game.play_hand(&mut passive).unwrap();
    game.reset();
    assert_eq!(game.hand_number(), 0);
    assert_eq!(game.dealer_position(), 0);
    assert!(game.hand_history().is_empty());
    for p in game.players() {
        assert_eq!(p.stack(), 1000);
    }
}
