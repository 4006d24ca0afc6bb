use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skull_rs::engine::GameEngine;
use skull_rs::game::GameState;
use skull_rs::rules::{Rules, Victory};

const MAX_MOVES: usize = 5_000;

/// Plays random legal moves until the game ends or `MAX_MOVES` is reached.
fn play_out<E: GameEngine<u8>>(mut state: E, seed: u64) -> E {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..MAX_MOVES {
        if state.is_over() {
            break;
        }
        let moves = state.available_moves();
        let mv = moves.choose(&mut rng).expect("a running game always has a legal move");
        state = state.play(mv).unwrap();
    }
    state
}

#[test]
fn random_games_finish_with_a_seated_winner() {
    for players in 2u8..=5 {
        let mut finished = 0;
        for seed in 0..40 {
            let start = GameState::initial(0..players).unwrap();
            let end = play_out(start, seed);
            if let Some(result) = end.result() {
                let winner = *result.winner().expect("someone wins");
                assert!(winner < players);
                assert!(result.is_winning_player(&winner));
                assert_eq!(end.current_player(), None);
                finished += 1;
            }
        }
        assert!(finished > 0, "no {players}-player game finished");
    }
}

#[test]
fn same_seed_same_game() {
    let rules = Rules::default().with_victory(Victory::TwoSuccessfulBets);
    let a = play_out(GameState::with_rules(0..4u8, rules).unwrap(), 7);
    let b = play_out(GameState::with_rules(0..4u8, rules).unwrap(), 7);
    assert_eq!(a, b);
}
