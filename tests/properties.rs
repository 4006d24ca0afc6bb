use proptest::prelude::*;
use skull_rs::game::{GameError, GameState, Phase, RevealStep};
use skull_rs::moves::{Bet, Move};
use skull_rs::rules::{Rules, Victory};
use skull_rs::token::TokenKind;

fn any_victory() -> impl Strategy<Value = Victory> {
    prop_oneof![Just(Victory::MaximumBet), Just(Victory::TwoSuccessfulBets)]
}

fn any_rules() -> impl Strategy<Value = Rules> {
    (0usize..=3, 0usize..=2, any_victory()).prop_filter_map("players need a token", |(plain, penalty, v)| {
        (plain + penalty > 0).then(|| {
            Rules::default().with_plain_tokens(plain).with_penalty_tokens(penalty).with_victory(v)
        })
    })
}

/// Every move shape that could be submitted at a table of `players` seats.
fn candidate_moves(players: u8) -> Vec<Move<u8>> {
    let mut moves: Vec<Move<u8>> = TokenKind::ALL.into_iter().map(Move::Place).collect();
    moves.extend((0..=12).map(Move::bet));
    moves.push(Move::skip());
    moves.extend((0..=players).map(Move::Reveal));
    moves.extend((0..8).map(Move::Discard));
    moves
}

proptest! {
    #[test]
    fn initial_state_offers_only_placements(n in 2u8..=8, rules in any_rules()) {
        let state = GameState::with_rules(0..n, rules).unwrap();
        let moves = state.available_moves();
        prop_assert!(!moves.is_empty());
        prop_assert!(moves.iter().all(Move::is_place));
    }

    #[test]
    fn random_playouts_keep_their_invariants(
        n in 2u8..=5,
        rules in any_rules(),
        choices in prop::collection::vec(any::<u16>(), 1..400),
    ) {
        let mut state = GameState::with_rules(0..n, rules).unwrap();
        let mut discards = vec![0usize; n as usize];
        let total = rules.tokens_per_player();

        for choice in choices {
            if state.is_terminal() {
                prop_assert!(state.available_moves().is_empty());
                break;
            }
            let moves = state.available_moves();
            prop_assert!(!moves.is_empty(), "stuck in {}", state.phase().label());
            if matches!(state.phase(), Phase::Revealing { step: RevealStep::Acting, .. }) {
                prop_assert_eq!(moves.len(), 1);
            }

            let mv = moves[choice as usize % moves.len()].clone();
            let mover = *state.current_player().unwrap();
            if let Move::Bet(Bet::Value(v)) = mv {
                prop_assert!(Some(v) > state.players().current_max_bet());
            }

            let snapshot = state.clone();
            let next = state.apply(&mv).unwrap();
            prop_assert_eq!(&state, &snapshot);
            prop_assert_eq!(&next, &state.apply(&mv).unwrap());

            if mv.is_discard() {
                discards[mover as usize] += 1;
            }
            state = next;

            prop_assert_eq!(state.result().is_some(), matches!(state.phase(), Phase::Terminal(_)));
            if !state.is_terminal() {
                for env in state.players().iter() {
                    prop_assert_eq!(env.token_count() + discards[*env.player() as usize], total);
                }
            }
        }
    }

    #[test]
    fn moves_outside_the_legal_set_are_rejected(
        n in 2u8..=4,
        choices in prop::collection::vec(any::<u16>(), 0..60),
    ) {
        let mut state = GameState::initial(0..n).unwrap();
        for choice in choices {
            let moves = state.available_moves();
            if moves.is_empty() {
                break;
            }
            state = state.apply(&moves[choice as usize % moves.len()]).unwrap();
        }

        let legal = state.available_moves();
        for mv in candidate_moves(n) {
            if legal.contains(&mv) {
                continue;
            }
            let before = state.clone();
            let err = state.apply(&mv).unwrap_err();
            prop_assert!(matches!(err, GameError::IllegalMove(_)));
            prop_assert_eq!(&state, &before);
        }
    }
}
