// Minimal game engine API boundary. Lobbies, UIs and bots drive a game
// through these four operations only, so they never depend on how phases or
// player records are represented. Implemented for the core `GameState` type.

use crate::game::{GameError, GameState};
use crate::moves::Move;
use crate::outcome::GameResult;
use std::fmt;

pub trait GameEngine<P> {
    // Queries
    fn current_player(&self) -> Option<&P>;
    fn available_moves(&self) -> Vec<Move<P>>;
    fn result(&self) -> Option<&GameResult<P>>;

    // Transition
    fn play(&self, mv: &Move<P>) -> Result<Self, GameError>
    where
        Self: Sized;

    fn is_over(&self) -> bool {
        self.result().is_some()
    }
}

impl<P: Clone + Eq + fmt::Debug> GameEngine<P> for GameState<P> {
    fn current_player(&self) -> Option<&P> {
        self.current_player()
    }
    fn available_moves(&self) -> Vec<Move<P>> {
        self.available_moves()
    }
    fn result(&self) -> Option<&GameResult<P>> {
        self.result()
    }

    fn play(&self, mv: &Move<P>) -> Result<Self, GameError> {
        self.apply(mv)
    }
}

/// Replay recorded moves from `start`, keeping every snapshot.
///
/// The returned vector begins with `start` and holds one more state per move.
/// Stops at the first illegal move.
pub fn replay<P, E>(start: E, moves: &[Move<P>]) -> Result<Vec<E>, GameError>
where
    E: GameEngine<P>,
{
    let mut states = Vec::with_capacity(moves.len() + 1);
    states.push(start);
    for mv in moves {
        let next = match states.last() {
            Some(state) => state.play(mv)?,
            None => break,
        };
        states.push(next);
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind::Plain;

    #[test]
    fn replay_keeps_every_snapshot() {
        let start = GameState::initial([1u8, 2]).unwrap();
        let moves = [Move::Place(Plain), Move::Place(Plain), Move::bet(1)];
        let states = replay(start.clone(), &moves).unwrap();
        assert_eq!(states.len(), 4);
        assert_eq!(states[0], start);
        assert_eq!(GameEngine::current_player(&states[3]), Some(&2));
    }

    #[test]
    fn replay_stops_on_illegal_move() {
        let start = GameState::initial([1u8, 2]).unwrap();
        let err = replay(start, &[Move::Place(Plain), Move::bet(1)]).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove(_)));
    }
}
