//! skull-rs: rules engine for Skull-style bluffing games
//!
//! Goals:
//! - Any number of players (two or more) and any player identity type
//! - Immutable snapshots: every move returns a new state, old ones stay valid
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! A round runs placing → betting → revealing, then either a new round starts
//! or the game ends. Consumers only need four operations: build an initial
//! state, read the current player and legal moves, apply a move, and read the
//! result once the game is over.
//!
//! ## Quick start
//! ```
//! use skull_rs::game::GameState;
//! use skull_rs::moves::Move;
//! use skull_rs::token::TokenKind;
//!
//! let mut state = GameState::initial([1, 2]).unwrap();
//! for mv in [
//!     Move::Place(TokenKind::Plain),
//!     Move::Place(TokenKind::Plain),
//!     Move::bet(2),
//!     Move::Reveal(1),
//!     Move::Reveal(2),
//! ] {
//!     state = state.apply(&mv).unwrap();
//! }
//!
//! assert!(state.result().unwrap().is_winning_player(&1));
//! ```

pub mod engine;
pub mod game;
pub mod moves;
pub mod outcome;
pub mod player;
pub mod players;
pub mod rules;
pub mod token;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
