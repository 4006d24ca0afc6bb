use crate::token::TokenKind;
use std::fmt;

/// A player's action in the betting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bet {
    /// Claim to safely reveal this many tokens.
    Value(u32),
    /// Decline to bet this round.
    Skip,
}

impl Bet {
    pub fn skip() -> Self {
        Bet::Skip
    }

    pub fn value(self) -> Option<u32> {
        match self {
            Bet::Value(v) => Some(v),
            Bet::Skip => None,
        }
    }

    pub fn is_skip(self) -> bool {
        matches!(self, Bet::Skip)
    }
}

/// A move submitted to [`GameState::apply`](crate::game::GameState::apply).
///
/// Moves carry only the data needed to apply them and compare structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move<P> {
    /// Place one token of this kind from hand onto the stack.
    Place(TokenKind),
    Bet(Bet),
    /// Expose the top unrevealed token of this player's stack.
    Reveal(P),
    /// Permanently remove this slot of the bidder's hand after a penalty.
    Discard(usize),
}

impl<P> Move<P> {
    pub fn bet(value: u32) -> Self {
        Move::Bet(Bet::Value(value))
    }

    pub fn skip() -> Self {
        Move::Bet(Bet::Skip)
    }

    pub fn is_place(&self) -> bool {
        matches!(self, Move::Place(_))
    }

    pub fn is_bet(&self) -> bool {
        matches!(self, Move::Bet(_))
    }

    pub fn is_reveal(&self) -> bool {
        matches!(self, Move::Reveal(_))
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Move::Discard(_))
    }
}

impl<P: fmt::Debug> fmt::Display for Move<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(kind) => write!(f, "place {kind}"),
            Move::Bet(Bet::Value(v)) => write!(f, "bet {v}"),
            Move::Bet(Bet::Skip) => f.write_str("skip"),
            Move::Reveal(p) => write!(f, "reveal {p:?}"),
            Move::Discard(slot) => write!(f, "discard slot {slot}"),
        }
    }
}
