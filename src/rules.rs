//! Game configuration: starting tokens and the victory condition.

use crate::game::GameError;
use crate::token::TokenKind;

/// How a game is won, apart from being the last player standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Victory {
    /// Fulfilling a bet equal to every token on the table ends the game.
    #[default]
    MaximumBet,
    /// A first fulfilled bet marks the bidder as winning; a second one ends the game.
    TwoSuccessfulBets,
}

/// Rules a game is played under.
///
/// ```
/// use skull_rs::rules::{Rules, Victory};
///
/// let rules = Rules::default().with_plain_tokens(2).with_victory(Victory::TwoSuccessfulBets);
/// assert_eq!(rules.starting_hand().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Rules {
    pub plain_tokens: usize,
    pub penalty_tokens: usize,
    pub victory: Victory,
}

impl Default for Rules {
    fn default() -> Self {
        Self { plain_tokens: 3, penalty_tokens: 1, victory: Victory::MaximumBet }
    }
}

impl Rules {
    pub fn with_plain_tokens(mut self, count: usize) -> Self {
        self.plain_tokens = count;
        self
    }

    pub fn with_penalty_tokens(mut self, count: usize) -> Self {
        self.penalty_tokens = count;
        self
    }

    pub fn with_victory(mut self, victory: Victory) -> Self {
        self.victory = victory;
        self
    }

    /// Tokens each player starts with.
    pub fn tokens_per_player(&self) -> usize {
        self.plain_tokens + self.penalty_tokens
    }

    /// Starting hand: plain tokens first, then penalty tokens.
    pub fn starting_hand(&self) -> Vec<TokenKind> {
        let mut hand = vec![TokenKind::Plain; self.plain_tokens];
        hand.extend(std::iter::repeat(TokenKind::Penalty).take(self.penalty_tokens));
        hand
    }

    pub(crate) fn validate(&self) -> Result<(), GameError> {
        if self.tokens_per_player() == 0 {
            return Err(GameError::InvalidConfiguration(
                "players must start with at least one token".into(),
            ));
        }
        Ok(())
    }
}
