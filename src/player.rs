use crate::moves::Bet;
use crate::token::TokenKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("no {0} token left in hand")]
    TokenNotInHand(TokenKind),
    #[error("player has already bet this round")]
    AlreadyBet,
    #[error("stack has no unrevealed tokens")]
    NothingToReveal,
    #[error("hand slot out of range: len {len}, got {slot}")]
    SlotOutOfRange { slot: usize, len: usize },
}

/// One player's tokens, bet and standing for the current round.
///
/// The stack is stored oldest first; reveals expose it from the top (the end)
/// down, and `revealed` counts how many tokens from the top are face-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEnvironment<P> {
    pub(crate) player: P,
    pub(crate) hand: Vec<TokenKind>,
    pub(crate) stack: Vec<TokenKind>,
    pub(crate) revealed: usize,
    pub(crate) bet: Option<Bet>,
    pub(crate) winning: bool,
}

impl<P> PlayerEnvironment<P> {
    pub fn new(player: P, hand: Vec<TokenKind>) -> Self {
        Self { player, hand, stack: Vec::new(), revealed: 0, bet: None, winning: false }
    }

    /// Returns the player's identity
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Returns the unplaced tokens
    pub fn hand(&self) -> &[TokenKind] {
        &self.hand
    }

    /// Returns the placed tokens, oldest first
    pub fn stack(&self) -> &[TokenKind] {
        &self.stack
    }

    /// Returns how many tokens from the top of the stack are face-up
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Returns the face-up tokens, most recently placed first
    pub fn revealed_tokens(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.stack.iter().rev().take(self.revealed).copied()
    }

    /// Returns the bet recorded this round, if the player has acted
    pub fn bet(&self) -> Option<Bet> {
        self.bet
    }

    pub fn has_skipped(&self) -> bool {
        matches!(self.bet, Some(Bet::Skip))
    }

    pub fn is_winning(&self) -> bool {
        self.winning
    }

    /// Tokens the player still owns, placed or not.
    pub fn token_count(&self) -> usize {
        self.hand.len() + self.stack.len()
    }

    pub fn has_kind_in_hand(&self, kind: TokenKind) -> bool {
        self.hand.contains(&kind)
    }

    pub fn can_reveal(&self) -> bool {
        self.revealed < self.stack.len()
    }

    pub fn place(&mut self, kind: TokenKind) -> Result<(), PlayerError> {
        let pos = self
            .hand
            .iter()
            .position(|&t| t == kind)
            .ok_or(PlayerError::TokenNotInHand(kind))?;
        let token = self.hand.remove(pos);
        self.stack.push(token);
        Ok(())
    }

    pub fn set_bet(&mut self, bet: Bet) -> Result<(), PlayerError> {
        if self.bet.is_some() {
            return Err(PlayerError::AlreadyBet);
        }
        self.bet = Some(bet);
        Ok(())
    }

    pub(crate) fn clear_bet(&mut self) {
        self.bet = None;
    }

    /// Expose the top unrevealed token and return it.
    pub fn reveal(&mut self) -> Result<TokenKind, PlayerError> {
        if !self.can_reveal() {
            return Err(PlayerError::NothingToReveal);
        }
        let token = self.stack[self.stack.len() - 1 - self.revealed];
        self.revealed += 1;
        Ok(token)
    }

    /// Permanently remove the token at `slot` of the hand.
    pub fn discard(&mut self, slot: usize) -> Result<TokenKind, PlayerError> {
        if slot >= self.hand.len() {
            return Err(PlayerError::SlotOutOfRange { slot, len: self.hand.len() });
        }
        Ok(self.hand.remove(slot))
    }

    /// Return every stack token to the hand and turn them face-down.
    pub fn pick_up_stack(&mut self) {
        self.hand.append(&mut self.stack);
        self.revealed = 0;
    }

    pub(crate) fn mark_winning(&mut self) {
        self.winning = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::{Penalty, Plain};

    fn env() -> PlayerEnvironment<u8> {
        PlayerEnvironment::new(1, vec![Plain, Plain, Penalty])
    }

    #[test]
    fn place_moves_one_matching_token() {
        let mut e = env();
        e.place(Penalty).unwrap();
        assert_eq!(e.hand(), &[Plain, Plain]);
        assert_eq!(e.stack(), &[Penalty]);
        assert_eq!(e.place(Penalty), Err(PlayerError::TokenNotInHand(Penalty)));
        assert_eq!(e.token_count(), 3);
    }

    #[test]
    fn reveal_goes_top_down() {
        let mut e = env();
        e.place(Penalty).unwrap();
        e.place(Plain).unwrap();
        assert_eq!(e.reveal(), Ok(Plain));
        assert_eq!(e.reveal(), Ok(Penalty));
        assert_eq!(e.reveal(), Err(PlayerError::NothingToReveal));
        assert_eq!(e.revealed_tokens().collect::<Vec<_>>(), vec![Plain, Penalty]);
        assert!(!e.can_reveal());
    }

    #[test]
    fn bet_is_recorded_once() {
        let mut e = env();
        e.set_bet(Bet::Skip).unwrap();
        assert!(e.has_skipped());
        assert_eq!(e.set_bet(Bet::Value(2)), Err(PlayerError::AlreadyBet));
        e.clear_bet();
        assert_eq!(e.bet(), None);
    }

    #[test]
    fn discard_checks_slot() {
        let mut e = env();
        assert_eq!(e.discard(3), Err(PlayerError::SlotOutOfRange { slot: 3, len: 3 }));
        assert_eq!(e.discard(2), Ok(Penalty));
        assert_eq!(e.token_count(), 2);
    }

    #[test]
    fn pick_up_restores_hand_and_cursor() {
        let mut e = env();
        e.place(Plain).unwrap();
        e.reveal().unwrap();
        e.pick_up_stack();
        assert_eq!(e.hand(), &[Plain, Penalty, Plain]);
        assert!(e.stack().is_empty());
        assert_eq!(e.revealed_count(), 0);

        e.pick_up_stack();
        assert_eq!(e.hand().len(), 3);
    }
}
