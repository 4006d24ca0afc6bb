//! The ordered collection of still-active players.
//!
//! Order is turn order and wraps cyclically. Eliminated players are removed,
//! which shifts every later position, so callers address players by identity
//! and resolve to a position only for the operation at hand.
//!
//! Every mutating operation returns a new collection. The backing
//! `im::Vector` shares structure with the receiver, so older snapshots stay
//! valid and cheap to keep.

use crate::game::GameError;
use crate::moves::Bet;
use crate::player::{PlayerEnvironment, PlayerError};
use crate::rules::Rules;
use crate::token::TokenKind;
use im::Vector;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEnvironments<P: Clone> {
    environments: Vector<PlayerEnvironment<P>>,
}

impl<P: Clone + PartialEq + fmt::Debug> PlayerEnvironments<P> {
    pub fn initial(players: &[P], rules: &Rules) -> Self {
        let environments = players
            .iter()
            .map(|p| PlayerEnvironment::new(p.clone(), rules.starting_hand()))
            .collect();
        Self { environments }
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerEnvironment<P>> {
        self.environments.iter()
    }

    /// Returns the active players in turn order
    pub fn player_ids(&self) -> impl Iterator<Item = &P> {
        self.environments.iter().map(|e| &e.player)
    }

    pub fn get(&self, index: usize) -> Option<&PlayerEnvironment<P>> {
        self.environments.get(index)
    }

    pub fn position(&self, player: &P) -> Result<usize, GameError> {
        self.environments
            .iter()
            .position(|e| e.player == *player)
            .ok_or_else(|| GameError::UnknownPlayer(format!("{player:?}")))
    }

    pub fn for_player(&self, player: &P) -> Result<&PlayerEnvironment<P>, GameError> {
        let idx = self.position(player)?;
        Ok(&self.environments[idx])
    }

    /// The last player standing, once everyone else has been eliminated.
    pub fn sole_survivor(&self) -> Option<&P> {
        match self.environments.len() {
            1 => self.environments.front().map(|e| &e.player),
            _ => None,
        }
    }

    /// Total number of tokens on the table.
    pub fn max_possible_bet(&self) -> u32 {
        self.environments.iter().map(|e| e.stack.len() as u32).sum()
    }

    /// Highest committed bet this round, ignoring skips.
    pub fn current_max_bet(&self) -> Option<u32> {
        self.environments.iter().filter_map(|e| e.bet.and_then(Bet::value)).max()
    }

    pub fn betting_complete(&self) -> bool {
        self.environments.iter().all(|e| e.bet.is_some())
    }

    /// Number of players who have not acted in this betting round.
    pub fn still_to_bet(&self) -> usize {
        self.environments.iter().filter(|e| e.bet.is_none()).count()
    }

    pub fn next_index(&self, index: usize) -> usize {
        let n = self.environments.len();
        if n == 0 {
            return index;
        }
        (index + 1) % n
    }

    /// The player seated after `player` in turn order.
    pub fn next_player(&self, player: &P) -> Result<P, GameError> {
        let idx = self.next_index(self.position(player)?);
        Ok(self.environments[idx].player.clone())
    }

    /// The first player after `player`, wrapping, who has not acted this betting round.
    pub fn next_to_bet(&self, player: &P) -> Result<Option<P>, GameError> {
        let start = self.position(player)?;
        let n = self.environments.len();
        Ok((1..=n)
            .map(|i| &self.environments[(start + i) % n])
            .find(|e| e.bet.is_none())
            .map(|e| e.player.clone()))
    }

    /// The player holding the highest committed bet, with its value.
    pub fn highest_bidder(&self) -> Option<(P, u32)> {
        self.environments
            .iter()
            .filter_map(|e| e.bet.and_then(Bet::value).map(|v| (v, e)))
            .max_by_key(|(v, _)| *v)
            .map(|(v, e)| (e.player.clone(), v))
    }

    /// Players whose stacks the bidder must reveal from, in order.
    ///
    /// The bidder's own stack comes first. Then every other player with
    /// face-down tokens, starting from the bidder's successor and wrapping;
    /// players who skipped the betting round are queued behind those who did not.
    pub fn reveal_candidates(&self, bidder: &P) -> Result<Vec<P>, GameError> {
        let start = self.position(bidder)?;
        let n = self.environments.len();
        let mut queue = Vec::new();
        if self.environments[start].can_reveal() {
            queue.push(bidder.clone());
        }
        let (open, skipped): (Vec<_>, Vec<_>) = (1..n)
            .map(|i| &self.environments[(start + i) % n])
            .filter(|e| e.can_reveal())
            .partition(|e| !e.has_skipped());
        queue.extend(open.into_iter().chain(skipped).map(|e| e.player.clone()));
        Ok(queue)
    }

    pub fn place(&self, player: &P, kind: TokenKind) -> Result<Self, GameError> {
        self.update(player, |e| e.place(kind)).map(|(clone, ())| clone)
    }

    pub fn bet(&self, player: &P, bet: Bet) -> Result<Self, GameError> {
        self.update(player, |e| e.set_bet(bet)).map(|(clone, ())| clone)
    }

    /// Expose the top unrevealed token of `player`'s stack.
    pub fn reveal(&self, player: &P) -> Result<(Self, TokenKind), GameError> {
        self.update(player, PlayerEnvironment::reveal)
    }

    pub fn mark_winning(&self, player: &P) -> Result<Self, GameError> {
        self.update(player, |e| {
            e.mark_winning();
            Ok(())
        })
        .map(|(clone, ())| clone)
    }

    /// Recycle every stack, then remove `slot` from `player`'s hand.
    ///
    /// A player left without tokens is dropped from the collection; the
    /// returned flag reports whether that happened.
    pub fn discard(&self, player: &P, slot: usize) -> Result<(Self, bool), GameError> {
        let idx = self.position(player)?;
        let mut environments = self.environments.clone();
        for e in environments.iter_mut() {
            e.pick_up_stack();
        }
        environments[idx].discard(slot)?;
        let eliminated = environments[idx].hand.is_empty();
        if eliminated {
            environments.remove(idx);
        }
        Ok((Self { environments }, eliminated))
    }

    /// Recycle every stack into its owner's hand and clear all bets.
    pub fn new_round(&self) -> Self {
        let mut environments = self.environments.clone();
        for e in environments.iter_mut() {
            e.pick_up_stack();
            e.clear_bet();
        }
        Self { environments }
    }

    fn update<T>(
        &self,
        player: &P,
        f: impl FnOnce(&mut PlayerEnvironment<P>) -> Result<T, PlayerError>,
    ) -> Result<(Self, T), GameError> {
        let idx = self.position(player)?;
        let mut environments = self.environments.clone();
        let out = f(&mut environments[idx])?;
        Ok((Self { environments }, out))
    }
}
