use crate::moves::{Bet, Move};
use crate::outcome::GameResult;
use crate::player::PlayerError;
use crate::players::PlayerEnvironments;
use crate::rules::{Rules, Victory};
use crate::token::TokenKind;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error(transparent)]
    Player(#[from] PlayerError),
}

/// What the bidder has to do next while revealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Reveal the next token in the fixed target order.
    Acting,
    /// A penalty token was exposed; the bidder must discard one token.
    MustDiscard,
}

/// Where a game currently stands.
///
/// Each variant carries exactly the data its moves need, keyed by player
/// identity rather than seat position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<P> {
    /// Every player places one token, starting from `starter`.
    Placing { starter: P, current: P },
    Betting { current: P },
    /// `bidder` is trying to reveal `bet` plain tokens; `safe` have been shown so far.
    Revealing { bidder: P, bet: u32, safe: u32, step: RevealStep },
    Terminal(GameResult<P>),
}

impl<P> Phase<P> {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Placing { .. } => "placing",
            Phase::Betting { .. } => "betting",
            Phase::Revealing { step: RevealStep::Acting, .. } => "revealing",
            Phase::Revealing { step: RevealStep::MustDiscard, .. } => "discarding",
            Phase::Terminal(_) => "terminal",
        }
    }

    /// Returns the player due to act, if the game is still running
    pub fn current(&self) -> Option<&P> {
        match self {
            Phase::Placing { current, .. } | Phase::Betting { current } => Some(current),
            Phase::Revealing { bidder, .. } => Some(bidder),
            Phase::Terminal(_) => None,
        }
    }
}

/// An immutable snapshot of a game.
///
/// [`apply`](GameState::apply) validates a move against
/// [`available_moves`](GameState::available_moves) and returns the next
/// snapshot; the receiver is never modified.
///
/// ```
/// use skull_rs::game::GameState;
/// use skull_rs::moves::Move;
/// use skull_rs::token::TokenKind;
///
/// let state = GameState::initial(["ann", "bob"]).unwrap();
/// assert_eq!(state.current_player(), Some(&"ann"));
///
/// let next = state.apply(&Move::Place(TokenKind::Plain)).unwrap();
/// assert_eq!(next.current_player(), Some(&"bob"));
/// assert!(state.apply(&Move::bet(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<P: Clone> {
    rules: Rules,
    players: PlayerEnvironments<P>,
    phase: Phase<P>,
}

impl<P: Clone + Eq + fmt::Debug> GameState<P> {
    /// Start a game under the default [`Rules`].
    pub fn initial<I>(players: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = P>,
    {
        Self::with_rules(players, Rules::default())
    }

    pub fn with_rules<I>(players: I, rules: Rules) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = P>,
    {
        rules.validate()?;
        let players: Vec<P> = players.into_iter().collect();
        if players.len() < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "at least two players required, got {}",
                players.len()
            )));
        }
        if let Some(dup) = players.iter().enumerate().find(|(i, p)| players[..*i].contains(*p)) {
            return Err(GameError::InvalidConfiguration(format!("duplicate player {:?}", dup.1)));
        }
        let first = players[0].clone();
        log::debug!("new game with {} players, {:?}", players.len(), rules);
        Ok(Self {
            rules,
            players: PlayerEnvironments::initial(&players, &rules),
            phase: Phase::Placing { starter: first.clone(), current: first },
        })
    }

    /// Returns the rules this game is played under
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the active players in turn order
    pub fn players(&self) -> &PlayerEnvironments<P> {
        &self.players
    }

    pub fn phase(&self) -> &Phase<P> {
        &self.phase
    }

    /// Returns the player due to act, or `None` once the game is over
    pub fn current_player(&self) -> Option<&P> {
        self.phase.current()
    }

    /// Returns the player revealing tokens, during the reveal phase
    pub fn bidder(&self) -> Option<&P> {
        match &self.phase {
            Phase::Revealing { bidder, .. } => Some(bidder),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&GameResult<P>> {
        match &self.phase {
            Phase::Terminal(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Moves the current player may submit, in a stable order.
    ///
    /// Empty only once the game is over.
    pub fn available_moves(&self) -> Vec<Move<P>> {
        match self.legal_moves() {
            Ok(moves) => moves,
            Err(err) => {
                log::error!("cannot compute moves in {} phase: {err}", self.phase.label());
                Vec::new()
            }
        }
    }

    fn legal_moves(&self) -> Result<Vec<Move<P>>, GameError> {
        let moves = match &self.phase {
            Phase::Placing { current, .. } => {
                let env = self.players.for_player(current)?;
                TokenKind::ALL
                    .into_iter()
                    .filter(|&kind| env.has_kind_in_hand(kind))
                    .map(Move::Place)
                    .collect()
            }
            Phase::Betting { .. } => {
                let max_possible = self.players.max_possible_bet();
                let current_max = self.players.current_max_bet();
                let floor = current_max.unwrap_or(0);
                let mut moves: Vec<Move<P>> = (floor + 1..=max_possible).map(Move::bet).collect();
                // The last player to act cannot skip when nobody has bet yet.
                let must_bet = current_max.is_none() && self.players.still_to_bet() == 1;
                if !must_bet {
                    moves.push(Move::skip());
                }
                moves
            }
            Phase::Revealing { bidder, step: RevealStep::Acting, .. } => self
                .players
                .reveal_candidates(bidder)?
                .into_iter()
                .take(1)
                .map(Move::Reveal)
                .collect(),
            Phase::Revealing { bidder, step: RevealStep::MustDiscard, .. } => {
                let slots = self.players.for_player(bidder)?.token_count();
                (0..slots).map(Move::Discard).collect()
            }
            Phase::Terminal(_) => Vec::new(),
        };
        Ok(moves)
    }

    /// Apply `mv` and return the resulting state.
    ///
    /// Fails with [`GameError::IllegalMove`] if `mv` is not one of
    /// [`available_moves`](GameState::available_moves).
    pub fn apply(&self, mv: &Move<P>) -> Result<Self, GameError> {
        if !self.legal_moves()?.contains(mv) {
            return Err(GameError::IllegalMove(format!(
                "{mv} is not allowed in the {} phase",
                self.phase.label()
            )));
        }
        if let Some(current) = self.current_player() {
            log::trace!("{current:?}: {mv}");
        }
        match (&self.phase, mv) {
            (Phase::Placing { starter, current }, Move::Place(kind)) => {
                self.apply_place(starter, current, *kind)
            }
            (Phase::Betting { current }, Move::Bet(bet)) => self.apply_bet(current, *bet),
            (Phase::Revealing { bidder, bet, safe, .. }, Move::Reveal(target)) => {
                self.apply_reveal(bidder, *bet, *safe, target)
            }
            (Phase::Revealing { bidder, .. }, Move::Discard(slot)) => {
                self.apply_discard(bidder, *slot)
            }
            _ => Err(GameError::IllegalMove(format!(
                "{mv} does not match the {} phase",
                self.phase.label()
            ))),
        }
    }

    fn apply_place(&self, starter: &P, current: &P, kind: TokenKind) -> Result<Self, GameError> {
        let players = self.players.place(current, kind)?;
        let next = players.next_player(current)?;
        let phase = if next == *starter {
            log::debug!("all tokens placed, betting opens with {next:?}");
            Phase::Betting { current: next }
        } else {
            Phase::Placing { starter: starter.clone(), current: next }
        };
        Ok(self.with(players, phase))
    }

    fn apply_bet(&self, current: &P, bet: Bet) -> Result<Self, GameError> {
        let players = self.players.bet(current, bet)?;
        let max_possible = players.max_possible_bet();
        if bet.value() == Some(max_possible) {
            return Ok(self.with(players, Self::start_reveal(current.clone(), max_possible)));
        }
        if let Some(next) = players.next_to_bet(current)? {
            return Ok(self.with(players, Phase::Betting { current: next }));
        }
        let (bidder, value) = players.highest_bidder().ok_or_else(|| {
            GameError::IllegalMove("betting cannot close without a bet".into())
        })?;
        Ok(self.with(players, Self::start_reveal(bidder, value)))
    }

    fn start_reveal(bidder: P, bet: u32) -> Phase<P> {
        log::debug!("{bidder:?} wins the betting with {bet}");
        Phase::Revealing { bidder, bet, safe: 0, step: RevealStep::Acting }
    }

    fn apply_reveal(&self, bidder: &P, bet: u32, safe: u32, target: &P) -> Result<Self, GameError> {
        let (players, token) = self.players.reveal(target)?;
        if token.is_penalty() {
            log::debug!("{bidder:?} exposed a penalty token from {target:?}");
            let phase = Phase::Revealing { bidder: bidder.clone(), bet, safe, step: RevealStep::MustDiscard };
            return Ok(self.with(players, phase));
        }
        let safe = safe + 1;
        if safe < bet {
            let phase = Phase::Revealing { bidder: bidder.clone(), bet, safe, step: RevealStep::Acting };
            return Ok(self.with(players, phase));
        }
        self.bet_fulfilled(players, bidder, bet)
    }

    fn bet_fulfilled(&self, players: PlayerEnvironments<P>, bidder: &P, bet: u32) -> Result<Self, GameError> {
        let game_over = match self.rules.victory {
            Victory::MaximumBet => bet == players.max_possible_bet(),
            Victory::TwoSuccessfulBets => players.for_player(bidder)?.is_winning(),
        };
        let players = match (game_over, self.rules.victory) {
            (false, Victory::MaximumBet) => players,
            _ => players.mark_winning(bidder)?,
        };
        let players = players.new_round();
        if game_over {
            log::debug!("{bidder:?} wins the game");
            return Ok(self.with(players, Phase::Terminal(GameResult::won_by(bidder.clone()))));
        }
        log::debug!("{bidder:?} fulfilled a bet of {bet}");
        let starter = players.next_player(bidder)?;
        Ok(self.with(players, Phase::Placing { starter: starter.clone(), current: starter }))
    }

    fn apply_discard(&self, bidder: &P, slot: usize) -> Result<Self, GameError> {
        // Resolved before the discard, which may remove the bidder.
        let starter = self.players.next_player(bidder)?;
        let (players, eliminated) = self.players.discard(bidder, slot)?;
        let players = players.new_round();
        if eliminated {
            log::debug!("{bidder:?} has no tokens left and is eliminated");
        }
        if let Some(winner) = players.sole_survivor() {
            log::debug!("{winner:?} is the last player standing");
            let result = GameResult::won_by(winner.clone());
            return Ok(self.with(players, Phase::Terminal(result)));
        }
        Ok(self.with(players, Phase::Placing { starter: starter.clone(), current: starter }))
    }

    fn with(&self, players: PlayerEnvironments<P>, phase: Phase<P>) -> Self {
        Self { rules: self.rules, players, phase }
    }
}
