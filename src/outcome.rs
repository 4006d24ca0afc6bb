/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult<P> {
    winner: Option<P>,
}

impl<P: PartialEq> GameResult<P> {
    pub fn won_by(player: P) -> Self {
        Self { winner: Some(player) }
    }

    pub fn winner(&self) -> Option<&P> {
        self.winner.as_ref()
    }

    /// Check if a player won.
    pub fn is_winning_player(&self, player: &P) -> bool {
        self.winner.as_ref() == Some(player)
    }
}
