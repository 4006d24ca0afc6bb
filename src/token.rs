use std::fmt;
use std::str::FromStr;

/// The two kinds of token a player can place face-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Plain,
    Penalty,
}

impl TokenKind {
    pub const ALL: [TokenKind; 2] = [TokenKind::Plain, TokenKind::Penalty];

    pub const fn is_penalty(self) -> bool {
        matches!(self, TokenKind::Penalty)
    }

    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::Plain => "plain",
            TokenKind::Penalty => "penalty",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenParseError {
    #[error("invalid token kind: '{0}'")]
    Invalid(String),
}

impl FromStr for TokenKind {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "flower" | "p" => Ok(TokenKind::Plain),
            "penalty" | "skull" | "x" => Ok(TokenKind::Penalty),
            _ => Err(TokenParseError::Invalid(s.to_string())),
        }
    }
}
