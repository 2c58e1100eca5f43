use crate::Position;

/// Front-end failure. Always carries the position of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{at}: {message}")]
    Syntax { message: String, at: Position },

    #[error("{at}: bracket nesting exceeds {limit} levels")]
    TooDeep { limit: usize, at: Position },

    #[error("{at}: source is too large ({bytes} bytes)")]
    TooLarge { bytes: usize, at: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Syntax { at, .. }
            | ParseError::TooDeep { at, .. }
            | ParseError::TooLarge { at, .. } => *at,
        }
    }
}
