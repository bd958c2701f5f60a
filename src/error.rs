use crate::sql::{CursorState, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Duplicate pattern: {pattern:?} is bound to {existing}, cannot bind it to {requested}")]
    DuplicatePattern {
        pattern: String,
        existing: TokenKind,
        requested: TokenKind,
    },

    #[error("Duplicate quote: open delimiter {open:?} is already bound to {existing}")]
    DuplicateQuote { open: String, existing: TokenKind },

    #[error("Invalid pattern: {0:?}")]
    InvalidPattern(String),

    #[error("Unterminated quote: {open:?} opened at byte {offset} is never closed")]
    UnterminatedQuote { open: String, offset: usize },

    #[error("No current token: cursor is {state}")]
    NoCurrentToken { state: CursorState },

    #[error("Invalid state: cannot {operation} a cursor that is {state}")]
    InvalidState {
        state: CursorState,
        operation: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
