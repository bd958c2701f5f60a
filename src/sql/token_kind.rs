//! Token kind definitions for the rule-driven SQL lexer.
//!
//! Kinds are flat, mutually exclusive tags: a token carries exactly one. The
//! registry binds kinds to literal patterns or quoting rules; `BareWord` is
//! what the matcher falls back to when nothing registered applies.
//!
//! See `keyword.rs` for the clause keywords wrapped by `TokenKind::Keyword`.

use crate::sql::keyword::Keyword;
use derive_more::Display;

/// Classification for a token produced by the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// Single-quoted string literal, e.g. `'2012-04-22'`.
    #[display("string")]
    StringLiteral,
    /// Double-quoted identifier, e.g. `"year"`.
    #[display("quoted_identifier")]
    QuotedIdentifier,
    /// Dot `.` in qualified names.
    #[display("dot")]
    Dot,
    /// Aggregate function name (`sum`, `avg`, `min`, `max`, `count`).
    #[display("aggregate")]
    AggregateFunction,
    /// Binary comparison (`<`, `<=`, `=`, `>=`, `>`, `!=`, `<>`).
    #[display("comparison")]
    ComparisonOp,
    /// Unary set test (`is null`, `is not null`, `is true`, `is false`).
    #[display("set_unary")]
    SetUnaryOp,
    /// Binary set operator (`in`, `not in`).
    #[display("set_binary")]
    SetBinaryOp,
    /// Boolean connective (`and`, `or`, `not`).
    #[display("conditional")]
    ConditionalOp,
    /// Opening parenthesis `(`.
    #[display("bracket_open")]
    BracketOpen,
    /// Closing parenthesis `)`.
    #[display("bracket_close")]
    BracketClose,
    /// Clause keyword.
    #[display("{_0}")]
    Keyword(Keyword),
    /// Unclassified run of word characters, or a lone unknown character.
    #[display("word")]
    BareWord,
}

impl TokenKind {
    /// True if this kind is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// The wrapped keyword, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// True for operator kinds (comparison, set, and boolean connectives).
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::ComparisonOp
                | TokenKind::SetUnaryOp
                | TokenKind::SetBinaryOp
                | TokenKind::ConditionalOp
        )
    }

    /// True for structural punctuation.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Dot | TokenKind::BracketOpen | TokenKind::BracketClose
        )
    }
}
