//! Token model tying a `TokenKind` to its source span and text.
//!
//! A `Token` borrows from the input it was lexed from, so it can never
//! outlive that buffer. It keeps both the exact source slice (`lexeme`, which
//! includes quote delimiters) and the value callers usually want (`value`,
//! the unescaped interior of a quoted region, or the lexeme otherwise).
//!
//! Rationale:
//! - Offsets let callers slice the original query or map diagnostics back to
//!   it without a parallel reconstructed string.
//! - Lexemes of all tokens plus the skipped whitespace rebuild the input
//!   byte for byte.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};
use derive_more::Display;
use std::{borrow::Cow, ops::Range};

/// A lexical token spanning the byte range `[start, end)` of its input.
///
/// Invariants:
/// - `end > start` for every token the cursor produces
/// - `lexeme == &input[start..end]`
/// - `line` is 1-based and counts the line the token starts on
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{kind} {value:?}")]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub lexeme: &'a str,
    pub value: Cow<'a, str>,
}

impl<'a> Token<'a> {
    /// A token whose value is its lexeme.
    pub fn new(kind: TokenKind, start: usize, line: usize, lexeme: &'a str) -> Self {
        Self::with_value(kind, start, line, lexeme, Cow::Borrowed(lexeme))
    }

    /// A token whose value differs from its lexeme (quoted regions).
    pub fn with_value(
        kind: TokenKind,
        start: usize,
        line: usize,
        lexeme: &'a str,
        value: Cow<'a, str>,
    ) -> Self {
        Self {
            kind,
            start,
            end: start + lexeme.len(),
            line,
            lexeme,
            value,
        }
    }

    /// Byte length of the lexeme.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unescaped value; for unquoted tokens this equals the lexeme.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// True if the lexeme is wider than the value, i.e. it came from a quoted region.
    pub fn is_quoted(&self) -> bool {
        self.value.len() != self.lexeme.len()
    }

    /// Returns true if the byte offset lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `offset == end` returns false.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}
