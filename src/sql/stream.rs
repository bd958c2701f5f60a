//! Public iteration surface over a `Cursor`.
//!
//! `TokenStream` mirrors the cursor's explicit protocol (`is_valid`,
//! `current_token`, `advance`, `close`). Turning it into an iterator gives a
//! lazy, single-pass sequence of `Result<Token>`; re-lexing means opening a
//! new stream over the same input.
use crate::*;
use std::iter::FusedIterator;

#[derive(Debug)]
pub struct TokenStream<'a> {
    cursor: Cursor<'a>,
}

impl<'a> TokenStream<'a> {
    pub fn open(input: &'a str, registry: &'a Registry) -> Self {
        Self {
            cursor: Cursor::open(input, registry),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.cursor.is_valid()
    }

    pub fn current_token(&mut self) -> Result<&Token<'a>> {
        self.cursor.current_token()
    }

    /// True if the current token exists and has `kind`.
    pub fn current_is(&mut self, kind: TokenKind) -> bool {
        self.cursor.current_token().is_ok_and(|t| t.is(kind))
    }

    pub fn advance(&mut self) -> Result {
        self.cursor.advance()
    }

    pub fn close(&mut self) {
        self.cursor.close()
    }

    pub fn state(&self) -> CursorState {
        self.cursor.state()
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Remaining tokens as a lazy iterator.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            cursor: self.cursor,
        }
    }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = Result<Token<'a>>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Yields each remaining token once. After an error it yields that error and
/// then nothing.
#[derive(Debug)]
pub struct Tokens<'a> {
    cursor: Cursor<'a>,
}

impl Tokens<'_> {
    pub fn state(&self) -> CursorState {
        self.cursor.state()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_token().transpose()
    }
}

impl FusedIterator for Tokens<'_> {}
