//! Single-pass scanner over one input buffer.
//!
//! The cursor keeps an offset that always sits on a token boundary while it is
//! `Scanning`; whitespace is skipped eagerly on open and after every advance.
//! The token at that offset is matched lazily, on the first `current_token()`
//! or `advance()`, and cached until the cursor moves past it.
//!
//! Errors are terminal: an unterminated quote moves the cursor to `Errored`
//! and only `close()` remains meaningful. Dropping a cursor closes it.
use crate::*;
use derive_more::{Display, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum CursorState {
    #[display("unopened")]
    Unopened,
    #[display("scanning")]
    Scanning,
    #[display("exhausted")]
    Exhausted,
    #[display("closed")]
    Closed,
    #[display("errored")]
    Errored,
}

#[derive(Debug)]
pub struct Cursor<'a> {
    registry: &'a Registry,
    input: Option<&'a str>,
    offset: usize,
    line: usize,
    current: Option<Token<'a>>,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    /// A cursor with no input yet.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            input: None,
            offset: 0,
            line: 1,
            current: None,
            state: CursorState::Unopened,
        }
    }

    /// A cursor positioned on the first token of `input`.
    pub fn open(input: &'a str, registry: &'a Registry) -> Self {
        let mut cursor = Self::new(registry);
        cursor.begin(input);
        cursor
    }

    /// Attaches `input` to an unopened cursor.
    pub fn load(&mut self, input: &'a str) -> Result {
        if !self.state.is_unopened() {
            return Err(Error::InvalidState {
                state: self.state,
                operation: "load",
            });
        }
        self.begin(input);
        Ok(())
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Byte offset of the next unconsumed token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_scanning()
    }

    /// The token at the current position, matched on first access.
    pub fn current_token(&mut self) -> Result<&Token<'a>> {
        if !self.is_valid() {
            return Err(Error::NoCurrentToken { state: self.state });
        }
        let token = match self.current.take() {
            Some(token) => token,
            None => self.materialize()?,
        };
        Ok(self.current.insert(token))
    }

    /// Moves past the current token. A no-op unless the cursor is scanning.
    pub fn advance(&mut self) -> Result {
        self.next_token().map(drop)
    }

    /// Returns the current token and moves past it.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        if !self.is_valid() {
            return Ok(None);
        }
        let token = match self.current.take() {
            Some(token) => token,
            None => self.materialize()?,
        };
        self.offset = token.end;
        self.line += newlines(token.lexeme);
        self.skip_whitespace();
        Ok(Some(token))
    }

    /// Detaches the input and drops the cached token. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.state.is_closed() {
            return;
        }
        debug!(offset = self.offset, state = %self.state, "closing cursor");
        self.input = None;
        self.current = None;
        self.offset = 0;
        self.state = CursorState::Closed;
    }

    fn begin(&mut self, input: &'a str) {
        trace!(len = input.len(), "opening cursor");
        self.input = Some(input);
        self.offset = 0;
        self.line = 1;
        self.state = CursorState::Scanning;
        self.skip_whitespace();
    }

    fn skip_whitespace(&mut self) {
        let Some(input) = self.input else {
            return;
        };
        let rest = &input[self.offset..];
        let gap = whitespace_len(rest);
        self.line += newlines(&rest[..gap]);
        self.offset += gap;
        if self.offset >= input.len() {
            debug!(len = input.len(), "cursor exhausted");
            self.state = CursorState::Exhausted;
        }
    }

    fn materialize(&mut self) -> Result<Token<'a>> {
        let Some(input) = self.input else {
            return Err(Error::NoCurrentToken { state: self.state });
        };
        let start = self.offset;
        let matched = match next_match(self.registry, input, start) {
            Ok(matched) => matched,
            Err(err) => {
                debug!(%err, "cursor errored");
                self.current = None;
                self.state = CursorState::Errored;
                return Err(err);
            }
        };

        let rest = &input[start..];
        let token = match matched {
            Match::Literal { kind, len } => Token::new(kind, start, self.line, &rest[..len]),
            Match::Quoted {
                rule,
                content_len,
                len,
            } => {
                let content = &rest[rule.open.len()..rule.open.len() + content_len];
                Token::with_value(rule.kind, start, self.line, &rest[..len], rule.unescape(content))
            }
            Match::BareWord { len } => Token::new(TokenKind::BareWord, start, self.line, &rest[..len]),
            // Whitespace is skipped before every match and end of input exhausts the cursor.
            Match::Whitespace { .. } | Match::EndOfInput => {
                self.state = CursorState::Exhausted;
                return Err(Error::NoCurrentToken { state: self.state });
            }
        };
        trace!(%token, start, line = self.line, "materialized token");
        Ok(token)
    }
}

impl Drop for Cursor<'_> {
    fn drop(&mut self) {
        self.close();
    }
}

fn newlines(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}
