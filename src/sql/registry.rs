//! Rule registry: which surface forms map to which `TokenKind`.
//!
//! Rules are collected on a `RegistryBuilder` and frozen with `seal()`. The
//! resulting `Registry` has no mutating methods, so it can be shared by
//! reference between any number of cursors (and threads).
//!
//! Literal patterns are normalized on registration: outer whitespace is
//! trimmed, inner whitespace runs collapse to one space, and ASCII letters are
//! lowercased. Two spellings that normalize to the same pattern are the same
//! pattern, so binding `Select` and `select` to different kinds is rejected.
use crate::*;
use itertools::Itertools as _;
use std::{borrow::Cow, collections::HashMap};

/// Decides which characters extend an unquoted word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierPolicy {
    allow_underscore: bool,
}

impl IdentifierPolicy {
    pub const fn new(allow_underscore: bool) -> Self {
        Self { allow_underscore }
    }

    pub const fn allows_underscore(&self) -> bool {
        self.allow_underscore
    }

    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || (self.allow_underscore && c == '_')
    }
}

/// How a close delimiter can appear inside a quoted region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escape {
    /// The first close delimiter always ends the region.
    #[default]
    None,
    /// `\` keeps the following character, whatever it is.
    Backslash,
    /// Two consecutive close delimiters stand for one (`'it''s'`).
    Doubled,
}

/// A delimiter pair bounding opaque literal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRule {
    pub kind: TokenKind,
    pub open: String,
    pub close: String,
    pub escape: Escape,
}

impl QuoteRule {
    /// Scans a region that starts with `self.open` at the head of `rest`.
    ///
    /// Returns `(content_len, total_len)` in bytes, or `None` if the input
    /// ends before the close delimiter.
    pub fn scan(&self, rest: &str) -> Option<(usize, usize)> {
        let body = rest.get(self.open.len()..)?;
        let close = self.close.as_str();
        let mut i = 0;
        loop {
            let tail = &body[i..];
            let c = tail.chars().next()?;
            match self.escape {
                Escape::Backslash if c == '\\' => {
                    let escaped = tail[1..].chars().next()?;
                    i += 1 + escaped.len_utf8();
                    continue;
                }
                Escape::Doubled if tail.starts_with(close) && tail[close.len()..].starts_with(close) => {
                    i += 2 * close.len();
                    continue;
                }
                _ => {}
            }
            if tail.starts_with(close) {
                return Some((i, self.open.len() + i + close.len()));
            }
            i += c.len_utf8();
        }
    }

    /// Resolves escapes in raw region content. Borrows when nothing changes.
    pub fn unescape<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match self.escape {
            Escape::None => Cow::Borrowed(content),
            Escape::Backslash if !content.contains('\\') => Cow::Borrowed(content),
            Escape::Backslash => {
                let mut out = String::with_capacity(content.len());
                let mut chars = content.chars();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => out.extend(chars.next()),
                        c => out.push(c),
                    }
                }
                Cow::Owned(out)
            }
            Escape::Doubled => {
                let doubled = self.close.repeat(2);
                if content.contains(&doubled) {
                    Cow::Owned(content.replace(&doubled, &self.close))
                } else {
                    Cow::Borrowed(content)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LiteralRule {
    kind: TokenKind,
    pattern: String,
}

/// Canonical form of a literal pattern, see the module docs.
pub fn normalize_pattern(raw: &str) -> Result<String> {
    let pattern = raw.split_whitespace().join(" ").to_ascii_lowercase();
    if pattern.is_empty() {
        return Err(Error::InvalidPattern(raw.to_string()));
    }
    Ok(pattern)
}

/// Mutable rule set. Register everything, then `seal()`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    literals: Vec<LiteralRule>,
    by_pattern: HashMap<String, usize>,
    quotes: Vec<QuoteRule>,
    policy: IdentifierPolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds one or more literal patterns to `kind`.
    ///
    /// Fails with `DuplicatePattern` if any pattern is already bound to a
    /// different kind; in that case none of the patterns are registered.
    /// Registering a pattern again for the same kind is a no-op and keeps its
    /// original registration position.
    pub fn define_literal_tokens<I>(&mut self, kind: TokenKind, patterns: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| normalize_pattern(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        for pattern in &patterns {
            if let Some(&index) = self.by_pattern.get(pattern) {
                let existing = self.literals[index].kind;
                if existing != kind {
                    return Err(Error::DuplicatePattern {
                        pattern: pattern.clone(),
                        existing,
                        requested: kind,
                    });
                }
            }
        }

        for pattern in patterns {
            if self.by_pattern.contains_key(&pattern) {
                continue;
            }
            trace!(%kind, %pattern, "registered literal pattern");
            self.by_pattern.insert(pattern.clone(), self.literals.len());
            self.literals.push(LiteralRule { kind, pattern });
        }
        Ok(self)
    }

    /// Registers a quoted region without escape processing.
    pub fn define_quoted_token(
        &mut self,
        kind: TokenKind,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define_quoted_token_with_escape(kind, open, close, Escape::None)
    }

    /// Registers a quoted region. Each open delimiter may be registered once.
    pub fn define_quoted_token_with_escape(
        &mut self,
        kind: TokenKind,
        open: impl Into<String>,
        close: impl Into<String>,
        escape: Escape,
    ) -> Result<&mut Self> {
        let (open, close) = (open.into(), close.into());
        if open.is_empty() || open.starts_with(char::is_whitespace) {
            return Err(Error::InvalidPattern(open));
        }
        if close.is_empty() {
            return Err(Error::InvalidPattern(close));
        }
        if let Some(existing) = self.quotes.iter().find(|q| q.open == open) {
            return Err(Error::DuplicateQuote {
                open,
                existing: existing.kind,
            });
        }
        trace!(%kind, %open, %close, ?escape, "registered quote rule");
        self.quotes.push(QuoteRule {
            kind,
            open,
            close,
            escape,
        });
        Ok(self)
    }

    /// Whether `_` extends bare words. Disallowed unless set.
    pub fn allow_underscore_in_bare_words(&mut self, allow: bool) -> &mut Self {
        self.policy = IdentifierPolicy::new(allow);
        self
    }

    /// Freezes the rule set.
    pub fn seal(self) -> Registry {
        let mut index: HashMap<u8, Vec<usize>> = HashMap::new();
        for (i, rule) in self.literals.iter().enumerate() {
            // Patterns are never empty after normalization.
            let first = rule.pattern.as_bytes()[0];
            index.entry(first).or_default().push(i);
        }
        for quote in &self.quotes {
            if self.by_pattern.contains_key(&quote.open.to_ascii_lowercase()) {
                debug!(open = %quote.open, "quote rule shadows a literal pattern");
            }
        }
        debug!(
            literals = self.literals.len(),
            quotes = self.quotes.len(),
            allow_underscore = self.policy.allows_underscore(),
            "sealed rule registry"
        );
        Registry {
            literals: self.literals,
            by_pattern: self.by_pattern,
            index,
            quotes: self.quotes,
            policy: self.policy,
        }
    }
}

/// Sealed, read-only rule set.
#[derive(Debug)]
pub struct Registry {
    literals: Vec<LiteralRule>,
    by_pattern: HashMap<String, usize>,
    index: HashMap<u8, Vec<usize>>,
    quotes: Vec<QuoteRule>,
    policy: IdentifierPolicy,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn policy(&self) -> IdentifierPolicy {
        self.policy
    }

    /// Kind bound to a literal pattern, compared after normalization.
    pub fn kind_of(&self, pattern: &str) -> Option<TokenKind> {
        let pattern = normalize_pattern(pattern).ok()?;
        self.by_pattern.get(&pattern).map(|&i| self.literals[i].kind)
    }

    /// Kind bound to a quote open delimiter.
    pub fn quote_kind(&self, open: &str) -> Option<TokenKind> {
        self.quotes.iter().find(|q| q.open == open).map(|q| q.kind)
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// The quote rule whose open delimiter starts `rest`, longest delimiter first.
    pub fn quote_at(&self, rest: &str) -> Option<&QuoteRule> {
        self.quotes
            .iter()
            .filter(|q| rest.starts_with(q.open.as_str()))
            .max_by_key(|q| q.open.len())
    }

    /// Literal rules that could match at the head of `rest`, in registration order.
    pub fn literal_candidates<'r>(
        &'r self,
        rest: &str,
    ) -> impl Iterator<Item = (TokenKind, &'r str)> + use<'r> {
        let bucket = rest
            .as_bytes()
            .first()
            .and_then(|b| self.index.get(&b.to_ascii_lowercase()))
            .map(Vec::as_slice)
            .unwrap_or_default();
        bucket.iter().map(move |&i| {
            let rule = &self.literals[i];
            (rule.kind, rule.pattern.as_str())
        })
    }

    /// Opens a token stream over `input`.
    pub fn open<'a>(&'a self, input: &'a str) -> TokenStream<'a> {
        TokenStream::open(input, self)
    }

    /// Lexes all of `input`, stopping at the first error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn tokenize<'a>(&'a self, input: &'a str) -> Result<Vec<Token<'a>>> {
        self.open(input).into_iter().collect()
    }
}
