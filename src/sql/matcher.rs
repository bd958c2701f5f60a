//! Decides what the next token at a given offset is.
//!
//! Precedence at every offset, first hit wins:
//! 1. quote open delimiter (longest delimiter first)
//! 2. literal pattern (longest match first, ties go to the earliest registration)
//! 3. whitespace run
//! 4. bare word, or a single non-whitespace character
//!
//! Literal patterns are compared ASCII case-insensitively. A space inside a
//! pattern matches any non-empty run of whitespace in the input, so `group by`
//! also matches `GROUP\n  BY`. A pattern ending in a word character only
//! matches when the input does not continue with another word character; `in`
//! never matches the head of `index`.
use crate::*;

/// Outcome of matching at one offset. Lengths are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<'r> {
    Literal {
        kind: TokenKind,
        len: usize,
    },
    Quoted {
        rule: &'r QuoteRule,
        content_len: usize,
        len: usize,
    },
    BareWord {
        len: usize,
    },
    Whitespace {
        len: usize,
    },
    EndOfInput,
}

impl Match<'_> {
    /// Bytes of input consumed by this match.
    pub fn len(&self) -> usize {
        match *self {
            Match::Literal { len, .. }
            | Match::Quoted { len, .. }
            | Match::BareWord { len }
            | Match::Whitespace { len } => len,
            Match::EndOfInput => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Matches the input at `offset` against the registry.
///
/// Fails only with `UnterminatedQuote`. Offsets past the end, or not on a
/// char boundary, are treated as end of input.
pub fn next_match<'r>(registry: &'r Registry, input: &str, offset: usize) -> Result<Match<'r>> {
    let rest = match input.get(offset..) {
        Some(rest) if !rest.is_empty() => rest,
        _ => return Ok(Match::EndOfInput),
    };

    if let Some(rule) = registry.quote_at(rest) {
        let (content_len, len) = rule.scan(rest).ok_or_else(|| Error::UnterminatedQuote {
            open: rule.open.clone(),
            offset,
        })?;
        return Ok(Match::Quoted {
            rule,
            content_len,
            len,
        });
    }

    let policy = registry.policy();
    let candidates = registry
        .literal_candidates(rest)
        .filter_map(|(kind, pattern)| literal_len(pattern, rest, policy).map(|len| (kind, len)));
    if let Some((kind, len)) = longest(candidates) {
        return Ok(Match::Literal { kind, len });
    }

    let len = whitespace_len(rest);
    if len > 0 {
        return Ok(Match::Whitespace { len });
    }

    let word: usize = rest
        .chars()
        .take_while(|&c| policy.is_word_char(c))
        .map(char::len_utf8)
        .sum();
    let len = match word {
        0 => rest.chars().next().map_or(0, char::len_utf8),
        n => n,
    };
    Ok(Match::BareWord { len })
}

/// Picks the longest candidate; among equal lengths the first one yielded wins.
pub fn longest<I>(candidates: I) -> Option<(TokenKind, usize)>
where
    I: IntoIterator<Item = (TokenKind, usize)>,
{
    candidates
        .into_iter()
        .fold(None, |best: Option<(TokenKind, usize)>, (kind, len)| match best {
            Some((_, best_len)) if best_len >= len => best,
            _ => Some((kind, len)),
        })
}

/// Byte length of the whitespace run at the head of `s`.
pub fn whitespace_len(s: &str) -> usize {
    s.chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum()
}

/// Source bytes matched by a normalized pattern at the head of `rest`.
fn literal_len(pattern: &str, rest: &str, policy: IdentifierPolicy) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut pos = 0;
    for (i, part) in pattern.split(' ').enumerate() {
        if i > 0 {
            let gap = whitespace_len(&rest[pos..]);
            if gap == 0 {
                return None;
            }
            pos += gap;
        }
        let end = pos + part.len();
        if !bytes.get(pos..end)?.eq_ignore_ascii_case(part.as_bytes()) {
            return None;
        }
        pos = end;
    }

    let ends_in_word = pattern.chars().next_back().is_some_and(|c| policy.is_word_char(c));
    let continues_word = rest[pos..].chars().next().is_some_and(|c| policy.is_word_char(c));
    if ends_in_word && continues_word {
        return None;
    }
    Some(pos)
}
