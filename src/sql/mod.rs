//! Rule-driven SQL lexer.
//!
//! A sealed `Registry` says which literal patterns and delimiter pairs map to
//! which `TokenKind`; a `Cursor` walks one input string with it, producing
//! tokens lazily and one at a time.
//!
//! Modules:
//! - `keyword`    : Clause keywords (`select`, `group by`, ...).
//! - `token_kind` : Flat classification of tokens.
//! - `token`      : Token struct pairing a `TokenKind` with its span and text.
//! - `registry`   : Rule registration, validation and sealing.
//! - `matcher`    : Longest-match decision at a single offset.
//! - `cursor`     : Stateful scanner with a one-token cache.
//! - `stream`     : Public stream facade and lazy iterator.
//! - `dialect`    : The default SQL rule set.
//!
//! Design Principles:
//! 1. No global state; every cursor gets its registry explicitly.
//! 2. Quoted regions are opaque: nothing inside them is classified.
//! 3. Keywords match case-insensitively; identifiers and quoted content keep
//!    their case.
//! 4. Tokens borrow the input, so the lexeme of every token plus the skipped
//!    whitespace rebuilds the input exactly.
//!
//! Example:
//! ```ignore
//! use crate::sql::prelude::*;
//!
//! let registry = sql_registry(true)?;
//! let mut stream = registry.open("select \"year\" from clients");
//! while stream.is_valid() {
//!     println!("{}", stream.current_token()?);
//!     stream.advance()?;
//! }
//! ```
//!
//! NOTE: This is a lexer only. It has no grammar and does not check that the
//! tokens form a valid statement.

pub mod cursor;
pub mod dialect;
pub mod keyword;
pub mod matcher;
pub mod registry;
pub mod stream;
pub mod token;
pub mod token_kind;

pub use cursor::{Cursor, CursorState};
pub use dialect::sql_registry;
pub use keyword::Keyword;
pub use matcher::{Match, next_match, whitespace_len};
pub use registry::{Escape, IdentifierPolicy, QuoteRule, Registry, RegistryBuilder};
pub use stream::{TokenStream, Tokens};
pub use token::Token;
pub use token_kind::TokenKind;

/// Convenience prelude re‑exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, Registry, RegistryBuilder, Token, TokenKind, TokenStream, sql_registry};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Result};
    use itertools::Itertools as _;
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::IndexedRandom as _};
    use rstest::{fixture, rstest};

    #[fixture]
    fn rules() -> Registry {
        sql_registry(false).expect("sql rules should register")
    }

    /// Lexemes and the whitespace between them, concatenated in order.
    fn rebuild(input: &str, tokens: &[Token<'_>]) -> String {
        let mut out = String::with_capacity(input.len());
        let mut pos = 0;
        for token in tokens {
            let gap = &input[pos..token.start];
            assert!(gap.chars().all(char::is_whitespace), "non-whitespace gap {gap:?}");
            out.push_str(gap);
            out.push_str(token.lexeme);
            pos = token.end;
        }
        out.push_str(&input[pos..]);
        out
    }

    #[rstest]
    fn demo_query_end_to_end(rules: Registry) -> Result {
        let input = r#"select "year" from clients where year > '2012-04-22'"#;
        let tokens = rules.tokenize(input)?;
        let got = tokens.iter().map(|t| (t.kind, t.value())).collect_vec();
        assert_eq!(
            got,
            [
                (TokenKind::Keyword(Keyword::Select), "select"),
                (TokenKind::QuotedIdentifier, "year"),
                (TokenKind::Keyword(Keyword::From), "from"),
                (TokenKind::BareWord, "clients"),
                (TokenKind::Keyword(Keyword::Where), "where"),
                (TokenKind::BareWord, "year"),
                (TokenKind::ComparisonOp, ">"),
                (TokenKind::StringLiteral, "2012-04-22"),
            ]
        );
        assert_eq!(tokens[1].lexeme, "\"year\"");
        assert_eq!(tokens[7].span(), 40..52);
        Ok(())
    }

    #[rstest]
    #[case("x is not null", TokenKind::SetUnaryOp, "is not null")]
    #[case("x IS NULL", TokenKind::SetUnaryOp, "IS NULL")]
    #[case("x is   false", TokenKind::SetUnaryOp, "is   false")]
    #[case("x <= 1", TokenKind::ComparisonOp, "<=")]
    #[case("x not in (1)", TokenKind::SetBinaryOp, "not in")]
    #[case("x GROUP\n BY y", TokenKind::Keyword(Keyword::GroupBy), "GROUP\n BY")]
    fn longest_match_spans_the_whole_phrase(
        rules: Registry,
        #[case] input: &str,
        #[case] kind: TokenKind,
        #[case] lexeme: &str,
    ) -> Result {
        let tokens = rules.tokenize(input)?;
        assert_eq!(tokens[1].kind, kind);
        assert_eq!(tokens[1].lexeme, lexeme);
        Ok(())
    }

    #[rstest]
    #[case("'select'", TokenKind::StringLiteral, "select")]
    #[case("'is not null'", TokenKind::StringLiteral, "is not null")]
    #[case("\"from\"", TokenKind::QuotedIdentifier, "from")]
    #[case("'say \"hi\"'", TokenKind::StringLiteral, "say \"hi\"")]
    #[case("''", TokenKind::StringLiteral, "")]
    fn quoted_regions_are_opaque(
        rules: Registry,
        #[case] input: &str,
        #[case] kind: TokenKind,
        #[case] value: &str,
    ) -> Result {
        let tokens = rules.tokenize(input)?;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].value(), value);
        assert_eq!(tokens[0].lexeme, input);
        Ok(())
    }

    #[rstest]
    #[case("'abc")]
    #[case("select \"year from t")]
    fn unterminated_quotes_never_yield_the_dangling_token(rules: Registry, #[case] input: &str) {
        let results = rules.open(input).into_iter().collect_vec();
        let (last, complete) = results.split_last().unwrap();
        assert!(matches!(last, Err(Error::UnterminatedQuote { .. })));
        assert!(complete.iter().all(|r| r.as_ref().is_ok_and(|t| !t.is_quoted())));
    }

    #[rstest]
    fn keywords_are_case_insensitive_identifiers_are_not(rules: Registry) -> Result {
        let tokens = rules.tokenize("SeLeCt MyCol FROM Tbl")?;
        assert!(tokens[0].is_keyword(Keyword::Select));
        assert_eq!(tokens[0].lexeme, "SeLeCt");
        assert_eq!(tokens[1].value(), "MyCol");
        assert!(tokens[2].is_keyword(Keyword::From));
        assert_eq!(tokens[3].value(), "Tbl");
        Ok(())
    }

    #[rstest]
    fn keywords_do_not_split_identifiers(rules: Registry) -> Result {
        let tokens = rules.tokenize("select index, orders, ending, summary from settings")?;
        let words = tokens
            .iter()
            .filter(|t| t.is(TokenKind::BareWord))
            .map(|t| t.lexeme)
            .collect_vec();
        assert_eq!(
            words,
            ["index", ",", "orders", ",", "ending", ",", "summary", "settings"]
        );
        Ok(())
    }

    #[rstest]
    #[case(
        "select count(id) from t left join u on t.id = u.id group by x having count(id) > 1 limit 5",
        "select aggregate bracket_open word bracket_close from word left join word word word dot word comparison word dot word group by word having aggregate bracket_open word bracket_close comparison word limit word"
    )]
    #[case(
        "insert into t values (1, 'a')",
        "insert into word values bracket_open word word string bracket_close"
    )]
    #[case(
        "update t set a = case when b != 1 then 2 else 3 end",
        "update word set word comparison case when word comparison word then word else word end"
    )]
    #[case(
        "x in (1) or y is true and not z <> 2",
        "word set_binary bracket_open word bracket_close conditional word set_unary conditional conditional word comparison word"
    )]
    fn classifies_whole_statements(rules: Registry, #[case] input: &str, #[case] expected: &str) -> Result {
        let kinds = rules.tokenize(input)?.iter().map(|t| t.kind).join(" ");
        assert_eq!(kinds, expected);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case(" \t\r\n ")]
    fn whitespace_only_input_yields_nothing(rules: Registry, #[case] input: &str) -> Result {
        assert!(!rules.open(input).is_valid());
        assert!(rules.tokenize(input)?.is_empty());
        Ok(())
    }

    #[rstest]
    #[case("select \"year\" from clients where year > '2012-04-22'")]
    #[case("  sum( a )>=b\n\tgroup   by\nc  ")]
    #[case("a.b.c<>'x y'  is not   null")]
    #[case("naïve = 'café' ≠ €")]
    fn lexemes_and_whitespace_rebuild_the_input(rules: Registry, #[case] input: &str) -> Result {
        let tokens = rules.tokenize(input)?;
        assert_eq!(rebuild(input, &tokens), input);
        Ok(())
    }

    #[rstest]
    fn random_inputs_round_trip(rules: Registry) -> Result {
        const PIECES: &[&str] = &[
            "select", "FROM", "where", "group by", "is not null", "not in", "in", "<", "<=",
            "<>", "!", "=", "(", ")", ".", ",", "*", "'lit'", "'it is'", "\"Col\"", "user_id",
            "x1", "42", "count", "Ünïcode", "-",
        ];
        const GAPS: &[&str] = &["", " ", "  ", "\n", "\t ", "\r\n"];

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.random_range(0..24);
            let mut input = String::new();
            for _ in 0..len {
                input.push_str(GAPS.choose(&mut rng).copied().unwrap_or_default());
                input.push_str(PIECES.choose(&mut rng).copied().unwrap_or_default());
            }
            let tokens = rules.tokenize(&input)?;
            assert_eq!(rebuild(&input, &tokens), input, "round trip of {input:?}");
            assert!(tokens.iter().all(|t| !t.is_empty()));
        }
        Ok(())
    }

    #[rstest]
    fn registry_is_shared_across_threads(rules: Registry) {
        let rules = &rules;
        let inputs = ["select a from b", "x is null", "'q' = \"r\"", "'broken"];
        let counts = std::thread::scope(|s| {
            let handles = inputs
                .into_iter()
                .map(|input| s.spawn(move || rules.tokenize(input).map(|t| t.len())))
                .collect_vec();
            handles.into_iter().map(|h| h.join().unwrap()).collect_vec()
        });
        assert_eq!(counts[..3], [Ok(4), Ok(2), Ok(3)]);
        assert!(counts[3].is_err());
        // a failed session leaves the registry usable
        assert_eq!(rules.tokenize("a").map(|t| t.len()), Ok(1));
    }

    #[rstest]
    fn close_twice_is_harmless(rules: Registry) {
        let mut stream = rules.open("select 1");
        stream.close();
        let state = stream.state();
        stream.close();
        assert_eq!(stream.state(), state);
        assert!(!stream.is_valid());
    }

    #[test]
    fn prelude_import_works() -> Result {
        use super::prelude::*;
        let registry = sql_registry(false)?;
        let mut stream: TokenStream<'_> = registry.open("FROM X");
        assert!(stream.current_token()?.is_keyword(Keyword::From));
        Ok(())
    }
}
