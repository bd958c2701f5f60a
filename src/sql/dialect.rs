use crate::*;

/// The SQL rule set: string literals, quoted identifiers, operators,
/// aggregates, and one literal per clause keyword.
///
/// Single quotes delimit strings and double quotes delimit identifiers, both
/// without escape processing. `allow_underscore` sets the identifier policy
/// for bare words such as `user_id`.
pub fn sql_registry(allow_underscore: bool) -> Result<Registry> {
    let mut rules = RegistryBuilder::new();
    rules
        .allow_underscore_in_bare_words(allow_underscore)
        .define_quoted_token(TokenKind::StringLiteral, "'", "'")?
        .define_quoted_token(TokenKind::QuotedIdentifier, "\"", "\"")?
        .define_literal_tokens(TokenKind::Dot, ["."])?
        .define_literal_tokens(
            TokenKind::AggregateFunction,
            ["sum", "avg", "min", "max", "count"],
        )?
        .define_literal_tokens(
            TokenKind::ComparisonOp,
            ["<", "<=", "=", ">=", ">", "!=", "<>"],
        )?
        .define_literal_tokens(TokenKind::ConditionalOp, ["and", "not", "or"])?
        .define_literal_tokens(
            TokenKind::SetUnaryOp,
            ["is null", "is not null", "is true", "is false"],
        )?
        .define_literal_tokens(TokenKind::SetBinaryOp, ["in", "not in"])?
        .define_literal_tokens(TokenKind::BracketOpen, ["("])?
        .define_literal_tokens(TokenKind::BracketClose, [")"])?;

    for kw in Keyword::ALL {
        rules.define_literal_tokens(TokenKind::Keyword(kw), [kw.as_str()])?;
    }
    Ok(rules.seal())
}
