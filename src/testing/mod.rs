#![cfg(test)]
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod sql_lexer_tests {
    use super::{super::*, *};

    #[test_context(SqlLexer)]
    #[test]
    fn lexes_the_demo_query(ctx: &mut SqlLexer) -> Result {
        let kinds = ctx.kinds(r#"select "year" from clients where year > '2012-04-22'"#)?;
        assert_eq!(kinds.first(), Some(&TokenKind::Keyword(Keyword::Select)));
        assert_eq!(kinds.len(), 8);
        Ok(())
    }

    #[test_context(SqlLexer)]
    #[test]
    fn keeps_identifiers_with_underscores_whole(ctx: &mut SqlLexer) -> Result {
        let values = ctx.values("user_id = 119 and modified > '2020-01-01 00:00:00'")?;
        assert_eq!(
            values,
            ["user_id", "=", "119", "and", "modified", ">", "2020-01-01 00:00:00"]
        );
        Ok(())
    }
}
