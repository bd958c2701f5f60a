use crate::{Registry, Result, TokenKind, sql_registry};
use test_context::TestContext;
pub use test_context::test_context;

/// The SQL rule set as the demo binary configures it, with tracing enabled.
pub struct SqlLexer {
    pub registry: Registry,
}

impl SqlLexer {
    pub fn kinds(&self, input: &str) -> Result<Vec<TokenKind>> {
        Ok(self
            .registry
            .tokenize(input)?
            .into_iter()
            .map(|t| t.kind)
            .collect())
    }

    pub fn values(&self, input: &str) -> Result<Vec<String>> {
        Ok(self
            .registry
            .tokenize(input)?
            .into_iter()
            .map(|t| t.value.into_owned())
            .collect())
    }
}

impl TestContext for SqlLexer {
    fn setup() -> Self {
        crate::testing::common_init();
        Self {
            registry: sql_registry(true).expect("Failed to register the SQL rule set"),
        }
    }
}
