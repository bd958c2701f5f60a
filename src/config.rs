use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

/// Settings for the demo binary. The lexer core never reads the environment.
#[derive(Debug, confique::Config)]
pub struct Config {
    /// Treat `_` as a word character, so `user_id` lexes as one bare word.
    #[config(env = "SQLTOK_ALLOW_UNDERSCORE", default = true)]
    pub allow_underscore: bool,
    /// Query to tokenize when no words are passed on the command line.
    #[config(
        env = "SQLTOK_QUERY",
        default = "select \"year\" from clients where year > '2012-04-22'"
    )]
    pub query: String,
}

pub fn config() -> Result<&'static Config> {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::builder()
        .env()
        .load()
        .map_err(|e| Error::Config(e.to_string()))?;
    debug!(?loaded, "loaded configuration from environment");
    Ok(CONFIG.get_or_init(|| loaded))
}
