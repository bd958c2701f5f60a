reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use itertools::Itertools as _;
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config()?;
    let registry = sql_registry(config.allow_underscore)?;

    let args = std::env::args().skip(1).join(" ");
    let query = if args.trim().is_empty() {
        config.query.as_str()
    } else {
        args.as_str()
    };

    let mut stream = registry.open(query);
    while stream.is_valid() {
        let token = stream.current_token()?;
        println!("{token}");
        debug!(
            line = token.line,
            quoted_identifier = token.kind == TokenKind::QuotedIdentifier,
            "token at {}..{}",
            token.start,
            token.end
        );
        stream.advance()?;
    }
    stream.close();
    Ok(())
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
