use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for the long-running API server.
pub const SERVER_FILTER: &str = "info,taazabites=debug";
/// Default filter for one-shot commands, so stdout stays clean.
pub const COMMAND_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        assert!(SERVER_FILTER.parse::<EnvFilter>().is_ok());
        assert!(COMMAND_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(COMMAND_FILTER);
        init_tracing(SERVER_FILTER);
    }
}
