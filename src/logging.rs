//! Tracing setup shared by the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Output is pretty unless
/// `format = "json"`.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new("regdash=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// A bare level applies to this crate and the HTTP trace layer; anything
/// else is taken as a full filter directive.
fn filter_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error") => {
            format!("regdash={l},tower_http={l}")
        }
        _ => level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "regdash=debug,tower_http=debug");
        assert_eq!(filter_directive("WARN"), "regdash=warn,tower_http=warn");
        assert_eq!(filter_directive("regdash=trace,reqwest=info"), "regdash=trace,reqwest=info");
    }
}
