use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // Stage spans only report their duration when someone asked for debug output.
    let directives = env_filter.to_string();
    let span_events = if directives.contains("debug") || directives.contains("trace") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
