use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Startup and connection milestones log under this target.
pub const STARTUP_TARGET: &str = "startup";

const DEFAULT_FILTER: &str = "info";

/// Filter directives for the subscriber. Suppression wins over `RUST_LOG`.
pub fn filter_directives(suppress_logs: bool, rust_log: Option<&str>) -> String {
    if suppress_logs {
        return format!("warn,{}=info", STARTUP_TARGET);
    }
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

pub fn init_tracing(config: &Config) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directives(config.suppress_logs, rust_log.as_deref()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
