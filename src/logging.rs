//! Logging setup for the binary.
//!
//! Directives come from `RUST_LOG`. When it is unset or holds no valid
//! directive, everything at `WARN` and above is shown. Output goes to
//! stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Level used when `RUST_LOG` does not provide any directive.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the filter for `directives` (the value of `RUST_LOG`, if set).
///
/// The default level only applies when `directives` yields nothing, so a
/// bare `RUST_LOG=info` is honored as written.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LOG_LEVEL.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global `fmt` subscriber.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
