//! # Tally CLI Support
//!
//! Shared plumbing for the four Tally binaries: line-based prompting with
//! local re-prompt on bad input, and logging setup.

pub mod prompt;

use tracing_subscriber::EnvFilter;

/// Install the process-wide log subscriber.
///
/// Events go to stderr so they never interleave with report output on
/// stdout. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
