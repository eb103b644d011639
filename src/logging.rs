//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so they never mix with report output on
//! stdout. `TIMEFLOW_LOG` takes an EnvFilter directive, default `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TIMEFLOW_LOG";

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        let _ = init();
        assert!(!init());
    }
}
