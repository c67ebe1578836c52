//! Diagnostic logging for modex
//!
//! Progress for the user goes to stdout through [`crate::utils::progress::Progress`].
//! Everything here is diagnostic output on stderr, controlled by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize diagnostic logging
///
/// `RUST_LOG` always takes precedence. Otherwise `filter` is used, and
/// [`DEFAULT_FILTER`] when that is `None` too.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER))
    };

    // Keep an already installed subscriber
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(env_filter)
        .try_init();
}
