//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Triage tracing/logging system.
///
/// Reads the `TRIAGE_LOG` environment variable for per-crate log levels.
/// Format: `TRIAGE_LOG=triage_engine=debug,triage_knowledge=info`
///
/// Falls back to `triage=info` if `TRIAGE_LOG` is not set or is invalid.
/// Idempotent; a subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("triage=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
