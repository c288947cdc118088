//! Observability utilities.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::types::{Config, ObservabilityConfig};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Tracing target used for every guard rejection event.
pub const GUARD_TARGET: &str = "arg_guard";

/// Environment variable that forces the log format (`json` or `compact`).
pub const LOG_FORMAT_ENV: &str = "ARG_GUARD_LOG_FORMAT";

/// Initialize tracing subscriber once for the process with default settings.
pub fn init_tracing() {
    init_tracing_with(&Config::default());
}

/// Initialize tracing subscriber once for the process from `config.observability`.
///
/// `RUST_LOG` wins over `log_level`, and `ARG_GUARD_LOG_FORMAT` wins over
/// `json_logs`. Later calls are no-ops.
pub fn init_tracing_with(config: &Config) {
    TRACING_INIT.get_or_init(|| {
        let settings = config
            .observability
            .with_format_override(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

        let result = if settings.json_logs {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact())
                .try_init()
        };

        match result {
            Ok(()) => tracing::debug!(
                target: GUARD_TARGET,
                log_level = %settings.log_level,
                json = settings.json_logs,
                "tracing_initialized"
            ),
            Err(err) => eprintln!("tracing init skipped: {err}"),
        }
    });
}

impl ObservabilityConfig {
    /// Apply a log format override; unknown values leave `json_logs` as configured.
    pub fn with_format_override(&self, format: Option<&str>) -> ObservabilityConfig {
        let mut settings = self.clone();
        match format {
            Some(f) if f.eq_ignore_ascii_case("json") => settings.json_logs = true,
            Some(f) if f.eq_ignore_ascii_case("compact") => settings.json_logs = false,
            _ => {}
        }
        settings
    }
}
