//! Telemetry helpers for applications embedding `species-chart`.
//!
//! Load outcomes, row rejections and scene rebuilds are reported through
//! `tracing`. Hosts either call one of the init helpers here or install their
//! own subscriber and filters.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber filtered at [`DEFAULT_TRACING_FILTER`].
///
/// See [`init_tracing_with_filter`] for the return value contract.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over `fallback_filter` when present. Row-level rejection
/// traces are emitted at `debug`, so `species_chart=debug` shows every dropped
/// CSV row.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
