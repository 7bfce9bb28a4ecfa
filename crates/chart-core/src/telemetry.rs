// File: crates/chart-core/src/telemetry.rs
// Summary: Opt-in tracing setup for binaries embedding the chart.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Returns `false` when the
/// feature is disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
