//! Diagnostic logging. Events go to stderr so stdout carries only results.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter variable, e.g. `BMIPASS_LOG=bmipass=debug`.
pub const LOG_ENV: &str = "BMIPASS_LOG";

pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
