use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bank_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Rounds a monetary value to two decimal places.
///
/// Every balance and summary fold applies this at each accumulation step,
/// which is the single rounding policy the bookkeeping core follows.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
