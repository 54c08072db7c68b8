//! Reading both channels of a finished pipeline, defensively and loudly.
//!
//! Run with: cargo run --example recover

use tracing::{error, info};
use upshot::Upshot;

fn div(a: f64, b: f64) -> Upshot<f64, String> {
    if b == 0.0 {
        Upshot::from_error("Division by zero error".to_string())
    } else {
        Upshot::from_value(a / b)
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let ok = div(10.0, 2.0);
    info!(result = %ok, state = %ok.state(), "first division");

    let bad = div(5.0, 0.0);
    error!(result = %bad, state = %bad.state(), "second division");

    // The loud surface returns the actual state for diagnostics.
    if let Err(access) = bad.value() {
        error!(%access, "direct access failed");
    }

    // The defensive surface never fails.
    let fallback = bad.value_or(0.0);
    info!(fallback, "defensive read");
}
