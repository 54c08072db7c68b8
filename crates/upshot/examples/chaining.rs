//! Chaining fallible steps with `and_then` and recovering with `or_else`.
//!
//! Run with: cargo run --example chaining

use tracing::info;
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

    let recovered: Upshot<f64, String> = div(5.0, 0.0).or_else(|error| {
        info!(%error, "recovering with infinity");
        Upshot::from_value(f64::INFINITY)
    });
    info!(result = %recovered, "or_else pipeline finished");

    let halved_twice = div(10.0, 2.0).and_then(|value| {
        info!(value, "first division succeeded");
        div(value, 2.0)
    });
    info!(result = %halved_twice, "and_then pipeline finished");
}
