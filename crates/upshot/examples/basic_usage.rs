//! Constructing and reading a container.
//!
//! Run with: cargo run --example basic_usage

use tracing::{error, info};
use upshot::Upshot;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let res: Upshot<i32, String> = Upshot::from_value(42);

    match res.into_result() {
        Some(Ok(value)) => info!(value, "operation succeeded"),
        Some(Err(err)) => error!(%err, "operation failed"),
        None => info!("nothing happened yet"),
    }
}
