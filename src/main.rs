#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use expo_dispatch::adapters::push::ExpoPushGateway;
use expo_dispatch::config::Config;
use expo_dispatch::services::Dispatcher;
use expo_dispatch::telemetry;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Demonstration entry point: dispatches one fixed notification to a
/// placeholder registration. Not part of the reusable contract.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_telemetry(&config.telemetry)?;

    let gateway = Arc::new(ExpoPushGateway::new(&config.gateway)?);
    let dispatcher = Dispatcher::new(gateway);

    let mut data = Map::new();
    data.insert("key".to_owned(), Value::String("value".to_owned()));

    let outcome = dispatcher
        .dispatch(
            "ExponentPushToken[xxxxxxxxxxxxxxxxxxxxxx]",
            "Hi! This is a test message.",
            Some(data),
        )
        .await?;

    tracing::info!(?outcome, "Dispatch finished");
    Ok(())
}
