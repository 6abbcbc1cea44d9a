//! Lambda entry point for the random forest scorer.

use lambda_runtime::{Error, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let predictor = rf_lambda::init().await?;

    info!("Scorer initialized, serving requests");

    run(service_fn(|event| rf_lambda::handle(event, &predictor))).await
}
