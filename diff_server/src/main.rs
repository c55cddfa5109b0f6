mod cli;
mod config;
mod consts;
mod errors;
mod server;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use cli::args::Args;
use errors::{DiffServerError, init_error};
use log::info;
use server::create_server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), DiffServerError> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME"),
                    args.verbose.log_level_filter()
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(args.color.use_colors()))
        .try_init()
        .context("Failed to initialise tracing")
        .map_err(init_error)?;

    info!(
        "Starting diff server version {}",
        env!("CARGO_PKG_VERSION")
    );

    create_server(args.config_path)
        .await
        .context("Failed to start server")
        .map_err(init_error)
}
