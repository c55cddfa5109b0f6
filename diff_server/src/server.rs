use std::ffi::OsString;

use anyhow::{Context as _, Result, anyhow};
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::{self, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
};
use log::info;
use tokio::signal;
use tower_http::{
    LatencyUnit,
    cors::CorsLayer,
    trace::{
        DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse,
        TraceLayer,
    },
};
use tracing::{Level, info_span};

use crate::{
    config::Config,
    consts::DEFAULT_CONFIG_PATH,
    errors::not_found_error,
};

mod compute_diff;
mod compute_line_based_diff;
mod ping;
mod requests;
mod responses;

pub async fn create_server(config_path: Option<OsString>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| OsString::from(DEFAULT_CONFIG_PATH));
    let config = Config::read_or_create(std::path::Path::new(&config_path))
        .await
        .context("Failed to initialise configuration")?;

    let address = format!("{}:{}", &config.server.host, &config.server.port);

    let app = Router::new()
        .route("/ping", get(ping::ping))
        .route("/diff/compute", post(compute_diff::compute_diff))
        .route(
            "/diff/compute-line-based",
            post(compute_line_based_diff::compute_line_based_diff),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                )
                .on_body_chunk(DefaultOnBodyChunk::new())
                .on_eos(DefaultOnEos::new())
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(DefaultBodyLimit::max(
            config.server.max_body_size_mb * 1024 * 1024,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin("*".parse::<HeaderValue>().expect("Failed to parse origin"))
                .allow_headers([http::header::CONTENT_TYPE])
                .allow_methods([Method::GET, Method::POST]),
        )
        .fallback(handler_404)
        .into_make_service();

    let listener = tokio::net::TcpListener::bind(address.clone())
        .await
        .with_context(|| format!("Failed to bind to address: {address}"))?;

    info!(
        "Listening on http://{}",
        listener
            .local_addr()
            .context("Failed to get local address")?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .tcp_nodelay(true)
        .await
        .context("Failed to start server")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn handler_404() -> impl IntoResponse { not_found_error(anyhow!("Page not found")) }
