//! Forecast API Server
//!
//! HTTP service mapping a city name and calendar date to a predicted
//! weather label using a pre-trained classifier.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use clap::Parser;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use forecast_api::artifacts;
use forecast_api::config::{ArtifactConfig, DEFAULT_LABELS_FILENAME, DEFAULT_MODEL_FILENAME};
use forecast_api::handlers;
use forecast_api::state::AppState;

/// Forecast API Server
#[derive(Parser, Debug)]
#[command(name = "forecast-api")]
#[command(about = "City weather forecast server backed by a pre-trained classifier")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "FORECAST_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "FORECAST_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Path to the classifier artifact
    #[arg(long, default_value = DEFAULT_MODEL_FILENAME, env = "MODEL_PATH")]
    model_path: PathBuf,

    /// Path to the label decoder artifact
    #[arg(long, default_value = DEFAULT_LABELS_FILENAME, env = "LABEL_ENCODER_PATH")]
    labels_path: PathBuf,

    /// URL to download the classifier from when the file is absent
    #[arg(long, env = "MODEL_URL")]
    model_url: Option<String>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting forecast API server");

    let config = ArtifactConfig::new(args.model_path, args.labels_path, args.model_url);

    // Fetch the classifier if it is not already on disk. A failure here
    // or in the load below must prevent the server from coming up: there
    // is no fallback prediction strategy.
    if let Err(e) = artifacts::ensure_model(&config).await {
        tracing::error!("Failed to obtain model artifact: {:#}", e);
        std::process::exit(1);
    }

    // Initialize application state
    let state = match AppState::new(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    // Build router
    let app = Router::new()
        .route("/forecast", get(handlers::forecast::forecast_handler))
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    // Parse listen address
    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");

    info!("Forecast API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
