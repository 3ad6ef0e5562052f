//! Generator Pełnomocnictw BDO
//!
//! Web application that looks up a company in the GUS registry by NIP
//! and produces a ready-to-sign BDO power-of-attorney as a `.docx`
//! download. Endpoints:
//!
//! - `GET /` - submission form
//! - `POST /generate` - lookup + result page with warnings and raw data
//! - `GET /download/:nip` - the rendered document
//! - `GET /api/company/:nip` - normalized profile + raw record as JSON
//! - `GET /health` - health check

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gus_client::{GusClient, GusConfig};

mod api;
mod error;
mod registry;
mod views;

use registry::Registry;

/// Command-line arguments for the server
#[derive(Parser, Debug)]
#[command(name = "poa-server")]
#[command(about = "Generator pełnomocnictw BDO zasilany rejestrem GUS")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Override the registry endpoint (e.g. the GUS sandbox)
    #[arg(long)]
    gus_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registry lookup collaborator; a trait object so tests can swap in
    /// a stub.
    pub registry: Arc<dyn Registry>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::handle_health))
        .route("/", get(api::handle_index))
        .route("/generate", post(api::handle_generate))
        .route("/download/:nip", get(api::handle_download))
        .route("/api/company/:nip", get(api::handle_company))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The credential is read once here and injected explicitly; nothing
    // below this point touches process state.
    let api_key = std::env::var("GUS_KEY")
        .context("GUS_KEY is not set; put the BIR API key in the environment or .env")?;

    let mut config = GusConfig::new(api_key);
    if let Some(url) = args.gus_url {
        config = config.with_base_url(url);
    }
    info!(endpoint = %config.base_url, "connecting to GUS registry");

    let client = GusClient::new(config)?;
    let state = AppState {
        registry: Arc::new(client),
    };

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port combination")?;
    info!("Starting poa-server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
