//! Documentation of a daily jokes site.
//!
//!
//!
//! # General Infrastructure
//! - One axum server hands out jokes as JSON and serves the built frontend bundle
//! - The frontend lives in `dist` (or wherever `STATIC_DIR` points) and is the router fallback
//! - Everything the user does (likes, comments, category picks) stays on the client in local storage
//! - No database, the bank is compiled in or fetched once at startup from `BANK_URL`
//!
//!
//!
//! # Endpoints
//!
//! - `GET /` plain readiness text, handy for container health checks
//! - `GET /api/jokes` the fixed ten daily jokes, `{ id, joke }`
//! - `GET /api/cards` every card joke, `{ setup, punchline, category }`
//! - `GET /api/cards?category=food` cards in one category, unknown categories are just empty
//! - `GET /api/categories` category ids in bank order
//!
//!
//!
//! # Notes
//!
//! ## Punchlines
//! Cards ship with their punchlines. Hiding them is a presentation concern handled by the reveal engine
//! in the `client` crate (scratch the card or shake the phone). Anyone reading the JSON can spoil the joke,
//! and that is fine for jokes.
//!
//! ## Bank
//! `bank.json` at the workspace root is the single source of card jokes. The `process` CLI imports new
//! jokes into it, sanitizing categories and skipping setups we already have.
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info cargo run -p jokes
//! ```
//!
//! Serve a different bundle on another port.
//! ```sh
//! RUST_PORT=8080 STATIC_DIR=../frontend/dist cargo run -p jokes
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use error::AppError;
use routes::{cards_handler, categories_handler, jokes_handler, ready_handler};
use state::State;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    serve().await.inspect_err(|e| error!("Server failed: {e}"))
}

async fn serve() -> Result<(), AppError> {
    info!("Initializing state...");
    let state = State::new().await?;

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(ready_handler))
        .route("/api/jokes", get(jokes_handler))
        .route("/api/cards", get(cards_handler))
        .route("/api/categories", get(categories_handler))
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
