mod controller;
mod error;
mod extract;
mod groq;
mod models;
mod prompt;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

use crate::controller::GenerationController;
use crate::groq::GroqClient;
use crate::routes::{AppState, default_categories};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    // A missing key is surfaced on the first generation attempt, not here.
    let api_key = std::env::var("GROQ_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; generation requests will fail until it is provided");
    }

    let state = AppState {
        controller: Arc::new(GenerationController::new(Arc::new(GroqClient::new(api_key)))),
        categories: Arc::new(default_categories().into_iter().map(String::from).collect()),
    };

    let app = routes::app(state);

    let port: u16 = std::env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Starting server");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
