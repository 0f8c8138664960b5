#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    match config.auth_upstream_url.as_deref() {
        Some(url) => tracing::info!(upstream = url, "auth relay enabled"),
        None => tracing::warn!("AUTH_UPSTREAM_URL not set; /login and /register will answer 503"),
    }

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "auto trade vip listening");
    axum::serve(listener, app).await?;
    Ok(())
}
