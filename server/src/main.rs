#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "bad server config"))?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "bulkee listening");
    axum::serve(listener, app).await?;
    Ok(())
}
