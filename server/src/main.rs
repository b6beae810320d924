mod config;
mod routes;

use config::ServerConfig;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("router setup failed: {0}")]
    Router(String),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let app = routes::app().map_err(ServerError::Router)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "messaging host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
