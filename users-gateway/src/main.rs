//! Entry point for the `users-gateway` HTTP server.

use tracing::info;
use users_gateway::{GatewayConfig, GatewayError, Server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "users-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    let config = GatewayConfig::from_env()?;
    let server = Server::from_config(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "users-gateway listening");

    server.run(listener).await
}
