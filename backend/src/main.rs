use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, Level};

use backend::config::ServerConfig;
use backend::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = ServerConfig::from_env();
    let app = server::build_router(&config);

    info!(
        environment = %config.environment,
        static_dir = %config.static_dir,
        "serving site on {}",
        config.bind_address
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
