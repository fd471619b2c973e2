//! nodetron service.
//! Used by: binary entrypoint.

use nodetron::config::ServerConfig;
use nodetron::{console, server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let state = state::build_state(&config.db_path)?;
    tracing::info!(db = %config.db_path, "starting nodetron on {}", config.bind_addr);
    console::print_startup(&config.bind_addr);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
