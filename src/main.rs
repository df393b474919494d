// --- Generador de puzzles de contemporáneos - Archivo principal ---

use contemporaneos::config::{EngineConfig, ServerConfig};
use contemporaneos::logging::configure_logging;
use contemporaneos::run_server;
use contemporaneos::server::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    configure_logging();

    let engine = EngineConfig::from_env().map_err(std::io::Error::other)?;
    let server = ServerConfig::from_env().map_err(std::io::Error::other)?;
    tracing::info!(?engine, bind = %server.bind, "=== Generador de puzzles de contemporáneos (API) ===");

    run_server(AppState { engine, server }).await
}
