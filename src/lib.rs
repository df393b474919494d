// Biblioteca raíz del crate `contemporaneos`.
// Motor de puzzles "agrupa a los contemporáneos" y el servicio HTTP que lo expone.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
