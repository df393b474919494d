//! Errores de las capas externas (JSON, configuración, servidor).
//!
//! El motor de agrupación en sí no falla: los casos degenerados terminan en la
//! pregunta de respaldo, no en un `Err`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContempoError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid entity at position {index}: {reason}")]
    InvalidEntity { index: usize, reason: String },

    #[error("duplicate entity id: {0}")]
    DuplicateId(String),

    #[error("pool too large: {size} entities (max {max})")]
    PoolTooLarge { size: usize, max: usize },

    #[error("invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ContempoError>;
