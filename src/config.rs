// Configuración del motor y del servidor leída desde variables de entorno (.env)
use std::str::FromStr;

use crate::error::{ContempoError, Result};

/// Parámetros del motor. Los valores por defecto son los del generador de
/// preguntas original: pool mínimo 4, objetivo 4, máximo 3 grupos, 20 semillas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub min_pool: usize,
    pub target_total: usize,
    pub max_groups: usize,
    pub max_seed_attempts: usize,
    pub early_exit_total: usize,
    /// Año usado como muerte efectiva de personajes vivos; `None` => año en curso.
    pub current_year: Option<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            min_pool: 4,
            target_total: 4,
            max_groups: 3,
            max_seed_attempts: 20,
            early_exit_total: 4,
            current_year: None,
        }
    }
}

impl EngineConfig {
    /// Carga `.env` (si existe) y luego lee `CONTEMPO_*` del entorno.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Versión parametrizable para pruebas: `lookup` resuelve una clave a su valor.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = EngineConfig::default();
        let cfg = EngineConfig {
            min_pool: parse_or("CONTEMPO_MIN_POOL", &lookup, d.min_pool)?,
            target_total: parse_or("CONTEMPO_TARGET_TOTAL", &lookup, d.target_total)?,
            max_groups: parse_or("CONTEMPO_MAX_GROUPS", &lookup, d.max_groups)?,
            max_seed_attempts: parse_or("CONTEMPO_MAX_SEED_ATTEMPTS", &lookup, d.max_seed_attempts)?,
            early_exit_total: parse_or("CONTEMPO_EARLY_EXIT_TOTAL", &lookup, d.early_exit_total)?,
            current_year: match lookup("CONTEMPO_CURRENT_YEAR") {
                Some(v) if !v.trim().is_empty() => Some(parse_value("CONTEMPO_CURRENT_YEAR", &v)?),
                _ => None,
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("min_pool", self.min_pool),
            ("target_total", self.target_total),
            ("max_groups", self.max_groups),
            ("max_seed_attempts", self.max_seed_attempts),
            ("early_exit_total", self.early_exit_total),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ContempoError::Config {
                    key: key.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        if self.target_total < self.min_pool {
            return Err(ContempoError::Config {
                key: "target_total".to_string(),
                reason: format!("{} is below min_pool {}", self.target_total, self.min_pool),
            });
        }
        Ok(())
    }

    /// Copia con otro objetivo de relleno (usado por el parámetro `target` de la API).
    pub fn with_target(&self, target_total: usize) -> Self {
        EngineConfig { target_total, ..self.clone() }
    }
}

/// Configuración del servidor HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    /// Tope de personajes por request: la enumeración de tríos es O(N^3).
    pub max_pool: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { bind: "127.0.0.1:8080".to_string(), max_pool: 200 }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = ServerConfig::default();
        let bind = lookup("CONTEMPO_BIND")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(d.bind);
        let max_pool = parse_or("CONTEMPO_MAX_POOL", &lookup, d.max_pool)?;
        if max_pool == 0 {
            return Err(ContempoError::Config {
                key: "CONTEMPO_MAX_POOL".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(ServerConfig { bind, max_pool })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => parse_value(key, &v),
        _ => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ContempoError::Config { key: key.to_string(), reason: format!("'{}': {}", raw, e) })
}
