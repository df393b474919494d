use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ContempoError, Result};
use crate::models::Entity;

/// Request para generar un puzzle de contemporáneos
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "persons": [
///     { "id": "1", "name": "Goethe", "birthYear": 1749, "deathYear": 1832, "category": "literatura" },
///     { "id": "2", "name": "Beethoven", "birthYear": 1770, "deathYear": 1827 },
///     { "id": "3", "name": "Marie Curie", "birthYear": 1867, "deathYear": 1934 },
///     { "id": "4", "name": "Einstein", "birthYear": 1879, "deathYear": 1955 }
///   ],
///   "seed": 42,
///   "target": 4
/// }
/// ```
///
/// # Campos:
/// - `persons`: pool de personajes (requerido). `deathYear` ausente = sigue vivo
/// - `seed`: semilla opcional para reproducir el mismo puzzle
/// - `target`: cantidad objetivo de personajes en el puzzle (opcional, por defecto el de la config)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingRequest {
    pub persons: Vec<Entity>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub target: Option<usize>,
}

/// Request para verificar una respuesta del usuario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub submitted: Vec<Vec<String>>,
    pub correct: Vec<Vec<String>>,
}

pub fn parse_grouping_request(json_str: &str) -> Result<GroupingRequest> {
    let req: GroupingRequest = serde_json::from_str(json_str)?;
    validate_entities(&req.persons)?;
    Ok(req)
}

pub fn parse_grouping_value(value: serde_json::Value) -> Result<GroupingRequest> {
    let req: GroupingRequest = serde_json::from_value(value)?;
    validate_entities(&req.persons)?;
    Ok(req)
}

/// El motor asume entrada bien formada; esta es la validación del lado del llamador.
pub fn validate_entities(entities: &[Entity]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entities.len());
    for (index, e) in entities.iter().enumerate() {
        if e.id.trim().is_empty() {
            return Err(ContempoError::InvalidEntity { index, reason: "id vacío".to_string() });
        }
        if let Some(death) = e.death_year {
            if death < e.birth_year {
                return Err(ContempoError::InvalidEntity {
                    index,
                    reason: format!("deathYear {} anterior a birthYear {}", death, e.birth_year),
                });
            }
        }
        if !seen.insert(e.id.as_str()) {
            return Err(ContempoError::DuplicateId(e.id.clone()));
        }
    }
    Ok(())
}
