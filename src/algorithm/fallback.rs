// Generador de respaldo: se usa cuando no se puede armar el puzzle de grupos.
use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::models::{Entity, EntitySummary, FallbackQuestion};

/// Colaborador que produce una pregunta alternativa a partir del pool.
pub trait FallbackGenerator {
    fn generate(&self, pool: &[Entity], rng: &mut dyn RngCore) -> FallbackQuestion;
}

/// Pregunta de orden cronológico: ordenar por año de nacimiento.
#[derive(Debug, Clone)]
pub struct ChronologicalFallback {
    pub size: usize,
}

impl Default for ChronologicalFallback {
    fn default() -> Self {
        ChronologicalFallback { size: 4 }
    }
}

pub const CHRONOLOGICAL_KIND: &str = "chronological_order";

impl FallbackGenerator for ChronologicalFallback {
    fn generate(&self, pool: &[Entity], rng: &mut dyn RngCore) -> FallbackQuestion {
        let mut picked: Vec<&Entity> = pool.choose_multiple(rng, self.size).collect();
        picked.sort_by(|a, b| a.birth_year.cmp(&b.birth_year).then_with(|| a.id.cmp(&b.id)));

        FallbackQuestion {
            kind: CHRONOLOGICAL_KIND.to_string(),
            persons: picked.iter().map(|e| EntitySummary::from(*e)).collect(),
            correct_order: picked.iter().map(|e| e.id.clone()).collect(),
        }
    }
}
