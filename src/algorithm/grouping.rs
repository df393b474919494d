// grouping.rs - Orquestador del puzzle "agrupa a los contemporáneos"
//
// Pipeline:
//   1. build_overlap_graph   (quién solapa con quién)
//   2. enumerate_cliques     (candidatas de tamaño 1..=3)
//   3. select_combination    (hasta 3 grupos separables, greedy multi-seed)
//   4. fill_gaps             (singletons hasta el objetivo)
// Precondición: pool >= min_pool. Postcondición: total >= target_total.
// Si alguna no se cumple se delega en el generador de respaldo.
use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::algorithm::clique::{Clique, enumerate_cliques};
use crate::algorithm::combination::{select_combination, total_members};
use crate::algorithm::fallback::FallbackGenerator;
use crate::algorithm::gap_filler::fill_gaps;
use crate::algorithm::graph::{OverlapGraph, build_overlap_graph_at};
use crate::algorithm::overlap::current_year;
use crate::config::EngineConfig;
use crate::models::{Entity, EntitySummary, GroupingQuiz, QuizQuestion};

/// Motivo por el que no se pudo construir el puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    PoolTooSmall { size: usize, min: usize },
    TooFewCovered { covered: usize, target: usize },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::PoolTooSmall { size, min } => write!(f, "pool de {} personajes (mínimo {})", size, min),
            FallbackReason::TooFewCovered { covered, target } => {
                write!(f, "sólo {} personajes agrupados (objetivo {})", covered, target)
            }
        }
    }
}

/// Ejecuta el pipeline completo. `Err` indica que corresponde usar el respaldo.
pub fn build_grouping<R: Rng + ?Sized>(
    pool: &[Entity],
    config: &EngineConfig,
    rng: &mut R,
) -> Result<GroupingQuiz, FallbackReason> {
    if pool.len() < config.min_pool {
        return Err(FallbackReason::PoolTooSmall { size: pool.len(), min: config.min_pool });
    }

    let year = config.current_year.unwrap_or_else(current_year);
    let graph = build_overlap_graph_at(pool, year);
    let cliques = enumerate_cliques(&graph);
    let combination = select_combination(&graph, &cliques, config, rng);
    debug!(groups = combination.len(), covered = total_members(&combination), "fase de combinación terminada");

    let groups = fill_gaps(&graph, combination, config.target_total, rng);
    let covered = total_members(&groups);
    if covered < config.target_total {
        return Err(FallbackReason::TooFewCovered { covered, target: config.target_total });
    }

    Ok(to_quiz(&graph, &groups))
}

/// Igual que `build_grouping` pero resolviendo los casos degenerados con `fallback`.
pub fn generate_grouping_question<R, F>(
    pool: &[Entity],
    config: &EngineConfig,
    fallback: &F,
    rng: &mut R,
) -> QuizQuestion
where
    R: Rng,
    F: FallbackGenerator + ?Sized,
{
    match build_grouping(pool, config, rng) {
        Ok(quiz) => {
            info!(
                groups = quiz.correct_groups.len(),
                persons = quiz.persons.len(),
                "puzzle de contemporáneos generado"
            );
            QuizQuestion::Grouping(quiz)
        }
        Err(reason) => {
            warn!(%reason, "no se pudo armar el puzzle; usando pregunta de respaldo");
            QuizQuestion::Fallback(fallback.generate(pool, rng))
        }
    }
}

// Grupos en orden de selección; `persons` sigue ese mismo orden.
fn to_quiz(graph: &OverlapGraph<'_>, groups: &[Clique]) -> GroupingQuiz {
    let persons = groups
        .iter()
        .flat_map(|g| g.members().iter().map(|&i| EntitySummary::from(graph.entity(i))))
        .collect();
    let correct_groups = groups.iter().map(|g| g.ids(graph)).collect();
    GroupingQuiz { persons, correct_groups }
}
