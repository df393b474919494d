// combination.rs - Selección heurística de grupos separables (greedy multi-seed)
//
// Se busca un conjunto de cliques que sean disjuntas en vértices Y que ningún
// miembro de una clique sea contemporáneo de un miembro de otra. Es una
// búsqueda acotada: a lo más `max_seed_attempts` semillas, corte temprano al
// alcanzar `early_exit_total` personajes. No se garantiza el óptimo.
use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::clique::Clique;
use crate::algorithm::graph::OverlapGraph;
use crate::config::EngineConfig;

/// Total de personajes cubiertos por una combinación.
pub fn total_members(combination: &[Clique]) -> usize {
    combination.iter().map(|c| c.len()).sum()
}

/// `candidate` puede sumarse a `combination`: no repite personajes y ninguno
/// de sus miembros solapa con un miembro ya elegido.
pub fn is_compatible(graph: &OverlapGraph<'_>, combination: &[Clique], candidate: &Clique) -> bool {
    candidate.members().iter().all(|&v| {
        combination.iter().all(|chosen| {
            chosen.members().iter().all(|&u| u != v && !graph.are_adjacent(u, v))
        })
    })
}

/// Ordena las candidatas por tamaño descendente; los empates quedan en orden
/// aleatorio (barajar y luego orden estable).
pub fn sort_candidates<'c, R: Rng + ?Sized>(cliques: &'c [Clique], rng: &mut R) -> Vec<&'c Clique> {
    let mut sorted: Vec<&Clique> = cliques.iter().collect();
    sorted.shuffle(rng);
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}

/// Crece una combinación a partir de `sorted[seed]` recorriendo el resto en orden.
fn grow_from_seed(graph: &OverlapGraph<'_>, sorted: &[&Clique], seed: usize, max_groups: usize) -> Vec<Clique> {
    let mut combination: Vec<Clique> = vec![sorted[seed].clone()];
    for (pos, cand) in sorted.iter().enumerate() {
        if combination.len() >= max_groups {
            break;
        }
        if pos == seed {
            continue;
        }
        if is_compatible(graph, &combination, cand) {
            combination.push((*cand).clone());
        }
    }
    combination
}

/// Mejor combinación encontrada (vacía si no hay candidatas).
pub fn select_combination<R: Rng + ?Sized>(
    graph: &OverlapGraph<'_>,
    cliques: &[Clique],
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<Clique> {
    if cliques.is_empty() {
        return Vec::new();
    }

    let sorted = sort_candidates(cliques, rng);
    let attempts = config.max_seed_attempts.min(sorted.len());

    let mut best: Vec<Clique> = Vec::new();
    let mut best_total = 0usize;

    for seed in 0..attempts {
        let combination = grow_from_seed(graph, &sorted, seed, config.max_groups);
        let total = total_members(&combination);
        if total > best_total {
            tracing::trace!(seed, total, groups = combination.len(), "nueva mejor combinación");
            best_total = total;
            best = combination;
        }
        if best_total >= config.early_exit_total {
            break;
        }
    }

    tracing::debug!(
        candidates = sorted.len(),
        attempts,
        groups = best.len(),
        covered = best_total,
        "combinación seleccionada"
    );
    best
}
