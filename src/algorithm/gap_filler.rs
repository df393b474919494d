// gap_filler.rs - Relleno con singletons hasta alcanzar el objetivo de personajes
use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::clique::Clique;
use crate::algorithm::combination::total_members;
use crate::algorithm::graph::OverlapGraph;

/// Agrega grupos de un solo personaje tomados al azar entre los sobrantes que
/// no solapan con nadie ya comprometido (incluidos los singletons recién
/// agregados), hasta llegar a `target` o agotar candidatos. Un relleno parcial
/// no es error.
pub fn fill_gaps<R: Rng + ?Sized>(
    graph: &OverlapGraph<'_>,
    combination: Vec<Clique>,
    target: usize,
    rng: &mut R,
) -> Vec<Clique> {
    let current = total_members(&combination);
    if current >= target {
        return combination;
    }

    let used: HashSet<usize> = combination.iter().flat_map(|c| c.members().iter().copied()).collect();
    let mut committed: Vec<usize> = used.iter().copied().collect();

    let mut eligible: Vec<usize> = (0..graph.len())
        .filter(|i| !used.contains(i))
        .filter(|&i| !graph.touches_any(i, &committed))
        .collect();
    eligible.shuffle(rng);

    let needed = target - current;
    let mut out = combination;
    let mut added = 0usize;
    for idx in eligible {
        if added >= needed {
            break;
        }
        // dos sobrantes pueden ser contemporáneos entre sí
        if graph.touches_any(idx, &committed) {
            continue;
        }
        committed.push(idx);
        out.push(Clique::singleton(idx));
        added += 1;
    }

    tracing::debug!(needed, added, total = current + added, "relleno con singletons");
    out
}
