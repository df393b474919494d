/// clique.rs - Enumeración de cliques acotadas (tamaño 1, 2 y 3)
use crate::algorithm::graph::OverlapGraph;

/// Tamaño máximo de grupo que se enumera; grupos de 4+ no sirven al quiz.
pub const MAX_CLIQUE_SIZE: usize = 3;

/// Clique candidata: índices (ascendentes) sobre las entidades del grafo.
///
/// Es una lista propia e inmutable; "quitar" o "agregar" miembros se expresa
/// construyendo una clique nueva.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clique {
    members: Vec<usize>,
}

impl Clique {
    pub fn new(mut members: Vec<usize>) -> Self {
        members.sort_unstable();
        Clique { members }
    }

    pub fn singleton(idx: usize) -> Self {
        Clique { members: vec![idx] }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.members.contains(&idx)
    }

    /// Ids de los miembros, en el mismo orden que `members`.
    pub fn ids(&self, graph: &OverlapGraph<'_>) -> Vec<String> {
        self.members.iter().map(|&i| graph.entity(i).id.clone()).collect()
    }

    /// Todos los pares internos son contemporáneos (trivial para tamaño 1).
    pub fn is_valid(&self, graph: &OverlapGraph<'_>) -> bool {
        self.members
            .iter()
            .enumerate()
            .all(|(k, &a)| self.members[k + 1..].iter().all(|&b| graph.are_adjacent(a, b)))
    }
}

/// Lista plana de candidatas: primero singletons, luego pares, luego tríos.
///
/// No se deduplica por conjunto de vértices: un par contenido en un trío
/// aparece igualmente como par. O(N^3) por el barrido de tríos.
pub fn enumerate_cliques(graph: &OverlapGraph<'_>) -> Vec<Clique> {
    let n = graph.len();
    let mut singles: Vec<Clique> = Vec::with_capacity(n);
    let mut pairs: Vec<Clique> = Vec::new();
    let mut triples: Vec<Clique> = Vec::new();

    for i in 0..n {
        singles.push(Clique::singleton(i));

        // vecinos mayores que i: cada par/trío se genera una sola vez
        let upper: Vec<usize> = graph.neighbor_indices(i).into_iter().filter(|&j| j > i).collect();
        for (pos, &j) in upper.iter().enumerate() {
            pairs.push(Clique { members: vec![i, j] });
            for &k in upper[pos + 1..].iter() {
                if graph.are_adjacent(j, k) {
                    triples.push(Clique { members: vec![i, j, k] });
                }
            }
        }
    }

    tracing::debug!(singles = singles.len(), pairs = pairs.len(), triples = triples.len(), "cliques enumeradas");

    let mut out = singles;
    out.extend(pairs);
    out.extend(triples);
    out
}
