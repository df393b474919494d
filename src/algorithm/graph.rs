// graph.rs - Grafo de solapamiento (quién fue contemporáneo de quién)
use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::algorithm::overlap::{current_year, is_contemporary_at};
use crate::models::Entity;

/// Grafo no dirigido sobre los personajes de una invocación.
///
/// Los vértices son índices sobre el slice original (`nodes[i]` corresponde a
/// `entities[i]`). Se construye una sola vez y después sólo se consulta; la
/// matriz densa `adj` responde `are_adjacent` en O(1) para la búsqueda de
/// tríos y combinaciones.
pub struct OverlapGraph<'a> {
    entities: &'a [Entity],
    graph: UnGraph<usize, ()>,
    nodes: Vec<NodeIndex>,
    index_by_id: HashMap<&'a str, usize>,
    adj: Vec<Vec<bool>>,
    current_year: i32,
}

/// Construye el grafo usando el año en curso para los personajes vivos.
pub fn build_overlap_graph(entities: &[Entity]) -> OverlapGraph<'_> {
    build_overlap_graph_at(entities, current_year())
}

pub fn build_overlap_graph_at(entities: &[Entity], current_year: i32) -> OverlapGraph<'_> {
    let n = entities.len();
    let mut graph = UnGraph::<usize, ()>::with_capacity(n, n);
    let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
    let mut adj = vec![vec![false; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if is_contemporary_at(&entities[i], &entities[j], current_year) {
                graph.add_edge(nodes[i], nodes[j], ());
                adj[i][j] = true;
                adj[j][i] = true;
            }
        }
    }

    let index_by_id = entities.iter().enumerate().map(|(i, e)| (e.id.as_str(), i)).collect();

    tracing::debug!(vertices = n, edges = graph.edge_count(), current_year, "overlap graph built");

    OverlapGraph { entities, graph, nodes, index_by_id, adj, current_year }
}

impl<'a> OverlapGraph<'a> {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, idx: usize) -> &'a Entity {
        let entities = self.entities;
        &entities[idx]
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Arista entre `i` y `j`. Nunca true para `i == j`.
    #[inline]
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.adj[i][j]
    }

    /// Vecinos de `idx` en orden ascendente.
    pub fn neighbor_indices(&self, idx: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self.graph.neighbors(self.nodes[idx]).map(|n| self.graph[n]).collect();
        out.sort_unstable();
        out
    }

    /// Ids de los contemporáneos de `id` (vacío si el id no existe).
    pub fn neighbors(&self, id: &str) -> HashSet<&'a str> {
        match self.index_of(id) {
            Some(idx) => {
                let entities = self.entities;
                self.neighbor_indices(idx).into_iter().map(|j| entities[j].id.as_str()).collect()
            }
            None => HashSet::new(),
        }
    }

    /// Mapa id -> ids vecinos. Todo personaje aparece como clave, aunque no tenga vecinos.
    pub fn adjacency(&self) -> HashMap<String, HashSet<String>> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let set = self.neighbor_indices(i).into_iter().map(|j| self.entities[j].id.clone()).collect();
                (e.id.clone(), set)
            })
            .collect()
    }

    /// True si `idx` solapa con algún miembro de `members`.
    pub fn touches_any(&self, idx: usize, members: &[usize]) -> bool {
        members.iter().any(|&m| self.adj[idx][m])
    }
}
