// Módulo de alto nivel del motor de agrupación de contemporáneos
pub mod answer;
pub mod clique;
pub mod combination;
pub mod fallback;
pub mod gap_filler;
pub mod graph;
pub mod grouping;
pub mod overlap;

// API pública reexportada
pub use answer::{AnswerCheck, check_answer, normalize_groups};
pub use clique::{Clique, MAX_CLIQUE_SIZE, enumerate_cliques};
pub use combination::select_combination;
pub use fallback::{ChronologicalFallback, FallbackGenerator};
pub use gap_filler::fill_gaps;
pub use graph::{OverlapGraph, build_overlap_graph, build_overlap_graph_at};
pub use grouping::{FallbackReason, build_grouping, generate_grouping_question};
pub use overlap::{effective_death, is_contemporary, is_contemporary_at};
