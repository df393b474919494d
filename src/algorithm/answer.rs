// Normalización y comparación de respuestas de agrupación.
use serde::{Deserialize, Serialize};

/// Ordena los ids dentro de cada grupo y luego los grupos por su primer id.
/// Un grupo vacío ordena antes que cualquier otro.
pub fn normalize_groups(groups: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            let mut g = g.clone();
            g.sort();
            g
        })
        .collect();
    out.sort_by(|a, b| a.first().cmp(&b.first()));
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCheck {
    pub is_correct: bool,
    pub normalized_submitted: Vec<Vec<String>>,
    pub normalized_correct: Vec<Vec<String>>,
}

pub fn check_answer(submitted: &[Vec<String>], correct: &[Vec<String>]) -> AnswerCheck {
    let normalized_submitted = normalize_groups(submitted);
    let normalized_correct = normalize_groups(correct);
    AnswerCheck {
        is_correct: normalized_submitted == normalized_correct,
        normalized_submitted,
        normalized_correct,
    }
}
