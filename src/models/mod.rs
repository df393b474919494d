// Estructuras de datos principales
use serde::{Deserialize, Serialize};

/// Personaje histórico tal como llega del catálogo externo.
///
/// Sólo `id`, `birth_year` y `death_year` participan en el algoritmo; el resto
/// se transporta intacto hasta la respuesta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub birth_year: i32,
    /// `None` => sigue con vida (se usa el año actual como fin del intervalo)
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Entity {
    /// Constructor mínimo usado por tests y demos; el nombre repite el id.
    pub fn new(id: impl Into<String>, birth_year: i32, death_year: Option<i32>) -> Self {
        let id = id.into();
        Entity {
            name: id.clone(),
            id,
            birth_year,
            death_year,
            category: String::new(),
            image_url: None,
        }
    }
}

/// Proyección de `Entity` que se emite en `persons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub id: String,
    pub name: String,
    pub birth_year: i32,
    pub death_year: Option<i32>,
    pub category: String,
    pub image_url: Option<String>,
}

impl From<&Entity> for EntitySummary {
    fn from(e: &Entity) -> Self {
        EntitySummary {
            id: e.id.clone(),
            name: e.name.clone(),
            birth_year: e.birth_year,
            death_year: e.death_year,
            category: e.category.clone(),
            image_url: e.image_url.clone(),
        }
    }
}

/// Pregunta de agrupación de contemporáneos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingQuiz {
    pub persons: Vec<EntitySummary>,
    pub correct_groups: Vec<Vec<String>>,
}

impl GroupingQuiz {
    pub fn total_persons(&self) -> usize {
        self.correct_groups.iter().map(|g| g.len()).sum()
    }
}

/// Pregunta alternativa que entrega el generador de respaldo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackQuestion {
    pub kind: String,
    pub persons: Vec<EntitySummary>,
    pub correct_order: Vec<String>,
}

/// Resultado del orquestador: o bien el puzzle de grupos o la pregunta de respaldo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizQuestion {
    Grouping(GroupingQuiz),
    Fallback(FallbackQuestion),
}

impl QuizQuestion {
    pub fn as_grouping(&self) -> Option<&GroupingQuiz> {
        match self {
            QuizQuestion::Grouping(g) => Some(g),
            QuizQuestion::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, QuizQuestion::Fallback(_))
    }
}
