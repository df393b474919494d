// Predicado de contemporaneidad entre dos personajes.
use chrono::Datelike;

use crate::models::Entity;

/// Año calendario actual (UTC).
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Año de muerte registrado o, si sigue vivo, `current_year`.
pub fn effective_death_at(e: &Entity, current_year: i32) -> i32 {
    e.death_year.unwrap_or(current_year)
}

pub fn effective_death(e: &Entity) -> i32 {
    effective_death_at(e, current_year())
}

/// True si los intervalos [nacimiento, muerte efectiva] se solapan (extremos incluidos).
/// No se evalúa para `a == b`.
pub fn is_contemporary_at(a: &Entity, b: &Entity, current_year: i32) -> bool {
    a.birth_year <= effective_death_at(b, current_year) && b.birth_year <= effective_death_at(a, current_year)
}

pub fn is_contemporary(a: &Entity, b: &Entity) -> bool {
    is_contemporary_at(a, b, current_year())
}
