//! Invariantes del puzzle sobre pools aleatorios (muchas semillas).
use std::collections::HashSet;

use contemporaneos::algorithm::{FallbackReason, build_grouping, check_answer, is_contemporary_at};
use contemporaneos::config::EngineConfig;
use contemporaneos::models::{Entity, GroupingQuiz};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const YEAR: i32 = 2024;

fn random_pool(rng: &mut StdRng) -> Vec<Entity> {
    let n = rng.random_range(4..=14);
    (0..n)
        .map(|i| {
            let birth = rng.random_range(1000..2000);
            let death = if birth > 1930 && rng.random_bool(0.5) {
                None
            } else {
                Some(birth + rng.random_range(20..90))
            };
            Entity::new(format!("e{}", i), birth, death.map(|d: i32| d.min(YEAR)))
        })
        .collect()
}

fn check_invariants(pool: &[Entity], quiz: &GroupingQuiz) {
    let by_id = |id: &str| pool.iter().find(|e| e.id == id).expect("id del pool");

    // grupos no vacíos, tamaño <= 3, disjuntos
    let mut seen: HashSet<&str> = HashSet::new();
    for g in &quiz.correct_groups {
        assert!(!g.is_empty());
        assert!(g.len() <= 3);
        for id in g {
            assert!(seen.insert(id.as_str()), "id repetido entre grupos: {}", id);
        }
    }

    // persons = unión exacta de los grupos
    let persons: HashSet<&str> = quiz.persons.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(persons, seen);
    assert_eq!(quiz.persons.len(), seen.len());
    assert!(quiz.total_persons() >= 4);

    // todos contemporáneos dentro de un grupo
    for g in &quiz.correct_groups {
        for (k, a) in g.iter().enumerate() {
            for b in &g[k + 1..] {
                assert!(is_contemporary_at(by_id(a), by_id(b), YEAR), "{} y {} no coinciden", a, b);
            }
        }
    }

    // nadie solapa con alguien de otro grupo
    for (gi, g1) in quiz.correct_groups.iter().enumerate() {
        for g2 in &quiz.correct_groups[gi + 1..] {
            for a in g1 {
                for b in g2 {
                    assert!(!is_contemporary_at(by_id(a), by_id(b), YEAR), "{} y {} solapan entre grupos", a, b);
                }
            }
        }
    }
}

#[test]
fn test_invariantes_sobre_pools_aleatorios() {
    let cfg = EngineConfig { current_year: Some(YEAR), ..EngineConfig::default() };
    let mut generated = 0;
    for seed in 0..300u64 {
        let mut pool_rng = StdRng::seed_from_u64(seed);
        let pool = random_pool(&mut pool_rng);
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        if let Ok(quiz) = build_grouping(&pool, &cfg, &mut rng) {
            check_invariants(&pool, &quiz);
            generated += 1;
        }
    }
    // con intervalos repartidos en mil años la gran mayoría es resoluble
    assert!(generated >= 285, "sólo {} de 300 pools generaron puzzle", generated);
}

// Existe un subconjunto de 4 personajes cuyo subgrafo inducido es unión de
// cliques de tamaño <= 3, es decir, un puzzle válido de 4.
fn has_separable_four(pool: &[Entity]) -> bool {
    let n = pool.len();
    let adj = |i: usize, j: usize| is_contemporary_at(&pool[i], &pool[j], YEAR);
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    let sub = [a, b, c, d];
                    // componente de cada vértice (etiqueta = menor posición alcanzable)
                    let mut comp = [0usize, 1, 2, 3];
                    for _ in 0..3 {
                        for x in 0..4 {
                            for y in 0..4 {
                                if x != y && adj(sub[x], sub[y]) && comp[y] < comp[x] {
                                    comp[x] = comp[y];
                                }
                            }
                        }
                    }
                    let separable = (0..4).all(|label| {
                        let members: Vec<usize> = (0..4).filter(|&x| comp[x] == label).collect();
                        let k = members.len();
                        let edges = members
                            .iter()
                            .enumerate()
                            .map(|(i, &x)| members[i + 1..].iter().filter(|&&y| adj(sub[x], sub[y])).count())
                            .sum::<usize>();
                        k <= 3 && edges == k * k.saturating_sub(1) / 2
                    });
                    if separable {
                        return true;
                    }
                }
            }
        }
    }
    false
}

#[test]
fn test_cobertura_minima_sin_respaldo_evitable() {
    let cfg = EngineConfig { current_year: Some(YEAR), ..EngineConfig::default() };
    let pools = 1000u64;
    let mut generated = 0u64;
    let mut too_few = 0u64;
    let mut avoidable = 0u64;
    for seed in 0..pools {
        let mut pool_rng = StdRng::seed_from_u64(seed);
        let pool = random_pool(&mut pool_rng);
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        match build_grouping(&pool, &cfg, &mut rng) {
            Ok(quiz) => {
                check_invariants(&pool, &quiz);
                generated += 1;
            }
            Err(FallbackReason::TooFewCovered { covered, target }) => {
                assert!(covered < target);
                too_few += 1;
                if has_separable_four(&pool) {
                    avoidable += 1;
                }
            }
            Err(other) => panic!("pool de {} personajes no debería quedar bajo el mínimo: {}", pool.len(), other),
        }
    }
    assert_eq!(generated + too_few, pools);
    assert!(generated * 100 >= pools * 95, "sólo {} de {} pools generaron puzzle", generated, pools);
    // la búsqueda es acotada (max_seed_attempts semillas), así que se tolera
    // a lo más un 1% de respaldos pese a existir un puzzle de 4
    assert!(avoidable * 100 <= pools, "{} respaldos evitables de {} ({} respaldos)", avoidable, pools, too_few);
}

#[test]
fn test_respuesta_permutada_es_correcta() {
    let cfg = EngineConfig { current_year: Some(YEAR), ..EngineConfig::default() };
    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = random_pool(&mut rng);
        let Ok(quiz) = build_grouping(&pool, &cfg, &mut rng) else { continue };

        // el usuario entrega los mismos grupos en cualquier orden
        let mut submitted = quiz.correct_groups.clone();
        for g in submitted.iter_mut() {
            g.shuffle(&mut rng);
        }
        submitted.shuffle(&mut rng);

        let check = check_answer(&submitted, &quiz.correct_groups);
        assert!(check.is_correct);
        assert_eq!(check.normalized_submitted, check.normalized_correct);
    }
}

#[test]
fn test_respuesta_con_un_intercambio_es_incorrecta() {
    let correct = vec![vec!["1".to_string(), "2".to_string()], vec!["3".to_string(), "4".to_string()]];
    let swapped = vec![vec!["1".to_string(), "4".to_string()], vec!["3".to_string(), "2".to_string()]];
    assert!(!check_answer(&swapped, &correct).is_correct);
}
