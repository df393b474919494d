use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::algorithm::{ChronologicalFallback, check_answer, generate_grouping_question};
use crate::api_json::{CheckRequest, GroupingRequest, parse_grouping_value};
use crate::config::{EngineConfig, ServerConfig};
use crate::error::ContempoError;
use crate::models::Entity;

/// Estado compartido (sólo lectura) entre workers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: EngineConfig,
    pub server: ServerConfig,
}

/// POST /grouping
/// Genera un puzzle de contemporáneos (o la pregunta de respaldo) a partir del pool recibido.
async fn grouping_handler(state: web::Data<AppState>, body: web::Json<serde_json::Value>) -> impl Responder {
    let req: GroupingRequest = match parse_grouping_value(body.into_inner()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("failed to parse input: {}", e)})),
    };

    if req.persons.len() > state.server.max_pool {
        let err = ContempoError::PoolTooLarge { size: req.persons.len(), max: state.server.max_pool };
        return HttpResponse::BadRequest().json(json!({"error": err.to_string()}));
    }

    let engine = match req.target {
        Some(t) => {
            let cfg = state.engine.with_target(t);
            if let Err(e) = cfg.validate() {
                return HttpResponse::BadRequest().json(json!({"error": format!("invalid target: {}", e)}));
            }
            cfg
        }
        None => state.engine.clone(),
    };

    let pool: Vec<Entity> = req.persons;
    let seed = req.seed;
    tracing::debug!(pool = pool.len(), ?seed, "POST /grouping");

    // CPU puro: fuera del reactor
    let blocking_handle = tokio::task::spawn_blocking(move || {
        let fallback = ChronologicalFallback::default();
        match seed {
            Some(s) => generate_grouping_question(&pool, &engine, &fallback, &mut StdRng::seed_from_u64(s)),
            None => generate_grouping_question(&pool, &engine, &fallback, &mut rand::rng()),
        }
    });

    match blocking_handle.await {
        Ok(question) => HttpResponse::Ok().json(question),
        Err(e) => {
            tracing::error!(error = %e, "grouping task failed");
            HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)}))
        }
    }
}

/// POST /grouping/check
/// Compara la respuesta del usuario con los grupos correctos (normalizando ambos).
async fn check_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let req: CheckRequest = match serde_json::from_value(body.into_inner()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };
    HttpResponse::Ok().json(check_answer(&req.submitted, &req.correct))
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

async fn help_handler(state: web::Data<AppState>) -> impl Responder {
    let example = GroupingRequest {
        persons: vec![
            Entity::new("1", 1800, Some(1850)),
            Entity::new("2", 1805, Some(1855)),
            Entity::new("3", 1900, Some(1950)),
            Entity::new("4", 1905, Some(1955)),
        ],
        seed: Some(42),
        target: None,
    };

    let help = json!({
        "description": concat!(
            "API de puzzles de contemporáneos. POST /grouping recibe un pool de personajes y devuelve ",
            "grupos cuyos miembros coincidieron en vida, separados entre sí. Si no se puede armar el ",
            "puzzle devuelve una pregunta de orden cronológico (type=fallback)."
        ),
        "post_example": example,
        "check_example": {"submitted": [["2", "1"], ["4", "3"]], "correct": [["1", "2"], ["3", "4"]]},
        "min_pool": state.engine.min_pool,
        "target_total": state.engine.target_total,
        "max_pool": state.server.max_pool
    });

    HttpResponse::Ok().json(help)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/grouping", web::post().to(grouping_handler))
        .route("/grouping/check", web::post().to(check_handler))
        .route("/health", web::get().to(health_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(state: AppState) -> std::io::Result<()> {
    let bind_addr = state.server.bind.clone();
    tracing::info!(bind = %bind_addr, "iniciando servidor");
    let data = web::Data::new(state);
    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure_routes))
        .bind(bind_addr)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn state() -> AppState {
        AppState {
            engine: EngineConfig { current_year: Some(2024), ..EngineConfig::default() },
            server: ServerConfig { bind: "127.0.0.1:0".to_string(), max_pool: 10 },
        }
    }

    #[actix_web::test]
    async fn test_grouping_dos_parejas() {
        let app = test::init_service(App::new().app_data(web::Data::new(state())).configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/grouping")
            .set_json(json!({
                "persons": [
                    {"id": "1", "name": "A", "birthYear": 1800, "deathYear": 1850},
                    {"id": "2", "name": "B", "birthYear": 1805, "deathYear": 1855},
                    {"id": "3", "name": "C", "birthYear": 1900, "deathYear": 1950},
                    {"id": "4", "name": "D", "birthYear": 1905, "deathYear": 1955}
                ],
                "seed": 1
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["type"], "grouping");
        assert_eq!(body["persons"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(body["correctGroups"].as_array().map(|a| a.len()), Some(2));
        assert!(body["persons"][0]["birthYear"].is_number());
    }

    #[actix_web::test]
    async fn test_grouping_sin_semilla() {
        // sin semilla se usa el rng del hilo; dos parejas separables dan siempre el mismo reparto
        let app = test::init_service(App::new().app_data(web::Data::new(state())).configure(configure_routes)).await;
        for _ in 0..5 {
            let req = test::TestRequest::post()
                .uri("/grouping")
                .set_json(json!({"persons": [
                    {"id": "1", "birthYear": 1800, "deathYear": 1850},
                    {"id": "2", "birthYear": 1805, "deathYear": 1855},
                    {"id": "3", "birthYear": 1900, "deathYear": 1950},
                    {"id": "4", "birthYear": 1905, "deathYear": 1955}
                ]}))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["type"], "grouping");
            assert_eq!(body["correctGroups"].as_array().map(|a| a.len()), Some(2));
        }
    }

    #[actix_web::test]
    async fn test_grouping_pool_chico_usa_respaldo() {
        let app = test::init_service(App::new().app_data(web::Data::new(state())).configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/grouping")
            .set_json(json!({"persons": [
                {"id": "1", "birthYear": 1800, "deathYear": 1850},
                {"id": "2", "birthYear": 1805, "deathYear": 1855},
                {"id": "3", "birthYear": 1900, "deathYear": 1950}
            ]}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["type"], "fallback");
        assert_eq!(body["correctOrder"], json!(["1", "2", "3"]));
    }

    #[actix_web::test]
    async fn test_grouping_rechaza_entrada_invalida() {
        let app = test::init_service(App::new().app_data(web::Data::new(state())).configure(configure_routes)).await;
        let dup = test::TestRequest::post()
            .uri("/grouping")
            .set_json(json!({"persons": [{"id": "1", "birthYear": 1800}, {"id": "1", "birthYear": 1900}]}))
            .to_request();
        let resp = test::call_service(&app, dup).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let many: Vec<serde_json::Value> =
            (0..11).map(|i| json!({"id": format!("p{}", i), "birthYear": 1800})).collect();
        let big = test::TestRequest::post().uri("/grouping").set_json(json!({"persons": many})).to_request();
        let resp = test::call_service(&app, big).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_check_answer() {
        let app = test::init_service(App::new().app_data(web::Data::new(state())).configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/grouping/check")
            .set_json(json!({"submitted": [["4", "3"], ["2", "1"]], "correct": [["1", "2"], ["3", "4"]]}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isCorrect"], true);
    }

    #[actix_web::test]
    async fn test_health_y_help() {
        let app = test::init_service(App::new().app_data(web::Data::new(state())).configure(configure_routes)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/help").to_request()).await;
        assert_eq!(body["min_pool"], 4);
    }
}
