//! REST handlers under `/api`. The service sits behind one `RwLock`: lookups take
//! the read lock, upsert and delete take the write lock for their whole read-then-write.

use crate::logic::PlayerService;
use crate::models::{PlayerError, PlayerScoreRequest};
use crate::store::{MemoryStore, StoreError};
use actix_web::{
    delete, error, get, post,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::Serialize;
use std::sync::RwLock;

/// Shared service handed to every handler.
pub type AppState = Data<RwLock<PlayerService<MemoryStore>>>;

/// Fresh state backed by an empty in-memory store.
pub fn new_state() -> AppState {
    Data::new(RwLock::new(PlayerService::new(MemoryStore::new())))
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

fn error_response(err: PlayerError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        PlayerError::PlayerNotFound(_) => HttpResponse::NotFound().json(body),
        PlayerError::Storage(StoreError::Conflict { .. }) => HttpResponse::Conflict().json(body),
        PlayerError::Storage(StoreError::Unavailable(_)) => {
            log::error!("{}", err);
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}

/// The game client reads `message` on a 400, so validation errors carry both keys.
fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message, "message": message }))
}

/// Answer unparsable JSON bodies with the same 400 shape as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "player-scores",
    })
}

/// All players, best score first.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.list_players() {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(e),
    }
}

/// Score of one player (404 if unknown).
#[get("/api/players/{nickname}/score")]
async fn api_get_score(state: AppState, nickname: Path<String>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_score(&nickname) {
        Ok(score) => HttpResponse::Ok().json(score),
        Err(e) => error_response(e),
    }
}

/// Create the player or update their score.
#[post("/api/players/score")]
async fn api_upsert_score(state: AppState, body: Json<PlayerScoreRequest>) -> HttpResponse {
    let request = match body.validate() {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejected score request: {}", e);
            return bad_request(e.to_string());
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.upsert_score(&request.nickname, request.score) {
        Ok(score) => HttpResponse::Ok().json(score),
        Err(e) => {
            log::warn!("Score upsert for '{}' failed: {}", request.nickname, e);
            error_response(e)
        }
    }
}

#[delete("/api/players/{nickname}/score")]
async fn api_delete_player(state: AppState, nickname: Path<String>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete(&nickname) {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(e) => error_response(e),
    }
}

#[get("/api/players/{nickname}/exists")]
async fn api_player_exists(state: AppState, nickname: Path<String>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.exists(&nickname))
}

/// Register every route and the JSON extractor config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(api_health)
        .service(api_list_players)
        .service(api_get_score)
        .service(api_upsert_score)
        .service(api_delete_player)
        .service(api_player_exists);
}
