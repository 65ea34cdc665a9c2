//! Single binary web server: JSON API over an in-memory tournament store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use table_tennis_tournament::{
    advance_bracket, delete_game, edit_game, generate_round_robin_round, import_players_csv,
    record_game, seed_bracket, standings, start_tournament, swap_players, sync_play_in, GameId,
    MatchId, PairingOrder, Player, PlayerId, Slot, SwapScope, Tournament, TournamentConfig,
    TournamentError, TournamentId,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(flatten)]
    config: TournamentConfig,
    /// Player names.
    #[serde(default)]
    players: Vec<String>,
    /// Alternative to `players`: CSV text with a `name` (and optional `id`) column.
    #[serde(default)]
    players_csv: Option<String>,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ActivePlayersBody {
    player_ids: Vec<PlayerId>,
}

#[derive(Deserialize)]
struct GenerateRoundBody {
    #[serde(default)]
    order: PairingOrder,
}

#[derive(Deserialize)]
struct GameScoresBody {
    score_1: u32,
    score_2: u32,
}

#[derive(Deserialize)]
struct SwapPlayersBody {
    player_1: Slot,
    player_2: Slot,
    scope: SwapScope,
}

#[derive(Deserialize)]
struct SeedBracketBody {
    #[serde(default = "default_with_main_bracket")]
    with_main_bracket: bool,
}

fn default_with_main_bracket() -> bool {
    true
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

/// Path segments: tournament id, match id and game id.
#[derive(Deserialize)]
struct TournamentGamePath {
    id: TournamentId,
    match_id: MatchId,
    game_id: GameId,
}

/// Run `action` against a stored tournament and answer with the updated tournament.
///
/// The write lock is held for the whole read-modify-write, so edits to one tournament are serialized.
fn with_tournament<F>(state: &AppState, id: TournamentId, action: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    // Work on a copy so a rejected action leaves the stored tournament untouched.
    let mut draft = t.clone();
    match action(&mut draft) {
        Ok(()) => {
            *t = draft;
            HttpResponse::Ok().json(t)
        }
        Err(e) => {
            log::debug!("Tournament {} rejected action: {}", id, e);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "table-tennis-tournament",
    })
}

/// Create a tournament and pair round robin round 1 (returns it with id).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let players = match body.players_csv {
        Some(csv_text) => import_players_csv(csv_text.as_bytes()),
        None => Ok(body
            .players
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(Player::new)
            .collect()),
    };
    let tournament = match players
        .and_then(|players| start_tournament(body.config, players, &mut rand::thread_rng()))
    {
        Ok(t) => t,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({})", id, tournament.name);
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |_| Ok(()))
}

/// Standings over all recorded matches.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(standings(&entry.tournament))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Add a late player; they join pairings from the next round.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let id = t.add_player(body.name.as_str())?.id.clone();
        if let Some(active) = t.active_players.as_mut() {
            active.push(id);
        }
        Ok(())
    })
}

/// Restrict future pairings and seeding to the given players.
#[put("/api/tournaments/{id}/active-players")]
async fn api_set_active_players(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<ActivePlayersBody>,
) -> HttpResponse {
    let ids = body.into_inner().player_ids;
    with_tournament(&state, path.id, move |t| t.set_active_players(ids))
}

/// Pair the next round robin round.
#[post("/api/tournaments/{id}/rounds")]
async fn api_generate_round(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<GenerateRoundBody>>,
) -> HttpResponse {
    let order = body.map(|b| b.order).unwrap_or_default();
    with_tournament(&state, path.id, |t| {
        let matches = generate_round_robin_round(t, order, &mut rand::thread_rng())?;
        t.matches.extend(matches);
        Ok(())
    })
}

/// Record a game for a match.
#[post("/api/tournaments/{id}/matches/{match_id}/games")]
async fn api_add_game(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<GameScoresBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        record_game(t, path.match_id, body.score_1, body.score_2).map(|_| ())
    })
}

/// Correct the scores of a recorded game.
#[put("/api/tournaments/{id}/matches/{match_id}/games/{game_id}")]
async fn api_edit_game(
    state: AppState,
    path: Path<TournamentGamePath>,
    body: Json<GameScoresBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        edit_game(t, path.match_id, path.game_id, body.score_1, body.score_2)
    })
}

/// Delete a recorded game.
#[delete("/api/tournaments/{id}/matches/{match_id}/games/{game_id}")]
async fn api_delete_game(state: AppState, path: Path<TournamentGamePath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| delete_game(t, path.match_id, path.game_id))
}

/// Change the players of an unplayed match; displaced players cascade through the round.
#[put("/api/tournaments/{id}/matches/{match_id}/players")]
async fn api_swap_players(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<SwapPlayersBody>,
) -> HttpResponse {
    let body = body.into_inner();
    with_tournament(&state, path.id, |t| {
        t.matches = swap_players(&t.matches, path.match_id, body.player_1, body.player_2, body.scope)?;
        Ok(())
    })
}

/// Seed the bracket from round robin results (no-op if already seeded).
#[post("/api/tournaments/{id}/bracket/seed")]
async fn api_seed_bracket(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<SeedBracketBody>>,
) -> HttpResponse {
    let with_main_bracket = body.map(|b| b.with_main_bracket).unwrap_or_else(default_with_main_bracket);
    with_tournament(&state, path.id, |t| {
        seed_bracket(t, with_main_bracket, &mut rand::thread_rng()).apply(t);
        sync_play_in(&mut t.matches);
        Ok(())
    })
}

/// Build the next bracket round, or complete the tournament after the final.
#[post("/api/tournaments/{id}/bracket/advance")]
async fn api_advance_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        advance_bracket(t).apply(t);
        Ok(())
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_standings)
            .service(api_add_player)
            .service(api_set_active_players)
            .service(api_generate_round)
            .service(api_add_game)
            .service(api_edit_game)
            .service(api_delete_game)
            .service(api_swap_players)
            .service(api_seed_bracket)
            .service(api_advance_bracket)
    })
    .bind(bind)?
    .run()
    .await
}
