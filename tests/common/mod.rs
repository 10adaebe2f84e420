#![allow(dead_code)]

use std::collections::HashSet;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tokio::sync::Barrier;

use scoreboard_client::{
    GameType, MatchRecord, MatchStatus, MatchUpdate, NewMatch, NewPlayerStat, Player, PlayerStat,
    ScoreboardClient, StatUpdate, TeamSide,
};

/// In-memory stand-in for the scoreboard backend, with switches to make
/// individual requests fail.
#[derive(Debug, Default)]
pub struct Store {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
    pub stats: Vec<PlayerStat>,

    pub match_updates: Vec<(u32, MatchUpdate)>,
    pub stat_updates: Vec<(u32, StatUpdate)>,

    pub fail_roster: bool,
    /// Match creations allowed before every further one fails.
    pub match_creation_limit: Option<usize>,
    /// Players whose stat row creation fails.
    pub failing_stat_players: HashSet<u32>,
    /// Stat rows whose update fails.
    pub failing_stat_updates: HashSet<u32>,
    /// When set, every stat row creation waits for the barrier's other
    /// parties and fails if they do not arrive within [`BARRIER_TIMEOUT`].
    pub stat_barrier: Option<Arc<Barrier>>,
    /// Number of stat rows that existed as each match was created.
    pub stats_at_match_creation: Vec<usize>,
}

pub const BARRIER_TIMEOUT: Duration = Duration::from_secs(2);

impl Store {
    pub fn with_players(count: u32) -> Self {
        Self {
            players: (1..=count)
                .map(|id| Player {
                    id,
                    name: format!("player{id}"),
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Add an active match with zeroed rows for the given players.
    pub fn seed_match(&mut self, game: GameType, team_a: &[u32], team_b: &[u32]) -> u32 {
        let match_id = self.insert_match(game);
        let sides = team_a
            .iter()
            .map(|&id| (id, TeamSide::A))
            .chain(team_b.iter().map(|&id| (id, TeamSide::B)));
        for (player_id, team) in sides {
            self.insert_stat(NewPlayerStat {
                player_id,
                match_id,
                team,
                role: None,
                kills: 0,
                deaths: 0,
                assists: 0,
            });
        }
        match_id
    }

    /// Hold every stat row creation until `parties` of them are in flight.
    pub fn hold_stat_rows(&mut self, parties: usize) {
        self.stat_barrier = Some(Arc::new(Barrier::new(parties)));
    }

    pub fn match_stats(&self, match_id: u32) -> Vec<PlayerStat> {
        self.stats
            .iter()
            .filter(|s| s.match_id == match_id)
            .cloned()
            .collect()
    }

    fn insert_match(&mut self, game: GameType) -> u32 {
        let id = self.matches.len() as u32 + 1;
        self.matches.push(MatchRecord {
            id,
            game,
            status: MatchStatus::Active,
            score_a: 0,
            score_b: 0,
            created_at: Some(Utc::now()),
        });
        id
    }

    fn insert_stat(&mut self, row: NewPlayerStat) -> PlayerStat {
        let stat = PlayerStat {
            id: self.stats.len() as u32 + 1,
            player_id: row.player_id,
            match_id: row.match_id,
            team: row.team,
            role: row.role,
            kills: row.kills,
            deaths: row.deaths,
            assists: row.assists,
            winner: None,
        };
        self.stats.push(stat.clone());
        stat
    }
}

type Shared = Arc<Mutex<Store>>;

pub struct TestBackend {
    pub address: String,
    pub client: ScoreboardClient,
    store: Shared,
}

impl TestBackend {
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("store lock poisoned")
    }
}

pub async fn spawn_backend(store: Store) -> TestBackend {
    let store = Arc::new(Mutex::new(store));
    let app = Router::new()
        .route("/players", get(list_players))
        .route("/matches", post(create_match))
        .route("/matches/:id", get(get_match).put(update_match))
        .route("/player-stats", post(create_stat))
        .route("/player-stats/match/:id", get(list_match_stats))
        .route("/player-stats/:id", axum::routing::put(update_stat))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");
    let server = axum::Server::from_tcp(listener)
        .expect("Failed to serve listener")
        .serve(app.into_make_service());
    let _ = tokio::spawn(server);

    TestBackend {
        client: ScoreboardClient::with_base_url(&address),
        address,
        store,
    }
}

fn lock(store: &Shared) -> MutexGuard<'_, Store> {
    store.lock().expect("store lock poisoned")
}

async fn list_players(State(store): State<Shared>) -> Result<Json<Vec<Player>>, StatusCode> {
    let store = lock(&store);
    if store.fail_roster {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(store.players.clone()))
}

async fn create_match(
    State(store): State<Shared>,
    Json(body): Json<NewMatch>,
) -> Result<Json<MatchRecord>, StatusCode> {
    let mut store = lock(&store);
    if store
        .match_creation_limit
        .is_some_and(|limit| store.matches.len() >= limit)
    {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    let existing_stats = store.stats.len();
    store.stats_at_match_creation.push(existing_stats);
    let id = store.insert_match(body.game);
    let record = store
        .matches
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    record.status = body.status;
    Ok(Json(record.clone()))
}

async fn get_match(
    State(store): State<Shared>,
    Path(id): Path<u32>,
) -> Result<Json<MatchRecord>, StatusCode> {
    let store = lock(&store);
    store
        .matches
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_match(
    State(store): State<Shared>,
    Path(id): Path<u32>,
    Json(body): Json<MatchUpdate>,
) -> Result<Json<MatchRecord>, StatusCode> {
    let mut store = lock(&store);
    store.match_updates.push((id, body.clone()));
    let record = store
        .matches
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    record.score_a = body.score_a;
    record.score_b = body.score_b;
    record.status = body.status;
    Ok(Json(record.clone()))
}

async fn create_stat(
    State(store): State<Shared>,
    Json(body): Json<NewPlayerStat>,
) -> Result<Json<PlayerStat>, StatusCode> {
    let barrier = lock(&store).stat_barrier.clone();
    if let Some(barrier) = barrier {
        tokio::time::timeout(BARRIER_TIMEOUT, barrier.wait())
            .await
            .map_err(|_| StatusCode::REQUEST_TIMEOUT)?;
    }
    let mut store = lock(&store);
    if store.failing_stat_players.contains(&body.player_id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(store.insert_stat(body)))
}

async fn list_match_stats(
    State(store): State<Shared>,
    Path(id): Path<u32>,
) -> Json<Vec<PlayerStat>> {
    Json(lock(&store).match_stats(id))
}

async fn update_stat(
    State(store): State<Shared>,
    Path(id): Path<u32>,
    Json(body): Json<StatUpdate>,
) -> Result<Json<PlayerStat>, StatusCode> {
    let mut store = lock(&store);
    if store.failing_stat_updates.contains(&id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    store.stat_updates.push((id, body.clone()));
    let stat = store
        .stats
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    stat.kills = body.kills;
    stat.deaths = body.deaths;
    stat.assists = body.assists;
    if body.winner.is_some() {
        stat.winner = body.winner;
    }
    Ok(Json(stat.clone()))
}
