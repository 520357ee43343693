//! In-memory imitation of the public API for end-to-end tests.
//!
//! Authenticated routes check the `API-Key` header against the key the app
//! was built with. Resources are served without a key.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Key accepted by [`app`] when none is configured.
pub const DEFAULT_API_KEY: Uuid = Uuid::from_u128(0x64bd424e_ccb0_42ed_8b66_6e42a135afb4);

/// The one player the mock knows about.
pub const HYPIXEL: Uuid = Uuid::from_u128(0xf7c77d99_9f15_4a66_a87d_c4a51ef30d19);

/// Number of auction pages served by `/skyblock/auctions`.
pub const AUCTION_PAGES: u32 = 3;

const AUCTIONS_PER_PAGE: u32 = 2;

pub struct MockState {
    api_key: Uuid,
    total_queries: AtomicU64,
    players: HashMap<Uuid, Value>,
}

pub type SharedState = Arc<MockState>;

type Reply = (StatusCode, Json<Value>);

pub fn app(api_key: Uuid) -> Router {
    let mut players = HashMap::new();
    players.insert(
        HYPIXEL,
        json!({
            "uuid": HYPIXEL.simple().to_string(),
            "displayname": "hypixel",
            "firstLogin": 1_364_000_000_000i64,
            "lastLogin": 1_600_000_000_000i64,
            "networkExp": 22_500.0,
            "stats": { "Bedwars": { "wins_bedwars": 12 } },
        }),
    );
    let state = Arc::new(MockState {
        api_key,
        total_queries: AtomicU64::new(0),
        players,
    });
    Router::new()
        .route("/player", get(get_player))
        .route("/key", get(get_key))
        .route("/boosters", get(get_boosters))
        .route("/counts", get(get_counts))
        .route("/status", get(get_status))
        .route("/skyblock/auctions", get(get_auctions))
        .route("/resources/{*path}", get(get_resource))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: Uuid) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn failure(status: StatusCode, cause: &str) -> Reply {
    (status, Json(json!({ "success": false, "cause": cause })))
}

/// Rejects requests without the configured key and counts the rest.
fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Reply> {
    let key = headers
        .get("api-key")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::try_parse(value).ok());
    match key {
        None => Err(failure(StatusCode::FORBIDDEN, "API key is missing")),
        Some(key) if key != state.api_key => {
            tracing::debug!(%key, "rejected unknown api key");
            Err(failure(StatusCode::FORBIDDEN, "Invalid API key"))
        }
        Some(_) => {
            state.total_queries.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}

#[derive(Deserialize)]
pub struct PlayerQuery {
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
}

async fn get_player(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<PlayerQuery>,
) -> Reply {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let player = match (query.uuid, query.name) {
        (Some(uuid), _) => state.players.get(&uuid).cloned(),
        (None, Some(name)) => state
            .players
            .values()
            .find(|player| player["displayname"].as_str() == Some(name.as_str()))
            .cloned(),
        (None, None) => return ok(json!({ "success": false, "cause": "Missing uuid field" })),
    };
    ok(json!({ "success": true, "player": player }))
}

async fn get_key(State(state): State<SharedState>, headers: HeaderMap) -> Reply {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    ok(json!({
        "success": true,
        "record": {
            "key": state.api_key.hyphenated().to_string(),
            "owner": HYPIXEL.hyphenated().to_string(),
            "limit": 120,
            "queriesInPastMin": 1,
            "totalQueries": state.total_queries.load(Ordering::SeqCst),
        },
    }))
}

async fn get_boosters(State(state): State<SharedState>, headers: HeaderMap) -> Reply {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    ok(json!({
        "success": true,
        "boosters": [
            {
                "_id": "5c197fd44a5a5e1d7e1c4e36",
                "purchaserUuid": HYPIXEL.simple().to_string(),
                "amount": 3.0,
                "originalLength": 3600,
                "length": 3595,
                "gameType": 58,
                "dateActivated": 1_589_150_212_345i64,
                "stacked": ["978ddb705a8e4d8ba5e0ad2e0ab9ad3c"],
            },
            {
                "_id": "5c197fd44a5a5e1d7e1c4e37",
                "purchaserUuid": "978ddb705a8e4d8ba5e0ad2e0ab9ad3c",
                "amount": 2.0,
                "originalLength": 3600,
                "length": 3600,
                "gameType": 58,
                "dateActivated": 1_589_150_300_000i64,
                "stacked": true,
            },
            {
                "_id": "5c197fd44a5a5e1d7e1c4e38",
                "stacked": { "mode": "experimental" },
            },
        ],
        "boosterState": { "decrementing": true },
    }))
}

async fn get_counts(State(state): State<SharedState>, headers: HeaderMap) -> Reply {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    ok(json!({
        "success": true,
        "playerCount": 4200,
        "games": {
            "BEDWARS": { "players": 1500, "modes": { "eight_one": 300 } },
            "MAIN_LOBBY": { "players": 800 },
        },
    }))
}

#[derive(Deserialize)]
pub struct UuidQuery {
    pub uuid: Option<Uuid>,
}

async fn get_status(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<UuidQuery>,
) -> Reply {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let Some(uuid) = query.uuid else {
        return failure(StatusCode::BAD_REQUEST, "Missing one or more fields [uuid]");
    };
    let session = if state.players.contains_key(&uuid) {
        json!({ "online": true, "gameType": "BEDWARS", "mode": "EIGHT_ONE", "map": "Lighthouse" })
    } else {
        json!({ "online": false })
    };
    ok(json!({
        "success": true,
        "uuid": uuid.simple().to_string(),
        "session": session,
    }))
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
}

async fn get_auctions(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Reply {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    if query.page >= AUCTION_PAGES {
        return failure(StatusCode::NOT_FOUND, "Page not found");
    }
    let auctions: Vec<Value> = (0..AUCTIONS_PER_PAGE)
        .map(|i| {
            json!({
                "uuid": Uuid::from_u128(u128::from(query.page * AUCTIONS_PER_PAGE + i)).simple().to_string(),
                "item_name": format!("Item {}-{i}", query.page),
                "starting_bid": 100 + i,
            })
        })
        .collect();
    ok(json!({
        "success": true,
        "page": query.page,
        "totalPages": AUCTION_PAGES,
        "totalAuctions": AUCTION_PAGES * AUCTIONS_PER_PAGE,
        "lastUpdated": 1_600_000_000_000i64,
        "auctions": auctions,
    }))
}

async fn get_resource(Path(path): Path<String>) -> Reply {
    match path.as_str() {
        "vanity/pets" => ok(json!({
            "success": true,
            "lastUpdated": 1_600_000_000_000i64,
            "types": [{ "key": "CAT_BLACK", "name": "Cat: Black" }],
        })),
        "skyblock/collections" => ok(json!({
            "success": true,
            "lastUpdated": 1_600_000_000_000i64,
            "version": "0.11.22",
            "collections": { "FARMING": { "name": "Farming", "items": {} } },
        })),
        _ => failure(StatusCode::NOT_FOUND, "Unknown resource"),
    }
}
