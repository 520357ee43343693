//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Request vectors pin the URL and access mode of every endpoint. Response
//! vectors feed a simulated transport response through `HypixelClient::parse`
//! and check either the error kind or selected fields of the re-encoded reply.

use hypixel_core::reply::{
    BoostersReply, CountsReply, FriendsReply, GuildReply, KeyReply, LeaderboardsReply,
    PlayerReply, RecentGamesReply, ResourceReply, SkyBlockAuctionsReply, StatusReply,
};
use hypixel_core::{Access, ApiError, HttpRequest, HttpResponse, HypixelClient};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> HypixelClient {
    HypixelClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn build(c: &HypixelClient, builder: &str, arg: Option<&str>) -> HttpRequest {
    let id = || arg.unwrap().parse::<Uuid>().unwrap();
    match builder {
        "boosters" => c.build_boosters(),
        "leaderboards" => c.build_leaderboards(),
        "punishment_stats" => c.build_punishment_stats(),
        "player_by_uuid" => c.build_player_by_uuid(id()),
        "player_by_name" => c.build_player_by_name(arg.unwrap()),
        "friends" => c.build_friends(id()),
        "guild_by_player" => c.build_guild_by_player(id()),
        "guild_by_name" => c.build_guild_by_name(arg.unwrap()),
        "guild_by_id" => c.build_guild_by_id(arg.unwrap()),
        "key" => c.build_key(),
        "counts" => c.build_counts(),
        "status" => c.build_status(id()),
        "recent_games" => c.build_recent_games(id()),
        "resource_path" => c.build_resource_path(arg.unwrap()),
        "skyblock_profile" => c.build_skyblock_profile(arg.unwrap()),
        "skyblock_news" => c.build_skyblock_news(),
        "skyblock_auctions" => c.build_skyblock_auctions(arg.unwrap().parse().unwrap()),
        "skyblock_bazaar" => c.build_skyblock_bazaar(),
        other => panic!("unknown builder: {other}"),
    }
}

fn parse_access(s: &str) -> Access {
    match s {
        "authenticated" => Access::Authenticated,
        "anonymous" => Access::Anonymous,
        other => panic!("unknown access: {other}"),
    }
}

fn encode<R: Serialize>(result: Result<R, ApiError>) -> Result<Value, ApiError> {
    result.map(|reply| serde_json::to_value(reply).unwrap())
}

/// Parses `response` as the reply named in the vector and re-encodes it.
fn decode(reply: &str, response: HttpResponse) -> Result<Value, ApiError> {
    let c = client();
    match reply {
        "boosters" => encode(c.parse::<BoostersReply>(response)),
        "counts" => encode(c.parse::<CountsReply>(response)),
        "friends" => encode(c.parse::<FriendsReply>(response)),
        "guild" => encode(c.parse::<GuildReply>(response)),
        "key" => encode(c.parse::<KeyReply>(response)),
        "leaderboards" => encode(c.parse::<LeaderboardsReply>(response)),
        "player" => encode(c.parse::<PlayerReply>(response)),
        "recent_games" => encode(c.parse::<RecentGamesReply>(response)),
        "skyblock_auctions" => encode(c.parse::<SkyBlockAuctionsReply>(response)),
        "status" => encode(c.parse::<StatusReply>(response)),
        "resource" => c
            .parse::<ResourceReply>(response)
            .map(|reply| Value::Object(reply.into_document())),
        other => panic!("unknown reply: {other}"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let simulated = &case["simulated_response"];
    HttpResponse::new(
        simulated["status"].as_u64().unwrap() as u16,
        simulated["body"].as_str().unwrap(),
    )
}

fn assert_error(name: &str, err: &ApiError, expected: &Value) {
    match (expected["kind"].as_str().unwrap(), err) {
        ("status", ApiError::Status { status, cause }) => {
            assert_eq!(u64::from(*status), expected["status"].as_u64().unwrap(), "{name}: status");
            assert_eq!(cause, expected["cause"].as_str().unwrap(), "{name}: cause");
        }
        ("domain", ApiError::Domain { cause }) => {
            assert_eq!(cause.as_deref(), expected["cause"].as_str(), "{name}: cause");
        }
        ("parse", ApiError::Parse(_)) => {}
        (kind, other) => panic!("{name}: expected {kind} error, got {other:?}"),
    }
}

/// Runs every case of a file of failing responses.
fn check_errors(raw: &str) {
    for case in cases(raw) {
        let name = case["name"].as_str().unwrap();
        let reply = case["reply"].as_str().unwrap();
        let err = decode(reply, simulated_response(&case)).unwrap_err();
        assert_error(name, &err, &case["expected_error"]);
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/requests.json")) {
        let name = case["name"].as_str().unwrap();
        let req = build(&c, case["build"].as_str().unwrap(), case["arg"].as_str());
        let expected = &case["expected_request"];
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected["url"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(req.access, parse_access(expected["access"].as_str().unwrap()), "{name}: access");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn status_error_test_vectors() {
    check_errors(include_str!("../../test-vectors/status.json"));
}

#[test]
fn domain_error_test_vectors() {
    check_errors(include_str!("../../test-vectors/domain.json"));
}

#[test]
fn parse_error_test_vectors() {
    check_errors(include_str!("../../test-vectors/parse.json"));
}

#[test]
fn success_test_vectors() {
    for case in cases(include_str!("../../test-vectors/success.json")) {
        let name = case["name"].as_str().unwrap();
        let reply = case["reply"].as_str().unwrap();
        let encoded = decode(reply, simulated_response(&case))
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        for (pointer, expected) in case["expected_fields"].as_object().unwrap() {
            let actual = encoded
                .pointer(pointer)
                .unwrap_or_else(|| panic!("{name}: {pointer} missing from {encoded}"));
            assert_eq!(actual, expected, "{name}: {pointer}");
        }
    }
}
