//! Read-through cache behavior of `LeagueClient` against a mock Sleeper API.

use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use tempfile::TempDir;

use sleeper_core::cache::CacheManager;
use sleeper_core::report::RosterJoinEngine;
use sleeper_core::{ApiClient, ApiError, LeagueClient};

const LEAGUE_ID: &str = "1265656840373403648";

struct Harness {
    server: ServerGuard,
    client: LeagueClient,
    cache: CacheManager,
    _dir: TempDir,
}

async fn harness() -> Harness {
    let server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let cache = CacheManager::new(dir.path().join("cache")).unwrap();
    let api = ApiClient::with_base_url(&server.url()).unwrap();
    let client = LeagueClient::new(api, cache.clone(), LEAGUE_ID).unwrap();
    Harness {
        server,
        client,
        cache,
        _dir: dir,
    }
}

fn users_payload(name: &str) -> Value {
    json!([{"user_id": "u1", "display_name": name, "metadata": {"team_name": "Yoshi's Island"}}])
}

fn cached(cache: &CacheManager, key: &str) -> Value {
    cache.load::<Value>(key).expect("entry should be cached").data
}

#[tokio::test]
async fn test_cache_hit_does_not_touch_network() {
    let mut h = harness().await;
    h.cache
        .save(&format!("users_{LEAGUE_ID}"), &users_payload("cached"))
        .unwrap();

    let mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}/users").as_str())
        .expect(0)
        .create_async()
        .await;

    let users = h.client.users(false).await.unwrap();
    assert_eq!(users[0].display_name, "cached");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_cold_cache_fetches_once_then_serves_from_disk() {
    let mut h = harness().await;
    let mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"league_id": LEAGUE_ID, "name": "Office League", "season": "2024"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let first = h.client.league(false).await.unwrap();
    let second = h.client.league(false).await.unwrap();

    assert_eq!(first.name, "Office League");
    assert_eq!(second.name, "Office League");
    assert_eq!(cached(&h.cache, &format!("league_{LEAGUE_ID}"))["name"], "Office League");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_force_fetches_and_overwrites() {
    let mut h = harness().await;
    let key = format!("users_{LEAGUE_ID}");
    h.cache.save(&key, &users_payload("old")).unwrap();

    let mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}/users").as_str())
        .with_status(200)
        .with_body(users_payload("new").to_string())
        .expect(1)
        .create_async()
        .await;

    let users = h.client.users(true).await.unwrap();
    assert_eq!(users[0].display_name, "new");
    assert_eq!(cached(&h.cache, &key), users_payload("new"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_failure_propagates_and_keeps_cache() {
    let mut h = harness().await;
    let key = format!("rosters_{LEAGUE_ID}");
    let old = json!([{"roster_id": 1, "owner_id": "u1", "players": ["4046"]}]);
    h.cache.save(&key, &old).unwrap();

    let _mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}/rosters").as_str())
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let result = h.client.rosters(true).await;
    assert!(matches!(result, Err(ApiError::ServerError(_))));
    assert_eq!(cached(&h.cache, &key), old);
}

#[tokio::test]
async fn test_not_found_is_an_error() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}/matchups/4").as_str())
        .with_status(404)
        .create_async()
        .await;

    let result = h.client.matchups(4, false).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
    assert!(h.cache.load::<Value>(&format!("matchups_{LEAGUE_ID}_week_4")).is_none());
}

#[tokio::test]
async fn test_undecodable_body_is_not_cached() {
    let mut h = harness().await;
    let key = format!("league_{LEAGUE_ID}");
    let _mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}").as_str())
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let result = h.client.league(false).await;
    assert!(matches!(result, Err(ApiError::Parse { .. })));
    assert!(h.cache.load::<Value>(&key).is_none());
    assert!(h.cache.is_stale(&key));
    assert!(h.client.is_cache_stale());
}

#[tokio::test]
async fn test_corrupt_cache_triggers_live_fetch() {
    let mut h = harness().await;
    let key = format!("matchups_{LEAGUE_ID}_week_2");
    std::fs::write(h.cache.cache_path(&key), "{{{ truncated").unwrap();

    let body = json!([
        {"matchup_id": 1, "roster_id": 1, "starters": ["4046"], "starters_points": [12.5], "points": 80.0},
        {"matchup_id": 1, "roster_id": 2, "starters": ["KC"], "starters_points": [7.0], "points": 75.5}
    ]);
    let mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}/matchups/2").as_str())
        .with_status(200)
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let matchups = h.client.matchups(2, false).await.unwrap();
    assert_eq!(matchups.len(), 2);
    assert_eq!(cached(&h.cache, &key), body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_list_reads_as_empty() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("GET", format!("/league/{LEAGUE_ID}/matchups/18").as_str())
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    assert!(h.client.matchups(18, false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_league_id_fails_before_io() {
    let dir = TempDir::new().unwrap();
    let cache = CacheManager::new(dir.path().to_path_buf()).unwrap();
    // Unroutable base URL: any request would fail with a network error instead
    let api = ApiClient::with_base_url("http://127.0.0.1:9").unwrap();

    let result = LeagueClient::new(api, cache, "my-league");
    assert!(matches!(result, Err(ApiError::InvalidLeagueId(id)) if id == "my-league"));
}

#[tokio::test]
async fn test_cached_roster_joins_player_directory() {
    let h = harness().await;
    h.cache
        .save(
            &format!("rosters_{LEAGUE_ID}"),
            &json!([{"roster_id": 1, "owner_id": "u1", "players": ["4046", "KC", "9999"]}]),
        )
        .unwrap();
    h.cache
        .save(&format!("users_{LEAGUE_ID}"), &users_payload("alice"))
        .unwrap();
    h.cache
        .save(
            "nfl_players",
            &json!({"4046": {"first_name": "Travis", "last_name": "Kelce", "position": "TE", "team": "KC"}}),
        )
        .unwrap();

    let rosters = h.client.rosters(false).await.unwrap();
    let users = h.client.users(false).await.unwrap();
    let players = h.client.players().await.unwrap();

    let engine = RosterJoinEngine::new(&users, &players);
    assert_eq!(
        engine.starter_labels(&rosters[0].players),
        vec!["TE: T. Kelce", "D/ST: KC", "9999"]
    );
    assert_eq!(engine.owner_name(rosters[0].owner_id.as_deref()), "alice");
}
