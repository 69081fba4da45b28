//! League discovery pipeline against a mock Sleeper API.

use mockito::Server;
use serde_json::json;

use sleeper_core::{ApiClient, ApiError, Discovery, LeagueDirectory};

const SEASON: i32 = 2024;

fn leagues_body() -> String {
    json!([
        {"league_id": "111", "name": "2024 Dynasty League", "season": "2024"},
        {"league_id": "222", "name": "2024 Keeper League", "season": "2024"},
        {"league_id": "333", "name": "Family dynasty", "season": "2024"}
    ])
    .to_string()
}

#[tokio::test]
async fn test_search_filters_by_partial_name_in_api_order() {
    let mut server = Server::new_async().await;
    let user_mock = server
        .mock("GET", "/user/alice")
        .with_status(200)
        .with_body(json!({"user_id": "u1", "display_name": "alice"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let leagues_mock = server
        .mock("GET", "/user/u1/leagues/nfl/2024")
        .with_status(200)
        .with_body(leagues_body())
        .expect(1)
        .create_async()
        .await;

    let directory = LeagueDirectory::new(ApiClient::with_base_url(&server.url()).unwrap());
    let outcome = directory.search("alice", "DYNASTY", SEASON).await.unwrap();

    let Discovery::Matches(matches) = outcome else {
        panic!("expected matches, got {outcome:?}");
    };
    let ids: Vec<&str> = matches.iter().map(|m| m.league_id.as_str()).collect();
    assert_eq!(ids, vec!["111", "333"]);
    assert_eq!(matches[0].name, "2024 Dynasty League");
    assert_eq!(matches[0].season, "2024");

    user_mock.assert_async().await;
    leagues_mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_user_stops_the_pipeline() {
    let mut server = Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/user/nobody")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;
    let leagues_mock = server
        .mock("GET", mockito::Matcher::Regex(r"^/user/.*/leagues/.*$".to_string()))
        .expect(0)
        .create_async()
        .await;

    let directory = LeagueDirectory::new(ApiClient::with_base_url(&server.url()).unwrap());
    let outcome = directory.search("nobody", "dynasty", SEASON).await.unwrap();

    assert_eq!(outcome, Discovery::UnresolvedUser);
    leagues_mock.assert_async().await;
}

#[tokio::test]
async fn test_no_matches_is_not_an_error() {
    let mut server = Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/user/alice")
        .with_status(200)
        .with_body(json!({"user_id": "u1", "display_name": "alice"}).to_string())
        .create_async()
        .await;
    let _leagues_mock = server
        .mock("GET", "/user/u1/leagues/nfl/2024")
        .with_status(200)
        .with_body(leagues_body())
        .create_async()
        .await;

    let directory = LeagueDirectory::new(ApiClient::with_base_url(&server.url()).unwrap());
    let outcome = directory.search("alice", "redraft", SEASON).await.unwrap();

    assert_eq!(outcome, Discovery::NoMatches);
    assert_eq!(outcome.status_message(), Some("No matching leagues found"));
}

#[tokio::test]
async fn test_transport_errors_propagate() {
    let mut server = Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/user/alice")
        .with_status(500)
        .create_async()
        .await;

    let directory = LeagueDirectory::new(ApiClient::with_base_url(&server.url()).unwrap());
    let result = directory.search("alice", "dynasty", SEASON).await;

    assert!(matches!(result, Err(ApiError::ServerError(_))));
}
