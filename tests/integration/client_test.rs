// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{connect_memory_db, test_settings};
use cluehunt::client::{
    ClientError, ClueHuntClient, ScanOutcome, ScanSession, ScanState, TeamSession,
};
use cluehunt::presentation::routes;
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn clue_json(text: &str, team_name: &str) -> serde_json::Value {
    json!({
        "id": "0190f3c4-7d2a-7b3e-9c1d-2f4a5b6c7d8e",
        "text": text,
        "teamName": team_name,
        "additionalText": null,
        "imagePath": null,
        "mediaType": null,
        "createdAt": "2025-03-01T10:00:00Z"
    })
}

fn foxes_session() -> TeamSession {
    TeamSession {
        team_name: "Foxes".to_string(),
        token: "signed-token".to_string(),
    }
}

#[tokio::test]
async fn test_create_team_remembers_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams"))
        .and(body_json(json!({ "name": "Foxes", "passcode": "hunter2" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Team created successfully.",
            "teamName": "Foxes",
            "token": "signed-token"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = ClueHuntClient::new(&mock_server.uri()).unwrap();
    let session = client.create_team("Foxes", "hunter2").await.unwrap().clone();

    assert_eq!(session, foxes_session());
    assert_eq!(client.session(), Some(&foxes_session()));
}

#[tokio::test]
async fn test_create_team_duplicate() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "message": "Team name already exists." })),
        )
        .mount(&mock_server)
        .await;

    let mut client = ClueHuntClient::new(&mock_server.uri()).unwrap();
    let result = client.create_team("Foxes", "hunter2").await;

    assert!(matches!(result, Err(ClientError::DuplicateTeam)));
    assert!(client.session().is_none());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams/login"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "message": "Invalid team name or passcode." })),
        )
        .mount(&mock_server)
        .await;

    let mut client = ClueHuntClient::new(&mock_server.uri()).unwrap();
    let result = client.login("Foxes", "wrong").await;

    assert!(matches!(result, Err(ClientError::InvalidCredentials)));
}

#[tokio::test]
async fn test_submit_clue_sends_bearer_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clues"))
        .and(header("Authorization", "Bearer signed-token"))
        .and(body_json(json!({ "text": "CLUE-1", "teamName": "Foxes" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(clue_json("CLUE-1", "Foxes")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClueHuntClient::new(&mock_server.uri())
        .unwrap()
        .with_session(foxes_session());
    let clue = client.submit_clue("CLUE-1").await.unwrap();

    assert_eq!(clue.text, "CLUE-1");
    assert_eq!(clue.team_name, "Foxes");
}

#[tokio::test]
async fn test_submit_clue_already_saved() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clues"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Clue already saved." })),
        )
        .mount(&mock_server)
        .await;

    let client = ClueHuntClient::new(&mock_server.uri())
        .unwrap()
        .with_session(foxes_session());
    let result = client.submit_clue("CLUE-1").await;

    assert!(matches!(result, Err(ClientError::AlreadySaved)));
}

#[tokio::test]
async fn test_submit_clue_without_session() {
    let client = ClueHuntClient::new("http://127.0.0.1:9").unwrap();
    let result = client.submit_clue("CLUE-1").await;

    assert!(matches!(result, Err(ClientError::NoSession)));
}

#[tokio::test]
async fn test_error_status_mapping() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/Owls"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Team not found" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/clues/Foxes"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Server error" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/clues"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "Session does not match team." })),
        )
        .mount(&mock_server)
        .await;

    let client = ClueHuntClient::new(&mock_server.uri())
        .unwrap()
        .with_session(foxes_session());

    match client.get_team("Owls").await {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "Team not found"),
        other => panic!("unexpected result: {:?}", other),
    }
    match client.list_clues("Foxes").await {
        Err(ClientError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Server error");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    match client.submit_clue("CLUE-1").await {
        Err(ClientError::Unauthorized(message)) => {
            assert_eq!(message, "Session does not match team.")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clues/Red%20Foxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClueHuntClient::new(&format!("{}/api/", mock_server.uri())).unwrap();
    let clues = client.list_clues("Red Foxes").await.unwrap();

    assert!(clues.is_empty());
}

#[tokio::test]
async fn test_invalid_base_url() {
    assert!(matches!(
        ClueHuntClient::new("not a url"),
        Err(ClientError::InvalidUrl(_))
    ));
}

/// 客户端与真实服务端的完整流程
#[tokio::test]
async fn test_scan_session_against_server() {
    let db = connect_memory_db().await;
    let app = routes::build_app(db, test_settings(true));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut client = ClueHuntClient::new(&format!("http://{}", addr)).unwrap();
    client.create_team("Foxes", "hunter2").await.unwrap();
    assert_eq!(client.get_team("Foxes").await.unwrap(), "Foxes");

    let mut login_client = ClueHuntClient::new(&format!("http://{}", addr)).unwrap();
    assert!(matches!(
        login_client.login("Foxes", "wrong").await,
        Err(ClientError::InvalidCredentials)
    ));
    login_client.login("Foxes", "hunter2").await.unwrap();

    let mut scan = ScanSession::new(login_client);
    scan.start().unwrap();

    assert!(scan.on_decoded("CLUE-A"));
    assert!(!scan.on_decoded("CLUE-B"));
    match scan.confirm().await.unwrap() {
        ScanOutcome::Saved(clue) => assert_eq!(clue.text, "CLUE-A"),
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert!(scan.on_decoded("CLUE-A"));
    assert_eq!(scan.confirm().await.unwrap(), ScanOutcome::AlreadySaved);

    assert!(scan.on_decoded("CLUE-B"));
    scan.dismiss().unwrap();
    assert_eq!(scan.state(), &ScanState::Scanning);

    scan.stop();
    assert_eq!(scan.state(), &ScanState::Idle);

    let clues = client.list_clues("Foxes").await.unwrap();
    assert_eq!(clues.len(), 1);
    assert_eq!(clues[0].text, "CLUE-A");
}
