// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_requiring_session};
use axum::http::{header, StatusCode};
use serde_json::{json, Value};
use std::future::IntoFuture;

#[tokio::test]
async fn test_submit_clue() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/clues")
        .json(&json!({
            "text": "CLUE-1",
            "teamName": "Foxes",
            "additionalText": "Behind the library",
            "imagePath": "/media/library.png",
            "mediaType": "image"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["text"], "CLUE-1");
    assert_eq!(body["teamName"], "Foxes");
    assert_eq!(body["additionalText"], "Behind the library");
    assert_eq!(body["imagePath"], "/media/library.png");
    assert_eq!(body["mediaType"], "image");
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_clue_is_rejected() {
    let app = create_test_app().await;
    let clue = json!({ "text": "CLUE-1", "teamName": "Foxes" });

    app.server
        .post("/clues")
        .json(&clue)
        .await
        .assert_status(StatusCode::CREATED);

    for _ in 0..2 {
        let response = app.server.post("/clues").json(&clue).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Clue already saved." }));
    }

    assert_eq!(app.list_clues("Foxes").await.len(), 1);
}

#[tokio::test]
async fn test_same_text_for_different_teams() {
    let app = create_test_app().await;

    for team in ["Foxes", "Owls"] {
        app.server
            .post("/clues")
            .json(&json!({ "text": "CLUE-1", "teamName": team }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(app.list_clues("Foxes").await.len(), 1);
    assert_eq!(app.list_clues("Owls").await.len(), 1);
}

#[tokio::test]
async fn test_dedup_uses_exact_text() {
    let app = create_test_app().await;

    for text in ["CLUE-1", "clue-1", "CLUE-1 "] {
        app.server
            .post("/clues")
            .json(&json!({ "text": text, "teamName": "Foxes" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(app.list_clues("Foxes").await.len(), 3);
}

#[tokio::test]
async fn test_concurrent_duplicate_submissions() {
    let app = create_test_app().await;
    let clue = json!({ "text": "CLUE-RACE", "teamName": "Foxes" });

    let (a, b, c) = tokio::join!(
        app.server.post("/clues").json(&clue).into_future(),
        app.server.post("/clues").json(&clue).into_future(),
        app.server.post("/clues").json(&clue).into_future(),
    );

    let created = [&a, &b, &c]
        .iter()
        .filter(|r| r.status_code() == StatusCode::CREATED)
        .count();
    let rejected = [&a, &b, &c]
        .iter()
        .filter(|r| r.status_code() == StatusCode::BAD_REQUEST)
        .count();

    assert_eq!(created, 1);
    assert_eq!(rejected, 2);
    assert_eq!(app.list_clues("Foxes").await.len(), 1);
}

#[tokio::test]
async fn test_submit_requires_text_and_team_name() {
    let app = create_test_app().await;

    let bodies = [
        json!({ "teamName": "Foxes" }),
        json!({ "text": "CLUE-1" }),
        json!({ "text": "", "teamName": "Foxes" }),
        json!({ "text": "CLUE-1", "teamName": "" }),
    ];

    for body in bodies {
        let response = app.server.post("/clues").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Clue text and team name are required." }));
    }
}

#[tokio::test]
async fn test_list_clues_empty() {
    let app = create_test_app().await;

    let response = app.server.get("/clues/Nobody").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_clues_in_submission_order() {
    let app = create_test_app().await;

    for text in ["first", "second", "third"] {
        app.server
            .post("/clues")
            .json(&json!({ "text": text, "teamName": "Foxes" }))
            .await
            .assert_status(StatusCode::CREATED);
    }
    app.server
        .post("/clues")
        .json(&json!({ "text": "other", "teamName": "Owls" }))
        .await
        .assert_status(StatusCode::CREATED);

    let texts: Vec<String> = app
        .list_clues("Foxes")
        .await
        .iter()
        .map(|clue| clue["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_team_name_with_spaces_in_path() {
    let app = create_test_app().await;

    app.server
        .post("/clues")
        .json(&json!({ "text": "CLUE-1", "teamName": "Red Foxes" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app.server.get("/clues/Red%20Foxes").await;
    response.assert_status_ok();
    let clues: Vec<Value> = response.json();
    assert_eq!(clues.len(), 1);
}

#[tokio::test]
async fn test_session_token_is_accepted_for_own_team() {
    let app = create_test_app().await;
    let token = app.register("Foxes", "hunter2").await;

    app.server
        .post("/clues")
        .authorization_bearer(&token)
        .json(&json!({ "text": "CLUE-1", "teamName": "Foxes" }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let app = create_test_app_requiring_session().await;
    let token = app.register("Foxes", "hunter2").await;

    app.server
        .post("/clues")
        .add_header(header::AUTHORIZATION, format!("bearer {}", token))
        .json(&json!({ "text": "CLUE-1", "teamName": "Foxes" }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_session_token_for_other_team_is_rejected() {
    let app = create_test_app().await;
    let token = app.register("Foxes", "hunter2").await;

    let response = app
        .server
        .post("/clues")
        .authorization_bearer(&token)
        .json(&json!({ "text": "CLUE-1", "teamName": "Owls" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "message": "Session does not match team." }));
    assert!(app.list_clues("Owls").await.is_empty());
}

#[tokio::test]
async fn test_invalid_session_token_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/clues")
        .authorization_bearer("not-a-token")
        .json(&json!({ "text": "CLUE-1", "teamName": "Foxes" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "message": "Invalid or expired session." }));
}

#[tokio::test]
async fn test_session_required_when_configured() {
    let app = create_test_app_requiring_session().await;
    let token = app.register("Foxes", "hunter2").await;

    let response = app
        .server
        .post("/clues")
        .json(&json!({ "text": "CLUE-1", "teamName": "Foxes" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "message": "Session required." }));

    app.server
        .post("/clues")
        .authorization_bearer(&token)
        .json(&json!({ "text": "CLUE-1", "teamName": "Foxes" }))
        .await
        .assert_status(StatusCode::CREATED);
}
