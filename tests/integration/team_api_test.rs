// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::future::IntoFuture;

#[tokio::test]
async fn test_register_team() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/teams")
        .json(&json!({ "name": "Foxes", "passcode": "hunter2" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Team created successfully.");
    assert_eq!(body["teamName"], "Foxes");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_duplicate_name_regardless_of_passcode() {
    let app = create_test_app().await;
    app.register("Foxes", "hunter2").await;

    for passcode in ["hunter2", "something-else"] {
        let response = app
            .server
            .post("/teams")
            .json(&json!({ "name": "Foxes", "passcode": passcode }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Team name already exists." }));
    }
}

#[tokio::test]
async fn test_concurrent_duplicate_registrations() {
    let app = create_test_app().await;

    let (a, b, c) = tokio::join!(
        app.server
            .post("/teams")
            .json(&json!({ "name": "Foxes", "passcode": "one" }))
            .into_future(),
        app.server
            .post("/teams")
            .json(&json!({ "name": "Foxes", "passcode": "two" }))
            .into_future(),
        app.server
            .post("/teams")
            .json(&json!({ "name": "Foxes", "passcode": "three" }))
            .into_future(),
    );

    let responses = [&a, &b, &c];
    let created: Vec<_> = responses
        .iter()
        .filter(|r| r.status_code() == StatusCode::CREATED)
        .collect();
    let rejected: Vec<_> = responses
        .iter()
        .filter(|r| r.status_code() == StatusCode::BAD_REQUEST)
        .collect();

    assert_eq!(created.len(), 1);
    assert_eq!(rejected.len(), 2);
    for response in rejected {
        response.assert_json(&json!({ "message": "Team name already exists." }));
    }

    // Only the winning passcode can log in
    let winner = ["one", "two", "three"]
        .iter()
        .zip(responses.iter())
        .find(|(_, r)| r.status_code() == StatusCode::CREATED)
        .map(|(passcode, _)| *passcode)
        .unwrap();
    for passcode in ["one", "two", "three"] {
        let response = app
            .server
            .post("/teams/login")
            .json(&json!({ "name": "Foxes", "passcode": passcode }))
            .await;
        let expected = if passcode == winner {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        response.assert_status(expected);
    }
}

#[tokio::test]
async fn test_register_requires_name_and_passcode() {
    let app = create_test_app().await;

    let bodies = [
        json!({ "name": "Foxes" }),
        json!({ "passcode": "hunter2" }),
        json!({ "name": "", "passcode": "hunter2" }),
        json!({ "name": "Foxes", "passcode": "" }),
        json!({}),
    ];

    for body in bodies {
        let response = app.server.post("/teams").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Team name and passcode are required." }));
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/teams")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_login() {
    let app = create_test_app().await;
    app.register("Foxes", "hunter2").await;

    let response = app
        .server
        .post("/teams/login")
        .json(&json!({ "name": "Foxes", "passcode": "hunter2" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful.");
    assert_eq!(body["teamName"], "Foxes");
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = create_test_app().await;
    app.register("Foxes", "hunter2").await;

    let wrong_passcode = app
        .server
        .post("/teams/login")
        .json(&json!({ "name": "Foxes", "passcode": "wrong" }))
        .await;
    let unknown_team = app
        .server
        .post("/teams/login")
        .json(&json!({ "name": "Owls", "passcode": "hunter2" }))
        .await;

    for response in [wrong_passcode, unknown_team] {
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Invalid team name or passcode." }));
    }
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/teams/login")
        .json(&json!({ "name": "Foxes" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Team name and passcode are required." }));
}

#[tokio::test]
async fn test_get_team() {
    let app = create_test_app().await;
    app.register("Foxes", "hunter2").await;

    let response = app.server.get("/teams/Foxes").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "teamName": "Foxes" }));

    let response = app.server.get("/teams/Owls").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Team not found" }));
}

#[tokio::test]
async fn test_health_and_version() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");

    let response = app.server.get("/version").await;
    response.assert_status_ok();
    response.assert_text(env!("CARGO_PKG_VERSION"));
}
