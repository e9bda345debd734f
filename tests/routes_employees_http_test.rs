// ABOUTME: HTTP integration tests for the employee routes
// ABOUTME: Covers CRUD, pagination, login, validation, and CPF conflicts over /funcionarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{create_test_router, employee_body};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn create_employee(app: &axum::Router, email: &str, cpf: &str) -> i64 {
    let response = AxumTestRequest::post("/funcionarios")
        .json(&employee_body("Ana Souza", email, cpf))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    body["id_funcionario"].as_i64().unwrap()
}

// ============================================================================
// POST /funcionarios
// ============================================================================

#[tokio::test]
async fn test_create_employee_returns_location_and_hides_password() {
    let app = create_test_router().await;

    let response = AxumTestRequest::post("/funcionarios")
        .json(&employee_body("Ana Souza", "ana@lugia.com.br", "12345678901"))
        .send(app.clone())
        .await;

    assert_eq!(response.status(), 201);
    let location = response.header("location").unwrap();
    let body: Value = response.json();
    let id = body["id_funcionario"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/funcionarios/{id}"));
    assert_eq!(body["nome"], "Ana Souza");
    assert_eq!(body["cargo"], "Mecânico");
    assert!(body.get("senha").is_none());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = create_test_router().await;
    let id = create_employee(&app, "ana@lugia.com.br", "12345678901").await;

    let response = AxumTestRequest::get(&format!("/funcionarios/{id}"))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["id_funcionario"], id);
    assert_eq!(body["email"], "ana@lugia.com.br");
    assert_eq!(body["cpf"], "12345678901");
}

#[tokio::test]
async fn test_create_duplicate_cpf_conflicts_and_keeps_original() {
    let app = create_test_router().await;
    let id = create_employee(&app, "ana@lugia.com.br", "12345678901").await;

    let response = AxumTestRequest::post("/funcionarios")
        .json(&employee_body("Bruno Lima", "bruno@lugia.com.br", "12345678901"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");

    let original: Value = AxumTestRequest::get(&format!("/funcionarios/{id}"))
        .send(app)
        .await
        .json();
    assert_eq!(original["nome"], "Ana Souza");
    assert_eq!(original["email"], "ana@lugia.com.br");
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let app = create_test_router().await;

    let cases = [
        employee_body("Ana", "not-an-email", "12345678901"),
        employee_body("Ana", "ana@lugia.com.br", "123.456.789-01"),
        employee_body("Ana", "ana@lugia.com.br", "1234567890"),
        employee_body(&"x".repeat(71), "ana@lugia.com.br", "12345678901"),
        employee_body("  ", "ana@lugia.com.br", "12345678901"),
        json!({ "email": "ana@lugia.com.br" }),
    ];

    for body in &cases {
        let response = AxumTestRequest::post("/funcionarios")
            .json(body)
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 400, "body: {body}");
        let error: Value = response.json();
        assert_eq!(error["error"]["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = create_test_router().await;

    let response = AxumTestRequest::post("/funcionarios")
        .raw_body("application/json", "{\"nome\": ")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let error: Value = response.json();
    assert!(error["error"]["message"].is_string());
}

#[tokio::test]
async fn test_create_without_role_stores_null() {
    let app = create_test_router().await;

    let response = AxumTestRequest::post("/funcionarios")
        .json(&json!({
            "nome": "Carla",
            "senha": "segredo",
            "email": "carla@lugia.com.br",
            "cpf": "98765432100"
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert!(body["cargo"].is_null());
}

// ============================================================================
// GET /funcionarios
// ============================================================================

#[tokio::test]
async fn test_list_paginates_in_id_order() {
    let app = create_test_router().await;
    let first = create_employee(&app, "a@lugia.com.br", "00000000001").await;
    let second = create_employee(&app, "b@lugia.com.br", "00000000002").await;
    let third = create_employee(&app, "c@lugia.com.br", "00000000003").await;

    let page_one: Value = AxumTestRequest::get("/funcionarios?page=1&pageSize=2")
        .send(app.clone())
        .await
        .json();
    assert_eq!(page_one["page"], 1);
    assert_eq!(page_one["pageSize"], 2);
    assert_eq!(page_one["total"], 3);
    let ids: Vec<i64> = page_one["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id_funcionario"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);

    let page_two: Value = AxumTestRequest::get("/funcionarios?page=2&pageSize=2")
        .send(app)
        .await
        .json();
    let items = page_two["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id_funcionario"], third);
}

#[tokio::test]
async fn test_list_defaults_when_query_absent() {
    let app = create_test_router().await;

    let response = AxumTestRequest::get("/funcionarios").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["total"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_rejects_invalid_pagination() {
    let app = create_test_router().await;

    for uri in [
        "/funcionarios?page=0",
        "/funcionarios?pageSize=0",
        "/funcionarios?page=-1&pageSize=5",
        "/funcionarios?page=abc",
    ] {
        let response = AxumTestRequest::get(uri).send(app.clone()).await;
        assert_eq!(response.status(), 400, "uri: {uri}");
    }
}

// ============================================================================
// GET/PUT/DELETE /funcionarios/:id
// ============================================================================

#[tokio::test]
async fn test_get_unknown_and_invalid_ids() {
    let app = create_test_router().await;

    let missing = AxumTestRequest::get("/funcionarios/9999")
        .send(app.clone())
        .await;
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    let zero = AxumTestRequest::get("/funcionarios/0").send(app.clone()).await;
    assert_eq!(zero.status(), 400);

    let text = AxumTestRequest::get("/funcionarios/abc").send(app).await;
    assert_eq!(text.status(), 400);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_password() {
    let app = create_test_router().await;
    let id = create_employee(&app, "ana@lugia.com.br", "12345678901").await;

    let response = AxumTestRequest::put(&format!("/funcionarios/{id}"))
        .json(&json!({
            "nome": "Ana Lima",
            "email": "ana.lima@lugia.com.br",
            "cpf": "12345678901"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 204);
    assert!(response.is_empty());

    let updated: Value = AxumTestRequest::get(&format!("/funcionarios/{id}"))
        .send(app.clone())
        .await
        .json();
    assert_eq!(updated["nome"], "Ana Lima");
    assert!(updated["cargo"].is_null());

    let login = AxumTestRequest::post("/funcionarios/login")
        .json(&json!({ "email": "ana.lima@lugia.com.br", "senha": "s3nha-forte" }))
        .send(app)
        .await;
    assert_eq!(login.status(), 200);
}

#[tokio::test]
async fn test_update_to_taken_cpf_conflicts() {
    let app = create_test_router().await;
    create_employee(&app, "a@lugia.com.br", "11111111111").await;
    let id = create_employee(&app, "b@lugia.com.br", "22222222222").await;

    let response = AxumTestRequest::put(&format!("/funcionarios/{id}"))
        .json(&employee_body("Bruno", "b@lugia.com.br", "11111111111"))
        .send(app)
        .await;

    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn test_update_unknown_employee_is_not_found() {
    let app = create_test_router().await;

    let response = AxumTestRequest::put("/funcionarios/9999")
        .json(&employee_body("Ana", "ana@lugia.com.br", "12345678901"))
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_employee() {
    let app = create_test_router().await;
    let id = create_employee(&app, "ana@lugia.com.br", "12345678901").await;

    let response = AxumTestRequest::delete(&format!("/funcionarios/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 204);

    let gone = AxumTestRequest::get(&format!("/funcionarios/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(gone.status(), 404);

    let again = AxumTestRequest::delete(&format!("/funcionarios/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(again.status(), 404);

    let unknown = AxumTestRequest::delete("/funcionarios/9999").send(app).await;
    assert_eq!(unknown.status(), 404);
}

// ============================================================================
// POST /funcionarios/login
// ============================================================================

#[tokio::test]
async fn test_login_success_returns_employee() {
    let app = create_test_router().await;
    let id = create_employee(&app, "ana@lugia.com.br", "12345678901").await;

    let response = AxumTestRequest::post("/funcionarios/login")
        .json(&json!({ "email": "ana@lugia.com.br", "senha": "s3nha-forte" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["id_funcionario"], id);
    assert!(body.get("senha").is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = create_test_router().await;
    create_employee(&app, "ana@lugia.com.br", "12345678901").await;

    let wrong_password = AxumTestRequest::post("/funcionarios/login")
        .json(&json!({ "email": "ana@lugia.com.br", "senha": "errada" }))
        .send(app.clone())
        .await;
    let unknown_email = AxumTestRequest::post("/funcionarios/login")
        .json(&json!({ "email": "ninguem@lugia.com.br", "senha": "s3nha-forte" }))
        .send(app)
        .await;

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_email.status(), 401);
    let a: Value = wrong_password.json();
    let b: Value = unknown_email.json();
    assert_eq!(a["error"]["code"], "AUTH_INVALID");
    assert_eq!(a["error"]["message"], b["error"]["message"]);
}

#[tokio::test]
async fn test_login_validates_input() {
    let app = create_test_router().await;

    let blank = AxumTestRequest::post("/funcionarios/login")
        .json(&json!({ "email": "", "senha": "" }))
        .send(app.clone())
        .await;
    assert_eq!(blank.status(), 400);

    let bad_email = AxumTestRequest::post("/funcionarios/login")
        .json(&json!({ "email": "ana", "senha": "x" }))
        .send(app)
        .await;
    assert_eq!(bad_email.status(), 400);
}
