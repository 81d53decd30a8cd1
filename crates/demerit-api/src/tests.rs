//! Router-level tests: the gate, the session flow, and the record surface,
//! all exercised over HTTP against an in-memory backend.

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use demerit_auth::{Directory, RegisterStaff, RegisterStudent};
use demerit_core::session::SessionStore;
use demerit_store_mem::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{AppState, router};

fn test_app() -> Router {
  let directory = Directory::new();
  directory
    .register_student(RegisterStudent {
      student_id: "12345678".into(),
      name:       "Demo Student".into(),
      email:      "demo.student@example.edu".into(),
      password:   "student123".into(),
      department: "CSE".into(),
      year:       2,
      semester:   3,
    })
    .unwrap();
  directory
    .register_staff(RegisterStaff {
      staff_id:   "STAFF123".into(),
      name:       "Demo Staff".into(),
      email:      "demo.staff@example.edu".into(),
      password:   "staff123".into(),
      department: "CSE".into(),
    })
    .unwrap();

  router(AppState::new(
    SessionStore::new(),
    MemoryStore::new(),
    directory,
  ))
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(serde_json::to_vec(&body).unwrap()))
    .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
  Request::builder()
    .method("DELETE")
    .uri(uri)
    .body(Body::empty())
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router, id: &str, password: &str) {
  let response = app
    .clone()
    .oneshot(post_json("/session", json!({ "id": id, "password": password })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
}

async fn login_staff(app: &Router) { login(app, "STAFF123", "staff123").await }

async fn login_student(app: &Router) {
  login(app, "12345678", "student123").await
}

// ─── Access gate ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn gate_redirects_anonymous_traffic_to_public_entry() {
  let app = test_app();

  for uri in ["/dashboard", "/records", "/records/stats"] {
    let response = app.clone().oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
    assert_eq!(
      response.headers().get(header::LOCATION).unwrap(),
      "/",
      "{uri}"
    );
  }
}

#[tokio::test]
async fn gate_reevaluates_after_logout() {
  let app = test_app();
  login_staff(&app).await;

  let response = app.clone().oneshot(get("/dashboard")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  app.clone().oneshot(delete("/session")).await.unwrap();

  let response = app.clone().oneshot(get("/dashboard")).await.unwrap();
  assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ─── Session ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_returns_the_identity() {
  let app = test_app();

  let response = app
    .clone()
    .oneshot(post_json(
      "/session",
      json!({ "id": "STAFF123", "password": "staff123" }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  assert_eq!(body["role"], "staff");
  assert_eq!(body["id"], "STAFF123");
  assert_eq!(body["department"], "CSE");
}

#[tokio::test]
async fn rejected_credentials_leave_the_session_anonymous() {
  let app = test_app();

  let response = app
    .clone()
    .oneshot(post_json(
      "/session",
      json!({ "id": "STAFF123", "password": "wrong1" }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

  let body = body_json(app.clone().oneshot(get("/session")).await.unwrap()).await;
  assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn logout_is_idempotent_over_http() {
  let app = test_app();
  login_student(&app).await;

  for _ in 0..2 {
    let response = app.clone().oneshot(delete("/session")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
  }

  let body = body_json(app.clone().oneshot(get("/session")).await.unwrap()).await;
  assert_eq!(body["authenticated"], false);
  assert!(body.get("user").is_none());
}

// ─── Records ─────────────────────────────────────────────────────────────────

async fn create_record(app: &Router, student_id: &str, kind: &str) -> Value {
  let response = app
    .clone()
    .oneshot(post_json(
      "/records",
      json!({
        "student_id": student_id,
        "student_name": "Demo Student",
        "type": kind,
        "description": "late submission of assignment",
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CREATED);
  body_json(response).await
}

#[tokio::test]
async fn staff_creates_records_students_cannot() {
  let app = test_app();

  login_staff(&app).await;
  let record = create_record(&app, "12345678", "Warning").await;
  assert_eq!(record["status"], "active");
  assert_eq!(record["type"], "Warning");

  login_student(&app).await;
  let response = app
    .clone()
    .oneshot(post_json(
      "/records",
      json!({
        "student_id": "12345678",
        "student_name": "Demo Student",
        "type": "Warning",
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn blank_type_is_a_bad_request() {
  let app = test_app();
  login_staff(&app).await;

  let response = app
    .clone()
    .oneshot(post_json(
      "/records",
      json!({
        "student_id": "12345678",
        "student_name": "Demo Student",
        "type": "",
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn students_see_only_their_own_records() {
  let app = test_app();

  login_staff(&app).await;
  create_record(&app, "12345678", "Warning").await;
  create_record(&app, "87654321", "Tardy").await;

  login_student(&app).await;
  let response = app.clone().oneshot(get("/records")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  let records = body.as_array().unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0]["student_id"], "12345678");
}

#[tokio::test]
async fn toggle_round_trips_over_http() {
  let app = test_app();
  login_staff(&app).await;

  let record = create_record(&app, "12345678", "Warning").await;
  let id = record["record_id"].as_str().unwrap().to_owned();

  let body = body_json(
    app
      .clone()
      .oneshot(post_json(&format!("/records/{id}/toggle"), json!({})))
      .await
      .unwrap(),
  )
  .await;
  assert_eq!(body["status"], "resolved");

  let body = body_json(
    app
      .clone()
      .oneshot(post_json(&format!("/records/{id}/toggle"), json!({})))
      .await
      .unwrap(),
  )
  .await;
  assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn toggle_unknown_id_is_404() {
  let app = test_app();
  login_staff(&app).await;

  let response = app
    .clone()
    .oneshot(post_json(
      "/records/00000000-0000-4000-8000-000000000000/toggle",
      json!({}),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_derive_from_the_collection() {
  let app = test_app();
  login_staff(&app).await;

  create_record(&app, "12345678", "Warning").await;
  let second = create_record(&app, "12345678", "Tardy").await;
  create_record(&app, "87654321", "Warning").await;

  let id = second["record_id"].as_str().unwrap();
  app
    .clone()
    .oneshot(post_json(&format!("/records/{id}/toggle"), json!({})))
    .await
    .unwrap();

  let body =
    body_json(app.clone().oneshot(get("/records/stats")).await.unwrap()).await;
  assert_eq!(body["active"], 2);
  assert_eq!(body["resolved"], 1);
  assert_eq!(body["total"], 3);
  assert_eq!(body["students_involved"], 2);
}

#[tokio::test]
async fn stats_are_a_staff_view() {
  let app = test_app();
  login_student(&app).await;

  let response = app.clone().oneshot(get("/records/stats")).await.unwrap();
  assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_defaults_to_the_role_overview() {
  let app = test_app();

  login_staff(&app).await;
  let body = body_json(app.clone().oneshot(get("/dashboard")).await.unwrap()).await;
  assert_eq!(body["screen"], "staff_overview");

  login_student(&app).await;
  let body = body_json(app.clone().oneshot(get("/dashboard")).await.unwrap()).await;
  assert_eq!(body["screen"], "student_overview");
}

#[tokio::test]
async fn student_overview_counts_only_their_records() {
  let app = test_app();

  login_staff(&app).await;
  create_record(&app, "12345678", "Warning").await;
  let own = create_record(&app, "12345678", "Tardy").await;
  create_record(&app, "87654321", "Warning").await;

  let id = own["record_id"].as_str().unwrap();
  app
    .clone()
    .oneshot(post_json(&format!("/records/{id}/toggle"), json!({})))
    .await
    .unwrap();

  login_student(&app).await;
  let body = body_json(app.clone().oneshot(get("/dashboard")).await.unwrap()).await;
  assert_eq!(body["screen"], "student_overview");
  assert_eq!(body["active"], 1);
  assert_eq!(body["resolved"], 1);
}

#[tokio::test]
async fn records_view_selects_by_role() {
  let app = test_app();

  login_staff(&app).await;
  create_record(&app, "87654321", "Warning").await;

  let body = body_json(
    app
      .clone()
      .oneshot(get("/dashboard?view=records"))
      .await
      .unwrap(),
  )
  .await;
  assert_eq!(body["screen"], "staff_records");
  assert_eq!(body["records"].as_array().unwrap().len(), 1);

  login_student(&app).await;
  let body = body_json(
    app
      .clone()
      .oneshot(get("/dashboard?view=records"))
      .await
      .unwrap(),
  )
  .await;
  assert_eq!(body["screen"], "student_records");
  assert!(body["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn staff_profile_has_no_student_fields() {
  let app = test_app();
  login_staff(&app).await;

  let body = body_json(
    app
      .clone()
      .oneshot(get("/dashboard?view=profile"))
      .await
      .unwrap(),
  )
  .await;
  assert_eq!(body["screen"], "profile");
  assert_eq!(body["user"]["role"], "staff");
  assert!(body["user"].get("year").is_none());
  assert!(body["user"].get("semester").is_none());
}

// ─── Registration ────────────────────────────────────────────────────────────

#[tokio::test]
async fn registered_account_can_sign_in() {
  let app = test_app();

  let response = app
    .clone()
    .oneshot(post_json(
      "/register/student",
      json!({
        "student_id": "20240042",
        "name": "Mei Chen",
        "email": "mei.chen@example.edu",
        "password": "hunter2!",
        "department": "ECE",
        "year": 1,
        "semester": 2,
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CREATED);

  login(&app, "20240042", "hunter2!").await;
  let body = body_json(app.clone().oneshot(get("/session")).await.unwrap()).await;
  assert_eq!(body["user"]["name"], "Mei Chen");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
  let app = test_app();

  let response = app
    .clone()
    .oneshot(post_json(
      "/register/staff",
      json!({
        "staff_id": "STAFF123",
        "name": "Another Staff",
        "email": "another@example.edu",
        "password": "staff456",
        "department": "ME",
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn registration_validation_is_a_bad_request() {
  let app = test_app();

  let response = app
    .clone()
    .oneshot(post_json(
      "/register/student",
      json!({
        "student_id": "20240043",
        "name": "Short Password",
        "email": "short@example.edu",
        "password": "abc",
        "department": "CE",
        "year": 3,
        "semester": 5,
      }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
