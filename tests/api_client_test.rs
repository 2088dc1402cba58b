//! API client integration tests
//!
//! Exercises every endpoint wrapper against a wiremock server.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{body_json, body_string_contains, header, method, path, query_param},
    Mock, ResponseTemplate,
};

use activity_board::BoardError;

#[tokio::test]
async fn test_fetch_activities_preserves_server_order() {
    let mock = ActivityMockServer::new().await;
    mock.mock_activities(SCHOOL_ACTIVITIES).await;

    let activities = assert_ok!(mock.api_client().fetch_activities().await);

    let names: Vec<&str> = activities.names().collect();
    assert_eq!(names, vec!["Programming Class", "Chess Club", "Gym Class"]);
    let chess = activities.get("Chess Club").unwrap();
    assert_eq!(chess.details.max_participants, 12);
    assert_eq!(chess.available_spots(), 10);
}

#[tokio::test]
async fn test_fetch_activities_failure_is_rejected() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock.server)
        .await;

    let result = mock.api_client().fetch_activities().await;
    assert_matches!(result, Err(BoardError::Rejected { status: 500, detail: None }));
}

#[tokio::test]
async fn test_malformed_body_is_not_transport_error() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"<html>oops</html>".to_vec(), "application/json"))
        .mount(&mock.server)
        .await;

    let error = assert_err!(mock.api_client().fetch_activities().await);
    assert_matches!(error, BoardError::Http(ref e) if e.is_decode());
    assert!(!error.is_transport());
}

#[tokio::test]
async fn test_login_sends_form_credentials() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=teacher1"))
        .and(body_string_contains("password=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "teacher1" })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let response = assert_ok!(mock.api_client().login("teacher1", "s3cret").await);
    assert_eq!(response.username, "teacher1");
}

#[tokio::test]
async fn test_login_failure_carries_detail() {
    let mock = ActivityMockServer::new().await;
    mock.mock_login_failure("Invalid username or password").await;

    let error = assert_err!(mock.api_client().login("teacher1", "wrong").await);
    assert_eq!(error.status(), Some(401));
    assert_eq!(error.detail(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_signup_encodes_activity_and_email() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .and(query_param("email", "new+student@mergington.edu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&mock.server)
        .await;

    assert_ok!(
        mock.api_client()
            .signup("Chess Club", "new+student@mergington.edu")
            .await
    );
}

#[tokio::test]
async fn test_unregister_not_found_detail() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("DELETE"))
        .and(path("/activities/Chess/unregister"))
        .and(query_param("email", "a@x.com"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "not found" })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let error = assert_err!(mock.api_client().unregister("Chess", "a@x.com").await);
    assert_matches!(error, BoardError::Rejected { status: 404, detail: Some(ref d) } if d == "not found");
}

#[tokio::test]
async fn test_teacher_register_sends_json_body() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("POST"))
        .and(path("/api/activities/Chess%20Club/register"))
        .and(body_json(json!({ "student_email": "a@x.com" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Registered a@x.com for Chess Club" })),
        )
        .expect(1)
        .mount(&mock.server)
        .await;

    let message = assert_ok!(mock.api_client().register_student("Chess Club", "a@x.com").await);
    assert_eq!(message.as_deref(), Some("Registered a@x.com for Chess Club"));
}

#[tokio::test]
async fn test_teacher_unregister_accepts_empty_body() {
    let mock = ActivityMockServer::new().await;
    Mock::given(method("POST"))
        .and(path("/api/activities/Chess/unregister"))
        .and(body_json(json!({ "student_email": "a@x.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock.server)
        .await;

    let message = assert_ok!(mock.api_client().unregister_student("Chess", "a@x.com").await);
    assert_eq!(message, None);
}

#[tokio::test]
async fn test_session_cookie_is_sent_after_login() {
    let mock = ActivityMockServer::new().await;
    mock.mock_login_success("teacher1").await;
    Mock::given(method("POST"))
        .and(path("/api/activities/Chess/register"))
        .and(header("cookie", SESSION_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let client = mock.api_client();
    assert_ok!(client.login("teacher1", "pw").await);
    // Clones share the cookie store
    assert_ok!(client.clone().register_student("Chess", "a@x.com").await);
}

#[tokio::test]
async fn test_current_user() {
    let mock = ActivityMockServer::new().await;
    mock.mock_json("GET", "/auth/me", 200, json!({ "username": "teacher1", "name": "Ms. Smith" }))
        .await;

    let user = assert_ok!(mock.api_client().current_user().await);
    let user = user.expect("user should be present");
    assert_eq!(user.username, "teacher1");
    assert_eq!(user.name.as_deref(), Some("Ms. Smith"));
}

#[tokio::test]
async fn test_current_user_without_session() {
    let mock = ActivityMockServer::new().await;
    mock.mock_json("GET", "/auth/me", 200, serde_json::Value::Null).await;

    let user = assert_ok!(mock.api_client().current_user().await);
    assert!(user.is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let mut settings = activity_board::Settings::default();
    // Nothing listens on the discard port
    settings.api.base_url = "http://127.0.0.1:9".to_string();
    settings.api.timeout_seconds = 2;
    let client = activity_board::ApiClient::new(&settings.api).unwrap();

    let error = assert_err!(client.fetch_activities().await);
    assert!(error.is_transport());
    assert_eq!(error.status(), None);
}
