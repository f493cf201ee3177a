//! Common test utilities: a fake record store and the app wired to it.
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yoga_studio::config::{
    RecordsConfig, DEFAULT_COURSES_APP_ID, DEFAULT_INSTRUCTORS_APP_ID,
    DEFAULT_PARTICIPANTS_APP_ID,
};
use yoga_studio::AppState;

pub const COURSE_A: &str = "68a0b1c2d3e4f5a6b7c8d9e0";
pub const COURSE_B: &str = "68a0b1c2d3e4f5a6b7c8d9e1";
pub const INSTRUCTOR: &str = "68b0b1c2d3e4f5a6b7c8d9e0";
pub const PARTICIPANT: &str = "68c0b1c2d3e4f5a6b7c8d9e0";

/// Records config pointing at the fake store.
pub fn records_config(store: &MockServer) -> RecordsConfig {
    RecordsConfig::with_base_url(&format!("{}/rest", store.uri()))
}

pub fn courses_path() -> String {
    format!("/rest/apps/{}/records", DEFAULT_COURSES_APP_ID)
}

pub fn instructors_path() -> String {
    format!("/rest/apps/{}/records", DEFAULT_INSTRUCTORS_APP_ID)
}

pub fn participants_path() -> String {
    format!("/rest/apps/{}/records", DEFAULT_PARTICIPANTS_APP_ID)
}

/// A course reference as the store writes it.
pub fn course_url(store: &MockServer, id: &str) -> String {
    format!("{}/rest/apps/{}/records/{}", store.uri(), DEFAULT_COURSES_APP_ID, id)
}

/// Serve `body` for `GET {collection}`.
pub async fn mount_list(store: &MockServer, collection: String, body: Value) {
    Mock::given(method("GET"))
        .and(path(collection))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(store)
        .await;
}

/// Serve empty lists for all three collections.
pub async fn mount_empty_lists(store: &MockServer) {
    for collection in [courses_path(), instructors_path(), participants_path()] {
        mount_list(store, collection, serde_json::json!({})).await;
    }
}

/// Test server for the app backed by the fake store.
pub fn test_app(store: &MockServer) -> TestServer {
    let state = AppState::with_records(&records_config(store)).expect("Failed to build state");
    TestServer::new(yoga_studio::app(state)).expect("Failed to start test server")
}
