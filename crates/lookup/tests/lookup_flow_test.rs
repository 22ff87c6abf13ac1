use std::fs;
use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tickerscout_lookup::{
    get_symbol_info, FailureCategory, FailureKind, FmpProvider, JsonCredentialStore, LocalDatabase,
    User,
};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn file_user(dir: &tempfile::TempDir, name: &str) -> User {
    let path = write_fixture(dir, "api_keys.json", r#"{"Nicolas": "k-123"}"#);
    let store = JsonCredentialStore::open(path).unwrap();
    User::new(name, Box::new(store))
}

#[test]
fn unknown_user_raises_caller_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut user = file_user(&dir, "John");

    let error = user.api_key().unwrap_err();
    let failure = error.as_failure().expect("expected a taxonomy failure");
    assert_eq!(failure.kind(), FailureKind::NameNotFound);

    let record = failure.log();
    assert_eq!(record.status, 500);
    assert!(record.user_message.unwrap().contains("John"));
}

#[tokio::test]
async fn matching_symbol_returns_body_unchanged() {
    let matches = json!([
        {"symbol": "MXT", "name": "Maximus Ltd", "currency": "AUD", "exchange": "ASX"}
    ]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-symbol"))
        .and(query_param("query", "MXT"))
        .and(query_param("apikey", "k-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&matches))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut user = file_user(&dir, "Nicolas");
    let provider = FmpProvider::new().with_base_url(server.uri());

    let result = get_symbol_info(&provider, "MXT", &mut user).await.unwrap();
    assert_eq!(result, matches);
    assert_eq!(result.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_result_raises_service_failure_naming_the_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-symbol"))
        .and(query_param("query", "AAAAL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut user = file_user(&dir, "Nicolas");
    let provider = FmpProvider::new().with_base_url(server.uri());

    let error = get_symbol_info(&provider, "AAAAL", &mut user)
        .await
        .unwrap_err();
    let failure = error.as_failure().expect("expected a taxonomy failure");
    assert_eq!(failure.kind(), FailureKind::NoSymbolFound);
    assert_eq!(failure.category(), FailureCategory::Service);
    assert!(failure.user_message().unwrap().contains("AAAAL"));
}

#[tokio::test]
async fn credential_failure_propagates_unwrapped_through_lookup() {
    // No request may reach the endpoint when key resolution fails.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"symbol": "MXT"}])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut user = file_user(&dir, "MacKohnley");
    let provider = FmpProvider::new().with_base_url(server.uri());

    let error = get_symbol_info(&provider, "MXT", &mut user)
        .await
        .unwrap_err();
    let failure = error.as_failure().expect("expected a taxonomy failure");
    assert_eq!(failure.kind(), FailureKind::NameNotFound);
}

#[test]
fn caller_failure_falls_back_to_database_scan() {
    let dir = tempfile::tempdir().unwrap();
    let mut user = file_user(&dir, "MacKohnley");

    let error = user.api_key().unwrap_err();
    let failure = error.as_failure().expect("expected a taxonomy failure");
    assert_eq!(failure.category(), FailureCategory::Caller);

    let db_path = write_fixture(
        &dir,
        "database.json",
        r#"[
            {"symbol": "MXT", "name": "Maximus Ltd"},
            {"symbol": "MXTRF", "name": "Maximus Resources", "exchange": "OTC"}
        ]"#,
    );
    let db = LocalDatabase::load(db_path).unwrap();

    let record = db.find_by_symbol("MXTRF").expect("fixture record present");
    assert_eq!(record["symbol"], "MXTRF");
    assert_eq!(record["name"], "Maximus Resources");

    assert!(db.find_by_symbol("ZZZZ").is_none());
}
