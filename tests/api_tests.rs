use std::path::PathBuf;

use axum::http::StatusCode;
use axum_test::TestServer;

use recommender_dashboard::{
    api::{create_router, AppState},
    config::Config,
    error::AppError,
};

fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

async fn create_test_server(fixture: &str) -> TestServer {
    let state = AppState::load(Config::with_data_dir(fixture_dir(fixture)))
        .await
        .unwrap();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn data_rows(html: &str) -> usize {
    html.matches("<tr><td>").count()
}

#[tokio::test]
async fn test_health_check_reports_row_counts() {
    let server = create_test_server("full").await;
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["datasets"]["rules"], 3);
    assert_eq!(body["datasets"]["similar_items"], 5);
    assert_eq!(body["datasets"]["picks"], 3);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_home_is_default_view() {
    let server = create_test_server("full").await;
    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("E-commerce Recommender System"));
    assert!(html.contains(r#"value="home" onchange="this.form.submit()" checked>"#));
    assert!(html.contains("Updated: "));
}

#[tokio::test]
async fn test_market_basket_lists_consequents_with_lift() {
    let server = create_test_server("full").await;
    let response = server
        .get("/")
        .add_query_param("view", "market-basket")
        .add_query_param("antecedent", "milk")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"<img class="banner" src="/images/3.gif" alt="">"#));
    assert!(html.contains("<tr><td>bread</td><td>1.80</td></tr>"));
    assert!(html.contains("<tr><td>eggs</td><td>2.30</td></tr>"));
    assert_eq!(data_rows(&html), 2);
}

#[tokio::test]
async fn test_item_item_returns_available_matches_below_k() {
    let server = create_test_server("full").await;
    let response = server
        .get("/")
        .add_query_param("view", "item-item")
        .add_query_param("product_id", "42")
        .add_query_param("k", "10")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert_eq!(data_rows(&html), 3);
    assert!(html.contains("Electric Kettle"));
    assert!(html.contains("$1,250.50"));
    assert!(html.contains("<td>$3.00</td>"));
}

#[tokio::test]
async fn test_item_item_truncates_to_k() {
    let server = create_test_server("full").await;
    let response = server
        .get("/")
        .add_query_param("view", "item-item")
        .add_query_param("product_id", "42")
        .add_query_param("k", "2")
        .await;

    let html = response.text();
    assert_eq!(data_rows(&html), 2);
    assert!(html.contains("<td>Teapot</td>"));
    assert!(!html.contains("Tea Strainer"));
}

#[tokio::test]
async fn test_user_item_shows_history_and_picks_without_profile_column() {
    let server = create_test_server("full").await;
    let response = server
        .get("/")
        .add_query_param("view", "user-item")
        .add_query_param("profile_id", "U001")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Previous Purchases"));
    assert!(html.contains("<td>Sourdough</td>"));
    assert!(html.contains("Top Recommendations"));
    assert!(html.contains("<tr><td>Strawberry Jam</td><td>Pantry</td><td>4.00</td></tr>"));
    assert!(!html.contains("<th>Profile Id</th>"));
    assert!(!html.contains("<td>U001</td>"));
}

#[tokio::test]
async fn test_user_item_unknown_profile_is_informational() {
    let server = create_test_server("full").await;
    let response = server
        .get("/")
        .add_query_param("view", "user-item")
        .add_query_param("profile_id", "U999")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("No recommendations found for this user ID."));
    assert!(html.contains(r#"class="notice notice-info""#));
    assert!(!html.contains(r#"class="notice notice-error""#));
}

#[tokio::test]
async fn test_missing_files_degrade_to_warnings() {
    let server = create_test_server("partial").await;

    let response = server.get("/").add_query_param("view", "item-item").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("item_item_final.csv not found."));
    assert!(html.contains("final_user_item.csv not found."));
    assert!(html.contains("No item-item CSV loaded."));

    // rules are present but the images directory is not
    let response = server.get("/").add_query_param("view", "market-basket").await;
    let html = response.text();
    assert!(html.contains("Image not found"));
    assert!(html.contains("<h4>Consequents for butter</h4>"));
}

#[tokio::test]
async fn test_malformed_history_is_a_visible_failure() {
    let server = create_test_server("malformed_history").await;

    let response = server.get("/").add_query_param("view", "user-item").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Malformed file"));

    // other views keep working
    server.get("/").await.assert_status_ok();
}

#[tokio::test]
async fn test_malformed_required_table_fails_startup() {
    let mut config = Config::with_data_dir(fixture_dir("full"));
    config.rules_file = "cleaned_data.csv".to_string();

    let result = AppState::load(config).await;
    assert!(matches!(result, Err(AppError::Malformed { .. })));
}

#[tokio::test]
async fn test_unknown_view_is_bad_request() {
    let server = create_test_server("full").await;
    let response = server.get("/").add_query_param("view", "admin").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server("full").await;
    let id = "7d3b1c9e-2f4a-4e8b-9c1d-0a5e6f7b8c9d";
    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(id),
        )
        .await;

    assert_eq!(response.headers().get("x-request-id").unwrap(), id);
}

#[tokio::test]
async fn test_images_are_served() {
    let server = create_test_server("full").await;
    let response = server.get("/images/3.gif").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"GIF89a");
}
