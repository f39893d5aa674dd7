//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tally_core::MemoryStore;
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig {
        allowed_origins: vec![],
        categories: vec!["Food & Dining".to_string(), "Travel".to_string()],
        ..Default::default()
    }
}

fn setup_test_app() -> Router {
    create_router(Arc::new(MemoryStore::with_sample_data()), test_config())
}

fn setup_empty_app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let app = create_router(Arc::new(store.clone()), test_config());
    (app, store)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ========== Transaction API Tests ==========

#[tokio::test]
async fn test_list_transactions() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/transactions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let transactions = json["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 5);
    assert_eq!(transactions[0]["date"], "2024-01-15");
    assert_eq!(transactions[0]["type"], "income");
}

#[tokio::test]
async fn test_list_transactions_filtered() {
    let app = setup_test_app();

    let response = app
        .oneshot(get(
            "/api/transactions?search=food&type=expense&category=Food%20%26%20Dining",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["transactions"].as_array().unwrap().len(), 2);
    assert!((json["net_total"].as_f64().unwrap() + 61.25).abs() < 1e-9);
}

#[tokio::test]
async fn test_list_transactions_bad_type() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/transactions?type=transfer"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_transactions_type_is_lowercase_only() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(get("/api/transactions?type=Expense"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/transactions",
            serde_json::json!({
                "amount": 5.0,
                "date": "2024-01-20",
                "description": "Lunch",
                "category": "Food & Dining",
                "type": "Expense"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_transaction() {
    let (app, store) = setup_empty_app();

    let body = serde_json::json!({
        "amount": 12.5,
        "date": "2024-02-01",
        "description": "Lunch",
        "category": "Food & Dining",
        "type": "expense"
    });

    let response = app
        .oneshot(json_request("POST", "/api/transactions", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_body_json(response).await;
    let id = json["transaction"]["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(json["transaction"]["amount"], 12.5);

    assert_eq!(store.get_transaction(id).unwrap().description, "Lunch");
}

#[tokio::test]
async fn test_create_transaction_validation() {
    let (app, store) = setup_empty_app();

    let negative = serde_json::json!({
        "amount": -4.0,
        "date": "2024-02-01",
        "category": "Food & Dining",
        "type": "expense"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/transactions", negative))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("amount"));

    let missing_type = serde_json::json!({
        "amount": 4.0,
        "date": "2024-02-01",
        "category": "Food & Dining"
    });
    let response = app
        .oneshot(json_request("POST", "/api/transactions", missing_type))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.list_transactions().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_transaction_malformed_json() {
    let (app, _store) = setup_empty_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/transactions")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(get("/api/transactions/3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["transaction"]["description"], "Gas station");

    let response = app.oneshot(get("/api/transactions/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Transaction not found");
}

#[tokio::test]
async fn test_update_transaction_with_body_id() {
    let store = MemoryStore::with_sample_data();
    let app = create_router(Arc::new(store.clone()), test_config());

    let body = serde_json::json!({ "id": "2", "amount": 50.0 });
    let response = app
        .oneshot(json_request("PUT", "/api/transactions", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["transaction"]["amount"], 50.0);
    assert_eq!(json["transaction"]["description"], "Grocery shopping");
    assert_eq!(store.get_transaction("2").unwrap().amount, 50.0);
}

#[tokio::test]
async fn test_update_transaction_by_path() {
    let app = setup_test_app();

    let body = serde_json::json!({ "category": "Shopping", "type": "expense" });
    let response = app
        .oneshot(json_request("PUT", "/api/transactions/5", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["transaction"]["category"], "Shopping");
    assert_eq!(json["transaction"]["id"], "5");
}

#[tokio::test]
async fn test_update_transaction_errors() {
    let app = setup_test_app();

    let unknown = serde_json::json!({ "id": "missing", "amount": 1.0 });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/transactions", unknown))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let no_id = serde_json::json!({ "amount": 1.0 });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/transactions", no_id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Transaction ID is required");

    let bad_date = serde_json::json!({ "id": "1", "date": "15/01/2024" });
    let response = app
        .oneshot(json_request("PUT", "/api/transactions", bad_date))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_transaction() {
    let store = MemoryStore::with_sample_data();
    let app = create_router(Arc::new(store.clone()), test_config());

    let response = app
        .clone()
        .oneshot(delete("/api/transactions?id=4"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(store.list_transactions().unwrap().len(), 4);

    let response = app
        .clone()
        .oneshot(delete("/api/transactions?id=4"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(delete("/api/transactions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Transaction ID is required");

    let response = app.oneshot(delete("/api/transactions/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.list_transactions().unwrap().len(), 3);
}

// ========== Budget API Tests ==========

#[tokio::test]
async fn test_list_budgets() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(get("/api/budgets?month=2024-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["budgets"].as_array().unwrap().len(), 4);

    let response = app
        .clone()
        .oneshot(get("/api/budgets?month=2024-02"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert!(json["budgets"].as_array().unwrap().is_empty());

    let response = app
        .oneshot(get("/api/budgets?month=January"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upsert_budget_replaces_existing() {
    let store = MemoryStore::with_sample_data();
    let app = create_router(Arc::new(store.clone()), test_config());

    let body = serde_json::json!({
        "category": "Food & Dining",
        "amount": 40.0,
        "month": "2024-01"
    });
    let response = app
        .oneshot(json_request("PUT", "/api/budgets", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["amount"], 40.0);

    let budgets = store.list_budgets().unwrap();
    assert_eq!(budgets.len(), 4);
    assert!(budgets
        .iter()
        .any(|b| b.category == "Food & Dining" && b.amount == 40.0));
}

#[tokio::test]
async fn test_upsert_budget_rejects_bad_month() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "category": "Travel",
        "amount": 100.0,
        "month": "2024-1"
    });
    let response = app
        .oneshot(json_request("PUT", "/api/budgets", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_budget() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(delete("/api/budgets?category=Entertainment&month=2024-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(delete("/api/budgets?category=Entertainment&month=2024-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(delete("/api/budgets?category=Entertainment"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_categories() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["categories"].as_array().unwrap().len(), 2);
    assert_eq!(json["in_use"][0], "Income");
}

// ========== Report API Tests ==========

#[tokio::test]
async fn test_summary_report() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/reports/summary?month=2024-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["month"], "2024-01");
    assert_eq!(json["total_income"], 1200.0);
    assert_eq!(json["transaction_count"], 5);
    assert!((json["breakdown"]["Food & Dining"].as_f64().unwrap() - 61.25).abs() < 1e-9);
    assert_eq!(json["top_category"]["category"], "Bills & Utilities");
    assert_eq!(json["categories"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_summary_report_bad_month() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/reports/summary?month=2024-13"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("YYYY-MM"));
}

#[tokio::test]
async fn test_budget_report() {
    let store = MemoryStore::with_sample_data();
    store
        .upsert_budget(tally_core::Budget::new("Food & Dining", 40.0, "2024-01"))
        .unwrap();
    let app = create_router(Arc::new(store), test_config());

    let response = app
        .oneshot(get("/api/reports/budgets?month=2024-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let budgets = json["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 4);

    let food = budgets
        .iter()
        .find(|b| b["category"] == "Food & Dining")
        .unwrap();
    assert_eq!(food["status"], "over");
    assert_eq!(food["is_over_budget"], true);
    assert_eq!(json["alerts"]["over"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_monthly_report() {
    let store = MemoryStore::with_sample_data();
    for (month, amount) in [("2023-10", 10.0), ("2023-11", 20.0), ("2023-12", 30.0)] {
        store
            .create_transaction(tally_core::NewTransaction {
                amount,
                date: format!("{}-05", month),
                description: String::new(),
                category: "Shopping".to_string(),
                kind: tally_core::TransactionType::Expense,
            })
            .unwrap();
    }
    let app = create_router(Arc::new(store), test_config());

    let response = app
        .clone()
        .oneshot(get("/api/reports/monthly"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let months = json["months"].as_array().unwrap();
    assert_eq!(months.len(), 4);
    assert_eq!(months[0]["month"], "2023-10");
    assert_eq!(months[3]["label"], "Jan 2024");

    let response = app
        .oneshot(get("/api/reports/monthly?months=2"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let months = json["months"].as_array().unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "2023-12");
}

#[tokio::test]
async fn test_insights_report() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/api/reports/insights?month=2024-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["health"]["score"], 100);
    assert_eq!(json["health"]["rating"], "excellent");
    assert_eq!(json["trend"]["change_percent"], 0.0);
    assert_eq!(json["budgets"].as_array().unwrap().len(), 4);
    assert!(json["top_categories"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
async fn test_dashboard() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["report"]["health"]["score"].is_number());
    let recent = json["recent_transactions"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["id"], "1");
    assert!(json["monthly"].is_array());
}

#[tokio::test]
async fn test_dashboard_recent_in_store_order() {
    let store = MemoryStore::with_sample_data();
    let app = create_router(Arc::new(store.clone()), test_config());

    let created = store
        .create_transaction(tally_core::NewTransaction {
            amount: 20.0,
            date: "2023-06-01".to_string(),
            description: "Old receipt".to_string(),
            category: "Food & Dining".to_string(),
            kind: tally_core::TransactionType::Expense,
        })
        .unwrap();

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let recent = json["recent_transactions"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["id"], created.id.as_str());
    assert_eq!(recent[1]["id"], "1");
}

// ========== Security Header Tests ==========

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/categories")).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/accounts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_server_config_from_config() {
    let config = tally_core::Config::embedded().unwrap();
    let server = ServerConfig::from_config(&config);
    assert_eq!(server.categories, config.categories);
    assert_eq!(server.reports.top_categories, 5);
}
