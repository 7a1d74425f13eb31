//! Drives the real reqwest transport against a local axum stub.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use ticketdash_core::core::client::http_client::HttpClient;
use ticketdash_core::core::client::http_transport::REQUEST_ID_HEADER;
use ticketdash_core::core::config::AppConfig;
use ticketdash_core::domain::dashboard::dto::filter_set::{FilterField, FilterSet};
use ticketdash_core::domain::dashboard::service::dashboard_service::DashboardService;
use ticketdash_core::domain::dashboard::service::DashboardApi;
use ticketdash_core::errors::{ApiError, NETWORK_ERROR_MESSAGE};

async fn ranking(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({
        "data": [{
            "id": 7,
            "name": params.get("level").cloned().unwrap_or_default(),
            "email": request_id,
            "total_tickets": params.len(),
            "resolved_tickets": 0,
            "pending_tickets": 0,
            "average_resolution_time": 0.0,
            "resolution_rate": 0.0,
            "level": "senior",
            "rank": 1
        }]
    }))
}

async fn broken_metrics() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "db down" })),
    )
}

async fn status() -> Json<Value> {
    Json(json!({
        "data": {
            "glpi_connection": true,
            "glpi_authentication": true,
            "cache_status": false,
            "last_sync": ""
        }
    }))
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/api/dashboard/technician-ranking", get(ranking))
        .route("/api/dashboard/metrics", get(broken_metrics))
        .route("/api/dashboard/system-status", get(status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn service_for(base_url: String) -> DashboardService {
    let config = AppConfig::default().with_api_base_url(&base_url).unwrap();
    DashboardService::new(HttpClient::from_config(&config).unwrap())
}

#[tokio::test]
async fn success_envelope_is_unwrapped_and_blank_filters_are_dropped() {
    let addr = spawn_stub().await;
    let service = service_for(format!("http://{}/api/", addr));

    let mut filters = FilterSet::default();
    filters.set(FilterField::StartDate, Some("2024-01-01".into()));
    filters.set(FilterField::Level, Some("senior".into()));
    filters.set(FilterField::Priority, Some("".into()));

    let ranking = service.get_technician_ranking(&filters).await.unwrap();

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].name, "senior");
    assert_eq!(ranking[0].total_tickets, 2);
    assert_eq!(ranking[0].email.len(), 36, "request id should be a uuid");
}

#[tokio::test]
async fn server_error_carries_backend_message() {
    let addr = spawn_stub().await;
    let service = service_for(format!("http://{}/api", addr));

    let err = service
        .get_dashboard_metrics(&FilterSet::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Server { status, .. } if status.as_u16() == 500));
    assert_eq!(err.to_string(), "db down");
}

#[tokio::test]
async fn empty_last_sync_decodes_as_never() {
    let addr = spawn_stub().await;
    let service = service_for(format!("http://{}/api", addr));

    let status = service.get_system_status().await.unwrap();

    assert_eq!(status.last_sync, None);
    assert!(!status.all_healthy());
}

#[tokio::test]
async fn closed_port_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let service = service_for(format!("http://{}/api", addr));

    let err = service.get_system_status().await.unwrap_err();

    assert_eq!(err.kind(), "network");
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}
