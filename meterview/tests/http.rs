use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use meterview::build_with;
use meterview::config::config_from;
use meterview_core::{
    BillingApi, Credential, CustomerPage, CustomerRecord, DashboardKind, MeterResult,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Every page is full and points to another one.
#[derive(Default)]
struct EndlessBilling {
    list_calls: AtomicUsize,
    embed_calls: AtomicUsize,
}

#[async_trait::async_trait]
impl BillingApi for EndlessBilling {
    async fn list_customers(&self, _: &Credential, cursor: Option<&str>, limit: u32) -> MeterResult<CustomerPage> {
        let page = self.list_calls.fetch_add(1, Ordering::SeqCst);
        let records = (0..limit)
            .map(|i| CustomerRecord {
                id: Some(format!("c_{page}_{i}")),
                ..Default::default()
            })
            .collect();
        Ok(CustomerPage {
            records,
            next_cursor: Some(format!("{}+", cursor.unwrap_or("p"))),
        })
    }

    async fn get_embed_url(&self, _: &Credential, customer_id: &str, kind: DashboardKind) -> MeterResult<Option<String>> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(format!("https://x.example/embed/{kind}/{customer_id}?tok=abc")))
    }
}

fn app(api: Arc<EndlessBilling>) -> axum::Router {
    build_with(config_from(Vec::new()), api).router
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(res: axum::response::Response) -> Vec<u8> {
    res.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body(res: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

#[test]
fn built_app_carries_listen_config() {
    let ax = build_with(
        config_from(vec![("HTTP_PORT".to_string(), "4100".to_string())]),
        Arc::new(EndlessBilling::default()),
    );

    assert_eq!(ax.app.get("http.host").as_deref(), Some("127.0.0.1"));
    assert_eq!(ax.app.get("http.port").as_deref(), Some("4100"));
    assert_eq!(ax.app.get("metronome.baseUrl").as_deref(), Some("https://api.metronome.com"));
}

#[tokio::test]
async fn health_ok() {
    let res = app(Arc::default())
        .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    assert_eq!(body_bytes(res).await, b"ok");
}

#[tokio::test]
async fn index_serves_the_viewer_page() {
    let res = app(Arc::default())
        .oneshot(Request::builder().method("GET").uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = String::from_utf8(body_bytes(res).await).unwrap();
    assert!(html.contains("Metronome Usage Dashboard Viewer"));
    assert!(html.contains(r#"referrerpolicy="no-referrer""#));
}

#[tokio::test]
async fn customers_are_truncated_at_five_pages() {
    let api = Arc::new(EndlessBilling::default());
    let res = app(api.clone())
        .oneshot(post_json("/api/customers", json!({"metronomeApiKey": "key"})))
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    let body = json_body(res).await;
    let customers = body["customers"].as_array().unwrap();
    assert_eq!(customers.len(), 500);
    assert_eq!(customers[0], json!({"id": "c_0_0", "name": "c_0_0"}));
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn bare_and_api_paths_behave_the_same() {
    for uri in ["/embed-url", "/api/embed-url"] {
        let res = app(Arc::default())
            .oneshot(post_json(
                uri,
                json!({"metronomeApiKey": "key", "customer_id": "c_1", "dashboard": "usage"}),
            ))
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 200);
        assert_eq!(
            json_body(res).await,
            json!({"url": "https://x.example/embed/usage/c_1?tok=abc"})
        );
    }
}

#[tokio::test]
async fn missing_customer_id_makes_no_upstream_call() {
    let api = Arc::new(EndlessBilling::default());
    let res = app(api.clone())
        .oneshot(post_json(
            "/api/embed-url",
            json!({"metronomeApiKey": "key", "dashboard": "usage"}),
        ))
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(
        json_body(res).await,
        json!({"error": "Missing metronomeApiKey, customer_id, or dashboard"})
    );
    assert_eq!(api.embed_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_key_on_customers_is_400() {
    let res = app(Arc::default())
        .oneshot(post_json("/customers", json!({"metronomeApiKey": ""})))
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(json_body(res).await, json!({"error": "Missing metronomeApiKey"}));
}
