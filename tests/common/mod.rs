#![allow(dead_code)]

use axum::{
    Json, Router,
    http::{StatusCode, header},
    routing::post,
};
use mkrl::application::services::UrlSubmissionController;
use mkrl::config::Config;
use mkrl::infrastructure::http::HttpShorteningClient;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-process stand-in for the shortening service.
pub struct StubService {
    /// Origin the stub listens on, e.g. `http://127.0.0.1:41234`.
    pub origin: String,
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl StubService {
    pub fn api_base(&self) -> String {
        format!("{}/api", self.origin)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

/// Starts a stub answering `POST /api/shorten` with `status` and a raw JSON `body`.
pub async fn spawn_stub(status: StatusCode, body: &str) -> StubService {
    spawn_stub_with_delay(status, body, Duration::ZERO).await
}

pub async fn spawn_stub_with_delay(status: StatusCode, body: &str, delay: Duration) -> StubService {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_body = Arc::new(Mutex::new(None));
    let body = body.to_string();

    let app = Router::new().route(
        "/api/shorten",
        post({
            let hits = hits.clone();
            let last_body = last_body.clone();
            move |Json(payload): Json<Value>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last_body.lock().unwrap() = Some(payload);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService {
        origin: format!("http://{addr}"),
        hits,
        last_body,
    }
}

pub fn test_config(api_base_url: String) -> Config {
    Config {
        api_base_url,
        request_timeout_secs: 5,
        ..Config::default()
    }
}

pub fn create_test_controller(config: &Config) -> UrlSubmissionController<HttpShorteningClient> {
    config.validate().unwrap();
    let client = HttpShorteningClient::from_config(config).unwrap();
    UrlSubmissionController::new(
        Arc::new(client),
        config.redirect_origin(),
        config.page_origin(),
    )
}
