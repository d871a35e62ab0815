#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use showtime_api::auth::jwt::JwtConfig;
use showtime_api::config::{CorsOrigins, ServerConfig, StoreBackend};
use showtime_api::router::build_app_router;
use showtime_api::state::AppState;
use showtime_core::types::Document;
use showtime_db::{Collection, DocumentStore, InMemoryDocumentStore, InsertOutcome, StoreError};
use showtime_events::{EmailError, NotificationSender};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".to_string()]),
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_mins: 60,
        },
    }
}

/// Build the full application router over the given store and mailer.
pub fn build_test_app(
    store: Arc<dyn DocumentStore>,
    mailer: Arc<dyn NotificationSender>,
) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        mailer,
    };
    build_app_router(state, &config)
}

/// A router over a fresh in-memory store, plus a handle to that store.
pub fn memory_app() -> (Router, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let app = build_test_app(store.clone(), Arc::new(RecordingSender::default()));
    (app, store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// One message captured by [`RecordingSender`].
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail sender that records every message instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Mail sender whose relay always refuses.
#[derive(Debug, Default)]
pub struct RefusingSender;

#[async_trait]
impl NotificationSender for RefusingSender {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), EmailError> {
        Err(EmailError::Build("relay refused".to_string()))
    }
}

/// How [`BrokenStore`] misbehaves.
#[derive(Debug, Clone, Copy)]
pub enum Breakage {
    /// Writes succeed at the driver level but are not acknowledged.
    Unacknowledged,
    /// Every call fails with a database error.
    Unavailable,
}

/// Store that reads nothing and fails or refuses every write.
#[derive(Debug)]
pub struct BrokenStore(pub Breakage);

impl BrokenStore {
    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    fn write_outcome(&self) -> Result<InsertOutcome, StoreError> {
        match self.0 {
            Breakage::Unacknowledged => Ok(InsertOutcome {
                acknowledged: false,
                inserted_ids: Vec::new(),
            }),
            Breakage::Unavailable => self.fail(),
        }
    }

    fn read<T: Default>(&self) -> Result<T, StoreError> {
        match self.0 {
            Breakage::Unacknowledged => Ok(T::default()),
            Breakage::Unavailable => self.fail(),
        }
    }
}

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn find(&self, _: Collection, _: &Document) -> Result<Vec<Document>, StoreError> {
        self.read()
    }

    async fn find_one(
        &self,
        _: Collection,
        _: &Document,
    ) -> Result<Option<Document>, StoreError> {
        self.read()
    }

    async fn insert_one(&self, _: Collection, _: Document) -> Result<InsertOutcome, StoreError> {
        self.write_outcome()
    }

    async fn insert_many(
        &self,
        _: Collection,
        _: Vec<Document>,
    ) -> Result<InsertOutcome, StoreError> {
        self.write_outcome()
    }

    async fn update_one(
        &self,
        _: Collection,
        _: &Document,
        _: &Document,
    ) -> Result<u64, StoreError> {
        self.read()
    }

    async fn delete_one(&self, _: Collection, _: &Document) -> Result<u64, StoreError> {
        self.read()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read()
    }
}

/// Store whose every call panics, standing in for a bug inside a handler.
#[derive(Debug, Default)]
pub struct PanickingStore;

#[async_trait]
impl DocumentStore for PanickingStore {
    async fn find(&self, _: Collection, _: &Document) -> Result<Vec<Document>, StoreError> {
        panic!("find exploded")
    }

    async fn find_one(
        &self,
        _: Collection,
        _: &Document,
    ) -> Result<Option<Document>, StoreError> {
        panic!("find_one exploded")
    }

    async fn insert_one(&self, _: Collection, _: Document) -> Result<InsertOutcome, StoreError> {
        panic!("insert_one exploded")
    }

    async fn insert_many(
        &self,
        _: Collection,
        _: Vec<Document>,
    ) -> Result<InsertOutcome, StoreError> {
        panic!("insert_many exploded")
    }

    async fn update_one(
        &self,
        _: Collection,
        _: &Document,
        _: &Document,
    ) -> Result<u64, StoreError> {
        panic!("update_one exploded")
    }

    async fn delete_one(&self, _: Collection, _: &Document) -> Result<u64, StoreError> {
        panic!("delete_one exploded")
    }

    async fn ping(&self) -> Result<(), StoreError> {
        panic!("ping exploded")
    }
}
