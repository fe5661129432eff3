//! Shared test infrastructure for action and handler tests.
//!
//! # Fake backend
//! - `FakeBackend` records every request it receives and answers from stubs
//!   registered with `stub()`; anything unstubbed gets a 404.
//! - `start_backend()` binds it to an ephemeral port inside the current
//!   actix system and returns the base URL to hand to `ActionContext`.
//!
//! # Principals
//! - `token_for()` signs an access token with `SECRET`.
//! - `session_for()` builds an `AuthSession` whose token matches its user id.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, web};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::Value;

use slides::actions::ActionContext;
use slides::auth::session::{AuthSession, Role, SessionUser};
use slides::auth::token::Claims;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const SECRET: &str = "test-auth-secret";
pub const ADMIN_ID: &str = "admin1";
pub const SPEAKER_ID: &str = "speaker42";

/// Nothing listens here, so every request fails at the transport level.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

// ============================================================================
// FAKE BACKEND
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query, e.g. `/slides?page=2`.
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Clone)]
struct Stub {
    method: String,
    path: String,
    status: u16,
    body: Value,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    stubs: Arc<Mutex<Vec<Stub>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and a JSON body. Later stubs win.
    pub fn stub(&self, method: &str, path: &str, status: u16, body: Value) -> &Self {
        self.stubs.lock().unwrap().push(Stub {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body,
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("backend received no request")
    }
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn record(req: HttpRequest, body: web::Bytes, backend: web::Data<FakeBackend>) -> HttpResponse {
    let path = match req.query_string() {
        "" => req.path().to_string(),
        query => format!("{}?{}", req.path(), query),
    };
    let method = req.method().to_string();

    backend.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization: header(&req, "authorization"),
        content_type: header(&req, "content-type"),
        cache_control: header(&req, "cache-control"),
        body: body.to_vec(),
    });

    let stubs = backend.stubs.lock().unwrap();
    match stubs.iter().rev().find(|s| s.method == method && s.path == path) {
        Some(stub) => HttpResponse::build(StatusCode::from_u16(stub.status).unwrap()).json(&stub.body),
        None => HttpResponse::NotFound().json(serde_json::json!({ "message": "not found" })),
    }
}

/// Start `backend` on 127.0.0.1 with an ephemeral port. Must be called
/// from inside an actix system (`#[actix_rt::test]`).
pub fn start_backend(backend: &FakeBackend) -> String {
    let data = web::Data::new(backend.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .app_data(web::PayloadConfig::new(16 * 1024 * 1024))
            .default_service(web::to(record))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind fake backend");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{addr}")
}

/// Fake backend plus an `ActionContext` pointed at it.
pub fn setup() -> (FakeBackend, ActionContext) {
    let backend = FakeBackend::new();
    let url = start_backend(&backend);
    let ctx = ActionContext::new(&url, SECRET).expect("Failed to build action context");
    (backend, ctx)
}

// ============================================================================
// PRINCIPALS
// ============================================================================

pub fn token_for(id: &str) -> String {
    token_with_secret(id, SECRET)
}

pub fn token_with_secret(id: &str, secret: &str) -> String {
    let claims = Claims {
        id: id.to_string(),
        role: None,
        speaker_id: None,
        exp: None,
    };
    jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .expect("Failed to sign token")
}

pub fn session_for(id: &str, role: Role) -> AuthSession {
    AuthSession {
        user: SessionUser {
            id: id.to_string(),
            role,
            speaker_id: Some(SPEAKER_ID.to_string()),
        },
        access_token: token_for(id),
    }
}

pub fn admin() -> AuthSession {
    session_for(ADMIN_ID, Role::Admin)
}

/// Session claiming `session_id` while the token asserts `token_id`.
pub fn forged(session_id: &str, token_id: &str, role: Role) -> AuthSession {
    AuthSession {
        access_token: token_for(token_id),
        ..session_for(session_id, role)
    }
}
