//! Helpers shared by unit and router tests.
//!
//! `TestApp` drives the full router with `tower::ServiceExt::oneshot`, carrying the session
//! cookie between requests the way a browser would. Discord is replaced by
//! `FakeProfileExchange` and the attachment sink by `RecordingSink`.

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use test_utils::{context::TestContext, fixture};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::flight_log::Attachment,
    router::{self, SESSION_COOKIE_NAME},
    service::{
        attachment::{AttachmentPolicy, AttachmentSink},
        oauth::exchange::ProfileExchange,
    },
    startup,
    state::AppState,
};

pub const CLIENT_ID: &str = "1122334455667788";
pub const CLIENT_SECRET: &str = "discord-client-secret";
pub const REDIRECT_URL: &str = "http://localhost:3000/auth/discord/callback";
pub const API_KEY: &str = "pfc_test_token";

/// Code accepted by `FakeProfileExchange::accepting`.
pub const VALID_CODE: &str = "valid-code";

const SESSION_SECRET: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef-test";

/// Loads a configuration pointing at `upstream_url` with a one second upstream timeout.
pub fn config(upstream_url: &str) -> Config {
    let vars = HashMap::from([
        ("SESSION_SECRET", SESSION_SECRET),
        ("DISCORD_CLIENT_ID", CLIENT_ID),
        ("DISCORD_CLIENT_SECRET", CLIENT_SECRET),
        ("DISCORD_REDIRECT_URL", REDIRECT_URL),
        ("API_KEY", API_KEY),
        ("UPSTREAM_API_URL", upstream_url),
        ("UPSTREAM_TIMEOUT_SECS", "1"),
        ("STATIC_DIR", concat!(env!("CARGO_MANIFEST_DIR"), "/public")),
        ("PAGES_DIR", concat!(env!("CARGO_MANIFEST_DIR"), "/pages")),
    ]);

    Config::from_lookup(|name| vars.get(name).map(|value| value.to_string()))
        .expect("test configuration should load")
}

/// Canned `ProfileExchange` recording every code it receives.
pub struct FakeProfileExchange {
    profile: Option<Value>,
    codes: Mutex<Vec<String>>,
}

impl FakeProfileExchange {
    /// Accepts `VALID_CODE` with the default Discord profile and rejects anything else.
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            profile: Some(fixture::profile::discord_user()),
            codes: Mutex::new(Vec::new()),
        })
    }

    /// Rejects every code, as Discord does for an expired or reused one.
    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            profile: None,
            codes: Mutex::new(Vec::new()),
        })
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileExchange for FakeProfileExchange {
    async fn exchange(&self, code: String) -> Result<Value, AuthError> {
        self.codes.lock().unwrap().push(code.clone());

        match &self.profile {
            Some(profile) if code == VALID_CODE => Ok(profile.clone()),
            _ => Err(AuthError::TokenExchange("invalid_grant".to_string())),
        }
    }
}

/// Attachment sink keeping everything it accepts.
#[derive(Default)]
pub struct RecordingSink {
    accepted: Mutex<Vec<(String, Attachment)>>,
}

impl RecordingSink {
    pub fn accepted(&self) -> Vec<(String, Attachment)> {
        self.accepted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttachmentSink for RecordingSink {
    async fn accept(&self, callsign: &str, attachment: Attachment) -> Result<(), AppError> {
        self.accepted
            .lock()
            .unwrap()
            .push((callsign.to_string(), attachment));
        Ok(())
    }
}

/// Full application wired to the context's mock upstream, with a browser-like cookie jar.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
    pub exchange: Arc<FakeProfileExchange>,
    pub sink: Arc<RecordingSink>,
}

impl TestApp {
    /// App with a working login and attachments disabled.
    pub fn new(test: &TestContext) -> Self {
        Self::build(test, &test.upstream_url(), FakeProfileExchange::accepting(), false)
    }

    /// App whose upstream base URL is `upstream_url` instead of the mock server.
    pub fn with_upstream(test: &TestContext, upstream_url: &str) -> Self {
        Self::build(test, upstream_url, FakeProfileExchange::accepting(), false)
    }

    /// App whose code exchange always fails.
    pub fn rejecting_login(test: &TestContext) -> Self {
        Self::build(test, &test.upstream_url(), FakeProfileExchange::rejecting(), false)
    }

    /// App with a working login and attachments enabled.
    pub fn with_attachments(test: &TestContext) -> Self {
        Self::build(test, &test.upstream_url(), FakeProfileExchange::accepting(), true)
    }

    fn build(
        test: &TestContext,
        upstream_url: &str,
        exchange: Arc<FakeProfileExchange>,
        attachments: bool,
    ) -> Self {
        let config = config(upstream_url);
        let sink = Arc::new(RecordingSink::default());

        let mut state = AppState::from_config(
            &config,
            startup::setup_reqwest_client().unwrap(),
            startup::setup_oauth_client(&config).unwrap(),
        );
        let profile_exchange: Arc<dyn ProfileExchange> = exchange.clone();
        state.profile_exchange = profile_exchange;
        state.attachments = AttachmentPolicy {
            enabled: attachments,
            sink: sink.clone(),
        };

        let store: MemoryStore = test.store.clone();
        let router = router::router(
            state,
            store,
            startup::setup_cookie_settings(&config).unwrap(),
        );

        Self {
            router,
            cookie: None,
            exchange,
            sink,
        }
    }

    /// Sends a request with the current session cookie and keeps any cookie set in reply.
    pub async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        for set_cookie in response.headers().get_all(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let Some(pair) = set_cookie.split(';').next() else {
                continue;
            };
            let Some(value) = pair.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) else {
                continue;
            };

            self.cookie = if value.is_empty() || set_cookie.contains("Max-Age=0") {
                None
            } else {
                Some(pair.to_string())
            };
        }

        response
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&mut self, uri: &str, body: &Value) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Starts the handshake and returns the `state` Discord would echo back.
    pub async fn start_login(&mut self) -> String {
        let response = self.get("/auth/discord").await;
        let authorize_url = url::Url::parse(location(&response)).unwrap();

        authorize_url
            .query_pairs()
            .find(|(key, _)| key == "state")
            .map(|(_, value)| value.into_owned())
            .unwrap()
    }

    /// Runs the whole handshake with `VALID_CODE` and returns the callback response.
    pub async fn login(&mut self) -> Response<Body> {
        let state = self.start_login().await;
        self.get(&format!(
            "/auth/discord/callback?code={}&state={}",
            VALID_CODE, state
        ))
        .await
    }

    /// Session cookie the jar would send next, if any.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
