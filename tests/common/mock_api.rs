//! Stubbed API helpers for integration tests
//!
//! Wraps `wiremock` so tests can stand up the four auth endpoints and point
//! a client or a whole `AppState` at them.

use std::time::{Duration, Instant};

use emarket::egui_app::screens::Screen;
use emarket::egui_app::{ApiClient, AppState, Backend, Config, KeyValueStore, MemoryStore};
use emarket::shared::config::AppConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Client configuration pointing at `base_url`
pub fn config_for(base_url: &str) -> Config {
    Config::with_builder(AppConfig::builder().api_base_url(base_url))
        .expect("test config should be valid")
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(config_for(&server.uri()))
}

/// `POST <endpoint>` answered with `status` and a JSON body
pub async fn stub_post(server: &MockServer, endpoint: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn stub_login(server: &MockServer, token: &str) {
    stub_post(server, "/auth/login", 200, json!({ "token": token })).await;
}

pub fn profile_json() -> Value {
    json!({
        "id": "u1",
        "email": "aline@example.com",
        "username": "Aline",
        "role": "buyer",
        "phone": "+250788000000",
        "createdAt": "2024-03-02T14:05:00Z",
        "emailVerified": true
    })
}

/// Memory-backed app state, optionally with a stored token
pub fn app_state(config: Config, token: Option<&str>) -> AppState {
    let store = MemoryStore::new();
    if let Some(token) = token {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        runtime
            .block_on(store.set("token", token))
            .expect("seed token");
    }
    AppState::with_backend(config, Backend::Memory(store)).expect("app state")
}

/// Poll until no request is in flight, or give up after five seconds
pub fn settle(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.is_busy() && Instant::now() < deadline {
        state.poll();
        std::thread::sleep(Duration::from_millis(10));
    }
    state.poll();
}

/// Name of the mounted screen, for failure messages
pub fn screen_name(state: &AppState) -> &'static str {
    match state.screen() {
        Screen::Login(_) => "login",
        Screen::Register(_) => "register",
        Screen::VerifyOtp(_) => "verify_otp",
        Screen::Home(_) => "home",
        Screen::Profile(_) => "profile",
        Screen::Catalog(_) => "catalog",
        Screen::CreateProduct(_) => "create_product",
        Screen::ProductDetail(_) => "product_detail",
    }
}
