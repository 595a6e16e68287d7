//! Screen flows driven through `AppState`
//!
//! These run on plain threads: `AppState` owns its own runtime and blocks on
//! it, so the stub server lives on a separate one.

use std::time::Duration;

use emarket::egui_app::screens::Screen;
use emarket::egui_app::{AppState, Effect, Route};
use emarket::shared::validation::Field;
use serde_json::json;
use serial_test::serial;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{app_state, config_for, profile_json, screen_name, settle, stub_post};

fn start_server() -> (Runtime, MockServer) {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    (runtime, server)
}

fn submit_login(state: &mut AppState, email: &str, password: &str) {
    let step = match state.screen_mut() {
        Screen::Login(screen) => {
            screen.email = email.to_string();
            screen.password = password.to_string();
            screen.submit()
        }
        _ => panic!("expected the login screen"),
    };
    state.run(step);
}

fn enter_otp(state: &mut AppState, code: &str) {
    let user_id = state.session().user_id().map(str::to_string);
    let step = match state.screen_mut() {
        Screen::VerifyOtp(screen) => {
            for (index, digit) in code.chars().enumerate() {
                screen.entry.input(index, &digit.to_string());
            }
            screen.submit(user_id.as_deref())
        }
        _ => panic!("expected the OTP screen"),
    };
    state.run(step);
}

#[test]
#[serial]
fn test_login_stores_token_and_lands_home() {
    let (runtime, server) = start_server();
    runtime.block_on(stub_post(&server, "/auth/login", 200, json!({ "token": "T1" })));

    let mut state = app_state(config_for(&server.uri()), None);
    assert_eq!(state.route(), Route::Login);

    submit_login(&mut state, " aline@example.com ", "secret1");
    assert!(state.screen().is_submitting());
    settle(&mut state);

    assert_eq!(state.session().get_token(), Some("T1"));
    assert_eq!(state.route(), Route::Home, "on {}", screen_name(&state));
    assert!(!state.navigator().can_go_back());
    crate::assert_toast!(state, "Login successful!");
}

#[test]
#[serial]
fn test_login_rejected_shows_alert() {
    let (runtime, server) = start_server();
    runtime.block_on(stub_post(
        &server,
        "/auth/login",
        401,
        json!({ "message": "Invalid credentials" }),
    ));

    let mut state = app_state(config_for(&server.uri()), None);
    submit_login(&mut state, "aline@example.com", "secret1");
    settle(&mut state);

    assert_eq!(state.route(), Route::Login);
    assert_eq!(state.session().get_token(), None);
    crate::assert_alert!(state, "Login Failed", "Invalid credentials");
}

#[test]
#[serial]
fn test_register_then_verify_signs_in() {
    let (runtime, server) = start_server();
    runtime.block_on(async {
        stub_post(&server, "/auth/register", 201, json!({ "user": { "id": "u1" } })).await;
        stub_post(
            &server,
            "/auth/verify",
            200,
            json!({ "success": true, "token": "T2", "message": "Account verified" }),
        )
        .await;
    });

    let mut state = app_state(config_for(&server.uri()), None);
    state.apply(vec![Effect::Navigate(Route::Register)]);

    let step = match state.screen_mut() {
        Screen::Register(screen) => {
            screen.email = "aline@example.com".into();
            screen.password = "secret1".into();
            screen.name = "Aline".into();
            screen.submit()
        }
        _ => panic!("expected the register screen"),
    };
    state.run(step);
    settle(&mut state);

    assert_eq!(state.route(), Route::VerifyOtp, "on {}", screen_name(&state));
    assert_eq!(state.session().user_id(), Some("u1"));
    assert_eq!(state.session().get_token(), None);
    crate::assert_toast!(state, "Register successful!");

    enter_otp(&mut state, "123456");
    settle(&mut state);

    assert_eq!(state.route(), Route::Home, "on {}", screen_name(&state));
    assert_eq!(state.session().get_token(), Some("T2"));
    assert_eq!(state.session().user_id(), Some("u1"));
    crate::assert_toast!(state, "Account verified");
}

#[test]
#[serial]
fn test_short_otp_never_reaches_server() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/auth/verify"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server),
    );

    let mut state = app_state(config_for(&server.uri()), None);
    state.apply(vec![Effect::Navigate(Route::VerifyOtp)]);
    enter_otp(&mut state, "123");

    assert!(!state.is_busy());
    crate::assert_alert!(state, "Error", "Please enter the 6-digit OTP.");
}

#[test]
#[serial]
fn test_profile_loads_with_bearer_token() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/auth/profile"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
            .expect(1)
            .mount(&server),
    );

    let mut state = app_state(config_for(&server.uri()), Some("T1"));
    assert_eq!(state.route(), Route::Home);

    state.switch_tab(Route::Profile);
    settle(&mut state);

    match state.screen() {
        Screen::Profile(screen) => {
            let profile = screen.profile().expect("profile loaded");
            assert_eq!(profile.username, "Aline");
            assert_eq!(screen.error(), None);
        }
        _ => panic!("expected the profile screen, on {}", screen_name(&state)),
    }
    assert!(state.notices.alert().is_none());
}

#[test]
#[serial]
fn test_profile_rejected_token_alerts() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/auth/profile"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })),
            )
            .mount(&server),
    );

    let mut state = app_state(config_for(&server.uri()), Some("old"));
    state.switch_tab(Route::Profile);
    settle(&mut state);

    crate::assert_alert!(state, "Error", "Token expired");
    match state.screen() {
        Screen::Profile(screen) => assert_eq!(screen.error(), Some("Token expired")),
        _ => panic!("expected the profile screen"),
    }
}

#[test]
#[serial]
fn test_reply_after_leaving_screen_is_dropped() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/auth/profile"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "message": "Token expired" }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server),
    );

    let mut state = app_state(config_for(&server.uri()), Some("T1"));
    state.switch_tab(Route::Profile);
    assert!(state.is_busy());
    state.switch_tab(Route::Home);
    settle(&mut state);

    assert!(!state.is_busy());
    assert_eq!(state.route(), Route::Home);
    assert!(state.notices.alert().is_none(), "stale reply must not alert");
}

#[test]
#[serial]
fn test_blank_login_never_reaches_server() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "T1" })))
            .expect(0)
            .mount(&server),
    );

    let mut state = app_state(config_for(&server.uri()), None);
    submit_login(&mut state, "   ", "\t");

    assert!(!state.is_busy());
    assert!(!state.screen().is_submitting());
    match state.screen() {
        Screen::Login(screen) => {
            assert_eq!(screen.errors().get(Field::Email), Some("Email is required"));
            assert_eq!(screen.errors().get(Field::Password), Some("Password is required"));
        }
        _ => panic!("expected the login screen, on {}", screen_name(&state)),
    }
    settle(&mut state);
    assert_eq!(state.session().get_token(), None);
    runtime.block_on(server.verify());
}
