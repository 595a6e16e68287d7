//! # Screen Controllers
//!
//! One controller per route. A controller holds the form state of its screen
//! and decides what happens on submit and when a reply comes back, but does
//! no I/O itself:
//!
//! - `submit` / `load` validate and return a [`Step`]: nothing, a request to
//!   run, or effects to apply right away
//! - `complete` takes the reply of the request it asked for and returns the
//!   effects to apply
//!
//! The shell (`state::AppState`) runs the requests and applies the effects.

pub mod catalog;
pub mod create_product;
pub mod home;
pub mod login;
pub mod otp;
pub mod product_detail;
pub mod profile;
pub mod register;

pub use catalog::CatalogScreen;
pub use create_product::CreateProductScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use otp::OtpScreen;
pub use product_detail::ProductDetailScreen;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;

use crate::egui_app::config::Config;
use crate::egui_app::effects::{Effect, PendingAction};
use crate::egui_app::navigation::Route;
use crate::egui_app::tasks::{ApiReply, ApiRequest};
use crate::shared::types::Session;

/// Submission state of a form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Outcome of a user action on a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do, errors (if any) are shown inline
    Stay,
    /// Run this request and hand the reply to `complete`
    Run(ApiRequest),
    /// Apply these effects now
    Apply(Vec<Effect>),
}

/// The controller of the mounted route
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Register(RegisterScreen),
    VerifyOtp(OtpScreen),
    Home(HomeScreen),
    Profile(ProfileScreen),
    Catalog(CatalogScreen),
    CreateProduct(CreateProductScreen),
    ProductDetail(ProductDetailScreen),
}

impl Screen {
    /// Fresh controller for `route`
    pub fn mount(route: Route, config: &Config) -> Self {
        let app = config.app();
        match route {
            Route::Login => Screen::Login(LoginScreen::new(app.min_password_length)),
            Route::Register => Screen::Register(RegisterScreen::new(app.min_password_length)),
            Route::VerifyOtp => Screen::VerifyOtp(OtpScreen::new()),
            Route::Home => Screen::Home(HomeScreen),
            Route::Profile => Screen::Profile(ProfileScreen::new(config.data_source())),
            Route::Catalog(mode) => {
                Screen::Catalog(CatalogScreen::new(mode, app.catalog_size, app.page_size))
            }
            Route::CreateProduct => Screen::CreateProduct(CreateProductScreen::new()),
            Route::ProductDetail(id) => Screen::ProductDetail(ProductDetailScreen::new(id)),
        }
    }

    /// Work to start as soon as the screen is shown
    pub fn on_mount(&mut self, session: &Session) -> Step {
        match self {
            Screen::Profile(screen) => screen.load(session.token.as_deref()),
            _ => Step::Stay,
        }
    }

    /// Hand a reply to the screen that asked for it
    pub fn complete(&mut self, reply: ApiReply) -> Vec<Effect> {
        match (self, reply) {
            (Screen::Login(screen), ApiReply::Login(result)) => screen.complete(result),
            (Screen::Register(screen), ApiReply::Register(result)) => screen.complete(result),
            (Screen::VerifyOtp(screen), ApiReply::VerifyOtp(result)) => screen.complete(result),
            (Screen::Profile(screen), ApiReply::Profile(result)) => screen.complete(result),
            (_, reply) => {
                tracing::warn!(?reply, "Reply does not belong to the mounted screen");
                Vec::new()
            }
        }
    }

    /// Run a confirmed action. Returns effects for actions this screen owns.
    pub fn confirm(&mut self, action: PendingAction) -> Vec<Effect> {
        match (self, action) {
            (Screen::Profile(screen), PendingAction::Logout) => screen.confirm_logout(),
            (Screen::ProductDetail(screen), action) => screen.confirm(action),
            (_, action) => {
                tracing::warn!(?action, "No screen to confirm the action on");
                Vec::new()
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            Screen::Login(s) => s.phase() == Phase::Submitting,
            Screen::Register(s) => s.phase() == Phase::Submitting,
            Screen::VerifyOtp(s) => s.phase() == Phase::Submitting,
            Screen::Profile(s) => s.is_busy(),
            _ => false,
        }
    }
}
