//! Profile screen: fetches the signed-in account and offers logout.

use super::Step;
use crate::egui_app::effects::{Effect, Notice, PendingAction};
use crate::egui_app::navigation::Route;
use crate::egui_app::tasks::ApiRequest;
use crate::shared::config::DataSource;
use crate::shared::error::{ApiError, MISSING_SESSION_MESSAGE};
use crate::shared::types::Profile;

pub const LOGOUT_MESSAGE: &str = "You have been logged out successfully.";
pub const LOGOUT_FAILED_MESSAGE: &str = "Something went wrong while logging out.";

/// Which fetch is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Loading {
    #[default]
    None,
    /// First fetch, nothing to show yet
    Initial,
    /// User-requested reload, current data stays visible
    Refresh,
}

/// What the view should draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileView<'a> {
    Loading,
    Error(&'a str),
    Loaded(&'a Profile),
}

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    source: DataSource,
    profile: Option<Profile>,
    error: Option<String>,
    loading: Loading,
}

impl ProfileScreen {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            profile: None,
            error: None,
            loading: Loading::None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loading(&self) -> Loading {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.loading != Loading::None
    }

    pub fn view(&self) -> ProfileView<'_> {
        match (&self.profile, self.loading) {
            (Some(profile), _) => ProfileView::Loaded(profile),
            (None, Loading::Initial) => ProfileView::Loading,
            (None, _) => ProfileView::Error(self.error.as_deref().unwrap_or(MISSING_SESSION_MESSAGE)),
        }
    }

    /// First fetch when the screen is shown
    pub fn load(&mut self, token: Option<&str>) -> Step {
        self.fetch(token, Loading::Initial)
    }

    /// Pull-to-refresh and "Try Again"
    pub fn refresh(&mut self, token: Option<&str>) -> Step {
        self.fetch(token, Loading::Refresh)
    }

    fn fetch(&mut self, token: Option<&str>, kind: Loading) -> Step {
        if self.is_busy() {
            return Step::Stay;
        }
        if self.source == DataSource::Fixture {
            self.profile = Some(Profile::demo());
            self.error = None;
            return Step::Stay;
        }
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            tracing::info!("Profile requested without a stored token");
            self.profile = None;
            self.error = Some(MISSING_SESSION_MESSAGE.to_string());
            return Step::Apply(vec![Effect::alert("Error", MISSING_SESSION_MESSAGE)]);
        };

        self.loading = kind;
        if kind == Loading::Refresh {
            self.error = None;
        }
        Step::Run(ApiRequest::FetchProfile {
            token: Some(token.to_string()),
        })
    }

    /// Initial failures are alerts, refresh failures are toasts
    pub fn complete(&mut self, result: Result<Profile, ApiError>) -> Vec<Effect> {
        let kind = std::mem::take(&mut self.loading);
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, refresh = kind == Loading::Refresh, "Profile fetch failed");
                let message = err.user_message();
                self.error = Some(message.clone());
                if kind == Loading::Refresh {
                    vec![Effect::toast(message)]
                } else {
                    vec![Effect::alert("Error", message)]
                }
            }
        }
    }

    pub fn request_logout(&self) -> Step {
        Step::Apply(vec![Effect::Notify(Notice::confirm(
            "Confirm Logout",
            "Are you sure you want to logout?",
            "Logout",
            PendingAction::Logout,
        ))])
    }

    pub fn confirm_logout(&mut self) -> Vec<Effect> {
        vec![
            Effect::EndSession,
            Effect::toast(LOGOUT_MESSAGE),
            Effect::Replace(Route::Login),
        ]
    }

    pub fn go_to_login(&self) -> Vec<Effect> {
        vec![Effect::Replace(Route::Login)]
    }
}
