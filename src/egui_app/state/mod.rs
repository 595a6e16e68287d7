mod notices;

pub use notices::{Alert, Confirmation, Notices};

use std::time::Duration;

use thiserror::Error;

use crate::egui_app::api::ApiClient;
use crate::egui_app::config::Config;
use crate::egui_app::effects::{Effect, Notice, PendingAction};
use crate::egui_app::navigation::{Navigator, Route};
use crate::egui_app::screens::profile::LOGOUT_FAILED_MESSAGE;
use crate::egui_app::screens::{Screen, Step};
use crate::egui_app::session::{Backend, SessionStore, StorageError};
use crate::egui_app::tasks::{accept, ApiRequest, RuntimeError, TaskRunner};

const SESSION_SAVE_FAILED_MESSAGE: &str = "Could not save your session. Please try again.";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("failed to load session: {0}")]
    Storage(#[from] StorageError),
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub notices: Notices,
    session: SessionStore<Backend>,
    navigator: Navigator,
    screen: Screen,
    runner: TaskRunner,
}

impl AppState {
    /// Open the session database from the configured path and mount the
    /// startup route
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let runner = TaskRunner::new(ApiClient::new(config.clone()))?;
        let path = config.session_db_path();
        let backend = runner.block_on(Backend::open_or_memory(&path));
        let durable = backend.is_durable();
        let mut state = Self::with_runner(config, runner, backend)?;
        if !durable {
            state.notices.push(Notice::toast(
                "Session storage is unavailable; you will need to sign in again next time.",
            ));
        }
        Ok(state)
    }

    /// Use `backend` instead of the configured database
    pub fn with_backend(config: Config, backend: Backend) -> Result<Self, StartupError> {
        let runner = TaskRunner::new(ApiClient::new(config.clone()))?;
        Self::with_runner(config, runner, backend)
    }

    fn with_runner(config: Config, runner: TaskRunner, backend: Backend) -> Result<Self, StartupError> {
        let session = runner.block_on(SessionStore::open(backend))?;
        let navigator = Navigator::for_startup(session.snapshot().is_authenticated());
        let screen = Screen::mount(navigator.current(), &config);
        let toast_duration = Duration::from_secs_f32(config.app().toast_seconds);
        tracing::info!(route = ?navigator.current(), "AppState initialized");

        let mut state = Self {
            notices: Notices::new(toast_duration),
            config,
            session,
            navigator,
            screen,
            runner,
        };
        state.mount_current();
        Ok(state)
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn session(&self) -> &SessionStore<Backend> {
        &self.session
    }

    pub fn is_busy(&self) -> bool {
        self.runner.in_flight() > 0
    }

    /// Apply finished replies. Called once per frame.
    pub fn poll(&mut self) {
        while let Some(delivery) = self.runner.poll() {
            if let Some(reply) = accept(delivery, self.navigator.generation()) {
                let effects = self.screen.complete(reply);
                self.apply(effects);
            }
        }
    }

    /// Carry out what a screen asked for
    pub fn run(&mut self, step: Step) {
        match step {
            Step::Stay => {}
            Step::Run(request) => self.spawn(request),
            Step::Apply(effects) => self.apply(effects),
        }
    }

    fn spawn(&mut self, request: ApiRequest) {
        self.runner.spawn(self.navigator.generation(), request);
    }

    /// Apply effects in order, stopping at the first storage failure
    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if let Err((err, message)) = self.apply_one(effect) {
                tracing::error!(error = %err, "Session storage failed");
                self.notices.push(Notice::toast(message));
                return;
            }
        }
    }

    fn apply_one(&mut self, effect: Effect) -> Result<(), (StorageError, &'static str)> {
        match effect {
            Effect::StartSession { token, user_id } => {
                let session = &mut self.session;
                self.runner
                    .block_on(session.set_session(&token, user_id.as_deref()))
                    .map_err(|e| (e, SESSION_SAVE_FAILED_MESSAGE))?;
            }
            Effect::RememberPendingUser { user_id } => {
                let session = &mut self.session;
                self.runner
                    .block_on(session.remember_pending_user(&user_id))
                    .map_err(|e| (e, SESSION_SAVE_FAILED_MESSAGE))?;
            }
            Effect::EndSession => {
                let session = &mut self.session;
                self.runner
                    .block_on(session.clear_session())
                    .map_err(|e| (e, LOGOUT_FAILED_MESSAGE))?;
            }
            Effect::Navigate(route) => {
                self.navigator.push(route);
                self.mount_current();
            }
            Effect::Replace(route) => {
                self.navigator.replace(route);
                self.mount_current();
            }
            Effect::Back => self.go_back(),
            Effect::Notify(notice) => self.notices.push(notice),
        }
        Ok(())
    }

    fn mount_current(&mut self) {
        self.screen = Screen::mount(self.navigator.current(), &self.config);
        let step = self.screen.on_mount(self.session.snapshot());
        self.run(step);
    }

    pub fn go_back(&mut self) {
        if self.navigator.back() {
            self.mount_current();
        }
    }

    /// Bottom tab bar
    pub fn switch_tab(&mut self, route: Route) {
        if self.navigator.current() == route {
            return;
        }
        self.navigator.switch_tab(route);
        self.mount_current();
    }

    /// Close the open confirmation and run its action when confirmed
    pub fn answer_confirmation(&mut self, confirmed: bool) {
        if let Some(action) = self.notices.answer(confirmed) {
            self.confirm(action);
        }
    }

    fn confirm(&mut self, action: PendingAction) {
        let effects = self.screen.confirm(action);
        self.apply(effects);
    }
}
