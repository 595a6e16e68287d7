use super::{Phase, Step};
use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::Route;
use crate::egui_app::tasks::ApiRequest;
use crate::shared::error::ApiError;
use crate::shared::types::{LoginRequest, LoginResponse};
use crate::shared::validation::{validate_login_fields, Field, FieldErrors};

/// Sign-in form
#[derive(Debug, Clone)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    errors: FieldErrors,
    phase: Phase,
    min_password_length: usize,
}

impl LoginScreen {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            show_password: false,
            errors: FieldErrors::new(),
            phase: Phase::Idle,
            min_password_length,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Drop the error of a field the user is editing
    pub fn touch(&mut self, field: Field) {
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Step {
        if self.phase == Phase::Submitting {
            return Step::Stay;
        }
        self.errors = validate_login_fields(&self.email, &self.password, self.min_password_length);
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "Login form invalid");
            return Step::Stay;
        }
        self.phase = Phase::Submitting;
        Step::Run(ApiRequest::Login(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }))
    }

    pub fn complete(&mut self, result: Result<LoginResponse, ApiError>) -> Vec<Effect> {
        self.phase = Phase::Idle;
        match result {
            Ok(response) => {
                self.password.clear();
                vec![
                    Effect::StartSession {
                        token: response.token,
                        user_id: None,
                    },
                    Effect::Replace(Route::Home),
                    Effect::toast("Login successful!"),
                ]
            }
            Err(err) => {
                tracing::warn!(error = %err, "Login failed");
                vec![Effect::alert("Login Failed", err.user_message())]
            }
        }
    }
}
