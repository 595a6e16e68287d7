use super::{Phase, Step};
use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::Route;
use crate::egui_app::tasks::ApiRequest;
use crate::shared::error::ApiError;
use crate::shared::types::{RegisterRequest, RegisterResponse};
use crate::shared::validation::{validate_register_fields, Field, FieldErrors};

/// Account creation form
#[derive(Debug, Clone)]
pub struct RegisterScreen {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub show_password: bool,
    errors: FieldErrors,
    phase: Phase,
    min_password_length: usize,
}

impl RegisterScreen {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            name: String::new(),
            phone: String::new(),
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

    pub fn touch(&mut self, field: Field) {
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Step {
        if self.phase == Phase::Submitting {
            return Step::Stay;
        }
        self.errors = validate_register_fields(
            &self.email,
            &self.password,
            &self.name,
            &self.phone,
            self.min_password_length,
        );
        if !self.errors.is_empty() {
            return Step::Stay;
        }
        self.phase = Phase::Submitting;
        Step::Run(ApiRequest::Register(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }))
    }

    /// A token in the response signs the user in right away; otherwise only
    /// the user id is kept for the OTP step.
    pub fn complete(&mut self, result: Result<RegisterResponse, ApiError>) -> Vec<Effect> {
        self.phase = Phase::Idle;
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "Registration failed");
                return vec![Effect::toast(err.user_message())];
            }
        };
        let Some(user_id) = response.user_id().map(str::to_string) else {
            return vec![Effect::toast("Registration failed: missing user ID")];
        };

        self.password.clear();
        let session = match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Effect::StartSession {
                token,
                user_id: Some(user_id),
            },
            None => Effect::RememberPendingUser { user_id },
        };
        vec![
            session,
            Effect::Navigate(Route::VerifyOtp),
            Effect::toast("Register successful!"),
        ]
    }
}
