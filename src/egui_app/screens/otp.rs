use super::{Phase, Step};
use crate::egui_app::effects::Effect;
use crate::egui_app::navigation::Route;
use crate::egui_app::tasks::ApiRequest;
use crate::shared::error::ApiError;
use crate::shared::otp::OtpEntry;
use crate::shared::types::{VerifyOtpRequest, VerifyOtpResponse};

const NO_USER_MESSAGE: &str = "No user ID found. Please register again.";
const VERIFIED_MESSAGE: &str = "Verification successful!";

/// Six-digit code entry after registration
#[derive(Debug, Clone, Default)]
pub struct OtpScreen {
    pub entry: OtpEntry,
    phase: Phase,
    /// User id the code was submitted for
    pending_user: Option<String>,
}

impl OtpScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Submit the code for the registered-but-unverified `user_id`
    pub fn submit(&mut self, user_id: Option<&str>) -> Step {
        if self.phase == Phase::Submitting {
            return Step::Stay;
        }
        let otp = match self.entry.submit_code() {
            Ok(code) => code,
            Err(err) => return Step::Apply(vec![Effect::alert("Error", err.user_message())]),
        };
        let Some(user_id) = user_id.filter(|id| !id.trim().is_empty()) else {
            return Step::Apply(vec![Effect::alert("Error", NO_USER_MESSAGE)]);
        };

        self.phase = Phase::Submitting;
        self.pending_user = Some(user_id.to_string());
        Step::Run(ApiRequest::VerifyOtp(VerifyOtpRequest {
            otp,
            user_id: user_id.to_string(),
        }))
    }

    pub fn complete(&mut self, result: Result<VerifyOtpResponse, ApiError>) -> Vec<Effect> {
        self.phase = Phase::Idle;
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "OTP verification failed");
                return vec![Effect::alert("Error", err.user_message())];
            }
        };

        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| VERIFIED_MESSAGE.to_string());
        match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => vec![
                Effect::StartSession {
                    token,
                    user_id: self.pending_user.take(),
                },
                Effect::toast(message),
                Effect::Replace(Route::Home),
            ],
            // Verified, but the account still has to sign in
            None => vec![Effect::toast(message), Effect::Replace(Route::Login)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::otp::OTP_LENGTH_MESSAGE;

    fn typed(code: &str) -> OtpScreen {
        let mut screen = OtpScreen::new();
        for (i, c) in code.chars().enumerate() {
            assert!(screen.entry.input(i, &c.to_string()));
        }
        screen
    }

    #[test]
    fn test_full_code_is_submitted() {
        let mut screen = typed("123456");
        assert_eq!(
            screen.submit(Some("u1")),
            Step::Run(ApiRequest::VerifyOtp(VerifyOtpRequest {
                otp: "123456".into(),
                user_id: "u1".into()
            }))
        );
        assert_eq!(screen.phase(), Phase::Submitting);
    }

    #[test]
    fn test_short_code_is_rejected_without_request() {
        let mut screen = typed("12345");
        assert_eq!(
            screen.submit(Some("u1")),
            Step::Apply(vec![Effect::alert("Error", OTP_LENGTH_MESSAGE)])
        );
        assert_eq!(screen.phase(), Phase::Idle);
    }

    #[test]
    fn test_missing_user_id_alerts() {
        let mut screen = typed("123456");
        assert_eq!(
            screen.submit(None),
            Step::Apply(vec![Effect::alert("Error", NO_USER_MESSAGE)])
        );
    }

    #[test]
    fn test_success_with_token() {
        let mut screen = typed("123456");
        screen.submit(Some("u1"));
        let effects = screen.complete(Ok(VerifyOtpResponse {
            success: true,
            message: None,
            token: Some("T2".into()),
        }));
        assert_eq!(
            effects,
            vec![
                Effect::StartSession {
                    token: "T2".into(),
                    user_id: Some("u1".into())
                },
                Effect::toast(VERIFIED_MESSAGE),
                Effect::Replace(Route::Home),
            ]
        );
    }

    #[test]
    fn test_success_without_token_goes_to_login() {
        let mut screen = typed("123456");
        screen.submit(Some("u1"));
        let effects = screen.complete(Ok(VerifyOtpResponse {
            success: true,
            message: Some("Account verified".into()),
            token: None,
        }));
        assert_eq!(
            effects,
            vec![Effect::toast("Account verified"), Effect::Replace(Route::Login)]
        );
    }

    #[test]
    fn test_rejected_code_alerts() {
        let mut screen = typed("123456");
        screen.submit(Some("u1"));
        let effects = screen.complete(Err(ApiError::Otp { message: None }));
        assert_eq!(effects, vec![Effect::alert("Error", "OTP verification failed.")]);
    }
}
