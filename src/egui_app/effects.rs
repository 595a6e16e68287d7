//! What a screen asks the shell to do once a request has finished.

use crate::egui_app::navigation::Route;

/// Action waiting on a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Logout,
    Checkout,
    ContactSeller,
}

/// User-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Modal that must be dismissed
    Alert { title: String, message: String },
    /// Short message that disappears on its own
    Toast(String),
    /// Two-button dialog; `action` runs on confirm
    Confirm {
        title: String,
        message: String,
        confirm_label: String,
        action: PendingAction,
    },
}

impl Notice {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice::Alert {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn toast(message: impl Into<String>) -> Self {
        Notice::Toast(message.into())
    }

    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        action: PendingAction,
    ) -> Self {
        Notice::Confirm {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            action,
        }
    }
}

/// Side effects, applied in order by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Without a user id the stored one is kept
    StartSession { token: String, user_id: Option<String> },
    RememberPendingUser { user_id: String },
    EndSession,
    Navigate(Route),
    Replace(Route),
    Back,
    Notify(Notice),
}

impl Effect {
    pub fn toast(message: impl Into<String>) -> Self {
        Effect::Notify(Notice::toast(message))
    }

    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Effect::Notify(Notice::alert(title, message))
    }
}
