use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::egui_app::effects::{Notice, PendingAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub action: PendingAction,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Queued alerts, the open confirmation and live toasts
#[derive(Debug, Clone)]
pub struct Notices {
    alerts: VecDeque<Alert>,
    confirmation: Option<Confirmation>,
    toasts: Vec<Toast>,
    toast_duration: Duration,
}

impl Notices {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            alerts: VecDeque::new(),
            confirmation: None,
            toasts: Vec::new(),
            toast_duration,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        match notice {
            Notice::Alert { title, message } => self.alerts.push_back(Alert { title, message }),
            Notice::Toast(message) => self.toasts.push(Toast {
                message,
                expires_at: now + self.toast_duration,
            }),
            Notice::Confirm {
                title,
                message,
                confirm_label,
                action,
            } => {
                // a newer question replaces an unanswered one
                self.confirmation = Some(Confirmation {
                    title,
                    message,
                    confirm_label,
                    action,
                });
            }
        }
    }

    /// Alert currently shown, oldest first
    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Close the dialog; `Some(action)` when it was confirmed
    pub fn answer(&mut self, confirmed: bool) -> Option<PendingAction> {
        let confirmation = self.confirmation.take()?;
        confirmed.then_some(confirmation.action)
    }

    /// Messages of toasts that have not expired at `now`
    pub fn toasts_at(&mut self, now: Instant) -> Vec<&str> {
        self.toasts.retain(|toast| toast.expires_at > now);
        self.toasts.iter().map(|toast| toast.message.as_str()).collect()
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn is_blocking(&self) -> bool {
        !self.alerts.is_empty() || self.confirmation.is_some()
    }
}
