//! View state for the signup section.
//!
//! The form handler never reads widgets back; it mutates a [`FormView`]
//! and the embedder re-renders from that value after every event.

use std::time::{Duration, Instant};

/// How long the error panel stays visible before hiding itself.
pub const ERROR_AUTOHIDE: Duration = Duration::from_secs(5);

/// Submit control label while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending…";

/// Message shown when the email fails validation.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Message shown when the email already completed a signup on this device.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already on the waitlist.";

/// Presentation state of the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

/// An error panel, visible from `shown_at` until dismissed or expired.
#[derive(Debug, Clone)]
pub struct ErrorNotice {
    pub message: String,
    shown_at: Instant,
}

impl ErrorNotice {
    fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
        }
    }

    /// Whether the panel has outlived [`ERROR_AUTOHIDE`] at `now`.
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= ERROR_AUTOHIDE
    }
}

/// View state for the whole signup section.
#[derive(Debug, Clone)]
pub struct FormView {
    /// The form itself, including the email input and submit control.
    pub form_visible: bool,
    /// The post-signup confirmation panel. Never visible together with
    /// the form or an error notice.
    pub success_visible: bool,
    /// The current error notice, if any.
    pub error: Option<ErrorNotice>,
    pub submit: SubmitButton,
}

impl FormView {
    /// Initial state: form shown, both panels hidden, submit control
    /// enabled under its resting label.
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            form_visible: true,
            success_visible: false,
            error: None,
            submit: SubmitButton {
                label: submit_label.into(),
                enabled: true,
            },
        }
    }

    /// Show the error panel with `message`, replacing any notice already
    /// on screen. The success panel is hidden if it was visible.
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.error = Some(ErrorNotice::new(message, now));
        self.success_visible = false;
    }

    /// Switch to the confirmed state: form hidden, success panel shown,
    /// any error notice cleared.
    pub fn show_success(&mut self) {
        self.form_visible = false;
        self.success_visible = true;
        self.error = None;
    }

    /// Drop the error notice once it has expired. Called on every UI tick.
    pub fn tick(&mut self, now: Instant) {
        if self.error.as_ref().is_some_and(|notice| notice.expired(now)) {
            self.error = None;
        }
    }
}
