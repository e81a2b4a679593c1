//! The signup form handler.
//!
//! One pipeline per submission: validate, reject repeats, deliver to the
//! sheet when an endpoint is configured, otherwise (or on any delivery
//! failure) fall back to the on-device waitlist. The visitor sees success
//! for both landing spots; only validation and repeat submissions surface
//! an error.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use waitline_core::{EmailAddress, SignupRecord};
use waitline_store::{StoreError, WaitlistStore};
use waitline_sync::SheetClient;

use crate::view::{DUPLICATE_EMAIL_MESSAGE, FormView, INVALID_EMAIL_MESSAGE, SENDING_LABEL};

/// Remote delivery seam for the signup pipeline.
///
/// Production wires in [`SheetClient`]; tests substitute stubs that fail
/// or record what they were handed.
#[async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(&self, record: &SignupRecord) -> anyhow::Result<()>;
}

#[async_trait]
impl Delivery for SheetClient {
    async fn deliver(&self, record: &SignupRecord) -> anyhow::Result<()> {
        self.submit(record).await?;
        Ok(())
    }
}

/// How a single submission attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The signup was recorded. `delivered` is false when it landed in
    /// the local waitlist instead of the remote sheet.
    Accepted { delivered: bool },
    /// Validation failed; nothing was stored or sent.
    Invalid,
    /// This email already completed a signup on this device.
    Duplicate,
}

/// The signup form: owns the section's view state and runs the
/// submission pipeline against an injected store and delivery client.
pub struct SignupForm<D: Delivery> {
    view: FormView,
    store: WaitlistStore,
    delivery: Option<D>,
}

impl<D: Delivery> SignupForm<D> {
    /// `delivery: None` models the endpoint-disabled configuration; every
    /// accepted signup then goes straight to the local waitlist.
    pub fn new(store: WaitlistStore, delivery: Option<D>, submit_label: impl Into<String>) -> Self {
        Self {
            view: FormView::new(submit_label),
            store,
            delivery,
        }
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn store(&self) -> &WaitlistStore {
        &self.store
    }

    /// Forward the UI clock so an expired error notice disappears.
    pub fn tick(&mut self, now: Instant) {
        self.view.tick(now);
    }

    /// Run one submission attempt with the raw email field value.
    ///
    /// Errors out only on local storage failure; delivery failures are
    /// absorbed by the fallback and still count as accepted. The submit
    /// control is back to its resting state on every return path.
    pub async fn submit(&mut self, raw_email: &str) -> Result<SubmitOutcome, StoreError> {
        let now = Instant::now();

        let Ok(email) = EmailAddress::parse(raw_email) else {
            self.view.show_error(INVALID_EMAIL_MESSAGE, now);
            return Ok(SubmitOutcome::Invalid);
        };

        if self.store.is_submitted(email.as_str())? {
            self.view.show_error(DUPLICATE_EMAIL_MESSAGE, now);
            return Ok(SubmitOutcome::Duplicate);
        }

        // Loading state for the duration of the attempt. Restored before
        // the attempt's result is inspected, so an early storage error
        // cannot leave the control stuck.
        let resting_label =
            std::mem::replace(&mut self.view.submit.label, SENDING_LABEL.to_string());
        self.view.submit.enabled = false;

        let attempted = self.attempt(&email).await;

        self.view.submit.label = resting_label;
        self.view.submit.enabled = true;

        let delivered = attempted?;
        self.store.mark_submitted(&email)?;
        self.view.show_success();
        info!(event = "waitlist_signup", email = %email, delivered, "signup accepted");
        Ok(SubmitOutcome::Accepted { delivered })
    }

    /// Deliver to the sheet when configured, falling back to the local
    /// waitlist. A remote success leaves the local waitlist untouched.
    async fn attempt(&self, email: &EmailAddress) -> Result<bool, StoreError> {
        let record = SignupRecord::capture(email);
        if let Some(delivery) = &self.delivery {
            match delivery.deliver(&record).await {
                Ok(()) => return Ok(true),
                Err(err) => {
                    warn!(email = %record.email, error = %err, "sheet delivery failed, keeping signup locally");
                }
            }
        }
        self.store.append_signup(&record)?;
        Ok(false)
    }
}
