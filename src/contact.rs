//! Contact form state machine.
//!
//! ```text
//!            submit (all fields set)        delivered
//!   Idle ─────────────────────────▶ Sending ─────────▶ Sent ──display delay──▶ Idle
//!    ▲                                 │
//!    │          submit (retry)         │ delivery error
//!    └────────────── Failed ◀──────────┘
//! ```
//!
//! Delivery goes through an injected [`Transport`]. [`SimulatedTransport`]
//! stands in until a real form handler is wired up: it waits a fixed delay
//! and reports success. Fields are cleared as soon as a submission is
//! delivered and kept on failure so the visitor can retry.

use crate::config::ContactConfig;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Required field is empty: {0}")]
    MissingField(Field),
    #[error("A submission is already in progress")]
    Busy,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// What the visitor typed. Owned by the form; discarded once delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn first_missing(&self) -> Option<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "Submit",
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Message Sent!",
            FormStatus::Failed(_) => "Try Again",
        }
    }

    /// `data-status` value used by the page script and stylesheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Sending => "sending",
            FormStatus::Sent => "sent",
            FormStatus::Failed(_) => "failed",
        }
    }
}

/// Something that can carry a submission to the artist.
pub trait Transport {
    fn deliver(&self, submission: &Submission) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Waits `delay`, then reports success. No network involved.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(contact: &ContactConfig) -> Self {
        Self::new(contact.send_delay())
    }
}

impl Transport for SimulatedTransport {
    async fn deliver(&self, submission: &Submission) -> Result<(), DeliveryError> {
        tracing::debug!(
            name = %submission.name,
            email = %submission.email,
            chars = submission.message.len(),
            "simulating contact delivery"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Submission,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: Submission::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn fields(&self) -> &Submission {
        &self.fields
    }

    /// Submit is only offered when idle or after a failure.
    pub fn can_submit(&self) -> bool {
        matches!(self.status, FormStatus::Idle | FormStatus::Failed(_))
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    /// Idle/Failed → Sending. Returns the submission to deliver.
    ///
    /// Leaves the state untouched when busy or a field is blank.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if !self.can_submit() {
            return Err(FormError::Busy);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(FormError::MissingField(field));
        }
        self.status = FormStatus::Sending;
        Ok(self.fields.clone())
    }

    /// Sending → Sent (fields cleared) or Failed (fields kept).
    pub fn finish(&mut self, outcome: Result<(), DeliveryError>) {
        if self.status != FormStatus::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = Submission::default();
                self.status = FormStatus::Sent;
            }
            Err(DeliveryError(reason)) => {
                tracing::warn!(%reason, "contact delivery failed");
                self.status = FormStatus::Failed(reason);
            }
        }
    }

    /// Sent → Idle once the confirmation has been on screen long enough.
    pub fn acknowledge(&mut self) {
        if self.status == FormStatus::Sent {
            self.fields = Submission::default();
            self.status = FormStatus::Idle;
        }
    }

    /// Run a whole submission: validate, deliver, show the confirmation for
    /// `display_delay`, reset. `on_change` sees every status the form passes
    /// through so a host can re-render.
    pub async fn submit_with<T: Transport>(
        &mut self,
        transport: &T,
        display_delay: Duration,
        mut on_change: impl FnMut(&FormStatus),
    ) -> Result<(), FormError> {
        let submission = self.begin_submit()?;
        on_change(&self.status);

        let outcome = transport.deliver(&submission).await;
        self.finish(outcome);
        on_change(&self.status);

        if self.status == FormStatus::Sent {
            tokio::time::sleep(display_delay).await;
            self.acknowledge();
            on_change(&self.status);
        }
        Ok(())
    }
}
