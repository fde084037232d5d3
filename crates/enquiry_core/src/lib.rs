use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{EnquiryForm, FieldEdit, SubmissionStatus},
    protocol::{EnquiryAck, EnquirySubmission},
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod config;

pub use config::{load_settings, Settings};

/// External collaborator that performs the enquiry POST and returns the
/// backend acknowledgement, or fails with whatever detail it has.
#[async_trait]
pub trait EnquiryTransport: Send + Sync {
    async fn deliver(&self, submission: &EnquirySubmission) -> Result<EnquiryAck>;
}

/// Production transport: a single JSON POST to the configured endpoint.
/// Timeouts and proxying are reqwest's concern, not this crate's.
pub struct HttpTransport {
    http: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EnquiryTransport for HttpTransport {
    async fn deliver(&self, submission: &EnquirySubmission) -> Result<EnquiryAck> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .with_context(|| format!("failed to reach enquiry endpoint '{}'", self.endpoint))?;

        let ack: EnquiryAck = response
            .error_for_status()
            .context("enquiry endpoint returned an error status")?
            .json()
            .await
            .context("enquiry endpoint returned a malformed acknowledgement")?;

        Ok(ack)
    }
}

/// Why a submit attempt settled into `Error`. Logged to the diagnostic
/// sink only; the user-visible outcome is the generic `Error` status
/// either way.
#[derive(Debug, Error)]
pub enum SubmitFailure {
    #[error("backend rejected enquiry: {detail}")]
    ServerRejected { detail: String },
    #[error("enquiry delivery failed: {0:#}")]
    Transport(anyhow::Error),
}

struct ControllerState {
    form: EnquiryForm,
    status: SubmissionStatus,
}

/// Owns the form fields and submission status, and mediates between the
/// rendering layer and the transport. One instance per form.
pub struct EnquiryController {
    transport: Arc<dyn EnquiryTransport>,
    inner: Mutex<ControllerState>,
    status_events: broadcast::Sender<SubmissionStatus>,
}

impl EnquiryController {
    pub fn new(transport: Arc<dyn EnquiryTransport>) -> Arc<Self> {
        let (status_events, _) = broadcast::channel(16);
        Arc::new(Self {
            transport,
            inner: Mutex::new(ControllerState {
                form: EnquiryForm::default(),
                status: SubmissionStatus::Idle,
            }),
            status_events,
        })
    }

    pub fn from_settings(settings: &Settings) -> Arc<Self> {
        Self::new(Arc::new(HttpTransport::new(settings.api_url.clone())))
    }

    pub async fn fields(&self) -> EnquiryForm {
        self.inner.lock().await.form.clone()
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.inner.lock().await.status
    }

    /// Applies a field edit as-is. Constraint checking belongs to the
    /// rendering layer; the status is never touched here.
    pub async fn update_field(&self, edit: FieldEdit) {
        self.inner.lock().await.form.apply(edit);
    }

    pub fn subscribe_status(&self) -> broadcast::Receiver<SubmissionStatus> {
        self.status_events.subscribe()
    }

    /// Runs one submit attempt and returns the settled status. An
    /// attempt always ends in `Done` or `Error`; a call made while a
    /// request is already in flight returns `Sending` immediately
    /// without issuing a second request.
    pub async fn submit(&self) -> SubmissionStatus {
        let submission = {
            let mut guard = self.inner.lock().await;
            if guard.status == SubmissionStatus::Sending {
                return SubmissionStatus::Sending;
            }
            guard.status = SubmissionStatus::Sending;
            EnquirySubmission::from(&guard.form)
        };
        self.emit_status(SubmissionStatus::Sending);

        // The lock is not held across the await: field edits stay
        // possible while the request is in flight, and the Sending
        // check above is what keeps this single-flight.
        let outcome = self.transport.deliver(&submission).await;

        let settled = {
            let mut guard = self.inner.lock().await;
            match outcome {
                Ok(ack) if ack.success => {
                    guard.form = EnquiryForm::default();
                    guard.status = SubmissionStatus::Done;
                    info!("enquiry accepted by backend");
                }
                Ok(ack) => {
                    let failure = SubmitFailure::ServerRejected {
                        detail: ack
                            .message
                            .unwrap_or_else(|| "no detail provided".to_string()),
                    };
                    warn!(error = %failure, "enquiry submission failed");
                    guard.status = SubmissionStatus::Error;
                }
                Err(err) => {
                    let failure = SubmitFailure::Transport(err);
                    warn!(error = %failure, "enquiry submission failed");
                    guard.status = SubmissionStatus::Error;
                }
            }
            guard.status
        };
        self.emit_status(settled);
        settled
    }

    fn emit_status(&self, status: SubmissionStatus) {
        let _ = self.status_events.send(status);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
