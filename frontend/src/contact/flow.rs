use chrono::{DateTime, Utc};
use crate::config::RelayEndpoint;
use crate::contact::payload::{ContactFields, FormPayload};
use crate::utils::audio::{Cue, CuePlayer};
use crate::utils::relay::Relay;

pub const SUCCESS_MESSAGE: &str = "✅ Thanks for contacting me! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "❌ Oops! Something went wrong. Try again later.";

/// How long a status message stays visible.
pub const STATUS_DISPLAY_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SubmitOutcome::Sent => SUCCESS_MESSAGE,
            SubmitOutcome::Failed => FAILURE_MESSAGE,
        }
    }
}

/// Submits contact messages to a relay fixed at construction.
///
/// There is no in-flight guard: every call issues its own request.
pub struct ContactFlow<R, C> {
    endpoint: RelayEndpoint,
    relay: R,
    cues: C,
}

impl<R: Relay, C: CuePlayer> ContactFlow<R, C> {
    pub fn new(endpoint: RelayEndpoint, relay: R, cues: C) -> Self {
        log::info!("Contact relay: {}", endpoint.url());
        Self { endpoint, relay, cues }
    }

    pub fn endpoint(&self) -> &RelayEndpoint {
        &self.endpoint
    }

    /// Sends one request. Errors never escape; anything but a 2xx is a
    /// failure. The click cue plays whatever the result.
    pub async fn submit(&self, fields: &ContactFields, now: DateTime<Utc>) -> SubmitOutcome {
        let request = FormPayload::new(fields, now).into_request(&self.endpoint);
        let outcome = match self.relay.post(request).await {
            Ok(status) if (200..300).contains(&status) => SubmitOutcome::Sent,
            Ok(status) => {
                log::warn!("Contact relay answered {}", status);
                SubmitOutcome::Failed
            }
            Err(e) => {
                log::error!("Contact submission failed: {}", e);
                SubmitOutcome::Failed
            }
        };
        self.cues.play(Cue::Click);
        outcome
    }
}

/// Status line under the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub status: Option<String>,
    pub visible: bool,
    shown_at_ms: f64,
}

impl SubmissionState {
    /// Shows the outcome message. A successful send clears the form.
    pub fn record(&mut self, outcome: SubmitOutcome, fields: &mut ContactFields, now_ms: f64) {
        if outcome == SubmitOutcome::Sent {
            fields.clear();
        }
        self.status = Some(outcome.message().to_string());
        self.visible = true;
        self.shown_at_ms = now_ms;
    }

    /// Hides the message once it has been up for [`STATUS_DISPLAY_MS`].
    /// A newer message restarts the interval.
    pub fn expire(&mut self, now_ms: f64) {
        if self.visible && now_ms - self.shown_at_ms >= f64::from(STATUS_DISPLAY_MS) {
            self.visible = false;
        }
    }
}
