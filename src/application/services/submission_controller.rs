//! URL submission controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::entities::{Outcome, Phase, ShortenedUrl, SubmissionState};
use crate::domain::shortening_client::ShorteningClient;
use crate::error::{SubmissionInProgress, ValidationError};
use crate::utils::short_url::reconstruct;
use crate::utils::url_normalizer::{is_valid_http_url, normalize};

/// Drives one submission at a time from raw input to a classified [`Outcome`].
///
/// The controller owns its [`SubmissionState`] and publishes every transition on a
/// watch channel, so a front end can render from [`Self::subscribe`] instead of
/// sharing mutable globals.
///
/// At most one submission is pending per controller. Calls made while one is
/// pending are rejected with [`SubmissionInProgress`] and leave the state untouched.
pub struct UrlSubmissionController<C: ShorteningClient> {
    client: Arc<C>,
    service_origin: String,
    page_origin: String,
    state: watch::Sender<SubmissionState>,
    in_flight: AtomicBool,
}

impl<C: ShorteningClient> UrlSubmissionController<C> {
    /// Creates a new controller.
    ///
    /// # Arguments
    ///
    /// - `client` - transport to the shortening service
    /// - `service_origin` - public redirect origin; may be path-relative or empty
    /// - `page_origin` - absolute origin used to re-base relative short links
    pub fn new(
        client: Arc<C>,
        service_origin: impl Into<String>,
        page_origin: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(SubmissionState::default());
        Self {
            client,
            service_origin: service_origin.into(),
            page_origin: page_origin.into(),
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn service_origin(&self) -> &str {
        &self.service_origin
    }

    pub fn page_origin(&self) -> &str {
        &self.page_origin
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Returns true while a submission is pending.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs the full pipeline for raw user input.
    ///
    /// # Flow
    ///
    /// 1. Discard the previous result and enter `Validating`
    /// 2. Normalize the input; on failure return to `Idle` without any I/O
    /// 3. Enter `Submitting` and issue exactly one request
    /// 4. Reconstruct the absolute short link and settle in `Succeeded`, or return
    ///    to `Idle` with the generic request failure message
    ///
    /// The raw input is kept in the state after a failure so it can be resubmitted.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionInProgress`] if another submission is pending. No request
    /// is issued and the state is not modified.
    pub async fn shorten(&self, raw: &str) -> Result<Outcome, SubmissionInProgress> {
        let _guard = self.acquire()?;
        let generation = self.begin(raw);

        let normalized = match normalize(raw) {
            Ok(normalized) => normalized,
            Err(e) => {
                debug!(reason = e.reason(), "Input rejected");
                let outcome = Outcome::ValidationFailure(e);
                self.settle(generation, &outcome);
                return Ok(outcome);
            }
        };

        Ok(self.dispatch(generation, normalized).await)
    }

    /// Submits an already-normalized URL.
    ///
    /// Input that is not an absolute HTTP(S) URL is rejected as
    /// [`ValidationError::Invalid`] before reaching the network.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionInProgress`] if another submission is pending.
    pub async fn submit(&self, normalized_url: &str) -> Result<Outcome, SubmissionInProgress> {
        let _guard = self.acquire()?;
        let generation = self.begin(normalized_url);

        if !is_valid_http_url(normalized_url) {
            let outcome = Outcome::ValidationFailure(ValidationError::Invalid(
                "submitted URL is not normalized".to_string(),
            ));
            self.settle(generation, &outcome);
            return Ok(outcome);
        }

        Ok(self.dispatch(generation, normalized_url.to_string()).await)
    }

    async fn dispatch(&self, generation: u64, normalized: String) -> Outcome {
        self.transition(generation, Phase::Submitting);
        debug!(generation, url = %normalized, "Submitting URL");

        let outcome = match self.client.shorten(&normalized).await {
            Ok(code) => {
                let short = reconstruct(&code, &self.service_origin, &self.page_origin);
                info!(generation, code = %code, short = %short, "URL shortened");
                Outcome::Success(ShortenedUrl::new(normalized, code, short))
            }
            Err(e) => {
                warn!(generation, error = %e, "Shortening request failed");
                Outcome::RequestFailure(e)
            }
        };

        self.settle(generation, &outcome);
        outcome
    }

    fn acquire(&self) -> Result<InFlightGuard<'_>, SubmissionInProgress> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                debug!("Submission rejected: another one is pending");
                SubmissionInProgress
            })?;

        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            state: &self.state,
        })
    }

    /// Resets the state for a new submission and returns its generation.
    fn begin(&self, input: &str) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.input = input.to_string();
            state.phase = Phase::Validating;
            generation = state.generation;
        });
        generation
    }

    fn transition(&self, generation: u64, phase: Phase) {
        self.state.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.phase = phase;
            true
        });
    }

    /// Applies a settled outcome unless a newer submission has started.
    fn settle(&self, generation: u64, outcome: &Outcome) {
        self.state.send_if_modified(|state| {
            if state.generation != generation {
                debug!(generation, current = state.generation, "Ignoring stale outcome");
                return false;
            }
            state.settle(outcome);
            true
        });
    }
}

/// Releases the in-flight flag when a submission ends.
///
/// If the submission future is dropped before settling, the busy phase is
/// reset to `Idle` so no half-finished state stays visible.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    state: &'a watch::Sender<SubmissionState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            if state.phase.is_busy() {
                state.phase = Phase::default();
                true
            } else {
                false
            }
        });
        self.in_flight.store(false, Ordering::Release);
    }
}
