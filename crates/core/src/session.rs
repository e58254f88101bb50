//! The request lifecycle for a single course-generation form session.
//!
//! One [`CourseSession`] exists per active form. It owns the raw input
//! fields and the single [`RequestState`] value, and it is the only
//! thing that mutates that state, always in reaction to either an
//! input edit or a request completion. Submissions are numbered so that
//! a stale completion can never overwrite the outcome of a newer one.

use crate::course::{CourseResponse, GenerationRequest};
use crate::generator::{CourseGenerator, GenerateError};
use crate::resolver::{DayResolution, DayResolver};
use std::sync::Arc;
use tracing::{error, info};

/// User-facing copy for transport-level failures.
const NETWORK_FAILURE_MESSAGE: &str =
    "Could not reach the course service. Check that it is running and try again.";
/// User-facing copy for service-side failures. The status code and the
/// technical cause are logged, never shown.
const SERVICE_FAILURE_MESSAGE: &str =
    "The course service could not complete this request. Please try again.";

/// Lifecycle of the single outstanding generation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// No request has been made since the session started.
    #[default]
    Idle,
    /// A network call has been issued and no terminal outcome recorded.
    InFlight,
    /// The last submission failed. `message` is safe to display.
    Failed { message: String },
    /// The last submission succeeded; the raw payload is retained.
    Succeeded { response: CourseResponse },
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed { .. })
    }
}

/// Ticket for one started submission.
///
/// The request payload is snapshotted at [`CourseSession::begin_submit`]
/// time; later field edits do not affect it. [`CourseSession::complete`]
/// only applies an outcome whose ticket is still the newest.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    seq: u64,
    pub request: GenerationRequest,
}

/// Owns the form input and drives the request lifecycle.
pub struct CourseSession {
    generator: Arc<dyn CourseGenerator>,
    resolver: DayResolver,
    prompt: String,
    days: String,
    minutes: String,
    state: RequestState,
    submissions: u64,
}

impl CourseSession {
    pub fn new(generator: Arc<dyn CourseGenerator>, resolver: DayResolver) -> Self {
        Self {
            generator,
            resolver,
            prompt: String::new(),
            days: String::new(),
            minutes: String::new(),
            state: RequestState::Idle,
            submissions: 0,
        }
    }

    /// Replaces the learning-goal prompt. No validation.
    pub fn update_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Replaces the raw course-length field. Parsing is deferred to
    /// submission time.
    pub fn update_days(&mut self, raw: impl Into<String>) {
        self.days = raw.into();
    }

    /// Replaces the raw daily-commitment field. Parsing is deferred to
    /// submission time.
    pub fn update_minutes(&mut self, raw: impl Into<String>) {
        self.minutes = raw.into();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Starts a new submission: clears any previous error or result,
    /// snapshots the form fields, and transitions to `InFlight`.
    ///
    /// Calling this while a submission is outstanding supersedes it; the
    /// superseded submission's eventual completion is discarded.
    pub fn begin_submit(&mut self) -> Submission {
        if self.state.is_in_flight() {
            info!(superseded = self.submissions, "Superseding in-flight submission");
        }
        self.submissions += 1;
        self.state = RequestState::InFlight;
        Submission {
            seq: self.submissions,
            request: GenerationRequest::from_form_input(&self.prompt, &self.days, &self.minutes),
        }
    }

    /// Records the terminal outcome for `submission`.
    ///
    /// Outcomes for anything but the newest submission are discarded, so
    /// out-of-order completions cannot regress the state to an older
    /// result or error.
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: Result<CourseResponse, GenerateError>,
    ) {
        if submission.seq != self.submissions {
            info!(
                stale = submission.seq,
                current = self.submissions,
                "Discarding completion of a superseded submission"
            );
            return;
        }

        self.state = match outcome {
            Ok(response) => RequestState::Succeeded { response },
            Err(err) => {
                error!(error = %err, "Course generation request failed");
                RequestState::Failed {
                    message: user_message(&err).to_string(),
                }
            }
        };
    }

    /// Runs one full submission through the owned generator.
    ///
    /// Every call that starts reaches exactly one terminal state; the
    /// generator's bounded wait guarantees the call terminates.
    pub async fn submit(&mut self) -> &RequestState {
        let submission = self.begin_submit();
        let outcome = self.generator.generate(&submission.request).await;
        self.complete(&submission, outcome);
        &self.state
    }

    /// The derived first-day view, recomputed from scratch on every
    /// call. `None` unless the last submission succeeded.
    pub fn resolved_day(&self) -> Option<DayResolution> {
        match &self.state {
            RequestState::Succeeded { response } => Some(self.resolver.resolve(response)),
            _ => None,
        }
    }
}

/// Maps a technical failure onto displayable copy. Nothing from the
/// underlying error leaks through.
fn user_message(err: &GenerateError) -> &'static str {
    match err {
        GenerateError::Network(_) => NETWORK_FAILURE_MESSAGE,
        GenerateError::Service { .. } | GenerateError::Decode(_) => SERVICE_FAILURE_MESSAGE,
    }
}
