//! The seam between the client and the remote generation service.
//!
//! [`CourseGenerator`] abstracts the single network call this client
//! makes. The HTTP implementation talks to the real service; the canned
//! implementation produces a deterministic plan for tests and offline
//! development.

use crate::course::{CourseResponse, DayEntry, GenerationRequest};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Failure modes of a generation call.
///
/// These are the technical causes; the user-facing copy for each is
/// chosen by the session layer.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The service answered with a non-2xx status. Failure bodies are
    /// not contractually specified and are never parsed.
    #[error("course service returned status {status}")]
    Service { status: u16 },
    /// The service could not be reached, or the bounded wait expired.
    #[error("could not reach the course service: {0}")]
    Network(#[from] reqwest::Error),
    /// The service answered 2xx but the body was not a readable payload.
    #[error("course service returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Defines the contract for any backend that can generate a course.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseGenerator: Send + Sync {
    /// Submits one generation request and returns the decoded payload.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<CourseResponse, GenerateError>;
}

/// A `CourseGenerator` backed by the real HTTP service.
pub struct HttpCourseGenerator {
    client: reqwest::Client,
    service_url: String,
}

impl HttpCourseGenerator {
    /// Creates a client for the service at `service_url`.
    ///
    /// `timeout` bounds the whole call; expiry surfaces as
    /// [`GenerateError::Network`]. Course generation is slow on the
    /// service side, so callers should pass a generous value.
    pub fn new(service_url: impl Into<String>, timeout: Duration) -> Result<Self, GenerateError> {
        let mut service_url = service_url.into();
        while service_url.ends_with('/') {
            service_url.pop();
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            service_url,
        })
    }
}

#[async_trait]
impl CourseGenerator for HttpCourseGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<CourseResponse, GenerateError> {
        let url = format!("{}/generate-full-course", self.service_url);
        debug!(%url, days = ?request.days, "Submitting generation request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Service {
                status: status.as_u16(),
            });
        }

        response
            .json::<CourseResponse>()
            .await
            .map_err(GenerateError::Decode)
    }
}

/// A deterministic `CourseGenerator` for development and testing.
///
/// Produces one plan entry per requested day without external
/// dependencies or API costs. Entries carry no media paths.
pub struct CannedCourseGenerator;

#[async_trait]
impl CourseGenerator for CannedCourseGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<CourseResponse, GenerateError> {
        let days = request.days.unwrap_or(1).clamp(1, 31);
        let outline = (1..=days)
            .map(|day| DayEntry {
                day: Some(day),
                title: Some(format!("Day {}: {}", day, request.prompt)),
                description: Some("A step toward the learning goal.".to_string()),
                ..Default::default()
            })
            .collect();
        Ok(CourseResponse {
            course_outline: Some(outline),
        })
    }
}
