//! Resolution of an untrusted course payload into a renderable view.
//!
//! The resolver is total over arbitrary payload shapes: whatever the
//! service returned, it produces either a first-day view or the
//! "no content" sentinel, and it never panics. Absent fields become
//! explicit placeholders so nothing undefined reaches the presentation
//! layer.

use crate::course::{CourseResponse, QuizQuestion};

/// Placeholder shown when a day entry carries no title.
pub const MISSING_TITLE: &str = "Untitled lesson";
/// Placeholder shown when a day entry carries no description.
pub const MISSING_DESCRIPTION: &str = "No description provided.";

/// Outcome of resolving a payload's first scheduled day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayResolution {
    /// The payload carried no scheduled days. A display state, not an
    /// error: the request itself succeeded.
    NoContent,
    /// The first scheduled day, ready to render.
    Day(ResolvedDayView),
}

/// The renderable subset of a day entry. Never mutated once derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDayView {
    pub title: String,
    pub description: String,
    pub video: VideoSource,
    pub quiz: Vec<QuizQuestion>,
}

/// Whether the day has a playable video, and where to fetch it.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// A fetchable URL on the service's media route.
    Available(String),
    /// The day legitimately has no video. Not an error.
    NotAvailable,
}

/// Derives day views against a fixed media base route.
#[derive(Debug, Clone)]
pub struct DayResolver {
    media_base: String,
}

impl DayResolver {
    /// `service_url` is the generation service root; the media route
    /// hangs off it at `/videos/{filename}`.
    pub fn new(service_url: impl Into<String>) -> Self {
        let mut media_base = service_url.into();
        while media_base.ends_with('/') {
            media_base.pop();
        }
        Self { media_base }
    }

    /// Resolves the first entry of the payload's outline.
    pub fn resolve(&self, response: &CourseResponse) -> DayResolution {
        let Some(first) = response
            .course_outline
            .as_deref()
            .and_then(|days| days.first())
        else {
            return DayResolution::NoContent;
        };

        let title = first
            .title
            .clone()
            .unwrap_or_else(|| MISSING_TITLE.to_string());
        let description = first
            .description
            .clone()
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string());

        let video = match first.video_file_path.as_deref().and_then(video_filename) {
            Some(name) => VideoSource::Available(format!("{}/videos/{}", self.media_base, name)),
            None => VideoSource::NotAvailable,
        };

        let quiz = first
            .lesson_content
            .as_ref()
            .and_then(|content| content.quiz.clone())
            .unwrap_or_default();

        DayResolution::Day(ResolvedDayView {
            title,
            description,
            video,
            quiz,
        })
    }
}

/// Final segment of a service-local file path, accepting both slash
/// styles. Directory components are meaningless on the client and are
/// discarded; only the filename survives the remap to the media route.
fn video_filename(path: &str) -> Option<String> {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
