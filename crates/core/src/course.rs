//! Wire model for the course generation service.
//!
//! Requests are serialized exactly as `POST /generate-full-course`
//! expects them. Responses are decoded tolerantly: every field the
//! service may omit is an `Option`, unknown keys are ignored, and no
//! part of the payload is trusted to be present.

use serde::{Deserialize, Serialize};

/// The body of a single generation request.
///
/// Numeric fields are parsed from raw form input at submission time.
/// A value that does not parse is sent as JSON `null` and left for the
/// service to reject, so validation stays on one side of the wire.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub days: Option<i64>,
    pub daily_commitment_minutes: Option<i64>,
}

impl GenerationRequest {
    /// Builds a request from the raw form fields.
    pub fn from_form_input(prompt: &str, days: &str, minutes: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            days: days.trim().parse().ok(),
            daily_commitment_minutes: minutes.trim().parse().ok(),
        }
    }
}

/// A successful service payload.
///
/// The outline is an ordered sequence of day entries; order is
/// meaningful (the first entry is the one the client resolves for
/// display).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CourseResponse {
    #[serde(default)]
    pub course_outline: Option<Vec<DayEntry>>,
}

/// One scheduled day of the course plan. All fields optional.
///
/// `video_file_path` (and its audio/image siblings) are service-local
/// filesystem paths, meaningful only on the host that produced them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DayEntry {
    #[serde(default)]
    pub day: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_file_path: Option<String>,
    #[serde(default)]
    pub audio_file_path: Option<String>,
    #[serde(default)]
    pub image_file_paths: Option<Vec<String>>,
    #[serde(default)]
    pub lesson_content: Option<LessonContent>,
}

/// Generated lesson material attached to a day entry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LessonContent {
    #[serde(default)]
    pub video_script: Option<String>,
    #[serde(default)]
    pub quiz: Option<Vec<QuizQuestion>>,
    #[serde(default)]
    pub image_prompts: Option<Vec<String>>,
}

/// A single multiple-choice question from a day's quiz.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
}
