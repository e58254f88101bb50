//! Terminal rendering of the session state.
//!
//! Rendering is a pure function of the controller's state: it reads the
//! session, writes text, and mutates nothing. Whatever shape the
//! service payload had, the resolver has already reduced it to
//! displayable values by the time it gets here.

use edux_core::resolver::{DayResolution, MISSING_TITLE, VideoSource};
use edux_core::session::{CourseSession, RequestState};
use std::fmt::Write;

/// Renders the current session state as terminal text.
///
/// With `raw` set, a successful state additionally carries the full
/// decoded payload as pretty-printed JSON.
pub fn render(session: &CourseSession, raw: bool) -> String {
    match session.state() {
        RequestState::Idle => "Enter a learning goal to generate a course.\n".to_string(),
        RequestState::InFlight => "Generating course... please wait.\n".to_string(),
        RequestState::Failed { message } => {
            format!("An error occurred\n{message}\n")
        }
        RequestState::Succeeded { response } => {
            let mut out = String::from("Generation complete!\n\n");

            match session.resolved_day() {
                Some(DayResolution::NoContent) => {
                    out.push_str("No course content is available for this plan.\n");
                }
                Some(DayResolution::Day(view)) => {
                    let _ = writeln!(out, "{}", view.title);
                    let _ = writeln!(out, "{}", view.description);
                    match &view.video {
                        VideoSource::Available(url) => {
                            let _ = writeln!(out, "Video: {url}");
                        }
                        VideoSource::NotAvailable => {
                            let _ = writeln!(out, "Video: not available for this day");
                        }
                    }

                    if !view.quiz.is_empty() {
                        let _ = writeln!(out, "\nQuiz:");
                        for (number, question) in view.quiz.iter().enumerate() {
                            let text = question.question.as_deref().unwrap_or("(no question)");
                            let _ = writeln!(out, "  {}. {}", number + 1, text);
                            for option in question.options.iter().flatten() {
                                let _ = writeln!(out, "     - {option}");
                            }
                        }
                    }

                    if let Some(outline) = &response.course_outline {
                        let _ = writeln!(out, "\nFull outline ({} days):", outline.len());
                        for (position, entry) in outline.iter().enumerate() {
                            let day = entry.day.unwrap_or(position as i64 + 1);
                            let title = entry.title.as_deref().unwrap_or(MISSING_TITLE);
                            let _ = writeln!(out, "  Day {day}: {title}");
                        }
                    }
                }
                // Unreachable for a succeeded state; keep the arm total.
                None => {}
            }

            if raw {
                let payload = serde_json::to_string_pretty(response)
                    .unwrap_or_else(|_| "<payload could not be re-serialized>".to_string());
                let _ = writeln!(out, "\nRaw payload:\n{payload}");
            }

            out
        }
    }
}
