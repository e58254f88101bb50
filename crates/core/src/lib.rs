//! Client-side orchestration for the eduX course generator.
//!
//! This crate owns everything between the user's form input and a
//! renderable course plan: the wire model for the generation service,
//! the request lifecycle state machine, and the resolution of an
//! untrusted service payload into a first-day view with a playable
//! media URL. The generation service itself is an external collaborator
//! reached through the [`generator::CourseGenerator`] seam.

pub mod course;
pub mod generator;
pub mod resolver;
pub mod session;
