//! Main Entrypoint for the eduX Course Generator CLI
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Initializing logging.
//! 3. Building the HTTP client for the generation service.
//! 4. Driving one submission through the request controller and
//!    rendering whatever state it ends in.

mod config;
mod render;

use anyhow::Context;
use clap::Parser;
use config::Config;
use edux_core::generator::HttpCourseGenerator;
use edux_core::resolver::DayResolver;
use edux_core::session::CourseSession;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Generate a multi-day course plan from a learning goal.
#[derive(Parser, Debug)]
#[command(name = "edux", version, about)]
struct Args {
    /// The learning goal, e.g. "I want to learn Python for data science".
    prompt: String,

    /// Course length in days. Passed to the service as-is; a
    /// non-numeric value is left for the service to reject.
    #[arg(long, default_value = "7")]
    days: String,

    /// Daily commitment in minutes. Same pass-through rule as --days.
    #[arg(long, default_value = "15")]
    minutes: String,

    /// Also print the full service payload as JSON.
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();

    // --- 3. Build the Service Client ---
    let generator = HttpCourseGenerator::new(&config.service_url, config.request_timeout)
        .context("Failed to build the course service client")?;
    let resolver = DayResolver::new(&config.service_url);

    // --- 4. Drive One Submission ---
    let mut session = CourseSession::new(Arc::new(generator), resolver);
    session.update_prompt(&args.prompt);
    session.update_days(&args.days);
    session.update_minutes(&args.minutes);

    info!(
        service_url = %config.service_url,
        days = %args.days,
        minutes = %args.minutes,
        "Submitting course generation request"
    );
    eprintln!("Generating course... please wait.");

    session.submit().await;

    print!("{}", render::render(&session, args.raw));

    if session.state().is_failed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
