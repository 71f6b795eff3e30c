//! # Headline Art
//!
//! Scrapes today's headlines from the text-only NPR front page, drops the
//! ones mentioning violence, and asks an image-generation service for a single
//! picture combining the rest.
//!
//! ## Usage
//!
//! ```sh
//! OPENAI_API_KEY=sk-... headline_art
//! ```
//!
//! The image is written to `generated_images/combined_news.png`.
//!
//! ## Architecture
//!
//! The run is a strictly sequential pipeline (see [`pipeline`]):
//! 1. **Fetching**: Download the front page and extract headline anchors
//! 2. **Filtering**: Drop headlines containing a blocked word
//! 3. **Prompting**: Join the survivors into one prompt of at most 1000 characters
//! 4. **Requesting**: POST the prompt to the image service
//! 5. **Downloading**: Save the returned image
//!
//! Any failure ends the run with a single error line. There are no retries.

use clap::Parser;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod config;
mod download;
mod error;
mod filter;
mod models;
mod pipeline;
mod prompt;
mod scrapers;
mod utils;

use api::OpenAiImageClient;
use cli::Cli;
use config::Settings;
use download::HttpDownloader;
use pipeline::Outcome;
use scrapers::npr::NprScraper;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_art starting up");

    let args = Cli::parse();
    debug!(dry_run = args.dry_run, "Parsed CLI arguments");

    let settings = Settings::default();
    // No timeout: a stalled upstream stalls the run.
    let client = reqwest::Client::new();

    let source = NprScraper::new(client.clone(), &settings.source_url, &settings.marker_class);
    let generator = OpenAiImageClient::new(
        client.clone(),
        &settings.image_endpoint,
        &settings.api_key_var,
    );
    let sink = HttpDownloader::new(client);

    match pipeline::run(&settings, &source, &generator, &sink, args.dry_run).await {
        Ok(outcome) => {
            if let Outcome::Written { path, bytes } = &outcome {
                info!(path = %path.display(), bytes, "Saved image");
            }
            println!("{}", outcome);
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            println!("Error: {}", e);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
}
