//! The headline-to-image pipeline.
//!
//! One run walks these states in order and never goes back:
//!
//! ```text
//! Fetching -> Filtering -> Empty-Abort
//!                       -> Building-Prompt -> Requesting -> Downloading -> Done
//! ```
//!
//! Each network-facing step sits behind a small trait so a run can be driven
//! by stubs:
//! - [`HeadlineSource`]: where headlines come from
//! - [`ImageGenerator`]: turns a prompt into an image URL
//! - [`ImageSink`]: stores the image found at a URL

use crate::config::Settings;
use crate::error::Result;
use crate::filter::filter_headlines;
use crate::prompt::build_prompt;
use crate::utils::ensure_output_dir;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Produces the raw headline list for a run.
pub trait HeadlineSource {
    /// Fetch headlines in document order.
    async fn fetch_headlines(&self) -> Result<Vec<String>>;
}

/// Turns a prompt into the URL of a generated image.
pub trait ImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Stores the image at `url` to `path`, returning the bytes written.
pub trait ImageSink {
    async fn download(&self, url: &str, path: &Path) -> Result<u64>;
}

/// How a run that did not fail ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The image was written to `path`.
    Written { path: PathBuf, bytes: u64 },
    /// Every headline was filtered out; nothing was sent.
    NoHeadlines,
    /// The prompt was built but, as requested, not sent.
    DryRun { prompt: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Written { path, .. } => {
                write!(f, "Image generated successfully at: {}", path.display())
            }
            Outcome::NoHeadlines => f.write_str("No headlines remaining after filtering"),
            Outcome::DryRun { prompt } => write!(f, "Dry run, prompt not sent:\n{}", prompt),
        }
    }
}

/// Run the pipeline once.
///
/// Filtering and truncation always finish before `generator` is called, and
/// `generator` is never called when no headline survives filtering. With
/// `dry_run` set the run stops after the prompt is built, before the output
/// directory is created.
#[instrument(level = "info", skip_all, fields(dry_run = dry_run))]
pub async fn run<S, G, D>(
    settings: &Settings,
    source: &S,
    generator: &G,
    sink: &D,
    dry_run: bool,
) -> Result<Outcome>
where
    S: HeadlineSource,
    G: ImageGenerator,
    D: ImageSink,
{
    let headlines = source.fetch_headlines().await?;
    let fetched = headlines.len();

    let headlines = filter_headlines(headlines, &settings.blocked_words);
    info!(fetched, kept = headlines.len(), "Filtered headlines");
    if headlines.is_empty() {
        warn!("No headlines remaining after filtering");
        return Ok(Outcome::NoHeadlines);
    }

    let prompt = build_prompt(&headlines);
    if dry_run {
        info!(%prompt, "Dry run; skipping image generation");
        return Ok(Outcome::DryRun { prompt });
    }

    ensure_output_dir(&settings.output_dir).await?;

    info!("Generating image for combined headlines");
    let url = generator.generate(&prompt).await?;

    let path = settings.output_path();
    let bytes = sink.download(&url, &path).await?;

    Ok(Outcome::Written { path, bytes })
}
