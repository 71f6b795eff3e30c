//! Error kinds for a single pipeline run.
//!
//! Every failure is raised where it happens and propagated straight to
//! `main`, which prints the [`Display`](std::fmt::Display) text as one line.
//! There is no retry and no partial success, so the variants only need to
//! say *what* broke, not how to recover.

use thiserror::Error;

/// Everything that can abort a run.
#[derive(Debug, Error)]
pub enum HeadlineArtError {
    /// Transport-level failure fetching the page, posting the prompt, or
    /// downloading the image.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The source page could not be turned into a document.
    ///
    /// html5ever recovers from any markup, so the NPR scraper never raises
    /// this; other [`HeadlineSource`](crate::pipeline::HeadlineSource)s may.
    #[allow(dead_code)]
    #[error("failed to parse source page: {0}")]
    Parse(String),

    /// The API credential is missing.
    #[error("{0} environment variable not set")]
    Config(String),

    /// The image service replied with something that is not the expected JSON.
    #[error("failed to decode response: {reason}; API response: {body}")]
    ResponseFormat { reason: String, body: String },

    /// The image service replied with zero images.
    #[error("no image URL in response; API response: {body}")]
    EmptyResult { body: String },

    /// The output directory or file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HeadlineArtError>;
