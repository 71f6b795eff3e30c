//! Command-line interface definitions for Headline Art.
//!
//! The tool takes no configuration on the command line. URLs, the blocked-word
//! list and the output path are fixed; the only external input is the
//! `OPENAI_API_KEY` environment variable.

use clap::Parser;

/// Command-line arguments for Headline Art.
///
/// # Examples
///
/// ```sh
/// # Generate generated_images/combined_news.png
/// OPENAI_API_KEY=sk-... headline_art
///
/// # Print the prompt that would be sent, without calling the image service
/// headline_art --dry-run
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Build and print the prompt, but do not request or download an image
    #[arg(long)]
    pub dry_run: bool,
}
