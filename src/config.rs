//! Fixed run settings.
//!
//! Nothing here is read from a file or the command line. The values are the
//! constants the tool always runs with, gathered into [`Settings`] so each
//! component receives them explicitly and tests can substitute their own.

use std::path::PathBuf;

/// Text-only NPR front page.
pub const SOURCE_URL: &str = "https://text.npr.org";

/// Class attribute value that marks a headline anchor on the source page.
pub const MARKER_CLASS: &str = "topic-title";

/// Lowercase substrings that disqualify a headline, checked in this order.
pub const BLOCKED_WORDS: &[&str] = &[
    "gunshot", "shooting", "shot", "killed", "murder", "bombs", "deadly",
];

pub const IMAGE_ENDPOINT: &str = "https://api.openai.com/v1/images/generations";

/// Environment variable holding the image-service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

pub const OUTPUT_DIR: &str = "generated_images";
pub const OUTPUT_FILE: &str = "combined_news.png";

pub const PROMPT_PREFIX: &str =
    "Create an artistic interpretation of today's news combining these headlines: ";
pub const HEADLINE_SEPARATOR: &str = ". ";

/// Upper bound on the prompt, in characters.
pub const MAX_PROMPT_CHARS: usize = 1000;
pub const TRUNCATION_MARKER: &str = "...";

pub const IMAGE_COUNT: u32 = 1;
pub const IMAGE_SIZE: &str = "1024x1024";

/// Immutable values threaded through one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source_url: String,
    pub marker_class: String,
    pub blocked_words: Vec<String>,
    pub image_endpoint: String,
    pub api_key_var: String,
    pub output_dir: PathBuf,
    pub output_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_url: SOURCE_URL.to_string(),
            marker_class: MARKER_CLASS.to_string(),
            blocked_words: BLOCKED_WORDS.iter().map(|w| w.to_string()).collect(),
            image_endpoint: IMAGE_ENDPOINT.to_string(),
            api_key_var: API_KEY_VAR.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            output_file: OUTPUT_FILE.to_string(),
        }
    }
}

impl Settings {
    /// Full path of the image written at the end of a run.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}
