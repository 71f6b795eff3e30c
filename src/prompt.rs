//! Prompt construction from filtered headlines.

use crate::config::{HEADLINE_SEPARATOR, MAX_PROMPT_CHARS, PROMPT_PREFIX, TRUNCATION_MARKER};

/// Join `headlines` behind the fixed instruction phrase.
///
/// Prompts longer than [`MAX_PROMPT_CHARS`] characters are cut to leave room
/// for the `"..."` marker, so the result is then exactly that long. The cut
/// is at a character position, not a word boundary.
pub fn build_prompt(headlines: &[String]) -> String {
    let prompt = format!("{}{}", PROMPT_PREFIX, headlines.join(HEADLINE_SEPARATOR));
    truncate_prompt(prompt)
}

fn truncate_prompt(prompt: String) -> String {
    if prompt.chars().count() <= MAX_PROMPT_CHARS {
        return prompt;
    }
    let keep = MAX_PROMPT_CHARS - TRUNCATION_MARKER.chars().count();
    let mut truncated: String = prompt.chars().take(keep).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
