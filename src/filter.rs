//! Headline content filter.

use tracing::info;

/// Return the first blocked word contained in `headline`, ignoring case.
pub fn blocked_word_in<'a>(headline: &str, blocked_words: &'a [String]) -> Option<&'a str> {
    let lowered = headline.to_lowercase();
    blocked_words
        .iter()
        .map(String::as_str)
        .find(|word| lowered.contains(word))
}

/// Keep the headlines that contain none of `blocked_words`, preserving order.
///
/// Each dropped headline is logged once with the first blocked word (in list
/// order) that matched it.
pub fn filter_headlines(headlines: Vec<String>, blocked_words: &[String]) -> Vec<String> {
    headlines
        .into_iter()
        .filter(|headline| match blocked_word_in(headline, blocked_words) {
            Some(word) => {
                info!(blocked_word = word, %headline, "Filtering out headline");
                false
            }
            None => true,
        })
        .collect()
}
