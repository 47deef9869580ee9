use once_cell::sync::Lazy;
use regex::Regex;

/// Words shorter than this carry too little signal to compare.
const MIN_KEYWORD_LEN: usize = 4;

// Unicode stays off: word characters are ASCII [0-9A-Za-z_], the alphabet
// the platform's historical scores were computed under.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?-u)\b\w{{{},}}\b", MIN_KEYWORD_LEN)).expect("valid keyword pattern")
});

/// Extract comparison keywords from a free-text description.
///
/// Lowercases the text and pulls out whole words of at least four ASCII
/// word characters; accented letters split words. Duplicates are kept: the
/// overlap ratio downstream counts every occurrence, matching the scores
/// the platform has always shown.
pub fn keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
