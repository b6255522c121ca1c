//! Shared word tokenizer.
//!
//! Tokens are `\w+` runs over the lowercased input. `regex-lite`'s Perl
//! classes are ASCII-only, so a token is an ASCII alphanumeric/underscore
//! run: hyphenated words split into their parts and non-ASCII letters are
//! dropped. Both scorers and the common-terms computation go through this
//! one tokenizer so their vocabularies agree.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex_lite::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("static pattern compiles"));

/// English stop words, shared by the similarity scorer and the phrase
/// extractor.
pub(crate) static ENGLISH_STOP_WORDS: Lazy<Vec<String>> =
    Lazy::new(|| stop_words::get(stop_words::LANGUAGE::English));

/// Lowercase word tokens in document order, duplicates preserved.
pub fn tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Deduplicated lowercase word tokens, lexicographically ordered.
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokens(text).into_iter().collect()
}
