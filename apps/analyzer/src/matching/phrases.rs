//! Candidate-phrase extraction: a pluggable capability for surfacing
//! noteworthy terms from free text.
//!
//! Callers hold a `&dyn PhraseExtractor` and never check availability
//! themselves: `NoopPhraseExtractor` is the explicit "capability
//! unavailable" implementation, `TfIdfPhraseExtractor` the local
//! deterministic default.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};

use crate::matching::tokenize::ENGLISH_STOP_WORDS;

/// A capability that surfaces candidate phrases from free text.
pub trait PhraseExtractor: Send + Sync {
    /// Extracts up to `top_n` candidate phrases, best first.
    fn extract_phrases(&self, text: &str, top_n: usize) -> Vec<String>;
}

/// The "capability unavailable" extractor. Always returns nothing.
pub struct NoopPhraseExtractor;

impl PhraseExtractor for NoopPhraseExtractor {
    fn extract_phrases(&self, _text: &str, _top_n: usize) -> Vec<String> {
        Vec::new()
    }
}

/// TF-IDF ranked candidate terms over the text's sentence fragments.
///
/// Each fragment is treated as a separate document for IDF purposes, so
/// terms distinctive to some part of the text rank above boilerplate
/// that appears everywhere.
#[derive(Debug, Default)]
pub struct TfIdfPhraseExtractor;

impl PhraseExtractor for TfIdfPhraseExtractor {
    fn extract_phrases(&self, text: &str, top_n: usize) -> Vec<String> {
        if top_n == 0 {
            return Vec::new();
        }
        let fragments = sentence_fragments(text);
        if fragments.is_empty() {
            return Vec::new();
        }

        let params =
            TfIdfParams::UnprocessedDocuments(&fragments, ENGLISH_STOP_WORDS.as_slice(), None);
        let tfidf = TfIdf::new(params);

        tfidf
            .get_ranked_word_scores(top_n)
            .into_iter()
            .map(|(word, _score)| word)
            .collect()
    }
}

/// Splits text into sentence-ish fragments (sentence punctuation and
/// newlines), dropping fragments too short to carry a candidate.
fn sentence_fragments(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, '.' | '!' | '?' | '\n'))
        .map(str::trim)
        .filter(|fragment| fragment.len() >= 3)
        .map(str::to_string)
        .collect()
}
