//! TF-IDF cosine similarity between a resume and a job description.
//!
//! The corpus is exactly the two documents. English stop words are
//! removed, the vocabulary is capped at the top 2000 terms by corpus
//! frequency, term weights are raw counts times smoothed IDF
//! (`ln((1+N)/(1+df)) + 1`), and vectors are L2-normalized before the
//! cosine is taken.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::matching::tokenize::{token_set, tokens, ENGLISH_STOP_WORDS};
use crate::models::SimilarityResult;

/// Cap on the vectorizer vocabulary, by total corpus frequency.
const MAX_FEATURES: usize = 2000;
/// Cap on the returned common-terms evidence list.
const MAX_COMMON_TERMS: usize = 200;

static STOP_WORDS: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().map(String::as_str).collect());

/// Computes TF-IDF cosine similarity and the shared vocabulary of the
/// two texts.
///
/// An empty or whitespace-only job description scores 0.0 with no common
/// terms; that is the defined result, not an error. A degenerate corpus
/// (nothing survives stop-word removal) also scores 0.0 rather than
/// failing.
pub fn compute_similarity(resume_text: &str, job_text: &str) -> SimilarityResult {
    if job_text.trim().is_empty() {
        return SimilarityResult {
            cosine_similarity: 0.0,
            common_terms: Vec::new(),
        };
    }

    let cosine = match vectorize(resume_text, job_text) {
        Some((resume_vec, job_vec)) => {
            cosine_similarity(&resume_vec, &job_vec).clamp(0.0, 1.0)
        }
        None => {
            debug!("No terms survived vectorization; similarity degrades to 0.0");
            0.0
        }
    };

    SimilarityResult {
        cosine_similarity: cosine,
        common_terms: common_terms(resume_text, job_text),
    }
}

/// Lexical intersection of the raw (non-stop-filtered) token sets of both
/// texts, sorted, capped at 200 entries. Independent of the vector step.
fn common_terms(resume_text: &str, job_text: &str) -> Vec<String> {
    let resume = token_set(resume_text);
    let job = token_set(job_text);
    resume
        .intersection(&job)
        .take(MAX_COMMON_TERMS)
        .cloned()
        .collect()
}

/// Builds the two TF-IDF document vectors over a shared capped
/// vocabulary. Returns None when no terms survive stop-word removal.
fn vectorize(resume_text: &str, job_text: &str) -> Option<(Vec<f64>, Vec<f64>)> {
    let docs = [content_tokens(resume_text), content_tokens(job_text)];

    // Total corpus frequency and per-document frequency for each term.
    let mut corpus_freq: BTreeMap<&str, usize> = BTreeMap::new();
    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &docs {
        for token in doc {
            *corpus_freq.entry(token.as_str()).or_insert(0) += 1;
        }
        let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }
    if corpus_freq.is_empty() {
        return None;
    }

    // Cap the vocabulary at the most frequent terms. Ties resolve
    // lexicographically so the vocabulary is deterministic.
    let mut ranked: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(MAX_FEATURES);
    let vocabulary: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();

    let n_docs = docs.len() as f64;
    let resume_vec = tf_idf_vector(&docs[0], &vocabulary, &doc_freq, n_docs);
    let job_vec = tf_idf_vector(&docs[1], &vocabulary, &doc_freq, n_docs);
    Some((resume_vec, job_vec))
}

/// Word tokens with English stop words removed.
fn content_tokens(text: &str) -> Vec<String> {
    tokens(text)
        .into_iter()
        .filter(|t| !STOP_WORDS.contains(t.as_str()))
        .collect()
}

/// One document's L2-normalized TF-IDF vector over the shared vocabulary.
fn tf_idf_vector(
    doc: &[String],
    vocabulary: &[&str],
    doc_freq: &BTreeMap<&str, usize>,
    n_docs: f64,
) -> Vec<f64> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in doc {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut vector: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let tf = counts.get(term).copied().unwrap_or(0) as f64;
            if tf == 0.0 {
                return 0.0;
            }
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect();

    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in &mut vector {
            *weight /= norm;
        }
    }
    vector
}

/// Cosine similarity of two equal-length vectors; 0.0 for zero-norm input.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for i in 0..a.len() {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
