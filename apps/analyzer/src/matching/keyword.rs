//! Exact keyword-overlap scoring between a resume and a job description.

use crate::matching::tokenize::token_set;
use crate::models::{MatchFeedback, MatchResult};

/// Scores a resume against a job description by exact token overlap.
///
/// `score = round(100 × |job ∩ resume| / |job|)`, or 0 when the job
/// description has no tokens at all.
pub fn analyze_match(resume_text: &str, job_text: &str) -> MatchResult {
    let job = token_set(job_text);
    let resume = token_set(resume_text);

    let total_job_terms = job.len() as u32;
    let matched_count = job.intersection(&resume).count() as u32;

    let score = if total_job_terms == 0 {
        0
    } else {
        ((f64::from(matched_count) / f64::from(total_job_terms)) * 100.0).round() as u32
    };

    MatchResult {
        score,
        feedback: MatchFeedback::from_score(score),
        matched_count,
        total_job_terms,
    }
}

/// The matched tokens themselves, lexicographically sorted, for evidence
/// rendering next to the score.
pub fn matched_terms(resume_text: &str, job_text: &str) -> Vec<String> {
    let job = token_set(job_text);
    let resume = token_set(resume_text);
    job.intersection(&resume).cloned().collect()
}
