use serde::{Deserialize, Serialize};

/// Categorical feedback for an exact-overlap match score.
/// The three bands and their messages are fixed contract, not tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchFeedback {
    Excellent,
    Good,
    Low,
}

impl MatchFeedback {
    /// Band selection: score > 70 is Excellent, score > 40 is Good,
    /// anything else is Low. Both boundary values fall on the lower band
    /// (70 is Good, 40 is Low).
    pub fn from_score(score: u32) -> Self {
        if score > 70 {
            MatchFeedback::Excellent
        } else if score > 40 {
            MatchFeedback::Good
        } else {
            MatchFeedback::Low
        }
    }

    /// The fixed user-facing message for this band.
    pub fn message(&self) -> &'static str {
        match self {
            MatchFeedback::Excellent => {
                "Excellent match! Your resume aligns well with this job description."
            }
            MatchFeedback::Good => {
                "Good match. Consider adding more relevant skills or experience."
            }
            MatchFeedback::Low => {
                "Low match. Review the job description and update your resume accordingly."
            }
        }
    }
}

/// Exact keyword-overlap score between a resume and a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub feedback: MatchFeedback,
    pub matched_count: u32,
    pub total_job_terms: u32,
}

impl MatchResult {
    /// Slice counts for the matched/unmatched proportion chart.
    pub fn breakdown(&self) -> MatchBreakdown {
        MatchBreakdown {
            matched: self.matched_count,
            unmatched: self.total_job_terms.saturating_sub(self.matched_count),
        }
    }
}

/// The two slices of the match proportion chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub matched: u32,
    pub unmatched: u32,
}

/// TF-IDF cosine similarity between a resume and a job description,
/// with the shared vocabulary as evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub cosine_similarity: f64, // 0.0 – 1.0
    pub common_terms: Vec<String>,
}
