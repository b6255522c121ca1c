pub mod document;
pub mod report;

pub use document::DocumentFormat;
pub use report::{MatchBreakdown, MatchFeedback, MatchResult, SimilarityResult};
