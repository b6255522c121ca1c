// Analyzer: resume / job-description matching engine.
//
// This is the library root. The crate is the matching core behind a
// presentation layer it knows nothing about: callers hand it raw document
// bytes and a pasted job description, and it hands back scores and the
// evidence needed to render them.

pub mod config;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;
