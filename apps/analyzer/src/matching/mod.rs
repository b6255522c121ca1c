// Matching engine: keyword overlap, skill lookup, TF-IDF similarity, and
// pluggable candidate-phrase extraction.
// Every component is a pure function of its inputs; the only process-wide
// state is the lazily-loaded skill vocabulary and compiled statics.

pub mod keyword;
pub mod phrases;
pub mod similarity;
pub mod skills;
pub mod tokenize;
