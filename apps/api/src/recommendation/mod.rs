// Recommendation Engine
// Implements: completion gate, four-factor fit scoring, ranking, reason explanation.
// Everything except `handlers` is pure and synchronous: no I/O, no shared state.

pub mod completeness;
pub mod fit_scoring;
pub mod handlers;
pub mod matching;
pub mod parsing;
pub mod ranker;
pub mod reasons;
