//! Analogy analysis over segmented figures

/// Relationship frames and their cached signals
pub mod frame;
/// Problem layouts and figure validation
pub mod problem;
/// Frame comparison and answer selection
pub mod scoring;
/// Candidate voting across frame pairings
pub mod solver;

pub use frame::{Composition, Frame};
pub use problem::{Problem, ProblemKind};
pub use scoring::{Answer, CandidateScores};
pub use solver::{Solution, Solver};
