//! Candidate voting over reference and candidate frames

use log::{debug, info};

use crate::analysis::frame::Frame;
use crate::analysis::problem::{Problem, ProblemKind};
use crate::analysis::scoring::{Answer, CandidateScores, compare_frames};
use crate::io::configuration::SolverConfig;
use crate::io::error::Result;

/// A known frame and the figures that precede the option in its candidate frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePairing {
    /// Figures of the reference frame
    pub reference: &'static [&'static str],
    /// Figures of the candidate frame before the answer option
    pub candidate_prefix: &'static [&'static str],
    /// Whether this pairing runs along a diagonal of the matrix
    pub diagonal: bool,
}

const TWO_BY_TWO: [FramePairing; 2] = [
    FramePairing {
        reference: &["A", "B"],
        candidate_prefix: &["C"],
        diagonal: false,
    },
    FramePairing {
        reference: &["A", "C"],
        candidate_prefix: &["B"],
        diagonal: false,
    },
];

const THREE_BY_THREE: [FramePairing; 6] = [
    FramePairing {
        reference: &["A", "B", "C"],
        candidate_prefix: &["G", "H"],
        diagonal: false,
    },
    FramePairing {
        reference: &["D", "E", "F"],
        candidate_prefix: &["G", "H"],
        diagonal: false,
    },
    FramePairing {
        reference: &["A", "D", "G"],
        candidate_prefix: &["C", "F"],
        diagonal: false,
    },
    FramePairing {
        reference: &["B", "E", "H"],
        candidate_prefix: &["C", "F"],
        diagonal: false,
    },
    FramePairing {
        reference: &["B", "F", "G"],
        candidate_prefix: &["A", "E"],
        diagonal: true,
    },
    FramePairing {
        reference: &["C", "D", "H"],
        candidate_prefix: &["A", "E"],
        diagonal: true,
    },
];

/// Frame pairings scored for a problem layout
pub const fn frame_pairings(kind: ProblemKind) -> &'static [FramePairing] {
    match kind {
        ProblemKind::TwoByTwo => &TWO_BY_TWO,
        ProblemKind::ThreeByThree => &THREE_BY_THREE,
    }
}

/// Result of solving one problem
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Chosen option or abstention
    pub answer: Answer,
    /// Accumulated confidence per option
    pub scores: CandidateScores,
}

/// Scores every answer option of a problem and picks the best
#[derive(Clone, Debug)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is unusable
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve `problem`, abstaining when no option is clearly best
    ///
    /// # Errors
    ///
    /// Returns an error if a figure named by the layout is missing or frames
    /// span figures of different dimensions
    pub fn solve(&self, problem: &Problem) -> Result<Solution> {
        let kind = problem.kind();
        let mut scores = CandidateScores::new(kind.option_count());

        if Self::is_degenerate(problem)? {
            info!("Problem {}: known figures are blank, abstaining", problem.name());
            return Ok(Solution {
                answer: Answer::Abstain,
                scores,
            });
        }

        let pairings: Vec<&FramePairing> = frame_pairings(kind)
            .iter()
            .filter(|pairing| self.config.diagonal_frames || !pairing.diagonal)
            .collect();

        let mut references = Vec::with_capacity(pairings.len());
        for pairing in &pairings {
            let figures = pairing
                .reference
                .iter()
                .map(|name| problem.figure(name))
                .collect::<Result<Vec<_>>>()?;
            references.push(Frame::new(&figures, &self.config)?);
        }

        for option in 1..=kind.option_count() {
            let option_figure = problem.option(option)?;
            let mut candidates: Vec<(&[&str], Frame<'_>)> = Vec::new();

            for (pairing, reference) in pairings.iter().zip(&references) {
                let cached = candidates
                    .iter()
                    .position(|(prefix, _)| *prefix == pairing.candidate_prefix);
                let position = if let Some(position) = cached {
                    position
                } else {
                    let mut figures = pairing
                        .candidate_prefix
                        .iter()
                        .map(|name| problem.figure(name))
                        .collect::<Result<Vec<_>>>()?;
                    figures.push(option_figure);
                    let frame = Frame::new(&figures, &self.config)?;
                    candidates.push((pairing.candidate_prefix, frame));
                    candidates.len() - 1
                };

                if let Some((_, candidate)) = candidates.get(position) {
                    scores.add(option, compare_frames(reference, candidate, &self.config));
                }
            }
        }

        debug!("Problem {}: confidence {scores}", problem.name());

        let min_confidence = match kind {
            ProblemKind::TwoByTwo => self.config.min_confidence_two,
            ProblemKind::ThreeByThree => self.config.min_confidence_three,
        };
        let answer = scores.select(min_confidence, self.config.min_score_separation);
        info!("Problem {}: answer {answer}", problem.name());

        Ok(Solution { answer, scores })
    }

    fn is_degenerate(problem: &Problem) -> Result<bool> {
        for name in problem.kind().known_figures() {
            let figure = problem.figure(name)?;
            if !figure.shapes().is_empty() || !figure.image().is_blank() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
