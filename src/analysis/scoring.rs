//! Confidence scoring of candidate frames and answer selection
//!
//! A reference frame built from known figures is compared signal by signal
//! against a candidate frame that places one answer option in the unknown
//! slot. Points from every compared frame pair accumulate per candidate, and
//! the best candidate is only committed to when it is clearly separated from
//! the runner-up.

use std::collections::BTreeMap;
use std::fmt;

use crate::analysis::frame::Frame;
use crate::io::configuration::{
    ABSTAIN_SENTINEL, AGREEMENT_BANDS, AGREEMENT_POINTS, BASE_FRAME_SCORE, COMPOSITION_POINTS,
    NET_CONSISTENCY_POINTS, SHAPE_DELTA_POINTS, SIMPLE_TRANSFORM_POINTS, SolverConfig,
};

/// Outcome of solving one problem
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    /// 1-based index of the chosen option
    Choice(usize),
    /// No option was clearly better than the rest
    Abstain,
}

impl Answer {
    /// Integer form: the option index, or the negative sentinel when abstaining
    pub fn to_index(self) -> i32 {
        match self {
            Self::Choice(index) => i32::try_from(index).unwrap_or(ABSTAIN_SENTINEL),
            Self::Abstain => ABSTAIN_SENTINEL,
        }
    }

    /// Whether the solver declined to answer
    pub const fn is_abstain(self) -> bool {
        matches!(self, Self::Abstain)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_index())
    }
}

/// Points for two numeric signals, graduated by how closely they agree
pub fn graduated_points(reference: f64, candidate: f64) -> f64 {
    let gap = (reference - candidate).abs();
    AGREEMENT_BANDS
        .iter()
        .zip(AGREEMENT_POINTS.iter())
        .find(|&(&band, _)| gap < band)
        .map_or(0.0, |(_, &points)| points)
}

/// Score how well `candidate` reproduces the signals of `reference`
pub fn compare_frames(reference: &Frame<'_>, candidate: &Frame<'_>, config: &SolverConfig) -> f64 {
    let mut score = BASE_FRAME_SCORE;

    score += reference
        .differences()
        .iter()
        .zip(candidate.differences())
        .map(|(&r, &c)| graduated_points(r, c))
        .sum::<f64>();

    score += reference
        .ink_ratios()
        .iter()
        .zip(candidate.ink_ratios())
        .map(|(&r, &c)| graduated_points(r, c))
        .sum::<f64>();

    for (r, c) in reference.shape_deltas().iter().zip(candidate.shape_deltas()) {
        if r != c {
            score -= config.mismatch_penalty;
        } else if *r != 0 {
            score += SHAPE_DELTA_POINTS;
        }
    }

    for (r, c) in reference
        .simple_transforms()
        .iter()
        .zip(candidate.simple_transforms())
    {
        if r != c {
            score -= config.mismatch_penalty;
        } else if r.is_some() {
            score += SIMPLE_TRANSFORM_POINTS;
        }
    }

    if reference.composition().is_some() && reference.composition() == candidate.composition() {
        score += COMPOSITION_POINTS;
    }

    if config.net_consistency_bonus && !candidate.net().is_empty() && candidate.net().is_consistent()
    {
        score += NET_CONSISTENCY_POINTS;
    }

    score
}

/// Accumulated confidence per candidate option
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateScores {
    scores: BTreeMap<usize, f64>,
}

impl CandidateScores {
    /// Zeroed scores for options `1..=count`
    pub fn new(count: usize) -> Self {
        Self {
            scores: (1..=count).map(|index| (index, 0.0)).collect(),
        }
    }

    /// Add `points` to option `index`
    pub fn add(&mut self, index: usize, points: f64) {
        *self.scores.entry(index).or_insert(0.0) += points;
    }

    /// Current score of option `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(&index).copied()
    }

    /// Number of options tracked
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no options are tracked
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// (option, score) pairs in option order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().map(|(&index, &score)| (index, score))
    }

    /// Pick the strictly best option, or abstain
    ///
    /// Abstains when there are no options, when the best score does not beat
    /// the runner-up by more than `min_separation`, or when the best score is
    /// below `min_confidence`. Among equal best scores the lowest option index
    /// is reported as the leader before the separation check.
    pub fn select(&self, min_confidence: f64, min_separation: f64) -> Answer {
        let mut best: Option<(usize, f64)> = None;
        let mut runner_up: Option<f64> = None;

        for (index, score) in self.iter() {
            match best {
                Some((_, top)) if score > top => {
                    runner_up = Some(top);
                    best = Some((index, score));
                }
                Some(_) => {
                    runner_up = Some(runner_up.map_or(score, |second| second.max(score)));
                }
                None => best = Some((index, score)),
            }
        }

        let Some((index, top)) = best else {
            return Answer::Abstain;
        };

        if let Some(second) = runner_up {
            if top - second <= min_separation {
                return Answer::Abstain;
            }
        }

        if top < min_confidence {
            return Answer::Abstain;
        }

        Answer::Choice(index)
    }
}

impl fmt::Display for CandidateScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(index, score)| format!("{index}: {score}"))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
