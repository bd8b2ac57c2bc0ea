//! Relationship frames over two or three figures
//!
//! A frame caches every comparison signal derived from an ordered group of
//! figures that are assumed to follow one pattern. Signals are computed once
//! on construction and compared against other frames by the scorer.

use bitvec::prelude::*;
use log::debug;

use crate::comparison::difference::{difference, is_size_compatible};
use crate::comparison::transform::{Tolerances, TransformKind, classify};
use crate::io::configuration::SolverConfig;
use crate::io::error::{AnalysisError, Result, invalid_parameter};
use crate::segmentation::{Figure, Shape};
use crate::spatial::PixelGrid;

/// Figure index pairs compared by a two-figure frame
const PAIRS_OF_TWO: [(usize, usize); 1] = [(0, 1)];

/// Figure index pairs compared by a three-figure frame; adjacent pairs first
const PAIRS_OF_THREE: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

/// Boolean composition of the first two figures that reproduces the third
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Composition {
    /// Cells inked in both
    And,
    /// Cells inked in either
    Or,
    /// Cells inked in exactly one
    Xor,
}

/// Per-pair shape classifications of a three-figure frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationshipNet {
    /// Classifications between the first and second figures
    pub first_second: Vec<TransformKind>,
    /// Classifications between the second and third figures
    pub second_third: Vec<TransformKind>,
    /// Classifications between the first and third figures
    pub first_third: Vec<TransformKind>,
}

impl RelationshipNet {
    /// Whether no classifications were recorded
    pub fn is_empty(&self) -> bool {
        self.first_second.is_empty() && self.second_third.is_empty() && self.first_third.is_empty()
    }

    /// Whether the first and second transitions carry the same multiset of labels
    pub fn is_consistent(&self) -> bool {
        let mut first = self.first_second.clone();
        let mut second = self.second_third.clone();
        first.sort_unstable();
        second.sort_unstable();
        first == second
    }
}

/// Cached comparison signals for 2 or 3 figures
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    figures: Vec<&'a Figure>,
    differences: Vec<f64>,
    ink_ratios: Vec<f64>,
    shape_deltas: Vec<i64>,
    transformable: Vec<bool>,
    simple_transforms: Vec<Option<TransformKind>>,
    composition: Option<Composition>,
    net: RelationshipNet,
}

impl<'a> Frame<'a> {
    /// Build a frame and compute all of its signals
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless exactly 2 or 3 figures are given, and
    /// `DimensionMismatch` when the figures do not share dimensions
    pub fn new(figures: &[&'a Figure], config: &SolverConfig) -> Result<Self> {
        let pairs = compared_pairs(figures.len()).ok_or_else(|| {
            invalid_parameter(
                "figures",
                &figures.len(),
                &"a frame spans exactly 2 or 3 figures",
            )
        })?;

        if let Some(first) = figures.first() {
            for figure in figures {
                if figure.dimensions() != first.dimensions() {
                    return Err(AnalysisError::DimensionMismatch {
                        figure: figure.name().to_string(),
                        expected: first.dimensions(),
                        found: figure.dimensions(),
                    });
                }
            }
        }

        let silhouettes: Vec<&PixelGrid> =
            figures.iter().map(|figure| figure.silhouette()).collect();
        let pair_grids = |&(i, j): &(usize, usize)| (silhouettes.get(i), silhouettes.get(j));

        let differences: Vec<f64> = pairs
            .iter()
            .map(|pair| match pair_grids(pair) {
                (Some(a), Some(b)) => difference(a, b),
                _ => f64::INFINITY,
            })
            .collect();

        let ink_ratios: Vec<f64> = pairs
            .iter()
            .map(|pair| match pair_grids(pair) {
                (Some(a), Some(b)) => ink_ratio(a, b),
                _ => 0.0,
            })
            .collect();

        let shape_counts: Vec<i64> = figures
            .iter()
            .map(|figure| figure.shapes().len() as i64)
            .collect();
        let shape_deltas: Vec<i64> = pairs
            .iter()
            .map(|&(i, j)| {
                shape_counts.get(j).copied().unwrap_or(0)
                    - shape_counts.get(i).copied().unwrap_or(0)
            })
            .collect();

        let transformable: Vec<bool> = ink_ratios
            .iter()
            .zip(&shape_deltas)
            .map(|(&ratio, &delta)| {
                delta == 0
                    && 1.0 - config.size_compatibility < ratio
                    && ratio < 1.0 + config.size_compatibility
            })
            .collect();

        let tolerances = Tolerances::strict(config);
        let simple_transforms: Vec<Option<TransformKind>> = pairs
            .iter()
            .take(figures.len() - 1)
            .zip(&transformable)
            .map(|(pair, &gate)| match (gate, pair_grids(pair)) {
                (true, (Some(a), Some(b))) => classify(a, b, &tolerances),
                _ => None,
            })
            .collect();

        let composition = match silhouettes.as_slice() {
            [a, b, c] => check_composition(a, b, c, config.composition_tolerance),
            _ => None,
        };

        let net = match figures {
            [a, b, c] => build_relationship_net([*a, *b, *c], config),
            _ => RelationshipNet::default(),
        };

        let frame = Self {
            figures: figures.to_vec(),
            differences,
            ink_ratios,
            shape_deltas,
            transformable,
            simple_transforms,
            composition,
            net,
        };
        debug!("{}", frame.summary());
        Ok(frame)
    }

    /// Figures in frame order
    pub fn figures(&self) -> &[&'a Figure] {
        &self.figures
    }

    /// Shift-tolerant whole-image differences, one per compared pair
    pub fn differences(&self) -> &[f64] {
        &self.differences
    }

    /// Whole-image ink ratios, one per compared pair
    pub fn ink_ratios(&self) -> &[f64] {
        &self.ink_ratios
    }

    /// Shape-count deltas (later minus earlier), one per compared pair
    pub fn shape_deltas(&self) -> &[i64] {
        &self.shape_deltas
    }

    /// Whether each compared pair is close enough in ink and shape count to test transforms
    pub fn transformable(&self) -> &[bool] {
        &self.transformable
    }

    /// Whole-image transform label per adjacent pair
    pub fn simple_transforms(&self) -> &[Option<TransformKind>] {
        &self.simple_transforms
    }

    /// Boolean composition for three-figure frames
    pub const fn composition(&self) -> Option<Composition> {
        self.composition
    }

    /// Shape-level relationship net for three-figure frames
    pub const fn net(&self) -> &RelationshipNet {
        &self.net
    }

    /// One-line description used in debug logs
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.figures.iter().map(|figure| figure.name()).collect();
        format!(
            "Frame {}: differences {:?}, ink ratios {:?}, shape deltas {:?}, simple transforms {:?}, composition {:?}",
            names.join(""),
            self.differences,
            self.ink_ratios,
            self.shape_deltas,
            self.simple_transforms,
            self.composition
        )
    }
}

/// Figure index pairs compared by a frame of `len` figures
pub fn compared_pairs(len: usize) -> Option<&'static [(usize, usize)]> {
    match len {
        2 => Some(&PAIRS_OF_TWO),
        3 => Some(&PAIRS_OF_THREE),
        _ => None,
    }
}

/// Ratio of ink in `a` to ink in `b`; a blank `b` yields the ink count of `a`
pub fn ink_ratio(a: &PixelGrid, b: &PixelGrid) -> f64 {
    let denominator = b.count();
    if denominator == 0 {
        a.count() as f64
    } else {
        a.count() as f64 / denominator as f64
    }
}

/// Which boolean composition of `a` and `b` reproduces `c`, checked AND, OR, XOR
///
/// A composition without ink only reproduces a blank `c`.
pub fn check_composition(
    a: &PixelGrid,
    b: &PixelGrid,
    c: &PixelGrid,
    tolerance: f64,
) -> Option<Composition> {
    [
        (Composition::And, a.and(b)),
        (Composition::Or, a.or(b)),
        (Composition::Xor, a.xor(b)),
    ]
    .into_iter()
    .filter(|(_, composed)| !composed.is_blank() || c.is_blank())
    .find(|(_, composed)| difference(composed, c) < tolerance)
    .map(|(kind, _)| kind)
}

/// Classify shape pairs between each pair of three figures with loose tolerances
///
/// Returns an empty net when any figure has more than the configured shape limit.
pub fn build_relationship_net(figures: [&Figure; 3], config: &SolverConfig) -> RelationshipNet {
    if figures
        .iter()
        .any(|figure| figure.shapes().len() > config.max_net_shapes)
    {
        return RelationshipNet::default();
    }

    let tolerances = Tolerances::loose(config);
    let [first, second, third] = figures;

    RelationshipNet {
        first_second: net_transitions(first.shapes(), second.shapes(), &tolerances, config),
        second_third: net_transitions(second.shapes(), third.shapes(), &tolerances, config),
        first_third: net_transitions(first.shapes(), third.shapes(), &tolerances, config),
    }
}

// Every attempted pair records a label; the first match for a source shape
// claims both shapes and ends its search.
fn net_transitions(
    source: &[Shape],
    target: &[Shape],
    tolerances: &Tolerances,
    config: &SolverConfig,
) -> Vec<TransformKind> {
    let mut claimed_source = bitvec![0; source.len()];
    let mut claimed_target = bitvec![0; target.len()];
    let mut transitions = Vec::new();

    for (source_index, a) in source.iter().enumerate() {
        for (target_index, b) in target.iter().enumerate() {
            let source_free = claimed_source.get(source_index).as_deref() == Some(&false);
            let target_free = claimed_target.get(target_index).as_deref() == Some(&false);
            if !(source_free && target_free) {
                continue;
            }

            let compatible =
                is_size_compatible(a.pixel_count(), b.pixel_count(), config.size_compatibility);
            let kind = compatible
                .then(|| classify(a.mask(), b.mask(), tolerances))
                .flatten();

            if let Some(kind) = kind {
                transitions.push(kind);
                claimed_source.set(source_index, true);
                claimed_target.set(target_index, true);
                break;
            }
            transitions.push(TransformKind::Unmatched);
        }
    }

    transitions
}
