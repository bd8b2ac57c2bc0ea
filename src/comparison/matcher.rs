//! Cross-figure shape correspondence
//!
//! The matcher walks every (source, target) shape pair in order and tries an
//! ordered ladder of classifier strategies on each size-compatible pair. The
//! first strategy that reports a transform pairs the two shapes for good;
//! neither takes part in later pairs. Leftover shapes are then labelled
//! `Deleted` or `Added` according to which figure has more shapes.
//!
//! Per-shape state lives in a `MatchContext` that the matcher creates fresh
//! for each comparison, so labels from one comparison cannot leak into the
//! next.

use bitvec::prelude::*;

use crate::comparison::difference::is_size_compatible;
use crate::comparison::transform::{
    Tolerances, TransformKind, classify_rotation, classify_unchanged,
};
use crate::io::configuration::SolverConfig;
use crate::segmentation::Shape;

/// A pure classifier over two shapes
pub type ClassifierFn = fn(&Shape, &Shape, &Tolerances) -> Option<TransformKind>;

/// One rung of the matching ladder
#[derive(Clone, Copy, Debug)]
pub struct Strategy {
    /// Name used in logs
    pub name: &'static str,
    /// Classifier invoked on each size-compatible pair
    pub classify: ClassifierFn,
}

/// Same object within the strict unchanged tolerance
pub fn unchanged_strategy(a: &Shape, b: &Shape, tolerances: &Tolerances) -> Option<TransformKind> {
    classify_unchanged(a.mask(), b.mask(), tolerances)
}

/// Quarter-turn rotation detection
pub fn rotated_strategy(a: &Shape, b: &Shape, tolerances: &Tolerances) -> Option<TransformKind> {
    classify_rotation(a.mask(), b.mask(), tolerances)
}

/// Outline-versus-solid discriminator slot; inert by default
pub const fn filled_strategy(
    _a: &Shape,
    _b: &Shape,
    _tolerances: &Tolerances,
) -> Option<TransformKind> {
    None
}

/// Matching state for one shape during one comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeMatch {
    /// Index of the paired shape in the other figure
    pub correspondence: Option<usize>,
    /// Transform assigned to this shape
    pub transform: TransformKind,
}

impl Default for ShapeMatch {
    fn default() -> Self {
        Self {
            correspondence: None,
            transform: TransformKind::Unmatched,
        }
    }
}

/// Per-comparison matching state for a source and a target figure
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchContext {
    source: Vec<ShapeMatch>,
    target: Vec<ShapeMatch>,
}

impl MatchContext {
    /// Fresh state for figures with the given shape counts
    pub fn new(source_len: usize, target_len: usize) -> Self {
        Self {
            source: vec![ShapeMatch::default(); source_len],
            target: vec![ShapeMatch::default(); target_len],
        }
    }

    /// Return every shape to its unmatched state, resizing for new shape counts
    pub fn reset(&mut self, source_len: usize, target_len: usize) {
        self.source.clear();
        self.source.resize(source_len, ShapeMatch::default());
        self.target.clear();
        self.target.resize(target_len, ShapeMatch::default());
    }

    /// State of the source figure's shapes
    pub fn source(&self) -> &[ShapeMatch] {
        &self.source
    }

    /// State of the target figure's shapes
    pub fn target(&self) -> &[ShapeMatch] {
        &self.target
    }

    /// Transform assigned to each source shape, in shape order
    pub fn source_transforms(&self) -> Vec<TransformKind> {
        self.source.iter().map(|state| state.transform).collect()
    }

    /// Every (source index, target index, transform) pairing
    pub fn matched_pairs(&self) -> Vec<(usize, usize, TransformKind)> {
        self.source
            .iter()
            .enumerate()
            .filter_map(|(index, state)| {
                state
                    .correspondence
                    .map(|other| (index, other, state.transform))
            })
            .collect()
    }

    /// Number of shapes on either side carrying `kind`
    pub fn count(&self, kind: TransformKind) -> usize {
        self.source
            .iter()
            .chain(self.target.iter())
            .filter(|state| state.transform == kind)
            .count()
    }

    fn pair(&mut self, source: usize, target: usize, transform: TransformKind) {
        if let Some(state) = self.source.get_mut(source) {
            *state = ShapeMatch {
                correspondence: Some(target),
                transform,
            };
        }
        if let Some(state) = self.target.get_mut(target) {
            *state = ShapeMatch {
                correspondence: Some(source),
                transform,
            };
        }
    }
}

/// Pairs shapes across two figures with a prioritised strategy ladder
#[derive(Clone, Debug)]
pub struct ShapeMatcher {
    strategies: Vec<Strategy>,
    tolerances: Tolerances,
    size_band: f64,
}

impl ShapeMatcher {
    /// Default ladder: unchanged, rotated, then the filled slot
    pub fn new(config: &SolverConfig) -> Self {
        Self::with_strategies(
            vec![
                Strategy {
                    name: "unchanged",
                    classify: unchanged_strategy,
                },
                Strategy {
                    name: "rotated",
                    classify: rotated_strategy,
                },
                Strategy {
                    name: "filled",
                    classify: filled_strategy,
                },
            ],
            Tolerances::strict(config),
            config.size_compatibility,
        )
    }

    /// Matcher with an explicit ladder
    pub const fn with_strategies(
        strategies: Vec<Strategy>,
        tolerances: Tolerances,
        size_band: f64,
    ) -> Self {
        Self {
            strategies,
            tolerances,
            size_band,
        }
    }

    /// Replace the classifier of the `filled` rung
    #[must_use]
    pub fn with_filled_strategy(mut self, classify: ClassifierFn) -> Self {
        for strategy in &mut self.strategies {
            if strategy.name == "filled" {
                strategy.classify = classify;
            }
        }
        self
    }

    /// The ladder in evaluation order
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Match `source` shapes against `target` shapes in a fresh context
    pub fn match_shapes(&self, source: &[Shape], target: &[Shape]) -> MatchContext {
        let mut context = MatchContext::new(source.len(), target.len());
        self.match_into(&mut context, source, target);
        context
    }

    /// Match into an existing context, resetting it first
    pub fn match_into(&self, context: &mut MatchContext, source: &[Shape], target: &[Shape]) {
        context.reset(source.len(), target.len());
        let mut claimed = bitvec![0; target.len()];

        for (source_index, a) in source.iter().enumerate() {
            for (target_index, b) in target.iter().enumerate() {
                if claimed.get(target_index).as_deref() == Some(&true) {
                    continue;
                }
                if !is_size_compatible(a.pixel_count(), b.pixel_count(), self.size_band) {
                    continue;
                }
                if let Some(kind) = self.run_ladder(a, b) {
                    context.pair(source_index, target_index, kind);
                    claimed.set(target_index, true);
                    break;
                }
            }
        }

        label_leftovers(context);
    }

    fn run_ladder(&self, a: &Shape, b: &Shape) -> Option<TransformKind> {
        self.strategies
            .iter()
            .find_map(|strategy| (strategy.classify)(a, b, &self.tolerances))
    }
}

// Only the surplus of the larger figure is labelled, taking its trailing
// unmatched shapes, so exactly |m - n| shapes end up added or deleted.
fn label_leftovers(context: &mut MatchContext) {
    let source_len = context.source.len();
    let target_len = context.target.len();
    if source_len == target_len {
        return;
    }

    let (larger, kind) = if source_len > target_len {
        (&mut context.source, TransformKind::Deleted)
    } else {
        (&mut context.target, TransformKind::Added)
    };

    let surplus = source_len.abs_diff(target_len);
    larger
        .iter_mut()
        .rev()
        .filter(|state| state.correspondence.is_none())
        .take(surplus)
        .for_each(|state| state.transform = kind);
}
