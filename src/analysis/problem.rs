//! Problem assembly: named figures validated against a matrix layout

use std::collections::BTreeMap;
use std::fmt;

use crate::io::error::{AnalysisError, Result};
use crate::segmentation::Figure;
use crate::spatial::PixelGrid;

/// Known figure names of a 2x2 problem
const KNOWN_TWO: [&str; 3] = ["A", "B", "C"];

/// Known figure names of a 3x3 problem
const KNOWN_THREE: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Matrix layout of a problem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// Three known figures, six options
    TwoByTwo,
    /// Eight known figures, eight options
    ThreeByThree,
}

impl ProblemKind {
    /// Names of the known (non-option) figures
    pub const fn known_figures(self) -> &'static [&'static str] {
        match self {
            Self::TwoByTwo => &KNOWN_TWO,
            Self::ThreeByThree => &KNOWN_THREE,
        }
    }

    /// Number of answer options
    pub const fn option_count(self) -> usize {
        match self {
            Self::TwoByTwo => 6,
            Self::ThreeByThree => 8,
        }
    }

    /// Layout implied by a set of figure names: 3x3 when any of D..H is present
    pub fn infer<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let three_only = KNOWN_THREE.get(KNOWN_TWO.len()..).unwrap_or(&[]);
        if names.into_iter().any(|name| three_only.contains(&name)) {
            Self::ThreeByThree
        } else {
            Self::TwoByTwo
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoByTwo => f.write_str("2x2"),
            Self::ThreeByThree => f.write_str("3x3"),
        }
    }
}

/// A segmented problem: every known figure plus every answer option
#[derive(Clone, Debug)]
pub struct Problem {
    name: String,
    kind: ProblemKind,
    dimensions: (usize, usize),
    figures: BTreeMap<String, Figure>,
}

impl Problem {
    /// Segment each named grid and validate the set against `kind`
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when the grids do not all share dimensions,
    /// and `MissingFigure` when a known figure or an answer option is absent
    pub fn new(
        name: impl Into<String>,
        kind: ProblemKind,
        grids: impl IntoIterator<Item = (String, PixelGrid)>,
        noise_threshold: usize,
    ) -> Result<Self> {
        let mut dimensions: Option<(usize, usize)> = None;
        let mut figures = BTreeMap::new();

        for (figure_name, grid) in grids {
            let found = grid.dimensions();
            match dimensions {
                Some(expected) if expected != found => {
                    return Err(AnalysisError::DimensionMismatch {
                        figure: figure_name,
                        expected,
                        found,
                    });
                }
                _ => dimensions = Some(found),
            }
            let figure = Figure::segment(figure_name.clone(), grid, noise_threshold);
            figures.insert(figure_name, figure);
        }

        let required = kind
            .known_figures()
            .iter()
            .map(|&known| known.to_string())
            .chain((1..=kind.option_count()).map(|option| option.to_string()));
        for figure_name in required {
            if !figures.contains_key(&figure_name) {
                return Err(AnalysisError::MissingFigure { name: figure_name });
            }
        }

        Ok(Self {
            name: name.into(),
            kind,
            dimensions: dimensions.unwrap_or((0, 0)),
            figures,
        })
    }

    /// Problem name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Matrix layout
    pub const fn kind(&self) -> ProblemKind {
        self.kind
    }

    /// Dimensions shared by every figure (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Look up a figure by name
    ///
    /// # Errors
    ///
    /// Returns `MissingFigure` if no figure has that name
    pub fn figure(&self, name: &str) -> Result<&Figure> {
        self.figures
            .get(name)
            .ok_or_else(|| AnalysisError::MissingFigure {
                name: name.to_string(),
            })
    }

    /// Answer option `index` (1-based)
    ///
    /// # Errors
    ///
    /// Returns `MissingFigure` if the option does not exist
    pub fn option(&self, index: usize) -> Result<&Figure> {
        self.figure(&index.to_string())
    }

    /// All figures in name order
    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.figures.values()
    }
}
