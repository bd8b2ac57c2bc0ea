//! Command-line interface for solving problem directories of figure PNGs

use crate::analysis::{Answer, Problem, ProblemKind, Solver};
use crate::io::configuration::{MIN_SCORE_SEPARATION, NOISE_PIXEL_THRESHOLD, SolverConfig};
use crate::io::error::{AnalysisError, Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, load_pixel_grid};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::warn;
use std::path::{Path, PathBuf};

/// Figure names recognised inside a problem directory
const FIGURE_NAMES: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "1", "2", "3", "4", "5", "6", "7", "8",
];

#[derive(Parser, Debug)]
#[command(name = "ravenmatrix")]
#[command(
    author,
    version,
    about = "Solve visual analogy matrix problems from figure images"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Problem directory (A.png, B.png, ..., 1.png, ...) or a directory of them
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Components at or below this many pixels are ignored
    #[arg(short, long, default_value_t = NOISE_PIXEL_THRESHOLD)]
    pub noise_threshold: usize,

    /// Skip diagonal frames when scoring 3x3 problems
    #[arg(long)]
    pub no_diagonals: bool,

    /// Reward candidates whose shape-level relationships repeat across the row
    #[arg(long)]
    pub net_bonus: bool,

    /// Margin the best score must exceed the runner-up by
    #[arg(short, long, default_value_t = MIN_SCORE_SEPARATION)]
    pub min_separation: f64,

    /// Write every extracted shape mask as a PNG under this directory
    #[arg(short, long, value_name = "DIR")]
    pub export_shapes: Option<PathBuf>,
}

impl Cli {
    /// Solver configuration implied by the flags
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            noise_threshold: self.noise_threshold,
            diagonal_frames: !self.no_diagonals,
            net_consistency_bonus: self.net_bonus,
            min_score_separation: self.min_separation,
            ..SolverConfig::default()
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome for one solved problem directory
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemOutcome {
    /// Problem name (the directory name)
    pub name: String,
    /// Chosen option or abstention
    pub answer: Answer,
}

/// Orchestrates solving one or many problem directories
pub struct ProblemRunner {
    cli: Cli,
    solver: Solver,
    progress_manager: Option<ProgressManager>,
}

impl ProblemRunner {
    /// Create a runner from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the flags produce an unusable configuration
    pub fn new(cli: Cli) -> Result<Self> {
        let solver = Solver::new(cli.solver_config())?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            solver,
            progress_manager,
        })
    }

    /// Solve every problem under the target and print one answer line each
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a directory, a problem directory
    /// cannot be read or is incomplete, or shape export fails
    // Answers are the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<Vec<ProblemOutcome>> {
        let problem_dirs = self.collect_problem_dirs()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(problem_dirs.len());
        }

        let mut outcomes = Vec::with_capacity(problem_dirs.len());
        for dir in &problem_dirs {
            let outcome = self.process_problem(dir)?;
            println!("{}: {}", outcome.name, outcome.answer);
            outcomes.push(outcome);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outcomes)
    }

    fn process_problem(&self, dir: &Path) -> Result<ProblemOutcome> {
        let problem = load_problem(dir, self.solver.config().noise_threshold)?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_problem(problem.name());
        }

        if let Some(ref export_dir) = self.cli.export_shapes {
            export_shapes(&problem, &export_dir.join(problem.name()))?;
        }

        let solution = self.solver.solve(&problem)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_problem();
        }

        Ok(ProblemOutcome {
            name: problem.name().to_string(),
            answer: solution.answer,
        })
    }

    fn collect_problem_dirs(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a problem directory or a directory of problems",
            ));
        }

        if is_problem_dir(target) {
            return Ok(vec![target.clone()]);
        }

        let entries = std::fs::read_dir(target).map_err(|e| AnalysisError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source: e,
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() && is_problem_dir(&path) {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

/// Whether `dir` directly contains a figure named `A.png`
pub fn is_problem_dir(dir: &Path) -> bool {
    dir.join("A.png").is_file()
}

/// Load every recognised figure PNG in `dir` into a segmented problem
///
/// The layout is 3x3 when any of `D.png`..`H.png` is present, 2x2 otherwise.
///
/// # Errors
///
/// Returns an error if a figure cannot be decoded, figures disagree in
/// dimensions, or a figure required by the layout is missing
pub fn load_problem(dir: &Path, noise_threshold: usize) -> Result<Problem> {
    let present: Vec<&str> = FIGURE_NAMES
        .iter()
        .copied()
        .filter(|name| dir.join(format!("{name}.png")).is_file())
        .collect();
    let kind = ProblemKind::infer(present.iter().copied());

    let mut grids = Vec::with_capacity(present.len());
    for name in present {
        let grid = load_pixel_grid(dir.join(format!("{name}.png")))?;
        grids.push((name.to_string(), grid));
    }

    let name = dir
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    Problem::new(name, kind, grids, noise_threshold)
}

/// Write each figure's shapes to `dir` as `<figure>_<shape>.png`
///
/// # Errors
///
/// Returns an error if a directory cannot be created or an image cannot be written
pub fn export_shapes(problem: &Problem, dir: &Path) -> Result<()> {
    for figure in problem.figures() {
        if figure.shapes().is_empty() {
            warn!(
                "Problem {}: figure {} has no shapes to export",
                problem.name(),
                figure.name()
            );
        }
        for shape in figure.shapes() {
            let path = dir.join(format!("{}_{}.png", figure.name(), shape.name()));
            export_grid_as_png(shape.mask(), path)?;
        }
    }
    Ok(())
}
