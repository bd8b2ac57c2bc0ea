//! Tests for command-line parsing and problem directory processing

#[cfg(test)]
mod tests {
    use crate::support::block;
    use clap::Parser;
    use ravenmatrix::AnalysisError;
    use ravenmatrix::analysis::{Answer, ProblemKind};
    use ravenmatrix::io::cli::{Cli, ProblemRunner, export_shapes, is_problem_dir, load_problem};
    use ravenmatrix::io::configuration::NOISE_PIXEL_THRESHOLD;
    use ravenmatrix::io::image::export_grid_as_png;
    use ravenmatrix::spatial::PixelGrid;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_figures(dir: &Path, figures: &[(&str, PixelGrid)]) {
        for (name, grid) in figures {
            export_grid_as_png(grid, dir.join(format!("{name}.png"))).expect("write figure");
        }
    }

    fn write_two_by_two(dir: &Path) {
        let a = block(32, 4, 4, 6, 6);
        let added = block(32, 18, 18, 6, 6);
        let c = block(32, 4, 18, 6, 6);
        write_figures(
            dir,
            &[
                ("A", a.clone()),
                ("B", a.or(&added)),
                ("C", c.clone()),
                ("1", PixelGrid::new(32, 32)),
                ("2", c.clone()),
                ("3", c.or(&added)),
                ("4", c.or(&block(32, 18, 4, 10, 10))),
                ("5", block(32, 8, 8, 16, 16)),
                ("6", a),
            ],
        );
    }

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "problems"]);

        assert_eq!(cli.target, PathBuf::from("problems"));
        assert_eq!(cli.noise_threshold, NOISE_PIXEL_THRESHOLD);
        assert!(!cli.quiet);
        assert!(cli.export_shapes.is_none());
        assert!(cli.solver_config().diagonal_frames);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by ignoring the flags in solver_config
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "problems",
            "--quiet",
            "--noise-threshold",
            "5",
            "--no-diagonals",
            "--net-bonus",
            "--min-separation",
            "1.5",
            "--export-shapes",
            "out",
        ]);
        let config = cli.solver_config();

        assert!(!cli.should_show_progress());
        assert_eq!(config.noise_threshold, 5);
        assert!(!config.diagonal_frames);
        assert!(config.net_consistency_bonus);
        assert!((config.min_score_separation - 1.5).abs() < f64::EPSILON);
        assert_eq!(cli.export_shapes, Some(PathBuf::from("out")));
    }

    // Tests problem directories are recognised by their first figure
    // Verified by accepting any directory
    #[test]
    fn test_is_problem_dir() {
        let dir = TempDir::new().expect("temp dir");
        assert!(!is_problem_dir(dir.path()));

        write_figures(dir.path(), &[("A", PixelGrid::new(4, 4))]);
        assert!(is_problem_dir(dir.path()));
    }

    // Tests loading infers the layout and names the problem after its directory
    // Verified by always inferring 2x2
    #[test]
    fn test_load_problem() {
        let root = TempDir::new().expect("temp dir");
        let dir = root.path().join("Basic Problem B-01");
        write_two_by_two(&dir);

        let problem = load_problem(&dir, NOISE_PIXEL_THRESHOLD).expect("complete problem");
        assert_eq!(problem.name(), "Basic Problem B-01");
        assert_eq!(problem.kind(), ProblemKind::TwoByTwo);
        assert_eq!(problem.figures().count(), 9);
    }

    // Tests an incomplete directory is reported
    // Verified by defaulting missing figures to blank grids
    #[test]
    fn test_load_incomplete_problem() {
        let dir = TempDir::new().expect("temp dir");
        write_figures(
            dir.path(),
            &[
                ("A", PixelGrid::new(4, 4)),
                ("B", PixelGrid::new(4, 4)),
                ("C", PixelGrid::new(4, 4)),
            ],
        );

        assert!(matches!(
            load_problem(dir.path(), NOISE_PIXEL_THRESHOLD),
            Err(AnalysisError::MissingFigure { .. })
        ));
    }

    // Tests shapes are exported per figure with their names
    // Verified by writing the whole figure instead of each shape
    #[test]
    fn test_export_shapes() {
        let root = TempDir::new().expect("temp dir");
        let dir = root.path().join("p");
        write_two_by_two(&dir);
        let problem = load_problem(&dir, NOISE_PIXEL_THRESHOLD).expect("complete problem");

        let out = root.path().join("shapes");
        export_shapes(&problem, &out).expect("export");

        assert!(out.join("A_Shape_1.png").exists());
        assert!(out.join("B_Shape_2.png").exists());
        assert!(!out.join("1_Shape_1.png").exists());
    }

    // Tests a directory of problems is solved in name order
    // Verified by returning outcomes unsorted
    #[test]
    fn test_runner_solves_batch() {
        let root = TempDir::new().expect("temp dir");
        write_two_by_two(&root.path().join("B-02"));
        write_two_by_two(&root.path().join("B-01"));
        std::fs::create_dir_all(root.path().join("notes")).expect("create dir");

        let target = root.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", target.as_str(), "--quiet"]);
        let mut runner = ProblemRunner::new(cli).expect("valid flags");
        let outcomes = runner.process().expect("solvable batch");

        let names: Vec<&str> = outcomes.iter().map(|outcome| outcome.name.as_str()).collect();
        assert_eq!(names, vec!["B-01", "B-02"]);
        assert!(outcomes.iter().all(|outcome| outcome.answer == Answer::Choice(3)));
    }

    // Tests a missing target is rejected
    // Verified by treating missing targets as empty batches
    #[test]
    fn test_runner_rejects_missing_target() {
        let root = TempDir::new().expect("temp dir");
        let target = root.path().join("absent").to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", target.as_str(), "--quiet"]);
        let mut runner = ProblemRunner::new(cli).expect("valid flags");

        assert!(matches!(
            runner.process(),
            Err(AnalysisError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
    }
}
