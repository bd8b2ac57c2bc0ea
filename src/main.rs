//! CLI entry point for the matrix problem solver

use clap::Parser;
use ravenmatrix::io::cli::{Cli, ProblemRunner};

fn main() -> ravenmatrix::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = ProblemRunner::new(cli)?;
    runner.process()?;
    Ok(())
}
