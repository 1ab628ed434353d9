//! Tender CLI
//!
//! Reads a YAML problem file, solves it with the chosen strategy and prints
//! the minimum total price.

use std::{fs, io, path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use humanize_duration::{Truncate, prelude::DurationExt};

use tender::{
    problem::ProblemSpec,
    report::Report,
    solvers::{Solver, branch_bound::BranchBoundSolver, frontier::FrontierSolver},
};

#[derive(Debug, Parser)]
#[command(name = "tender", about = "Procurement cost optimiser", long_about = None)]
struct Cli {
    /// Path to a YAML problem file
    problem: PathBuf,

    /// Solver strategy to use
    #[arg(long, value_enum, default_value = "frontier")]
    solver: Strategy,

    /// Print the sorted offer catalog alongside the result
    #[arg(long)]
    table: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Incremental Pareto-frontier fold
    Frontier,

    /// Depth-first branch & bound
    BranchBound,
}

#[expect(clippy::print_stdout, reason = "CLI output to the user")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.problem)
        .with_context(|| format!("reading {}", cli.problem.display()))?;
    let problem = ProblemSpec::from_yaml(&text)?;
    let catalog = problem.catalog()?;

    let start = Instant::now();

    let outcome = match cli.solver {
        Strategy::Frontier => FrontierSolver::solve(&catalog)?,
        Strategy::BranchBound => BranchBoundSolver::solve(&catalog)?,
    };

    let elapsed = start.elapsed();

    if cli.table {
        let stdout = io::stdout();
        let handle = stdout.lock();

        Report::new(&catalog, &outcome).write_to(handle)?;
    }

    let Some(price) = outcome.optimal() else {
        bail!("no combination of suppliers reaches the target headcount");
    };

    println!("{price}");
    println!("\nSolved in {}", elapsed.human(Truncate::Nano));

    Ok(())
}
