//! Binary that reads a graph in .gr format from a file or standard in, computes a vertex cover
//! with the selected solver and writes the solution to standard out, one vertex per line.

use std::error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{crate_version, Parser};
use cover_strategies::{graph::Graph, problem::Problem, solver::{SolveOptions, SolverKind}};

/// CLI arguments.
#[derive(Parser, Debug)]
#[clap(version = crate_version!(), long_about = None)]
#[clap(about = "Computes a vertex cover of a .gr graph")]
struct Args {
    /// Graph file to read. Reads standard in if omitted.
    input: Option<PathBuf>,

    /// Solving strategy: `exhaustive`, `randomized` or `greedy`.
    #[arg(long, short, default_value = "randomized")]
    solver: SolverKind,

    /// Iteration budget of the randomized solver.
    #[arg(long, short)]
    iters: Option<usize>,

    /// Seed for the randomized and greedy solvers.
    #[arg(long)]
    seed: Option<u64>,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let graph = match &args.input {
        Some(path) => Graph::read_gr(BufReader::new(File::open(path)?))?,
        None => Graph::read_gr(io::stdin().lock())?,
    };
    let problem = Problem::new(graph);
    log::info!(
        "solving with {}: {} vertices, {} edges",
        args.solver,
        problem.num_vertices(),
        problem.num_edges()
    );
    let options = SolveOptions { iters: args.iters };
    let resu = args.solver.build(&problem, args.seed).solve(&options);

    // Validate
    if !resu.is_empty() || problem.num_edges() == 0 {
        problem.validate_solution(&resu)?;
    } else {
        log::warn!("{} solver found no cover", args.solver);
    }
    log::info!("cover of size {}", resu.len());

    Problem::write_solution(&resu, io::stdout().lock())?;
    Ok(())
}
