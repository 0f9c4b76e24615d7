//! The contract shared by all vertex cover strategies, and the options they understand.

use crate::cust_error::ProcessingError;
use crate::exhaustive::ExhaustiveSolver;
use crate::greedy::GreedySolver;
use crate::problem::Problem;
use crate::randomized::RandomizedSolver;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

/// Iteration budget of the randomized solver if none (or zero) is given.
pub const DEFAULT_ITERS: usize = 1000;

/// Computes a vertex cover for the problem the solver was built with.
///
/// An empty result means that no cover was found within the solver's limits. Every non-empty
/// result covers all edges and contains no vertex twice.
pub trait Solver<V> {
    fn problem(&self) -> &Problem<V>;

    fn solve(&mut self, options: &SolveOptions) -> Vec<V>;
}

/// Options passed to [`Solver::solve`]. Solvers ignore the options they do not use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Iteration budget of the randomized solver.
    pub iters: Option<usize>,
}

impl SolveOptions {

    pub fn iters(mut self, iters: usize) -> Self {
        self.iters = Some(iters);
        self
    }

    /// Returns the iteration budget, falling back to [`DEFAULT_ITERS`] if `iters` is unset or 0.
    pub fn max_iters(&self) -> usize {
        match self.iters {
            Some(iters) if iters > 0 => iters,
            _ => DEFAULT_ITERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Exhaustive,
    Randomized,
    Greedy,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Randomized => write!(f, "randomized"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}

impl FromStr for SolverKind {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Self::Exhaustive),
            "randomized" => Ok(Self::Randomized),
            "greedy" => Ok(Self::Greedy),
            _ => Err(ProcessingError::UnknownSolver(s.to_owned())),
        }
    }
}

impl SolverKind {

    /// Builds the solver of this kind for `problem`. The stochastic solvers are seeded with
    /// `seed` if one is given, and from entropy otherwise.
    pub fn build<'a, V>(&self, problem: &'a Problem<V>, seed: Option<u64>) -> Box<dyn Solver<V> + 'a>
    where
        V: Clone + Eq + Hash + Debug + 'a,
    {
        match self {
            Self::Exhaustive => Box::new(ExhaustiveSolver::new(problem)),
            Self::Randomized => {
                let mut solver = RandomizedSolver::new(problem);
                if let Some(seed) = seed {
                    solver.seed(seed);
                }
                Box::new(solver)
            },
            Self::Greedy => {
                let mut solver = GreedySolver::new(problem);
                if let Some(seed) = seed {
                    solver.seed(seed);
                }
                Box::new(solver)
            },
        }
    }
}

/// Builds a solver of kind `kind` for `problem` and runs it once.
pub fn solve_with<V>(kind: SolverKind, problem: &Problem<V>, options: &SolveOptions, seed: Option<u64>) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
{
    kind.build(problem, seed).solve(options)
}
