//! Semi-greedy construction of a connected vertex cover.
//!
//! The candidate starts empty and grows one vertex at a time. In each step the frontier (the
//! whole vertex set at first, the open neighborhood of the candidate afterwards) is scored by
//! marginal coverage gain, the lowest scoring vertex is dropped, and one of the remaining
//! vertices is picked uniformly at random. Construction stops once the candidate covers every
//! edge and a traversal from its first vertex reaches the whole graph.

use crate::cust_error::ProcessingError;
use crate::problem::Problem;
use crate::solver::{SolveOptions, Solver};
use fxhash::FxHashSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// How the next vertex is picked from the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Discard the single vertex with the lowest score (the first one on ties), then choose
    /// uniformly among the rest. This is not best-first greedy.
    #[default]
    DropWorstThenRandom,
}

pub struct GreedySolver<'a, V> {
    problem: &'a Problem<V>,
    rng: StdRng,
    policy: SelectionPolicy,
    solution: Vec<usize>,
}

impl<'a, V> GreedySolver<'a, V> {

    pub fn new(problem: &'a Problem<V>) -> Self {
        GreedySolver {
            problem,
            rng: StdRng::from_entropy(),
            policy: SelectionPolicy::default(),
            solution: Vec::new(),
        }
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn policy(&mut self, policy: SelectionPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Returns how many more edges would be covered if `node` joined `members`, i.e. the
    /// uncovered edge count of `members` minus that of `members ∪ {node}`.
    pub fn score(&self, members: &FxHashSet<usize>, node: usize) -> usize {
        if members.contains(&node) {
            return 0
        }
        let graph = self.problem.graph();
        graph.incident_edges(node)
            .iter()
            .filter_map(|edge| graph.edge(*edge).other(node))
            .filter(|other| !members.contains(other))
            .count()
    }

    /// Checks if a traversal of the whole graph starting at the first node of `candidate` visits
    /// all `V` vertices.
    pub fn is_connected(&self, candidate: &[usize]) -> bool {
        match candidate.first() {
            Some(first) => self.problem.graph().reachable(*first).len() == self.problem.num_vertices(),
            None => false,
        }
    }

    /// Picks the next vertex from `frontier` according to `self.policy`, or `None` if the policy
    /// leaves nothing to choose from.
    fn select(&mut self, members: &FxHashSet<usize>, frontier: &[usize]) -> Option<usize> {
        match self.policy {
            SelectionPolicy::DropWorstThenRandom => {
                let (worst, _) = frontier
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, node)| self.score(members, **node))?;
                let remaining: Vec<usize> = frontier
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != worst)
                    .map(|(_, node)| *node)
                    .collect();
                remaining.choose(&mut self.rng).copied()
            },
        }
    }

    /// Builds a connected cover and returns its node ids in the order they were chosen.
    ///
    /// Returns `ProcessingError::NonConvergence` with the partial candidate if the frontier runs
    /// out first. This always happens on a disconnected graph with at least one edge.
    pub fn try_solve_nodes(&mut self) -> Result<&[usize], ProcessingError> {
        self.solution.clear();
        let problem = self.problem;
        if problem.num_edges() == 0 {
            return Ok(&self.solution)
        }
        let graph = problem.graph();
        let mut candidate: Vec<usize> = Vec::new();
        let mut members: FxHashSet<usize> = FxHashSet::default();
        let mut frontier: Vec<usize> = graph.nodes().collect();
        loop {
            let next = match self.select(&members, &frontier) {
                Some(next) => next,
                None => {
                    log::warn!("greedy: frontier exhausted after {} vertices", candidate.len());
                    return Err(ProcessingError::NonConvergence { partial: candidate })
                },
            };
            candidate.push(next);
            members.insert(next);
            if graph.covers(&members) && self.is_connected(&candidate) {
                break
            }
            frontier = graph.open_neighborhood(&candidate);
        }
        log::debug!("greedy: found connected cover of size {}", candidate.len());
        self.solution = candidate;
        Ok(&self.solution)
    }
}

impl<'a, V: Clone> GreedySolver<'a, V> {

    /// Like [`Solver::solve`], but reports non-convergence instead of returning an empty cover.
    pub fn try_solve(&mut self, _options: &SolveOptions) -> Result<Vec<V>, ProcessingError> {
        self.try_solve_nodes()?;
        Ok(self.problem.labels(&self.solution))
    }
}

impl<'a, V: Clone> Solver<V> for GreedySolver<'a, V> {

    fn problem(&self) -> &Problem<V> {
        self.problem
    }

    fn solve(&mut self, options: &SolveOptions) -> Vec<V> {
        match self.try_solve(options) {
            Ok(cover) => cover,
            Err(e) => {
                log::warn!("greedy: {}", e);
                Vec::new()
            },
        }
    }
}
