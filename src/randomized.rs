//! Randomized vertex cover search. Candidates are grown from a random start vertex by adding
//! random neighbors until a target size is reached. The target size starts at 1 and grows by one
//! whenever `V` attempts at the current size have failed.

use crate::problem::Problem;
use crate::solver::{SolveOptions, Solver};
use fxhash::FxHashSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::min;

pub struct RandomizedSolver<'a, V> {
    problem: &'a Problem<V>,
    rng: StdRng,
    solution: Vec<usize>,
}

/// Order independent key of a candidate.
fn canonical(candidate: &[usize]) -> Vec<usize> {
    let mut key = candidate.to_vec();
    key.sort_unstable();
    key
}

impl<'a, V> RandomizedSolver<'a, V> {

    pub fn new(problem: &'a Problem<V>) -> Self {
        RandomizedSolver {
            problem,
            rng: StdRng::from_entropy(),
            solution: Vec::new(),
        }
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Runs up to `options.max_iters()` attempts and returns the node ids of the smallest cover
    /// found, or an empty slice if every attempt failed.
    pub fn solve_nodes(&mut self, options: &SolveOptions) -> &[usize] {
        self.solution.clear();
        let n = self.problem.num_vertices();
        if n == 0 || self.problem.num_edges() == 0 {
            return &self.solution
        }
        let max_iters = options.max_iters();
        log::debug!("randomized: {} iterations on {} vertices", max_iters, n);
        let mut computed_solutions: FxHashSet<Vec<usize>> = FxHashSet::default();
        let mut best: Option<Vec<usize>> = None;
        let mut cur_size = 1;
        let mut size_cnt = 0;
        for _ in 0..max_iters {
            match self.random_cover(min(cur_size, n), &computed_solutions) {
                None => {
                    size_cnt += 1;
                    if size_cnt == n {
                        cur_size += 1;
                        size_cnt = 0;
                        log::trace!("randomized: target size raised to {}", min(cur_size, n));
                    }
                },
                Some(candidate) => {
                    computed_solutions.insert(canonical(&candidate));
                    if best.as_ref().map_or(true, |best| candidate.len() < best.len()) {
                        log::debug!("randomized: new best of size {}", candidate.len());
                        best = Some(candidate);
                    }
                },
            }
        }
        self.solution = best.unwrap_or_default();
        log::debug!("randomized: finished with cover of size {}", self.solution.len());
        &self.solution
    }

    /// Grows a connected candidate of `size` nodes from a random start.
    ///
    /// Returns the candidate if it covers every edge and, when it reached `size`, was not
    /// computed before. A candidate that stops growing early is returned if it is a cover.
    fn random_cover(&mut self, size: usize, computed_solutions: &FxHashSet<Vec<usize>>) -> Option<Vec<usize>> {
        let problem = self.problem;
        let starting_vertex = self.rng.gen_range(0..problem.num_vertices());
        let mut candidate = vec![starting_vertex];
        while candidate.len() < size {
            let neighbors = problem.graph().open_neighborhood(&candidate);
            match neighbors.choose(&mut self.rng) {
                Some(next) => candidate.push(*next),
                None => {
                    if problem.is_vertex_cover(&candidate) {
                        return Some(candidate)
                    }
                    return None
                },
            }
        }
        if problem.is_vertex_cover(&candidate) && !computed_solutions.contains(&canonical(&candidate)) {
            return Some(candidate)
        }
        None
    }
}

impl<'a, V: Clone> Solver<V> for RandomizedSolver<'a, V> {

    fn problem(&self) -> &Problem<V> {
        self.problem
    }

    fn solve(&mut self, options: &SolveOptions) -> Vec<V> {
        self.solve_nodes(options);
        self.problem.labels(&self.solution)
    }
}
