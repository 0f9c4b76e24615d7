//! Optimal vertex cover by enumerating candidate subsets in order of increasing size.
//!
//! Sizes `0..V` are tried; the full vertex set is never a candidate. Since graphs have no
//! self-loops, dropping any single vertex from the full set still leaves a cover, so every graph
//! has a cover of size at most `V - 1` (or the empty cover if it has no edges).

use crate::problem::Problem;
use crate::solver::{SolveOptions, Solver};
use fxhash::FxHashSet;
use itertools::Itertools;

pub struct ExhaustiveSolver<'a, V> {
    problem: &'a Problem<V>,
    solution: Vec<usize>,
}

impl<'a, V> ExhaustiveSolver<'a, V> {

    pub fn new(problem: &'a Problem<V>) -> Self {
        ExhaustiveSolver {
            problem,
            solution: Vec::new(),
        }
    }

    /// Returns the number of distinct edges incident to at least one node of `subset`.
    fn edges_covered(&self, subset: &[usize]) -> usize {
        let graph = self.problem.graph();
        let visited_edges: FxHashSet<usize> = subset
            .iter()
            .flat_map(|node| graph.incident_edges(*node).iter().copied())
            .collect();
        visited_edges.len()
    }

    /// Runs the enumeration and returns the node ids of the first smallest cover.
    pub fn solve_nodes(&mut self) -> &[usize] {
        self.solution.clear();
        let problem = self.problem;
        let num_edges = problem.num_edges();
        let graph = problem.graph();
        log::debug!("exhaustive: searching {} vertices, {} edges", graph.num_nodes(), num_edges);
        // Subsets come in increasing size, so the first hit is minimum. Later hits of the same
        // size never replace it.
        'sizes: for size in 0..problem.num_vertices() {
            for subset in graph.nodes().combinations(size) {
                if self.edges_covered(&subset) == num_edges {
                    self.solution = subset;
                    break 'sizes
                }
            }
        }
        log::debug!("exhaustive: found cover of size {}", self.solution.len());
        &self.solution
    }
}

impl<'a, V: Clone> Solver<V> for ExhaustiveSolver<'a, V> {

    fn problem(&self) -> &Problem<V> {
        self.problem
    }

    fn solve(&mut self, _options: &SolveOptions) -> Vec<V> {
        self.solve_nodes();
        self.problem.labels(&self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graphs::*;
    use rstest::rstest;

    #[rstest]
    fn four_cycle_test(four_cycle: Problem<&'static str>) {
        let mut solver = ExhaustiveSolver::new(&four_cycle);
        let cover = solver.solve(&SolveOptions::default());
        // First size-2 cover in lexicographic order over (A, B, C, D).
        assert_eq!(cover, vec!["A", "C"]);
        assert!(four_cycle.validate_solution(&cover).is_ok());
    }

    #[rstest]
    fn single_edge_test(single_edge: Problem<&'static str>) {
        let mut solver = ExhaustiveSolver::new(&single_edge);
        assert_eq!(solver.solve(&SolveOptions::default()), vec!["A"]);
    }

    #[rstest]
    fn edgeless_test(edgeless: Problem<usize>) {
        let mut solver = ExhaustiveSolver::new(&edgeless);
        assert!(solver.solve(&SolveOptions::default()).is_empty());
    }

    #[rstest]
    #[case::star(star())]
    #[case::two_triangles(two_triangles())]
    #[case::lollipop(lollipop())]
    #[case::intervined_cliques(intervined_cliques())]
    fn minimum_size_test(#[case] problem: Problem<usize>) {
        let mut solver = ExhaustiveSolver::new(&problem);
        let cover = solver.solve(&SolveOptions::default());
        assert!(problem.validate_solution(&cover).is_ok());
        assert_eq!(cover.len(), min_cover_size(&problem));
    }

    #[rstest]
    fn reuse_test(lollipop: Problem<usize>) {
        let mut solver = ExhaustiveSolver::new(&lollipop);
        let first = solver.solve(&SolveOptions::default());
        let second = solver.solve(&SolveOptions::default().iters(3));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_graph_test() {
        let problem = from_gr("p td 0 0\n");
        let mut solver = ExhaustiveSolver::new(&problem);
        assert!(solver.solve_nodes().is_empty());
    }
}
