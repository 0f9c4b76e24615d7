//! Graph fixtures shared by the solver tests.

use crate::graph::Graph;
use crate::problem::Problem;
use rstest::fixture;
use std::io::Cursor;

pub fn from_gr(gr: &str) -> Problem<usize> {
    Problem::new(Graph::read_gr(Cursor::new(gr)).expect("fixture is well formed"))
}

/// `A - B - C - D - A`
#[fixture]
pub fn four_cycle() -> Problem<&'static str> {
    Problem::new(Graph::from_edges(vec![("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]).unwrap())
}

#[fixture]
pub fn single_edge() -> Problem<&'static str> {
    Problem::new(Graph::from_edges(vec![("A", "B")]).unwrap())
}

#[fixture]
pub fn edgeless() -> Problem<usize> {
    from_gr("p td 3 0\n")
}

/// Two disjoint triangles.
#[fixture]
pub fn two_triangles() -> Problem<usize> {
    from_gr("p td 6 6\n1 2\n2 3\n1 3\n4 5\n5 6\n4 6\n")
}

/// A star with 5 leaves around vertex 1.
#[fixture]
pub fn star() -> Problem<usize> {
    from_gr("p td 6 5\n1 2\n1 3\n1 4\n1 5\n1 6\n")
}

/// Minimum vertex cover of size 9.
#[fixture]
pub fn intervined_cliques() -> Problem<usize> {
    from_gr("p td 12 30\n1 2\n1 3\n1 4\n1 5\n1 9\n2 3\n2 4\n2 6\n2 10\n\
             3 4\n3 7\n3 11\n4 8\n4 12\n5 6\n5 7\n5 8\n5 9\n6 7\n\
             6 8\n6 10\n7 8\n7 11\n8 12\n9 10\n9 11\n9 12\n\
             10 11\n10 12\n11 12\n")
}

/// A connected graph on 8 vertices: a 5-cycle `1..5` with a path `5 - 6 - 7 - 8` and the chord
/// `2 - 6`.
#[fixture]
pub fn lollipop() -> Problem<usize> {
    from_gr("p td 8 9\n1 2\n2 3\n3 4\n4 5\n5 1\n5 6\n6 7\n7 8\n2 6\n")
}

/// Size of a minimum vertex cover, by checking every bit mask. Only for small fixtures.
pub fn min_cover_size<V>(problem: &Problem<V>) -> usize {
    let n = problem.num_vertices();
    assert!(n < 25, "ground truth is only computed for small graphs");
    let edges: Vec<(usize, usize)> = problem.graph().edges().iter().map(|e| e.vertexes()).collect();
    (0u32..(1 << n))
        .filter(|mask| edges.iter().all(|(u, v)| mask & (1 << u) != 0 || mask & (1 << v) != 0))
        .map(|mask| mask.count_ones() as usize)
        .min()
        .unwrap_or(0)
}
