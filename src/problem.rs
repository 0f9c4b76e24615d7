use crate::cust_error::ProcessingError;
use crate::graph::Graph;
use fxhash::FxHashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};

/// A vertex cover instance. Owns its graph and caches the vertex count `V` and edge count `E`;
/// the graph cannot be mutated through a `Problem`, so both counts stay consistent with it.
#[derive(Debug, Clone)]
pub struct Problem<V> {
    graph: Graph<V>,
    num_vertices: usize,
    num_edges: usize,
}

impl<V> Problem<V> {

    pub fn new(graph: Graph<V>) -> Self {
        Problem {
            num_vertices: graph.num_nodes(),
            num_edges: graph.num_edges(),
            graph,
        }
    }

    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    /// `V`
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// `E`
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the number of edges with no endpoint in `nodes`.
    pub fn uncovered_edges(&self, nodes: &FxHashSet<usize>) -> usize {
        self.graph
            .edges()
            .iter()
            .filter(|edge| {
                let (u, v) = edge.vertexes();
                !(nodes.contains(&u) || nodes.contains(&v))
            })
            .count()
    }

    /// Checks if `nodes` touches every edge.
    pub fn is_vertex_cover(&self, nodes: &[usize]) -> bool {
        let set: FxHashSet<usize> = nodes.iter().copied().collect();
        self.graph.covers(&set)
    }

    /// Translates node ids back into the caller's vertex identifiers.
    pub fn labels(&self, nodes: &[usize]) -> Vec<V>
    where
        V: Clone,
    {
        nodes.iter().map(|node| self.graph.label(*node).clone()).collect()
    }
}

impl<V: Clone + Eq + Hash + Debug> Problem<V> {

    /// Checks if a solution is valid: every vertex is known, none repeats and every edge is
    /// covered.
    pub fn validate_solution(&self, sol: &[V]) -> Result<(), ProcessingError> {
        let mut nodes = FxHashSet::default();
        for vertex in sol {
            let node = self.graph
                .node_of(vertex)
                .ok_or_else(|| ProcessingError::UnknownVertex(format!("{:?}", vertex)))?;
            if !nodes.insert(node) {
                return Err(ProcessingError::InvalidSolution(format!("{:?} appears twice", vertex)))
            }
        }
        if let Some(edge) = self.graph.edges().iter().find(|edge| {
            let (u, v) = edge.vertexes();
            !(nodes.contains(&u) || nodes.contains(&v))
        }) {
            let (u, v) = edge.vertexes();
            return Err(ProcessingError::InvalidSolution(format!(
                "edge {{{:?}, {:?}}} is not covered",
                self.graph.label(u),
                self.graph.label(v)
            )))
        }
        Ok(())
    }
}

impl<V: Display> Problem<V> {

    /// Writes a solution to a `Write` type, one vertex per line.
    pub fn write_solution<W: Write>(solution: &[V], mut out: W) -> Result<(), io::Error> {
        for elem in solution {
            writeln!(out, "{}", elem)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn triangle_with_tail() -> Problem<usize> {
        let gr = Cursor::new("p td 4 4\n1 2\n2 3\n1 3\n3 4\n");
        Problem::new(Graph::read_gr(gr).unwrap())
    }

    #[test]
    fn cached_counts_test() {
        let problem = triangle_with_tail();
        assert_eq!(problem.num_vertices(), 4);
        assert_eq!(problem.num_edges(), 4);
        assert_eq!(problem.num_vertices(), problem.graph().num_nodes());
        assert_eq!(problem.num_edges(), problem.graph().num_edges());
    }

    #[test]
    fn uncovered_edges_test() {
        let problem = triangle_with_tail();
        let three = problem.graph().node_of(&3).unwrap();
        let one = problem.graph().node_of(&1).unwrap();
        assert_eq!(problem.uncovered_edges(&FxHashSet::default()), 4);
        assert_eq!(problem.uncovered_edges(&vec![three].into_iter().collect()), 1);
        assert_eq!(problem.uncovered_edges(&vec![three, one].into_iter().collect()), 0);
        assert!(problem.is_vertex_cover(&[three, one]));
        assert!(!problem.is_vertex_cover(&[three]));
    }

    #[test]
    fn validate_solution_test() {
        let problem = triangle_with_tail();
        assert!(problem.validate_solution(&[1, 3]).is_ok());
        assert!(matches!(problem.validate_solution(&[3]), Err(ProcessingError::InvalidSolution(_))));
        assert!(matches!(problem.validate_solution(&[1, 3, 3]), Err(ProcessingError::InvalidSolution(_))));
        assert!(matches!(problem.validate_solution(&[1, 9]), Err(ProcessingError::UnknownVertex(_))));
    }

    #[test]
    fn write_solution_test() {
        let mut out = Vec::new();
        Problem::write_solution(&[1usize, 3], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n3\n");
    }
}
