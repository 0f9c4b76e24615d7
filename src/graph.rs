//! Implementation of a simple, undirected graph data structure over caller-chosen vertex
//! identifiers. Vertices are mapped to dense node ids in insertion order and every query used by
//! the solvers works on those ids.

use crate::cust_error::{GraphError, ImportError};
use fxhash::{FxHashMap, FxHashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::io::BufRead;

/// An undirected edge between two node ids. The endpoints are stored in ascending order, so two
/// edges are equal iff they connect the same pair regardless of the order they were given in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Edge {
    src: usize,
    trg: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Edge { src: a, trg: b }
        } else {
            Edge { src: b, trg: a }
        }
    }

    /// Returns both endpoints, smaller id first.
    pub fn vertexes(&self) -> (usize, usize) {
        (self.src, self.trg)
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.src == node {
            Some(self.trg)
        } else if self.trg == node {
            Some(self.src)
        } else {
            None
        }
    }
}

/// A simple undirected graph without self-loops or parallel edges.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    labels: Vec<V>,
    ids: FxHashMap<V, usize>,
    adj_list: Vec<FxHashSet<usize>>,
    incidence: Vec<Vec<usize>>,
    edge_list: Vec<Edge>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            labels: Vec::new(),
            ids: FxHashMap::default(),
            adj_list: Vec::new(),
            incidence: Vec::new(),
            edge_list: Vec::new(),
        }
    }
}

// Construction
impl<V: Clone + Eq + Hash + Debug> Graph<V> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge list. Vertices are numbered in order of first appearance.
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Inserts `vertex` if it is not yet known. Returns its node id either way.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(id) = self.ids.get(&vertex) {
            return *id
        }
        let id = self.labels.len();
        self.ids.insert(vertex.clone(), id);
        self.labels.push(vertex);
        self.adj_list.push(FxHashSet::default());
        self.incidence.push(Vec::new());
        id
    }

    /// Inserts the edge `{u, v}`, adding missing endpoints first.
    /// Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(format!("{:?}", u)))
        }
        let src = self.add_vertex(u);
        let trg = self.add_vertex(v);
        if !self.adj_list[src].insert(trg) {
            return Ok(false)
        }
        self.adj_list[trg].insert(src);
        let id = self.edge_list.len();
        self.edge_list.push(Edge::new(src, trg));
        self.incidence[src].push(id);
        self.incidence[trg].push(id);
        Ok(true)
    }

    /// Returns the node id of `vertex`, if present.
    pub fn node_of(&self, vertex: &V) -> Option<usize> {
        self.ids.get(vertex).copied()
    }
}

// Static functions
impl<V> Graph<V> {

    /// Returns an `Iterator` over all node ids in insertion order.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.labels.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_list.len()
    }

    /// Returns the identifier the caller gave to `node`.
    pub fn label(&self, node: usize) -> &V {
        &self.labels[node]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edge_list
    }

    pub fn edge(&self, id: usize) -> Edge {
        self.edge_list[id]
    }

    /// Returns the ids of all edges that have `node` as an endpoint.
    pub fn incident_edges(&self, node: usize) -> &[usize] {
        &self.incidence[node]
    }

    pub fn neighbors(&self, node: usize) -> &FxHashSet<usize> {
        &self.adj_list[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Returns the open neighborhood of `nodes`: every neighbor of a node in `nodes` that is not
    /// itself in `nodes`, without repetition, in order of discovery.
    pub fn open_neighborhood(&self, nodes: &[usize]) -> Vec<usize> {
        let members: FxHashSet<usize> = nodes.iter().copied().collect();
        let mut seen = FxHashSet::default();
        nodes.iter()
            .flat_map(|node| self.neighbors(*node).iter().copied())
            .filter(|neigh| !members.contains(neigh) && seen.insert(*neigh))
            .collect()
    }

    /// Returns the set of all nodes reachable from `node`, including `node`.
    pub fn reachable(&self, node: usize) -> FxHashSet<usize> {
        let mut reached = FxHashSet::default();
        let mut stack = vec![node];
        while let Some(next) = stack.pop() {
            if !reached.insert(next) {
                continue
            }
            stack.extend(self.neighbors(next).iter().filter(|n| !reached.contains(*n)));
        }
        reached
    }

    /// Checks if every edge has at least one endpoint in `nodes`.
    pub fn covers(&self, nodes: &FxHashSet<usize>) -> bool {
        self.edge_list
            .iter()
            .all(|edge| nodes.contains(&edge.src) || nodes.contains(&edge.trg))
    }
}

impl Graph<usize> {

    /// Reads a `.gr` input and creates a `Graph` whose vertex identifiers are the 1-based
    /// numbers used in the file.
    ///
    /// Edge lines naming a vertex outside `1..=n` are rejected as malformed, and self-loops are
    /// rejected by `add_edge`.
    pub fn read_gr<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let (lines, _): (Vec<_>, Vec<_>) = gr.lines()
            .partition(|l| {
                if let Ok(line) = l {
                    // ignore empty lines and comment lines
                    !line.starts_with("c ") && !line.is_empty()
                } else {
                    true
                }
            });
        let mut lines = lines.into_iter();
        // p td <n> <m>
        let (n, m) = {
            let line = lines.next().ok_or(ImportError::InputMalformedError)??;
            let mut s = line.split_whitespace();
            if let Some("p") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            if let Some("td") = s.next() {} else { return Err(ImportError::InputMalformedError); }
            let n: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let m: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            (n, m)
        };
        let mut graph = Graph::new();
        for vertex in 1..=n {
            graph.add_vertex(vertex);
        }
        let mut num_edges = 0;
        for line in lines {
            // <src> <trg>
            let line = line?;
            let mut s = line.split_whitespace();
            let src: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            let trg: usize = s.next().ok_or(ImportError::InputMalformedError)?.parse()?;
            if s.next().is_some() { return Err(ImportError::InputMalformedError); }
            if src == 0 || trg == 0 || src > n || trg > n {
                return Err(ImportError::InputMalformedError);
            }
            graph.add_edge(src, trg)?;
            num_edges += 1;
        }
        if num_edges != m { return Err(ImportError::InputMalformedError); }
        Ok(graph)
    }
}
