use super::*;
use crate::errors::{InvariantCheck, MultigraphError};
use std::collections::BTreeMap;

/// Ordered multiset of the unused endpoints adjacent to a node
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Neighborhood {
    counts: BTreeMap<Node, NumEdges>,
    degree: NumEdges,
}

impl Neighborhood {
    fn insert(&mut self, v: Node) {
        *self.counts.entry(v).or_insert(0) += 1;
        self.degree += 1;
    }

    fn try_remove(&mut self, v: Node) -> bool {
        match self.counts.get_mut(&v) {
            None => false,
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&v);
                }
                self.degree -= 1;
                true
            }
        }
    }

    fn first(&self) -> Option<Node> {
        self.counts.keys().next().copied()
    }
}

/// Mutable multigraph on which the Eulerian circuit is computed. It starts as a copy of the
/// input edges, receives duplicate edges during augmentation and is then consumed edge by edge
/// by [`euler_circuit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingMultigraph {
    adj: Vec<Neighborhood>,
    number_of_edges: NumEdges,
}

impl GraphNodeOrder for WorkingMultigraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for WorkingMultigraph {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl Degrees for WorkingMultigraph {
    fn degree_of(&self, u: Node) -> NumEdges {
        self.adj[u as usize].degree
    }
}

impl WorkingMultigraph {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
        }
    }

    /// Copies all edges of `graph`, including parallel edges and loops
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let mut multigraph = Self::new(graph.number_of_nodes());
        for edge in graph.edges() {
            let Edge(u, v) = edge.endpoints();
            multigraph.add_edge(u, v);
        }
        multigraph
    }

    /// Inserts one more instance of the undirected edge {u, v}. A loop adds two to the degree of u.
    /// ** Panics if u, v >= n **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert!(v < self.number_of_nodes());
        self.adj[u as usize].insert(v);
        self.adj[v as usize].insert(u);
        self.number_of_edges += 1;
    }

    /// Removes one instance of the undirected edge {u, v}; returns false if there is none.
    /// ** Panics if u, v >= n **
    pub fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        if !self.adj[u as usize].try_remove(v) {
            return false;
        }

        let removed_other = self.adj[v as usize].try_remove(u);
        debug_assert!(removed_other);
        self.number_of_edges -= 1;
        true
    }

    /// Returns the smallest endpoint of an unused edge at `u`
    /// ** Panics if u >= n **
    pub fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.adj[u as usize].first()
    }

    /// Number of unused instances of the edge {u, v}
    pub fn multiplicity(&self, u: Node, v: Node) -> NumEdges {
        let count = self.adj[u as usize].counts.get(&v).copied().unwrap_or(0);
        if u == v { count / 2 } else { count }
    }

    /// Returns all remaining edges as normalized pairs, each instance reported once
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.adj[u as usize]
                .counts
                .keys()
                .filter(move |&&v| u <= v)
                .flat_map(move |&v| (0..self.multiplicity(u, v)).map(move |_| Edge(u, v)))
        })
    }
}

impl InvariantCheck<MultigraphError> for WorkingMultigraph {
    /// Succeeds iff every node has even degree, i.e. each connected component is Eulerian
    fn is_correct(&self) -> Result<(), MultigraphError> {
        match self.vertices().find(|&u| self.degree_of(u) % 2 == 1) {
            Some(u) => Err(MultigraphError::OddDegree(u)),
            None => Ok(()),
        }
    }
}
