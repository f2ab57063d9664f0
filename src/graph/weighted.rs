use super::*;
use crate::errors::GraphError;
use std::fmt;

/// Undirected weighted multigraph as read from the input. Parallel edges and loops are kept
/// individually; each of them contributes to the degrees and to the total weight.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    edges: Vec<WeightedEdge>,
    degrees: Vec<NumEdges>,
    total_weight: Weight,
}

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.degrees.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl Degrees for WeightedGraph {
    fn degree_of(&self, u: Node) -> NumEdges {
        self.degrees[u as usize]
    }
}

impl WeightedGraph {
    /// Creates an empty graph with n singleton nodes
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            edges: Vec::new(),
            degrees: vec![0; number_of_nodes as usize],
            total_weight: 0,
        }
    }

    pub fn from_weighted_edges(
        number_of_nodes: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(number_of_nodes);
        graph.add_edges(edges);
        graph
    }

    /// Returns `u` if it is a node of this graph
    pub fn check_node(&self, u: Node) -> Result<Node, GraphError> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }

    /// Adds the undirected edge {u, v} with weight `w`. Fails without modifying the graph
    /// if an endpoint is not a node or the total weight would reach [`INF`].
    ///
    /// No shortest distance exceeds the total weight, so keeping the latter below [`INF`]
    /// guarantees that every finite distance is distinguishable from "unreachable".
    pub fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<(), GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;

        self.total_weight = self
            .total_weight
            .checked_add(w)
            .filter(|&total| total < INF)
            .ok_or(GraphError::WeightOverflow)?;

        self.degrees[u as usize] += 1;
        self.degrees[v as usize] += 1;
        self.edges.push(WeightedEdge(u, v, w));

        Ok(())
    }

    /// Adds the undirected edge {u, v} with weight `w`.
    /// ** Panics if u, v >= n or the total weight reaches [`INF`] **
    pub fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        self.try_add_edge(u, v, w).unwrap();
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Returns the edges in insertion order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Sum of all edge weights, counting parallel edges individually
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

impl fmt::Debug for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} [", self.number_of_nodes())?;
        for WeightedEdge(u, v, w) in &self.edges {
            write!(f, "{u}-{v}:{w} ")?;
        }
        write!(f, "]")
    }
}
