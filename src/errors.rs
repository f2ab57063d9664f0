use std::error::Error;

use thiserror::Error;

use crate::graph::{INF, MAX_NODES, Node, NumNodes};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange {
        node: Node,
        number_of_nodes: NumNodes,
    },

    #[error("total edge weight must stay below {}", INF)]
    WeightOverflow,

    #[error("graph has {0} nodes; at most {max} are supported", max = MAX_NODES)]
    TooManyNodes(NumNodes),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchingError {
    /// Every graph has an even number of odd-degree nodes; anything else is a corrupted input
    #[error("cannot pair an odd number ({0}) of odd-degree nodes")]
    OddNumberOfVertices(usize),

    #[error("no perfect matching with finite cost exists; the graph is disconnected")]
    Infeasible,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    #[error("distance table is asymmetric at ({0}, {1})")]
    Asymmetric(Node, Node),

    #[error("distance from node {0} to itself is not zero")]
    NonZeroDiagonal(Node),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MultigraphError {
    #[error("node {0} has odd degree; no Eulerian circuit exists")]
    OddDegree(Node),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("matching failed: {0}")]
    Matching(#[from] MatchingError),

    #[error("cannot reconstruct a shortest path between matched nodes {from} and {to}")]
    BrokenPath { from: Node, to: Node },
}
