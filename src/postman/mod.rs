//! Route inspection (Chinese postman): the shortest closed walk from a start node that
//! traverses every edge at least once.
//!
//! The pipeline computes all-pairs shortest paths, pairs up the odd-degree nodes by an exact
//! minimum-weight perfect matching, duplicates the edges along the shortest path of each pair
//! and finally extracts an Eulerian circuit from the resulting multigraph.

pub mod augment;

pub use augment::*;

use crate::{
    errors::{GraphError, InvariantCheck, RouteError},
    exact::{Matching, minimum_weight_perfect_matching},
    graph::*,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::time::Instant;

/// The circuit does not contain the expected number of nodes; usually this means that some edges
/// are not reachable from the start node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CircuitMismatch {
    pub actual: usize,
    pub expected: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub start: Node,
    pub original_length: Weight,
    pub added_cost: Weight,
    pub matching: Matching,
    pub augmentation: Augmentation,
    pub route: Vec<Node>,
    pub total_length: Weight,
    pub mismatch: Option<CircuitMismatch>,
}

impl RouteReport {
    /// Number of edges of the augmented multigraph, i.e. the number of steps of a complete route
    pub fn number_of_route_edges(&self) -> NumEdges {
        self.number_of_edges + self.augmentation.number_of_added_edges()
    }

    pub fn is_complete(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Solver for a single instance. Each call to [`RouteInspection::solve`] builds its own working
/// structures; nothing is shared between runs.
pub struct RouteInspection<'a> {
    graph: &'a WeightedGraph,
    start: Node,
    policy: BrokenPathPolicy,
}

impl<'a> RouteInspection<'a> {
    /// Fails if `start` is not a node of `graph`
    pub fn new(graph: &'a WeightedGraph, start: Node) -> Result<Self, RouteError> {
        if graph.number_of_nodes() > MAX_NODES {
            return Err(GraphError::TooManyNodes(graph.number_of_nodes()).into());
        }
        let start = graph.check_node(start)?;
        Ok(Self {
            graph,
            start,
            policy: BrokenPathPolicy::default(),
        })
    }

    pub fn with_broken_path_policy(mut self, policy: BrokenPathPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn solve(&self) -> Result<RouteReport, RouteError> {
        let graph = self.graph;
        let timer = Instant::now();

        let paths = ShortestPaths::compute(graph);
        debug_assert!(paths.is_correct().is_ok());
        debug!(
            "All-pairs shortest paths on {} nodes computed in {}ms",
            graph.number_of_nodes(),
            timer.elapsed().as_millis()
        );

        let odds = graph.odd_degree_nodes();
        info!("Graph has {} nodes of odd degree", odds.len());

        let matching = minimum_weight_perfect_matching(&odds, &paths)?;
        info!(
            "Matched {} pairs with total cost {}",
            matching.len(),
            matching.cost
        );

        let mut multigraph = WorkingMultigraph::from_graph(graph);
        let augmentation = augment(&mut multigraph, &paths, &matching, self.policy)?;

        if let Err(e) = multigraph.is_correct() {
            warn!("Augmented multigraph is not Eulerian: {e}");
        }

        let route = euler_circuit(multigraph, self.start);

        let expected = (graph.number_of_edges() + augmentation.number_of_added_edges()) as usize + 1;
        let mismatch = (route.len() != expected).then(|| {
            warn!(
                "Route may be incomplete: it contains {} nodes, expected {expected}",
                route.len()
            );
            CircuitMismatch {
                actual: route.len(),
                expected,
            }
        });

        info!(
            "Route with {} steps computed in {}ms",
            route.len().saturating_sub(1),
            timer.elapsed().as_millis()
        );

        Ok(RouteReport {
            number_of_nodes: graph.number_of_nodes(),
            number_of_edges: graph.number_of_edges(),
            start: self.start,
            original_length: graph.total_weight(),
            added_cost: matching.cost,
            total_length: graph.total_weight().saturating_add(matching.cost),
            matching,
            augmentation,
            route,
            mismatch,
        })
    }
}
