use crate::{errors::RouteError, exact::Matching, graph::*};
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

/// What to do if no shortest path can be reconstructed for a matched pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum BrokenPathPolicy {
    /// Leave the pair unrealized and continue; the resulting circuit will be incomplete
    #[default]
    Skip,
    /// Abort with [`RouteError::BrokenPath`]
    Fail,
}

/// Duplicate edges inserted into the working multigraph
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Augmentation {
    pub added_edges: Vec<WeightedEdge>,
    pub added_cost: Weight,
    pub skipped_pairs: Vec<(Node, Node)>,
}

impl Augmentation {
    pub fn number_of_added_edges(&self) -> NumEdges {
        self.added_edges.len() as NumEdges
    }
}

/// For every matched pair, walks along its shortest path and inserts a copy of each edge on it
/// into `multigraph`. The copy of edge {a, b} is charged with the cheapest direct edge between
/// a and b. As the endpoints of each path are exactly the matched nodes, their parity flips
/// while all inner nodes receive two additional edge endpoints.
pub fn augment(
    multigraph: &mut WorkingMultigraph,
    paths: &ShortestPaths,
    matching: &Matching,
    policy: BrokenPathPolicy,
) -> Result<Augmentation, RouteError> {
    let mut augmentation = Augmentation::default();

    for &(u, v) in &matching.pairs {
        let path = paths.shortest_path(u, v);
        if path.is_empty() {
            match policy {
                BrokenPathPolicy::Fail => return Err(RouteError::BrokenPath { from: u, to: v }),
                BrokenPathPolicy::Skip => {
                    warn!("No shortest path between matched nodes {u} and {v}; pair skipped");
                    augmentation.skipped_pairs.push((u, v));
                    continue;
                }
            }
        }

        debug!("Duplicate path {u} -> {v}: {path:?}");

        for (a, b) in path.into_iter().tuple_windows() {
            let w = paths
                .distance(a, b)
                .ok_or(RouteError::BrokenPath { from: u, to: v })?;

            multigraph.add_edge(a, b);
            augmentation.added_edges.push(WeightedEdge(a, b, w).normalized());
            augmentation.added_cost += w;
        }
    }

    Ok(augmentation)
}
