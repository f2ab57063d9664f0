//! All-pairs shortest paths via Floyd-Warshall.
//!
//! Parallel edges collapse to their minimum weight. Besides the distance table we keep a
//! next-hop table from which [`ShortestPaths::shortest_path`] reconstructs the node sequence
//! of a shortest path. Both tables are stored densely as `n * n` entries; the graphs we
//! process are small by construction.

use super::*;
use crate::errors::{DistanceError, InvariantCheck};
use log::trace;

/// Marker for unreachable pairs in the distance table. [`WeightedGraph::try_add_edge`] keeps
/// the total weight, and hence every finite distance, below it.
pub const INF: Weight = Weight::MAX / 2;

#[derive(Clone, Debug)]
pub struct ShortestPaths {
    number_of_nodes: NumNodes,
    dist: Vec<Weight>,
    next: Vec<Option<Node>>,
}

impl GraphNodeOrder for ShortestPaths {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl ShortestPaths {
    /// Computes all distances of `graph` in time O(n^3)
    pub fn compute(graph: &WeightedGraph) -> Self {
        let mut paths = Self::from_direct_edges(graph);
        paths.relax_all();
        paths
    }

    /// Tables that only contain the direct edges, i.e. before any relaxation
    fn from_direct_edges(graph: &WeightedGraph) -> Self {
        let n = graph.number_of_nodes();
        let mut paths = Self {
            number_of_nodes: n,
            dist: vec![INF; (n as usize) * (n as usize)],
            next: vec![None; (n as usize) * (n as usize)],
        };

        for u in graph.vertices() {
            let idx = paths.index(u, u);
            paths.dist[idx] = 0;
            paths.next[idx] = Some(u);
        }

        for edge in graph.edges() {
            if edge.is_loop() {
                continue;
            }

            let Edge(u, v) = edge.endpoints();
            let w = edge.weight();
            let (uv, vu) = (paths.index(u, v), paths.index(v, u));
            if w < paths.dist[uv] {
                paths.dist[uv] = w;
                paths.dist[vu] = w;
                paths.next[uv] = Some(v);
                paths.next[vu] = Some(u);
            }
        }

        paths
    }

    fn relax_all(&mut self) {
        let n = self.number_of_nodes;
        let mut improvements = 0usize;

        for k in 0..n {
            for i in 0..n {
                let ik = self.dist[self.index(i, k)];
                if ik >= INF {
                    continue;
                }

                for j in 0..n {
                    let kj = self.dist[self.index(k, j)];
                    if kj >= INF {
                        continue;
                    }

                    let ij = self.index(i, j);
                    let via_k = ik.saturating_add(kj);
                    if via_k < self.dist[ij] {
                        self.dist[ij] = via_k;
                        self.next[ij] = self.next[self.index(i, k)];
                        improvements += 1;
                    }
                }
            }
        }

        trace!("Floyd-Warshall on {n} nodes improved {improvements} entries");
    }

    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        (u as usize) * (self.number_of_nodes as usize) + v as usize
    }

    /// Returns the length of a shortest path from `u` to `v` or `None` if `v` is unreachable.
    /// ** Panics if u, v >= n **
    pub fn distance(&self, u: Node, v: Node) -> Option<Weight> {
        let d = self.dist[self.index(u, v)];
        (d < INF).then_some(d)
    }

    /// Returns the node following `u` on a shortest path towards `v`
    /// ** Panics if u, v >= n **
    pub fn next_hop(&self, u: Node, v: Node) -> Option<Node> {
        self.next[self.index(u, v)]
    }

    /// Reconstructs a shortest path from `u` to `v` (both endpoints included). Returns an empty
    /// path if `v` is unreachable from `u` or if the next-hop chain is broken.
    /// ** Panics if u, v >= n **
    pub fn shortest_path(&self, u: Node, v: Node) -> Vec<Node> {
        if u == v {
            return vec![u];
        }

        if self.next_hop(u, v).is_none() {
            return Vec::new();
        }

        let mut path = vec![u];
        let mut cur = u;
        while cur != v {
            match self.next_hop(cur, v) {
                Some(hop) if path.len() < self.len() => {
                    path.push(hop);
                    cur = hop;
                }
                _ => return Vec::new(),
            }
        }

        path
    }
}

impl InvariantCheck<DistanceError> for ShortestPaths {
    fn is_correct(&self) -> Result<(), DistanceError> {
        for u in self.vertices() {
            if self.dist[self.index(u, u)] != 0 {
                return Err(DistanceError::NonZeroDiagonal(u));
            }

            for v in u + 1..self.number_of_nodes {
                if self.dist[self.index(u, v)] != self.dist[self.index(v, u)] {
                    return Err(DistanceError::Asymmetric(u, v));
                }
            }
        }

        Ok(())
    }
}
