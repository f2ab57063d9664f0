pub mod edge;
pub mod euler;
pub mod gnp;
pub mod multigraph;
pub mod shortest_paths;
pub mod weighted;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Weight = u64;

/// Largest number of nodes a route can be computed for. The distance and next-hop tables
/// hold `n * n` entries each, so this bounds them to a few hundred MiB.
pub const MAX_NODES: NumNodes = 1 << 12;

use std::ops::Range;

pub use edge::*;
pub use euler::*;
pub use gnp::*;
pub use multigraph::*;
pub use shortest_paths::*;
pub use weighted::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes. The range does not borrow self and hence may be
    /// used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph; parallel edges and loops are counted individually
    fn number_of_edges(&self) -> NumEdges;
}

/// Per-node edge counts of a (multi)graph
pub trait Degrees: GraphNodeOrder {
    /// Returns the number of edge endpoints at `u`; a loop contributes two.
    /// ** Panics if u >= n **
    fn degree_of(&self, u: Node) -> NumEdges;

    fn degrees(&self) -> impl Iterator<Item = NumEdges> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns all nodes with odd degree in ascending order
    fn odd_degree_nodes(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect()
    }
}
