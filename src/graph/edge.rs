use super::*;
use serde::Serialize;

pub trait EdgeOps {
    fn normalized(&self) -> Self;
    fn is_loop(&self) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize)]
pub struct Edge(pub Node, pub Node);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

/// Distinguishes edges of the input from the copies inserted to make the graph Eulerian
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize)]
pub enum EdgeColor {
    Original,
    Duplicate,
}

impl EdgeColor {
    pub fn is_duplicate(&self) -> bool {
        *self == EdgeColor::Duplicate
    }
}

impl WeightedEdge {
    pub fn weight(&self) -> Weight {
        self.2
    }

    pub fn endpoints(&self) -> Edge {
        Edge(self.0, self.1)
    }
}

impl EdgeOps for Edge {
    fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl EdgeOps for WeightedEdge {
    fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
