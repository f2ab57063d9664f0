use std::io::Write;

use crate::graph::*;
use crate::postman::Augmentation;

/// produces a minimalistic DOT representation of the augmented multigraph; duplicate edges are red
pub trait DotWriter {
    fn try_write_dot<W: Write>(
        &self,
        augmentation: &Augmentation,
        writer: W,
    ) -> Result<(), std::io::Error>;
}

impl DotWriter for WeightedGraph {
    fn try_write_dot<W: Write>(
        &self,
        augmentation: &Augmentation,
        mut writer: W,
    ) -> Result<(), std::io::Error> {
        let colored_edges = self
            .edges()
            .iter()
            .map(|&e| (e, EdgeColor::Original))
            .chain(
                augmentation
                    .added_edges
                    .iter()
                    .map(|&e| (e, EdgeColor::Duplicate)),
            );

        write!(writer, "graph G {{ ")?;
        for u in self.vertices() {
            write!(writer, "v{u}; ")?;
        }
        for (WeightedEdge(u, v, w), c) in colored_edges {
            if c.is_duplicate() {
                write!(writer, "v{u}--v{v}[label={w},color=red,style=dashed]; ")?;
            } else {
                write!(writer, "v{u}--v{v}[label={w}]; ")?;
            }
        }
        writeln!(writer, r"}}")?;
        writer.flush()
    }
}
