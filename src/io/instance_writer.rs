use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::GraphInstance;
use crate::graph::*;

/// Writes an instance in the format understood by [`super::GraphInstanceReader`]
pub trait InstanceWriter {
    fn try_write_instance<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl InstanceWriter for GraphInstance {
    fn try_write_instance<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "{} {} {}",
            self.graph.number_of_nodes(),
            self.graph.number_of_edges(),
            self.start
        )?;

        for WeightedEdge(u, v, w) in self.graph.edges() {
            writeln!(writer, "{u} {v} {w}")?;
        }

        writer.flush()
    }

    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_instance(writer)
    }
}
