use std::io::Write;

use itertools::Itertools;

use crate::postman::RouteReport;

pub trait RouteWriter {
    /// Human readable summary ending with the route and its total length
    fn try_write_text<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    /// The complete report as a single JSON object
    fn try_write_json<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

impl RouteWriter for RouteReport {
    fn try_write_text<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "Nodes: {}  Edges: {}  Start: {}",
            self.number_of_nodes, self.number_of_edges, self.start
        )?;
        writeln!(writer, "Original weight: {}", self.original_length)?;

        if !self.matching.is_empty() {
            writeln!(
                writer,
                "Matched pairs: {}",
                self.matching
                    .pairs
                    .iter()
                    .map(|(u, v)| format!("{u}-{v}"))
                    .join(" ")
            )?;
        }
        writeln!(writer, "Added cost: {}", self.added_cost)?;

        if let Some(mismatch) = self.mismatch {
            writeln!(
                writer,
                "Warning: route may be incomplete ({} nodes, expected {})",
                mismatch.actual, mismatch.expected
            )?;
        }

        writeln!(writer, "Route: {}", self.route.iter().join(" -> "))?;
        writeln!(writer, "Total length: {}", self.total_length)?;
        writer.flush()
    }

    fn try_write_json<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()
    }
}
