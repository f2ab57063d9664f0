pub mod instance_reader;
pub use instance_reader::{GraphInstance, GraphInstanceReader};
pub mod instance_writer;
pub use instance_writer::InstanceWriter;

pub mod dot_writer;
pub use dot_writer::DotWriter;
pub mod route_writer;
pub use route_writer::RouteWriter;
