//! Reads route-inspection instances.
//!
//! The format consists of whitespace separated tokens; line breaks carry no meaning. The header
//! `nodes edges start` is followed by `edges` triples `from to weight`. Nodes are 0-based.
//! Lines starting with `#` are comments.
//!
//! ```text
//! # path with three nodes
//! 3 2 0
//! 0 1 1
//! 1 2 1
//! ```

use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines, Write},
    path::Path,
};

use crate::graph::{
    GraphNodeOrder, MAX_NODES, Node, NumEdges, NumNodes, Weight, WeightedGraph,
};

pub type Result<T> = std::io::Result<T>;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($tokens : expr, $name : expr) => {{
        let next = $tokens.next_token()?;
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of input when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

/// A graph together with the node at which the route starts and ends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphInstance {
    pub graph: WeightedGraph,
    pub start: Node,
}

pub trait GraphInstanceReader: Sized {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Asks for each value on `prompts` before reading it from `reader`. In contrast to
    /// [`GraphInstanceReader::try_read_instance`], input after the last edge is not consumed.
    fn try_read_interactive<R: BufRead, W: Write>(reader: R, prompts: W) -> Result<Self>;
}

impl GraphInstanceReader for GraphInstance {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = TokenReader::new(reader);
        let instance = read_instance(&mut tokens, |_| Ok(()))?;

        raise_error_unless!(
            tokens.next_token()?.is_none(),
            ErrorKind::InvalidData,
            "Unexpected data after the last edge"
        );

        Ok(instance)
    }

    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_instance(buf_reader)
    }

    fn try_read_interactive<R: BufRead, W: Write>(reader: R, mut prompts: W) -> Result<Self> {
        let mut tokens = TokenReader::new(reader);
        read_instance(&mut tokens, |prompt| {
            match prompt {
                Prompt::Header => {
                    write!(prompts, "Enter number of nodes, number of edges and start node: ")?
                }
                Prompt::Edge(i) => write!(prompts, "Enter endpoints and weight of edge {i}: ")?,
            }
            prompts.flush()
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prompt {
    Header,
    /// 1-based index of the edge
    Edge(NumEdges),
}

fn read_instance<R: BufRead, F: FnMut(Prompt) -> Result<()>>(
    tokens: &mut TokenReader<R>,
    mut prompt: F,
) -> Result<GraphInstance> {
    prompt(Prompt::Header)?;
    let number_of_nodes: NumNodes = parse_next_value!(tokens, "Header>Number of nodes");
    let number_of_edges: NumEdges = parse_next_value!(tokens, "Header>Number of edges");
    let start: Node = parse_next_value!(tokens, "Header>Start node");

    raise_error_unless!(
        number_of_nodes <= MAX_NODES,
        ErrorKind::InvalidData,
        format!("{number_of_nodes} nodes exceed the supported maximum of {MAX_NODES}")
    );

    let mut graph = WeightedGraph::new(number_of_nodes);
    raise_error_unless!(
        start < graph.number_of_nodes(),
        ErrorKind::InvalidData,
        format!("Start node {start} is out of range for {number_of_nodes} nodes")
    );

    for i in 1..=number_of_edges {
        prompt(Prompt::Edge(i))?;
        let from: Node = parse_next_value!(tokens, format!("Edge {i}>Source node"));
        let to: Node = parse_next_value!(tokens, format!("Edge {i}>Target node"));
        let weight: Weight = parse_next_value!(tokens, format!("Edge {i}>Weight"));

        if let Err(e) = graph.try_add_edge(from, to, weight) {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Invalid edge {i}: {e}"),
            ));
        }
    }

    Ok(GraphInstance { graph, start })
}

/// Splits the input into whitespace separated tokens; reads lines only on demand
struct TokenReader<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim_start().starts_with('#') => continue,
                Some(Ok(line)) => self
                    .pending
                    .extend(line.split_whitespace().map(String::from)),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{Degrees, GraphEdgeOrder, WeightedEdge};
    use itertools::Itertools;
    use std::io::Write;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str = "# TEST\n 3  2 0 \n0 1 1\n# TEST\n1 2\n 1";
        let instance = GraphInstance::try_read_instance(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(instance.start, 0);
        assert_eq!(instance.graph.number_of_nodes(), 3);
        assert_eq!(instance.graph.number_of_edges(), 2);
        assert_eq!(
            instance.graph.edges(),
            [WeightedEdge(0, 1, 1), WeightedEdge(1, 2, 1)]
        );
        assert_eq!(instance.graph.total_weight(), 2);
        assert_eq!(instance.graph.degrees().collect_vec(), [1, 2, 1]);
    }

    #[test]
    fn single_line() {
        let instance = GraphInstance::try_read_instance("3 3 2 0 1 1 1 2 1 2 0 1".as_bytes())
            .unwrap();
        assert_eq!(instance.start, 2);
        assert_eq!(instance.graph.number_of_edges(), 3);
    }

    fn error_of(input: &str) -> String {
        let err = GraphInstance::try_read_instance(input.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        err.to_string()
    }

    #[test]
    fn malformed() {
        assert!(error_of("").contains("Number of nodes"));
        assert!(error_of("3 x 0").contains("Number of edges"));
        assert!(error_of("3 1 0 0 1").contains("Edge 1>Weight"));
        assert!(error_of("3 1 0 0 -1 2").contains("Edge 1>Target node"));
        assert!(error_of("3 1 3 0 1 2").contains("Start node 3"));
        assert!(error_of("3 1 0 0 5 2").contains("Invalid edge 1"));
        assert!(error_of("3 1 0 0 1 2 7").contains("after the last edge"));
        assert!(error_of("1000000 0 0").contains("supported maximum"));
        assert!(error_of(&format!("{} 0 0", MAX_NODES + 1)).contains("supported maximum"));
        assert!(error_of("2 2 0 0 1 9223372036854775807 0 1 1").contains("Invalid edge 1"));
        assert!(error_of("2 2 0 0 1 9223372036854775806 0 1 1").contains("Invalid edge 2"));
    }

    #[test]
    fn largest_header() {
        let instance =
            GraphInstance::try_read_instance(format!("{MAX_NODES} 0 0").as_bytes()).unwrap();
        assert_eq!(instance.graph.number_of_nodes(), MAX_NODES);
    }

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "4 4 1\n0 1 3\n1 2 4\n2 3 5\n3 0 6").unwrap();

        let instance = GraphInstance::try_read_instance_file(file.path()).unwrap();
        assert_eq!(instance.start, 1);
        assert_eq!(instance.graph.total_weight(), 18);
        assert!(instance.graph.odd_degree_nodes().is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GraphInstance::try_read_instance_file(dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn interactive() {
        let input = "3 2 0\n0 1 1\n1 2 1\nthis line is never read\n";
        let mut prompts: Vec<u8> = Vec::new();
        let instance = GraphInstance::try_read_interactive(input.as_bytes(), &mut prompts).unwrap();

        assert_eq!(instance.graph.number_of_edges(), 2);
        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.starts_with("Enter number of nodes, number of edges and start node: "));
        assert!(prompts.contains("Enter endpoints and weight of edge 1: "));
        assert!(prompts.ends_with("Enter endpoints and weight of edge 2: "));
    }
}
