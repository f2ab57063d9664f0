use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use ::log::{LevelFilter, info};
use postman::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "postman",
    about = "Shortest closed walk traversing every edge of a weighted undirected graph"
)]
struct Opts {
    /// Instance file: `nodes edges start` followed by `from to weight` per edge.
    /// Read from stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Ask for the instance value by value on the terminal
    #[structopt(long, conflicts_with = "instance")]
    interactive: bool,

    /// Write the report to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Emit the report as JSON
    #[structopt(long)]
    json: bool,

    /// Write the augmented multigraph in DOT format
    #[structopt(long)]
    dot: Option<PathBuf>,

    /// Fail if a shortest path between matched nodes cannot be reconstructed
    #[structopt(long)]
    strict: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_instance(opts: &Opts) -> anyhow::Result<GraphInstance> {
    if let Some(path) = &opts.instance {
        Ok(GraphInstance::try_read_instance_file(path)?)
    } else if opts.interactive {
        let stdin = std::io::stdin().lock();
        Ok(GraphInstance::try_read_interactive(stdin, std::io::stdout())?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(GraphInstance::try_read_instance(stdin)?)
    }
}

fn write_report(report: &RouteReport, opts: &Opts) -> anyhow::Result<()> {
    let write = |writer: &mut dyn Write| {
        if opts.json {
            report.try_write_json(writer)
        } else {
            report.try_write_text(writer)
        }
    };

    if let Some(path) = &opts.output {
        let mut writer = BufWriter::new(File::create(path)?);
        write(&mut writer)?;
        writer.flush()?;
    } else {
        write(&mut std::io::stdout().lock())?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let GraphInstance { graph, start } = load_instance(&opts)?;
    info!(
        "Read graph with {} nodes and {} edges; route starts at {start}",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    let policy = if opts.strict {
        BrokenPathPolicy::Fail
    } else {
        BrokenPathPolicy::Skip
    };

    let report = RouteInspection::new(&graph, start)?
        .with_broken_path_policy(policy)
        .solve()?;

    if let Some(path) = &opts.dot {
        let mut writer = BufWriter::new(File::create(path)?);
        graph.try_write_dot(&report.augmentation, &mut writer)?;
        writer.flush()?;
    }

    write_report(&report, &opts)?;

    Ok(())
}
