use std::path::PathBuf;

use ::log::{LevelFilter, info};
use postman::{log::build_logger_for_verbosity, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use structopt::StructOpt;

/// Writes random G(n,p) instances, e.g. to benchmark the exact matching
#[derive(Debug, StructOpt)]
struct Opt {
    /// Directory the instances are written to
    #[structopt(short, long, default_value = "instances")]
    output: PathBuf,

    #[structopt(short, long, default_value = "10")]
    repeats: u32,

    #[structopt(short, long, default_value = "12")]
    nodes: NumNodes,

    /// Expected degree of each node
    #[structopt(short, long, default_value = "3.0")]
    avg_deg: f64,

    #[structopt(short, long, default_value = "100")]
    max_weight: Weight,

    /// Skip instances with more odd-degree nodes than this
    #[structopt(long, default_value = "16")]
    max_odd: usize,

    #[structopt(short, long, default_value = "1234")]
    seed: u64,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    anyhow::ensure!(opt.nodes > 1, "need at least two nodes");
    std::fs::create_dir_all(&opt.output)?;

    let mut rng = Pcg64Mcg::seed_from_u64(opt.seed);
    let p = (opt.avg_deg / (opt.nodes - 1) as f64).clamp(0.0, 1.0);

    let mut written = 0;
    let mut attempts = 0;
    while written < opt.repeats {
        attempts += 1;
        anyhow::ensure!(
            attempts <= 1000 * opt.repeats,
            "could not generate enough instances with at most {} odd nodes",
            opt.max_odd
        );

        let graph = WeightedGraph::random_weighted_gnp(&mut rng, opt.nodes, p, 1..=opt.max_weight);
        let odd = graph.odd_degree_nodes().len();
        if odd > opt.max_odd {
            continue;
        }

        let start = rng.gen_range(0..opt.nodes);
        let filename = opt.output.join(format!(
            "n{:>03}_m{:>04}_odd{odd:>02}_{written:>04}.txt",
            graph.number_of_nodes(),
            graph.number_of_edges(),
        ));

        GraphInstance { graph, start }.try_write_instance_file(&filename)?;
        info!("Wrote {}", filename.display());
        written += 1;
    }

    println!("Wrote {written} instances to {}", opt.output.display());
    Ok(())
}
