use super::{errors::InvariantCheck, graph::*};
use itertools::Itertools as _;
use rand::Rng;
use std::io::{self, Write};

/// Endless stream of random multigraphs with `n` nodes. Densities vary with the position in the
/// stream; some graphs contain parallel edges, loops and zero-weight edges.
pub fn generate_random_graph_stream(
    rng: &mut impl Rng,
    n: NumNodes,
) -> impl Iterator<Item = WeightedGraph> + '_ {
    (0..).map(move |i| {
        let p = [0.1, 0.2, 0.35, 0.6][i % 4];
        let mut graph = WeightedGraph::random_weighted_gnp(&mut *rng, n, p, 0..=9);

        for _ in 0..i % 3 {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            graph.add_edge(u, v, rng.gen_range(1..=20));
        }

        graph
    })
}

/// Cost of a minimum-weight perfect matching computed by a dynamic program over subsets.
/// Returns `None` if no perfect matching with finite cost exists.
pub fn brute_force_matching_cost(nodes: &[Node], paths: &ShortestPaths) -> Option<Weight> {
    let k = nodes.len();
    assert!(k <= 20);
    if k % 2 == 1 {
        return None;
    }

    let full = (1usize << k) - 1;
    let mut best: Vec<Option<Weight>> = vec![None; full + 1];
    best[0] = Some(0);

    for mask in 0..full {
        let Some(cost) = best[mask] else {
            continue;
        };

        let i = (0..k).find(|&i| mask & (1 << i) == 0).unwrap();
        for j in (i + 1..k).filter(|&j| mask & (1 << j) == 0) {
            if let Some(d) = paths.distance(nodes[i], nodes[j]) {
                let next = mask | (1 << i) | (1 << j);
                let candidate = cost + d;
                if best[next].is_none_or(|c| candidate < c) {
                    best[next] = Some(candidate);
                }
            }
        }
    }

    best[full]
}

/// Asserts that `walk` starts and ends in `start`, that each step uses a distinct edge instance
/// of `multigraph` and that no unused edge remains at any node visited by the walk.
pub fn assert_is_closed_walk_over(walk: &[Node], start: Node, multigraph: &WorkingMultigraph) {
    assert_eq!(walk.first(), Some(&start), "walk: {walk:?}");
    assert_eq!(walk.last(), Some(&start), "walk: {walk:?}");

    let mut remaining = multigraph.clone();
    for (&u, &v) in walk.iter().tuple_windows() {
        assert!(
            remaining.try_remove_edge(u, v),
            "step {u} -> {v} does not use an unused edge; walk: {walk:?}"
        );
    }

    for &u in walk {
        assert_eq!(
            remaining.degree_of(u),
            0,
            "node {u} still has unused edges; walk: {walk:?}"
        );
    }

    assert!(remaining.is_correct().is_ok());
}

/// Sink that rejects every write, e.g. a file on a full disk
pub struct RejectingWriter;

impl Write for RejectingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("no space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
