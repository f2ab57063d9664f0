//! Exact minimum-weight perfect matching of the odd-degree nodes.
//!
//! Pairing costs are shortest-path distances. We enumerate all perfect pairings by
//! backtracking: the first unpaired node is paired with each later unpaired node at finite
//! distance. A branch is abandoned as soon as its partial cost reaches the best complete
//! pairing found so far, which keeps the search exact. The running time is exponential in
//! the number of odd nodes, which is assumed to be small.

use crate::{errors::MatchingError, graph::*};
use log::{debug, trace};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Matching {
    /// Sum of the distances of all pairs
    pub cost: Weight,
    /// Pairs in the order they were fixed; the first entry of each pair precedes the second in
    /// the input order of the nodes
    pub pairs: Vec<(Node, Node)>,
}

impl Matching {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Computes a perfect matching of `nodes` with minimum total distance according to `paths`.
///
/// Fails with [`MatchingError::OddNumberOfVertices`] if `nodes` has odd cardinality and with
/// [`MatchingError::Infeasible`] if every perfect matching contains an unreachable pair.
pub fn minimum_weight_perfect_matching(
    nodes: &[Node],
    paths: &ShortestPaths,
) -> Result<Matching, MatchingError> {
    if nodes.len() % 2 == 1 {
        return Err(MatchingError::OddNumberOfVertices(nodes.len()));
    }

    if nodes.is_empty() {
        return Ok(Matching::default());
    }

    let mut search = MatchingSearch {
        nodes,
        paths,
        used: vec![false; nodes.len()],
        current: Vec::with_capacity(nodes.len() / 2),
        best: None,
        branches: 0,
    };
    search.recurse(0, 0);

    debug!(
        "Matching search over {} odd nodes explored {} branches",
        nodes.len(),
        search.branches
    );

    search.best.ok_or(MatchingError::Infeasible)
}

struct MatchingSearch<'a> {
    nodes: &'a [Node],
    paths: &'a ShortestPaths,
    used: Vec<bool>,
    current: Vec<(Node, Node)>,
    best: Option<Matching>,
    branches: u64,
}

impl MatchingSearch<'_> {
    fn best_cost(&self) -> Option<Weight> {
        self.best.as_ref().map(|m| m.cost)
    }

    fn recurse(&mut self, first_candidate: usize, cost: Weight) {
        self.branches += 1;

        if self.best_cost().is_some_and(|best| cost >= best) {
            return;
        }

        let Some(i) = (first_candidate..self.nodes.len()).find(|&i| !self.used[i]) else {
            trace!("Found perfect matching with cost {cost}");
            self.best = Some(Matching {
                cost,
                pairs: self.current.clone(),
            });
            return;
        };

        let u = self.nodes[i];
        self.used[i] = true;

        for j in i + 1..self.nodes.len() {
            if self.used[j] {
                continue;
            }

            let v = self.nodes[j];
            let Some(d) = self.paths.distance(u, v) else {
                continue;
            };

            self.used[j] = true;
            self.current.push((u, v));

            self.recurse(i + 1, cost.saturating_add(d));

            self.current.pop();
            self.used[j] = false;
        }

        self.used[i] = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{brute_force_matching_cost, generate_random_graph_stream};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn solve(graph: &WeightedGraph) -> Result<Matching, MatchingError> {
        let paths = ShortestPaths::compute(graph);
        minimum_weight_perfect_matching(&graph.odd_degree_nodes(), &paths)
    }

    #[test]
    fn empty() {
        let graph = WeightedGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert_eq!(solve(&graph), Ok(Matching::default()));
    }

    #[test]
    fn path() {
        let graph = WeightedGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, 1)]);
        let matching = solve(&graph).unwrap();
        assert_eq!(matching.cost, 2);
        assert_eq!(matching.pairs, [(0, 2)]);
    }

    #[test]
    fn picks_cheaper_pairing() {
        // K4: every node has degree three; the two cheap diagonals form the optimum
        let graph = WeightedGraph::from_weighted_edges(
            4,
            [(0, 1, 5), (0, 2, 1), (0, 3, 5), (1, 2, 5), (1, 3, 1), (2, 3, 5)],
        );
        assert_eq!(graph.odd_degree_nodes(), [0, 1, 2, 3]);

        let matching = solve(&graph).unwrap();
        assert_eq!(matching.cost, 2);
        assert_eq!(matching.pairs, [(0, 2), (1, 3)]);
    }

    #[test]
    fn six_odd_nodes() {
        // two halves {0, 1, 4} and {2, 3, 5} joined by the expensive edge 1-2;
        // one pair has to cross, and every optimal matching costs 16
        let graph = WeightedGraph::from_weighted_edges(
            6,
            [(0, 1, 1), (1, 2, 10), (2, 3, 1), (1, 4, 2), (2, 5, 2)],
        );
        assert_eq!(graph.odd_degree_nodes(), [0, 1, 2, 3, 4, 5]);

        let matching = solve(&graph).unwrap();
        assert_eq!(matching.cost, 16);
        assert_eq!(matching.len(), 3);
    }

    #[test]
    fn odd_number_of_nodes() {
        let graph = WeightedGraph::from_weighted_edges(3, [(0, 1, 1), (1, 2, 1)]);
        let paths = ShortestPaths::compute(&graph);
        assert_eq!(
            minimum_weight_perfect_matching(&[0, 1, 2], &paths),
            Err(MatchingError::OddNumberOfVertices(3))
        );
    }

    #[test]
    fn disconnected_odd_nodes() {
        // odd nodes 0 and 3 are connected via the edge 0-3
        let graph =
            WeightedGraph::from_weighted_edges(4, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (0, 3, 1)]);
        assert_eq!(solve(&graph).unwrap().pairs, [(0, 3)]);

        // two components, each of them pairs up internally
        let graph =
            WeightedGraph::from_weighted_edges(4, [(0, 1, 1), (2, 3, 1), (3, 2, 1), (2, 3, 1)]);
        assert_eq!(solve(&graph).unwrap().cost, 2);

        // node 3 cannot reach node 0
        let graph = WeightedGraph::from_weighted_edges(4, [(0, 1, 1), (1, 2, 1), (3, 3, 1)]);
        let paths = ShortestPaths::compute(&graph);
        assert_eq!(
            minimum_weight_perfect_matching(&[0, 3], &paths),
            Err(MatchingError::Infeasible)
        );
        assert_eq!(
            minimum_weight_perfect_matching(&[0, 2, 3, 1], &paths),
            Err(MatchingError::Infeasible)
        );
    }

    #[test]
    fn random_against_brute_force() {
        let mut rng = Pcg64::seed_from_u64(0xfeed);
        let mut feasible = 0;
        for graph in generate_random_graph_stream(&mut rng, 9).take(500) {
            let odds = graph.odd_degree_nodes();
            let paths = ShortestPaths::compute(&graph);
            let expected = brute_force_matching_cost(&odds, &paths);

            match minimum_weight_perfect_matching(&odds, &paths) {
                Ok(matching) => {
                    feasible += 1;
                    assert_eq!(Some(matching.cost), expected, "{graph:?}");

                    let matched = matching
                        .pairs
                        .iter()
                        .flat_map(|&(u, v)| [u, v])
                        .sorted()
                        .collect_vec();
                    assert_eq!(matched, odds, "each odd node must be matched exactly once");

                    let sum: Weight = matching
                        .pairs
                        .iter()
                        .map(|&(u, v)| paths.distance(u, v).unwrap())
                        .sum();
                    assert_eq!(sum, matching.cost);
                }
                Err(e) => {
                    assert_eq!(e, MatchingError::Infeasible);
                    assert_eq!(expected, None, "{graph:?}");
                }
            }
        }

        assert!(feasible > 50);
    }
}
