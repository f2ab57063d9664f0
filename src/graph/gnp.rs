use crate::graph::*;
use rand::Rng;
use rand_distr::Geometric;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Reyni) graph
    /// The `G(n,p)` contains n nodes and each of the `n(n-1)/2` edges exists
    /// independently with probability `p`. Each edge receives a weight drawn
    /// uniformly from `weights`.
    fn random_weighted_gnp<R: Rng>(
        rng: &mut R,
        n: Node,
        p: f64,
        weights: std::ops::RangeInclusive<Weight>,
    ) -> Self;
}

impl GnpGenerator for WeightedGraph {
    fn random_weighted_gnp<R: Rng>(
        rng: &mut R,
        n: Node,
        p: f64,
        weights: std::ops::RangeInclusive<Weight>,
    ) -> Self {
        let mut result = Self::new(n);

        // indirection via vector as we need a &mut for rng and the weights also need rng
        let edges: Vec<_> = BernoulliSamplingRange::new(rng, 0, (n as i64) * (n as i64), p)
            .filter_map(|x| {
                let u = x / (n as i64);
                let v = x % (n as i64);
                (u < v).then_some((u as Node, v as Node))
            })
            .collect();

        for (u, v) in edges {
            let w = rng.gen_range(weights.clone());
            result.add_edge(u, v, w);
        }

        result
    }
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            // with p = 0 no element is ever sampled
            distr: (prob > 0.0).then(|| Geometric::new(prob).unwrap()),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let Some(distr) = self.distr.as_ref() else {
            self.current = self.end;
            return;
        };

        let skip = self.rng.sample(distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_bernoulli_range() {
        let rng = &mut Pcg64::seed_from_u64(42);

        // empty range
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 0, 1.0).count(), 0);

        // p=1
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 10, 1.0).count(), 10);

        // p=0
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 100, 0.0).count(), 0);
    }

    #[test]
    fn test_gnp() {
        let rng = &mut Pcg64::seed_from_u64(7);

        // generate multiple graphs of various densities and verify that the
        // expected number of edges is close to the expected value
        for p in [0.01, 0.1, 0.3] {
            let repeats = 100;
            let n = 60;

            let mean_edges = (0..repeats)
                .map(|_| {
                    WeightedGraph::random_weighted_gnp(rng, n, p, 1..=10).number_of_edges() as f64
                })
                .sum::<f64>()
                / repeats as f64;

            let expected = p * (n as f64) * ((n - 1) as f64) / 2.0;

            assert!((0.75 * expected..1.25 * expected).contains(&mean_edges));
        }
    }

    #[test]
    fn test_weights_in_range() {
        let rng = &mut Pcg64::seed_from_u64(3);
        let graph = WeightedGraph::random_weighted_gnp(rng, 30, 0.5, 2..=5);
        assert!(graph.number_of_edges() > 0);
        assert!(graph.edges().iter().all(|e| (2..=5).contains(&e.weight())));
        assert!(graph.edges().iter().all(|e| e.normalized() == *e && !e.is_loop()));
    }
}
