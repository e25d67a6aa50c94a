//! One step of the Minder-Shokrollahi attack: from a generator equivalent
//! to RM(r,m), recover a basis of the subcode equivalent to RM(r-1,m) by
//! sampling minimum-weight codewords, shortening, and clustering the
//! coordinate co-occurrence structure of low-weight codewords into
//! affine inner sets via maximal cliques.

use std::collections::HashSet;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use super::error::AttackError;
use crate::codes::{rm, tools};
use crate::gf2::matrix::sample_columns;
use crate::gf2::{Gf2Matrix, Gf2Vector};
use crate::graph::CliqueGraph;

const COOCCURRENCE_THRESHOLD: u64 = 100;
const MAX_THRESHOLD_ITERATIONS: u64 = 1000;

pub struct MinderShokrollahi {
    r: usize,
    m: usize,
    d: usize,
    /// Supports of minimum-weight codewords already handed out; one cache
    /// per recovery instance so no codeword is sampled twice.
    used_supports: HashSet<Vec<usize>>,
    rng: StdRng,
    /// Cap on iterations of each generate-and-test sampling loop; the
    /// reference behaviour is an unbounded retry, bounded here so a
    /// miscalibrated instance surfaces as SearchExhausted instead of
    /// spinning forever.
    pub max_sample_attempts: u64,
    /// Cap on outer rounds (fresh minimum-weight codeword draws).
    pub max_rounds: u64,
}

impl MinderShokrollahi {
    pub fn new(r: usize, m: usize) -> Self {
        Self::with_seed(r, m, OsRng.next_u64())
    }

    pub fn with_seed(r: usize, m: usize, seed: u64) -> Self {
        assert!(r >= 1 && m > r, "need 1 <= r < m");
        Self {
            r,
            m,
            d: 1 << (m - r),
            used_supports: HashSet::new(),
            rng: StdRng::seed_from_u64(seed),
            max_sample_attempts: 1_000_000,
            max_rounds: 1000,
        }
    }

    /// Support of a not-previously-returned codeword of weight exactly
    /// d = 2^(m-r), found by scanning the rows of randomized information
    /// set bases of `generator`.
    pub fn min_weight_sample(&mut self, generator: &Gf2Matrix) -> Result<Vec<usize>, AttackError> {
        if let Some(support) = self.scan_for_weight(generator, self.d, self.d) {
            return Ok(support);
        }
        for _ in 0..self.max_sample_attempts {
            let cols = sample_columns(&mut self.rng, generator.ncols, generator.nrows());
            let gaussed = generator.gaussian_elimination(Some(&cols));
            if let Some(support) = self.scan_for_weight(&gaussed, self.d, self.d) {
                return Ok(support);
            }
        }
        Err(AttackError::SearchExhausted {
            what: "sampling a fresh minimum-weight codeword",
            attempts: self.max_sample_attempts,
        })
    }

    /// First row of `generator` with weight in [lo, hi] whose support is
    /// not yet in the cache; the support is recorded before returning.
    fn scan_for_weight(&mut self, generator: &Gf2Matrix, lo: usize, hi: usize) -> Option<Vec<usize>> {
        for row in &generator.rows {
            let wt = row.weight() as usize;
            if wt >= lo && wt <= hi {
                let support = row.support();
                if !self.used_supports.contains(&support) {
                    self.used_supports.insert(support.clone());
                    return Some(support);
                }
            }
        }
        None
    }

    /// Partition estimate of the shortened code's coordinates into
    /// 2^r - 1 disjoint inner sets of size d. An empty result means the
    /// clique search did not converge for this shortening and the caller
    /// should draw a fresh minimum-weight codeword.
    pub fn decompose_inner_sets(
        &mut self,
        generator: &Gf2Matrix,
    ) -> Result<Vec<Vec<usize>>, AttackError> {
        let n = 1usize << self.m;
        let cw_num = (80usize << self.m) >> 5;

        let eps = (1.0 - 2f64.powi(-(self.r as i32)))
            * (1.0 - 2f64.powi(self.r as i32 - 1) / self.d as f64).sqrt();
        let min_weight = self.d;
        let max_weight = (2.0 * self.d as f64 * eps).floor() as usize;

        let mut low_wt_supports: HashSet<Vec<usize>> = HashSet::new();
        let mut attempts = 0u64;
        while low_wt_supports.len() < cw_num {
            attempts += 1;
            if attempts > self.max_sample_attempts {
                return Err(AttackError::SearchExhausted {
                    what: "collecting distinct low-weight codewords",
                    attempts: self.max_sample_attempts,
                });
            }
            let cols = sample_columns(&mut self.rng, generator.ncols, generator.nrows());
            let randomized =
                Gf2Matrix::nonsingular(&mut self.rng, generator.nrows()).mul(generator);
            let gaussed = randomized.gaussian_elimination(Some(&cols));
            for row in &gaussed.rows {
                let wt = row.weight() as usize;
                if wt >= min_weight && wt <= max_weight {
                    low_wt_supports.insert(row.support());
                }
            }
        }

        // pair co-occurrence counts, scoped to this call
        let mut pair_ctrs = vec![0u64; n * n];
        for support in &low_wt_supports {
            for (a, &i) in support.iter().enumerate() {
                for &j in &support[a + 1..] {
                    pair_ctrs[i * n + j] += 1;
                }
            }
        }

        let mut graph = CliqueGraph::new(n);
        for iteration in 1..=MAX_THRESHOLD_ITERATIONS {
            for i in 0..n {
                for j in i + 1..n {
                    if pair_ctrs[i * n + j] * iteration >= COOCCURRENCE_THRESHOLD {
                        graph.add_edge(i, j);
                    }
                }
            }
            let inner_sets = self.extract_inner_sets(&mut graph);
            if !inner_sets.is_empty() {
                return Ok(inner_sets);
            }
        }
        Ok(Vec::new())
    }

    /// Greedy clique consumption: per pass, the first maximal clique whose
    /// size is a positive multiple of d is removed from the graph and cut
    /// into consecutive d-sized groups; success only when exactly
    /// 2^r - 1 groups accumulate. The first-clique policy matches the
    /// reference statistics and is kept as is.
    fn extract_inner_sets(&self, graph: &mut CliqueGraph) -> Vec<Vec<usize>> {
        let want = (1usize << self.r) - 1;
        let mut result: Vec<Vec<usize>> = Vec::new();
        loop {
            let mut found = false;
            for clique in graph.maximal_cliques() {
                if clique.len() >= self.d && clique.len() % self.d == 0 {
                    graph.remove_nodes(&clique);
                    for group in clique.chunks(self.d) {
                        result.push(group.to_vec());
                    }
                    found = true;
                    break;
                }
            }
            if result.len() == want {
                return result;
            }
            if !found {
                return Vec::new();
            }
        }
    }

    /// Recover a basis of the RM(r-1,m)-equivalent subcode of the code
    /// spanned by `generator`.
    pub fn attack(&mut self, generator: &Gf2Matrix) -> Result<Gf2Matrix, AttackError> {
        let n = 1usize << self.m;
        if generator.ncols != n {
            return Err(AttackError::InvalidParameter(format!(
                "generator has {} columns, expected 2^{} = {}",
                generator.ncols, self.m, n
            )));
        }
        let target_dim = rm::dimension(self.r - 1, self.m);
        let mut basis = Gf2Matrix::empty(n);
        let mut rounds = 0u64;
        while basis.nrows() < target_dim {
            rounds += 1;
            if rounds > self.max_rounds {
                return Err(AttackError::SearchExhausted {
                    what: "accumulating the subcode basis",
                    attempts: self.max_rounds,
                });
            }
            let min_weight_support = self.min_weight_sample(generator)?;
            let shortened = tools::shorten(generator, &min_weight_support);
            let inner_sets = self.decompose_inner_sets(&shortened)?;
            if inner_sets.is_empty() {
                continue;
            }
            let rows: Vec<Gf2Vector> = inner_sets
                .iter()
                .map(|set| {
                    let mut support = min_weight_support.clone();
                    support.extend_from_slice(set);
                    Gf2Vector::from_support(n, &support)
                })
                .collect();
            basis = tools::union(&basis, &Gf2Matrix::from_rows(rows));
        }
        Ok(basis)
    }
}
