//! Mutable simple graph over the code coordinates with maximal-clique
//! enumeration, used by the subcode-recovery engine to cluster coordinate
//! co-occurrences into affine inner sets.

/// Undirected graph on nodes 0..n with u64-bitset adjacency.
///
/// All n nodes start present. Consumed cliques are removed with
/// [`CliqueGraph::remove_nodes`]; a later `add_edge` re-inserts its
/// endpoints (the threshold re-scan in the decomposition loop relies on
/// this).
pub struct CliqueGraph {
    n: usize,
    words: usize,
    active: Vec<u64>,
    adj: Vec<Vec<u64>>,
}

impl CliqueGraph {
    pub fn new(n: usize) -> Self {
        let words = (n + 63) / 64;
        let mut active = vec![!0u64; words];
        let rem = n & 63;
        if rem != 0 {
            if let Some(last) = active.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
        Self {
            n,
            words,
            active,
            adj: vec![vec![0u64; words]; n],
        }
    }

    #[inline]
    fn bit_set(set: &mut [u64], i: usize) {
        set[i / 64] |= 1u64 << (i & 63);
    }

    #[inline]
    fn bit_clear(set: &mut [u64], i: usize) {
        set[i / 64] &= !(1u64 << (i & 63));
    }

    #[inline]
    fn bit_get(set: &[u64], i: usize) -> bool {
        (set[i / 64] >> (i & 63)) & 1 == 1
    }

    pub fn add_edge(&mut self, i: usize, j: usize) {
        assert!(i < self.n && j < self.n, "node out of range");
        if i == j {
            return;
        }
        Self::bit_set(&mut self.adj[i], j);
        Self::bit_set(&mut self.adj[j], i);
        Self::bit_set(&mut self.active, i);
        Self::bit_set(&mut self.active, j);
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i < self.n && j < self.n && Self::bit_get(&self.adj[i], j)
    }

    /// Delete nodes and all incident edges.
    pub fn remove_nodes(&mut self, nodes: &[usize]) {
        for &v in nodes {
            if v >= self.n {
                continue;
            }
            Self::bit_clear(&mut self.active, v);
            let neighbours: Vec<usize> = iter_bits(&self.adj[v]).collect();
            for u in neighbours {
                Self::bit_clear(&mut self.adj[u], v);
            }
            self.adj[v].iter_mut().for_each(|w| *w = 0);
        }
    }

    /// All maximal cliques of the present nodes (Bron-Kerbosch with
    /// pivoting). Isolated present nodes come out as singleton cliques.
    pub fn maximal_cliques(&self) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        let p = self.active.clone();
        let x = vec![0u64; self.words];
        self.bron_kerbosch(&mut current, p, x, &mut out);
        out
    }

    fn bron_kerbosch(
        &self,
        current: &mut Vec<usize>,
        p: Vec<u64>,
        mut x: Vec<u64>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if is_empty(&p) && is_empty(&x) {
            out.push(current.clone());
            return;
        }
        // pivot u maximising |P ∩ N(u)| over P ∪ X
        let mut pivot = None;
        let mut best = 0usize;
        for u in iter_bits(&p).chain(iter_bits(&x)) {
            let deg = intersection_count(&p, &self.adj[u]);
            if pivot.is_none() || deg > best {
                pivot = Some(u);
                best = deg;
            }
        }
        let mut candidates = p.clone();
        if let Some(u) = pivot {
            for (c, a) in candidates.iter_mut().zip(&self.adj[u]) {
                *c &= !a;
            }
        }
        let mut p = p;
        for v in iter_bits(&candidates).collect::<Vec<_>>() {
            let np = intersect(&p, &self.adj[v]);
            let nx = intersect(&x, &self.adj[v]);
            current.push(v);
            self.bron_kerbosch(current, np, nx, out);
            current.pop();
            Self::bit_clear(&mut p, v);
            Self::bit_set(&mut x, v);
        }
    }
}

fn is_empty(set: &[u64]) -> bool {
    set.iter().all(|&w| w == 0)
}

fn intersect(a: &[u64], b: &[u64]) -> Vec<u64> {
    a.iter().zip(b).map(|(x, y)| x & y).collect()
}

fn intersection_count(a: &[u64], b: &[u64]) -> usize {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x & y).count_ones() as usize)
        .sum()
}

fn iter_bits(set: &[u64]) -> impl Iterator<Item = usize> + '_ {
    set.iter().enumerate().flat_map(|(wi, &w)| {
        let mut w = w;
        std::iter::from_fn(move || {
            if w == 0 {
                return None;
            }
            let b = w.trailing_zeros() as usize;
            w &= w - 1;
            Some(wi * 64 + b)
        })
    })
}
