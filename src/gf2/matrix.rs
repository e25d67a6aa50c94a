use super::vector::Gf2Vector;
use rand::{Rng, RngCore};

/// Binary matrix stored as bit-packed rows.
///
/// Used both as a generator matrix (rows = basis of a code, kept linearly
/// independent by the callers via [`Gf2Matrix::echelon_basis`]) and as a
/// plain linear map (permutation, nonsingular scrambler).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf2Matrix {
    pub rows: Vec<Gf2Vector>,
    pub ncols: usize,
}

impl Gf2Matrix {
    /// Matrix with no rows over a coordinate space of `ncols` columns.
    pub fn empty(ncols: usize) -> Self {
        Self {
            rows: Vec::new(),
            ncols,
        }
    }

    pub fn from_rows(rows: Vec<Gf2Vector>) -> Self {
        let ncols = rows.first().map(|r| r.n).unwrap_or(0);
        for row in &rows {
            assert_eq!(row.n, ncols, "rows must share one length");
        }
        Self { rows, ncols }
    }

    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| Gf2Vector::from_support(n, &[i]))
            .collect();
        Self { rows, ncols: n }
    }

    /// Uniformly random k x n matrix.
    pub fn random<R: RngCore>(rng: &mut R, k: usize, n: usize) -> Self {
        let rows = (0..k)
            .map(|_| {
                let mut v = Gf2Vector::zero(n);
                for w in v.words.iter_mut() {
                    *w = rng.next_u64();
                }
                v.mask_tail();
                v
            })
            .collect();
        Self { rows, ncols: n }
    }

    /// Random invertible n x n matrix by rejection sampling; a uniformly
    /// random binary matrix is nonsingular with probability > 0.288, so
    /// the loop terminates after a handful of draws.
    pub fn nonsingular<R: RngCore>(rng: &mut R, n: usize) -> Self {
        loop {
            let m = Self::random(rng, n, n);
            if m.rank() == n {
                return m;
            }
        }
    }

    /// Permutation matrix with P[i][perm[i]] = 1.
    pub fn permutation(perm: &[usize]) -> Self {
        let n = perm.len();
        let rows = perm
            .iter()
            .map(|&j| {
                assert!(j < n, "permutation image out of range");
                Gf2Vector::from_support(n, &[j])
            })
            .collect();
        Self { rows, ncols: n }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, i: usize) -> &Gf2Vector {
        &self.rows[i]
    }

    pub fn transpose(&self) -> Self {
        let mut rows: Vec<Gf2Vector> = (0..self.ncols)
            .map(|_| Gf2Vector::zero(self.nrows()))
            .collect();
        for (i, row) in self.rows.iter().enumerate() {
            for c in row.support() {
                rows[c].set(i);
            }
        }
        Self {
            rows,
            ncols: self.nrows(),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.ncols, other.nrows(), "dimension mismatch");
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut acc = Gf2Vector::zero(other.ncols);
                for k in row.support() {
                    acc.xor_in_place(&other.rows[k]);
                }
                acc
            })
            .collect();
        Self {
            rows,
            ncols: other.ncols,
        }
    }

    /// Reduced row echelon form. With `cols` given, pivots are chosen only
    /// in those columns, in the given order; remaining rows are left as
    /// eliminated residue (used for information-set style resampling).
    pub fn gaussian_elimination(&self, cols: Option<&[usize]>) -> Self {
        let mut rows = self.rows.clone();
        match cols {
            Some(cs) => {
                eliminate(&mut rows, cs.iter().copied());
            }
            None => {
                eliminate(&mut rows, 0..self.ncols);
            }
        }
        Self {
            rows,
            ncols: self.ncols,
        }
    }

    /// Canonical RREF basis: full elimination with zero rows dropped.
    /// Two matrices span the same code iff their echelon bases are equal.
    pub fn echelon_basis(&self) -> Self {
        let mut rows = self.rows.clone();
        eliminate(&mut rows, 0..self.ncols);
        rows.retain(|r| !r.is_zero());
        Self {
            rows,
            ncols: self.ncols,
        }
    }

    pub fn rank(&self) -> usize {
        let mut rows = self.rows.clone();
        eliminate(&mut rows, 0..self.ncols).len()
    }

    /// Basis of the dual code {v : c . v = 0 for every row c}, read off
    /// the free columns of the RREF.
    pub fn orthogonal_complement(&self) -> Self {
        let mut rows = self.rows.clone();
        let pivots = eliminate(&mut rows, 0..self.ncols);
        let mut is_pivot = vec![false; self.ncols];
        for &(_, c) in &pivots {
            is_pivot[c] = true;
        }
        let mut out = Vec::with_capacity(self.ncols - pivots.len());
        for f in 0..self.ncols {
            if is_pivot[f] {
                continue;
            }
            let mut v = Gf2Vector::zero(self.ncols);
            v.set(f);
            for &(r, c) in &pivots {
                if rows[r].get(f) {
                    v.set(c);
                }
            }
            out.push(v);
        }
        Self {
            rows: out,
            ncols: self.ncols,
        }
    }

    /// One solution of `self * x = rhs`, or None when inconsistent.
    pub fn solve(&self, rhs: &Gf2Vector) -> Option<Gf2Vector> {
        assert_eq!(rhs.n, self.nrows(), "rhs length mismatch");
        let q = self.ncols;
        let mut rows: Vec<Gf2Vector> = Vec::with_capacity(self.nrows());
        for (i, row) in self.rows.iter().enumerate() {
            let mut words = row.words.clone();
            words.resize(Gf2Vector::word_len(q + 1), 0);
            let mut aug = Gf2Vector { n: q + 1, words };
            if rhs.get(i) {
                aug.set(q);
            }
            rows.push(aug);
        }
        let pivots = eliminate(&mut rows, 0..q);
        // rows below the pivot block are zero on the coefficient columns
        for row in rows.iter().skip(pivots.len()) {
            if row.get(q) {
                return None;
            }
        }
        let mut x = Gf2Vector::zero(q);
        for &(r, c) in &pivots {
            if rows[r].get(q) {
                x.set(c);
            }
        }
        Some(x)
    }
}

/// In-place elimination pivoting on the given columns in order; every other
/// row with a 1 in the pivot column is cleared (reduced form). Returns the
/// (pivot row, pivot column) pairs.
fn eliminate(
    rows: &mut [Gf2Vector],
    cols: impl IntoIterator<Item = usize>,
) -> Vec<(usize, usize)> {
    let mut pivots = Vec::new();
    let mut pr = 0;
    for c in cols {
        if pr >= rows.len() {
            break;
        }
        let pivot = (pr..rows.len()).find(|&r| rows[r].get(c));
        let Some(p) = pivot else { continue };
        rows.swap(pr, p);
        let pivot_row = rows[pr].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r != pr && row.get(c) {
                row.xor_in_place(&pivot_row);
            }
        }
        pivots.push((pr, c));
        pr += 1;
    }
    pivots
}

/// Distinct column indices, `k` drawn uniformly from `0..ncols` by partial
/// Fisher-Yates.
pub fn sample_columns<R: Rng>(rng: &mut R, ncols: usize, k: usize) -> Vec<usize> {
    assert!(k <= ncols, "cannot sample more columns than exist");
    let mut perm: Vec<usize> = (0..ncols).collect();
    for i in 0..k {
        let j = rng.gen_range(i..ncols);
        perm.swap(i, j);
    }
    perm.truncate(k);
    perm
}
