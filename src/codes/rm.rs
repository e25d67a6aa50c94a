//! Canonical Reed-Muller generator matrices.
//!
//! RM(r,m) has length 2^m, dimension sum_{i<=r} C(m,i) and minimum
//! distance 2^(m-r). Rows are evaluations of the monomials of degree at
//! most r, listed by increasing degree with variable combinations in
//! lexicographic order; variable x_i evaluates to bit i of the column
//! index.

use crate::gf2::{Gf2Matrix, Gf2Vector};

/// Exact integer binomial coefficient.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut num: u128 = 1;
    let mut den: u128 = 1;
    for i in 0..k {
        num *= (n - i) as u128;
        den *= (i + 1) as u128;
    }
    (num / den) as usize
}

/// Dimension of RM(r,m).
pub fn dimension(r: usize, m: usize) -> usize {
    (0..=r.min(m)).map(|i| binomial(m, i)).sum()
}

/// Canonical generator matrix of RM(r,m).
pub fn generator(r: usize, m: usize) -> Gf2Matrix {
    assert!(r <= m, "order exceeds number of variables");
    let n = 1usize << m;
    let mut rows = Vec::with_capacity(dimension(r, m));
    for deg in 0..=r {
        let mut vars: Vec<usize> = (0..deg).collect();
        loop {
            let mut row = Gf2Vector::zero(n);
            for c in 0..n {
                if vars.iter().all(|&i| (c >> i) & 1 == 1) {
                    row.set(c);
                }
            }
            rows.push(row);
            if !next_combination(&mut vars, m) {
                break;
            }
        }
    }
    Gf2Matrix::from_rows(rows)
}

/// Advance `comb` to the next k-subset of 0..n in lexicographic order.
fn next_combination(comb: &mut [usize], n: usize) -> bool {
    let k = comb.len();
    if k == 0 {
        return false;
    }
    for i_rev in 0..k {
        let i = k - 1 - i_rev;
        let max_val = n - (k - i);
        if comb[i] < max_val {
            comb[i] += 1;
            for j in (i + 1)..k {
                comb[j] = comb[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
