//! The Chizhov-Borodin attack: recover the secret scrambler (M, P) of a
//! McEliece public key built on RM(r,m).
//!
//! The public code is reduced to order d = gcd(m-1, r) through Schur
//! algebra, descended to order 1 with a Minder-Shokrollahi step when
//! d > 1, and the order-1 generator then yields the coordinate
//! permutation and, by linear solving, the encoding transform.

use rand::rngs::OsRng;
use rand::RngCore;

use super::error::AttackError;
use super::minder_shokrollahi::MinderShokrollahi;
use super::reduction::{extended_gcd, generate_rm_d};
use super::schur::schur_product;
use crate::codes::rm;
use crate::gf2::{Gf2Matrix, Gf2Vector};

pub struct ChizhovBorodin {
    r: usize,
    m: usize,
    seed: Option<u64>,
}

impl ChizhovBorodin {
    pub fn new(r: usize, m: usize) -> Self {
        Self { r, m, seed: None }
    }

    /// Deterministic variant: the seed drives every probabilistic search.
    pub fn with_seed(r: usize, m: usize, seed: u64) -> Self {
        Self {
            r,
            m,
            seed: Some(seed),
        }
    }

    /// Recover (M, P) with pub_key = M * rm::generator(r, m) * P.
    pub fn attack(&self, pub_key: &Gf2Matrix) -> Result<(Gf2Matrix, Gf2Matrix), AttackError> {
        let (r, m) = (self.r, self.m);
        let n = 1usize << m;
        if pub_key.ncols != n {
            return Err(AttackError::InvalidParameter(format!(
                "public key has {} columns, expected 2^{} = {}",
                pub_key.ncols, m, n
            )));
        }

        // For m <= 2r the dual code has the smaller order and
        // RM(r,m)^perp = RM(m-1-r,m), so attack the dual instead.
        let is_dual_code = m <= 2 * r;
        let work_r = if is_dual_code { m - 1 - r } else { r };
        let g_for_rm_d = if is_dual_code {
            pub_key.orthogonal_complement()
        } else {
            pub_key.clone()
        };

        let (a, b, d) = extended_gcd(m as i64 - 1, work_r as i64);
        let rm_d = generate_rm_d(&g_for_rm_d, a, b)?;

        let rm_1 = if d != 1 {
            let seed = self.seed.unwrap_or_else(|| OsRng.next_u64());
            let mut ms = MinderShokrollahi::with_seed(d as usize, m, seed);
            let rm_d_minus_1 = ms.attack(&rm_d)?;
            schur_product(&rm_d.orthogonal_complement(), &rm_d_minus_1).orthogonal_complement()
        } else {
            rm_d
        };

        let p = self.find_permutation(&rm_1)?;
        let m_rec = self.find_nonsingular(pub_key, &rm::generator(r, m).mul(&p))?;
        Ok((m_rec, p))
    }

    /// From a generator equivalent to RM(1,m), read off a coordinate
    /// permutation P such that rm::generator(r,m) * P spans the public
    /// code for every order r.
    pub fn find_permutation(&self, generator: &Gf2Matrix) -> Result<Gf2Matrix, AttackError> {
        let m = self.m;
        let n = 1usize << m;
        if generator.nrows() != m + 1 || generator.ncols != n {
            return Err(AttackError::InvalidParameter(format!(
                "order-1 generator must be {}x{}, got {}x{}",
                m + 1,
                n,
                generator.nrows(),
                generator.ncols
            )));
        }

        // combination of rows giving the all-ones codeword
        let a = generator
            .transpose()
            .solve(&Gf2Vector::ones(n))
            .ok_or_else(|| {
                AttackError::UnsolvableSystem(
                    "expressing the all-ones codeword in the order-1 basis".to_string(),
                )
            })?;
        let removing_num = a.support().first().copied().unwrap_or(0);

        // basis change: all-ones first, then m independent affine rows
        let mut aux_rows = vec![a.clone()];
        for i in 0..=m {
            if i != removing_num {
                let mut row = a.clone();
                row.toggle(i);
                aux_rows.push(row);
            }
        }
        let ag = Gf2Matrix::from_rows(aux_rows).mul(generator);

        // columns of the affine rows, read as m-bit values, enumerate the
        // hidden coordinate map
        let mut perm = vec![0usize; n];
        for (j, value) in perm.iter_mut().enumerate() {
            for t in 1..=m {
                if ag.row(t).get(j) {
                    *value |= 1 << (t - 1);
                }
            }
        }
        let mut inverse = vec![usize::MAX; n];
        for (j, &v) in perm.iter().enumerate() {
            if inverse[v] != usize::MAX {
                return Err(AttackError::UnsolvableSystem(
                    "reading a coordinate permutation from the order-1 generator".to_string(),
                ));
            }
            inverse[v] = j;
        }
        Ok(Gf2Matrix::permutation(&inverse))
    }

    /// Solve row by row for the nonsingular transform M with
    /// M * g_mul_perm = pub_key.
    pub fn find_nonsingular(
        &self,
        pub_key: &Gf2Matrix,
        g_mul_perm: &Gf2Matrix,
    ) -> Result<Gf2Matrix, AttackError> {
        let gt = g_mul_perm.transpose();
        let mut rows = Vec::with_capacity(pub_key.nrows());
        for i in 0..pub_key.nrows() {
            let x = gt.solve(pub_key.row(i)).ok_or_else(|| {
                AttackError::UnsolvableSystem(format!(
                    "recovering the encoding transform for public row {i}"
                ))
            })?;
            rows.push(x);
        }
        Ok(Gf2Matrix::from_rows(rows))
    }

    /// End-to-end oracle: does (M, P) reproduce the public key exactly?
    pub fn check(&self, pub_key: &Gf2Matrix, m_mat: &Gf2Matrix, p_mat: &Gf2Matrix) -> bool {
        m_mat.mul(&rm::generator(self.r, self.m)).mul(p_mat) == *pub_key
    }
}
