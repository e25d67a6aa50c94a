use rand::{Rng, RngCore};

use super::error::{KeygenError, RmParamError};
use crate::codes::rm;
use crate::gf2::Gf2Matrix;
use crate::xof::Shake256Xof;

/// Reed-Muller McEliece parameters (code RM(r,m), length 2^m).
pub struct RmParams {
    pub r: usize,
    pub m: usize,
}

impl RmParams {
    pub fn new(r: usize, m: usize) -> Self {
        Self { r, m }
    }

    pub fn validate(&self) -> Result<(), RmParamError> {
        if self.r < 1 {
            return Err(RmParamError::InvalidR(self.r));
        }
        if self.m < self.r + 2 {
            return Err(RmParamError::MTooSmall {
                r: self.r,
                m: self.m,
            });
        }
        if self.m > 20 {
            return Err(RmParamError::MTooLarge(self.m));
        }
        Ok(())
    }

    /// Scramble the canonical generator with a random nonsingular M and a
    /// random coordinate permutation P: the public key is M * G * P.
    pub fn keygen<R: RngCore>(&self, rng: &mut R) -> Result<RmInstance, KeygenError> {
        self.validate()?;
        let generator = rm::generator(self.r, self.m);
        let n = generator.ncols;

        let m_mat = Gf2Matrix::nonsingular(rng, generator.nrows());
        let mut perm: Vec<usize> = (0..n).collect();
        for i in 0..n - 1 {
            let j = rng.gen_range(i..n);
            perm.swap(i, j);
        }
        let p_mat = Gf2Matrix::permutation(&perm);

        let pub_key = m_mat.mul(&generator).mul(&p_mat);
        let instance = RmInstance {
            pub_key,
            m_mat,
            p_mat,
        };
        instance.verify(self)?;
        Ok(instance)
    }

    /// Deterministic keygen: all randomness drawn from a SHAKE256 stream.
    pub fn keygen_from_seed(&self, seed: &[u8; 32]) -> Result<RmInstance, KeygenError> {
        let mut xof = Shake256Xof::new(seed);
        self.keygen(&mut xof)
    }
}

/// A generated key-recovery instance: the public key and the secrets it
/// was scrambled with.
pub struct RmInstance {
    pub_key: Gf2Matrix,
    m_mat: Gf2Matrix,
    p_mat: Gf2Matrix,
}

impl RmInstance {
    fn verify(&self, params: &RmParams) -> Result<(), KeygenError> {
        let generator = rm::generator(params.r, params.m);
        if self.m_mat.mul(&generator).mul(&self.p_mat) != self.pub_key {
            return Err(KeygenError::EquationFailed);
        }
        Ok(())
    }

    pub fn get_public_key(&self) -> &Gf2Matrix {
        &self.pub_key
    }

    /// The secret scrambling pair (M, P).
    pub fn get_secret_key(&self) -> (&Gf2Matrix, &Gf2Matrix) {
        (&self.m_mat, &self.p_mat)
    }
}
