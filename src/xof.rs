//! SHAKE256 extendable-output stream, usable wherever the crate needs a
//! deterministic randomness source (seeded key generation in particular).

use rand::{Error, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

const DOMAIN: &[u8] = b"cb4rm/xof/v1";

pub struct Shake256Xof(sha3::Shake256Reader);

impl Shake256Xof {
    pub fn new(seed: &[u8]) -> Self {
        let mut s = Shake256::default();
        s.update(seed);
        s.update(DOMAIN);
        Self(s.finalize_xof())
    }

    pub fn get_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.0.read(&mut out);
        out
    }
}

impl RngCore for Shake256Xof {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.0.read(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.0.read(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.read(dest);
        Ok(())
    }
}
