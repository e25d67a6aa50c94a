use std::fmt;

/// Binary vector of fixed length, bit-packed LSB-first into u64 words.
///
/// Codewords, generator rows and solve results are all `Gf2Vector`s; the
/// coordinate index i is bit i of the packed representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf2Vector {
    pub n: usize,        // number of bits
    pub words: Vec<u64>, // bit-packed coordinates, LSB-first
}

impl Gf2Vector {
    #[inline]
    pub fn word_len(n: usize) -> usize {
        (n + 63) / 64
    }

    #[inline]
    fn last_mask(n: usize) -> u64 {
        let r = n & 63;
        if r == 0 { !0u64 } else { (1u64 << r) - 1 }
    }

    #[inline]
    pub(crate) fn mask_tail(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last &= Self::last_mask(self.n);
        }
    }

    /// All-zero vector of length n.
    pub fn zero(n: usize) -> Self {
        Self {
            n,
            words: vec![0u64; Self::word_len(n)],
        }
    }

    /// All-one vector of length n.
    pub fn ones(n: usize) -> Self {
        let mut v = Self {
            n,
            words: vec![!0u64; Self::word_len(n)],
        };
        v.mask_tail();
        v
    }

    /// Build from set indices (e.g. [0, 2] -> 101000...).
    pub fn from_support(n: usize, support: &[usize]) -> Self {
        let mut words = vec![0u64; Self::word_len(n)];
        for &i in support {
            if i >= n {
                continue;
            }
            words[i / 64] |= 1u64 << (i & 63);
        }
        let mut v = Self { n, words };
        v.mask_tail();
        v
    }

    /// Bit get.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        if i >= self.n {
            return false;
        }
        (self.words[i / 64] >> (i & 63)) & 1 == 1
    }

    /// Bit set 1.
    #[inline]
    pub fn set(&mut self, i: usize) {
        if i >= self.n {
            return;
        }
        self.words[i / 64] |= 1u64 << (i & 63);
    }

    /// Bit flip.
    #[inline]
    pub fn toggle(&mut self, i: usize) {
        if i >= self.n {
            return;
        }
        self.words[i / 64] ^= 1u64 << (i & 63);
    }

    /// In-place XOR.
    #[inline]
    pub fn xor_in_place(&mut self, other: &Self) {
        assert_eq!(self.n, other.n, "length mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= *b;
        }
        self.mask_tail();
    }

    /// Component-wise AND, the Schur product of two codewords.
    pub fn and(&self, other: &Self) -> Self {
        assert_eq!(self.n, other.n, "length mismatch");
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        let mut v = Self { n: self.n, words };
        v.mask_tail();
        v
    }

    /// Hamming weight.
    pub fn weight(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Ordered list of set indices.
    pub fn support(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.weight() as usize);
        for (wi, mut w) in self.words.iter().copied().enumerate() {
            while w != 0 {
                let b = w.trailing_zeros() as usize;
                let i = wi * 64 + b;
                if i < self.n {
                    out.push(i);
                }
                w &= w - 1;
            }
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}

impl fmt::Display for Gf2Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
