use std::collections::HashSet;

use cb4rm::codes::{rm, tools};
use cb4rm::gf2::{Gf2Matrix, Gf2Vector};
use cb4rm::MinderShokrollahi;

#[test]
fn samples_have_minimum_weight_and_never_repeat() {
    let (r, m) = (2usize, 5usize);
    let d = 1usize << (m - r);
    let generator = rm::generator(r, m);
    let mut ms = MinderShokrollahi::with_seed(r, m, 0xCB);

    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    for _ in 0..30 {
        let support = ms.min_weight_sample(&generator).expect("sampler converges");
        assert_eq!(support.len(), d);
        assert!(seen.insert(support.clone()), "support returned twice");

        // the support really is a codeword of the generator's code
        let cw = Gf2Vector::from_support(1 << m, &support);
        let merged = tools::union(&generator, &Gf2Matrix::from_rows(vec![cw]));
        assert_eq!(merged.nrows(), generator.nrows());
    }
}

#[test]
fn sampling_works_on_a_scrambled_generator() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let (r, m) = (2usize, 5usize);
    let d = 1usize << (m - r);
    let mut rng = StdRng::seed_from_u64(9);
    let generator = rm::generator(r, m);
    let scrambled = Gf2Matrix::nonsingular(&mut rng, generator.nrows()).mul(&generator);

    let mut ms = MinderShokrollahi::with_seed(r, m, 7);
    for _ in 0..10 {
        let support = ms.min_weight_sample(&scrambled).expect("sampler converges");
        assert_eq!(support.len(), d);
    }
}
