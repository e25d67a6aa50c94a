use cb4rm::codes::{rm, tools};
use cb4rm::MinderShokrollahi;

#[test]
fn decomposition_yields_disjoint_inner_sets_of_size_d() {
    let (r, m) = (2usize, 5usize);
    let d = 1usize << (m - r);
    let generator = rm::generator(r, m);
    let mut ms = MinderShokrollahi::with_seed(r, m, 1);

    // retry over fresh minimum-weight codewords like the outer recovery
    // loop does; decomposition is allowed to come back empty
    for _ in 0..20 {
        let support = ms.min_weight_sample(&generator).expect("sampler converges");
        let shortened = tools::shorten(&generator, &support);
        let inner_sets = ms
            .decompose_inner_sets(&shortened)
            .expect("sampling inside decomposition converges");
        if inner_sets.is_empty() {
            continue;
        }
        assert_eq!(inner_sets.len(), (1 << r) - 1);
        let mut all: Vec<usize> = Vec::new();
        for set in &inner_sets {
            assert_eq!(set.len(), d);
            all.extend_from_slice(set);
        }
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), d * ((1 << r) - 1), "inner sets overlap");
        // inner sets live outside the shortening support
        for &c in &all {
            assert!(!support.contains(&c));
        }
        return;
    }
    panic!("no decomposition succeeded in 20 rounds");
}

#[test]
fn recovers_the_order_one_subcode_of_rm_2_5() {
    let (r, m) = (2usize, 5usize);
    let generator = rm::generator(r, m);
    let mut ms = MinderShokrollahi::with_seed(r, m, 2);

    let basis = ms.attack(&generator).expect("subcode recovery converges");
    assert_eq!(basis.nrows(), rm::dimension(r - 1, m));
    assert_eq!(
        basis.echelon_basis(),
        rm::generator(r - 1, m).echelon_basis()
    );
}
