use cb4rm::codes::rm;
use cb4rm::MinderShokrollahi;

fn main() {
    let (r, m) = (2, 5);
    let generator = rm::generator(r, m);
    let mut ms = MinderShokrollahi::with_seed(r, m, 42);

    println!(
        "sampling minimum-weight codewords of RM({}, {}), d = {}",
        r,
        m,
        1 << (m - r)
    );
    for i in 0..5 {
        match ms.min_weight_sample(&generator) {
            Ok(support) => println!("codeword {}: support {:?}", i, support),
            Err(e) => {
                println!("sampling stopped: {}", e);
                break;
            }
        }
    }
}
