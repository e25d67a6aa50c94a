use cb4rm::attack::params::RmParams;
use cb4rm::ChizhovBorodin;

fn main() {
    let mut args = std::env::args().skip(1);
    let r: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(2);
    let m: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    let params = RmParams::new(r, m);
    let instance = match params.keygen_from_seed(&[0u8; 32]) {
        Ok(inst) => inst,
        Err(e) => {
            println!("keygen failed: {}", e);
            return;
        }
    };
    let pub_key = instance.get_public_key();
    println!(
        "RM({}, {}) public key: {} x {}",
        r,
        m,
        pub_key.nrows(),
        pub_key.ncols
    );

    let attack = ChizhovBorodin::with_seed(r, m, 1);
    match attack.attack(pub_key) {
        Ok((m_rec, p_rec)) => {
            if attack.check(pub_key, &m_rec, &p_rec) {
                println!("Success! Recovered (M, P) reproduces the public key.");
            } else {
                println!("Fail! Recovered pair does not match the public key.");
            }
        }
        Err(e) => {
            println!("Error during attack: {}", e);
        }
    }
}
