use cb4rm::attack::error::RmParamError;
use cb4rm::attack::params::RmParams;
use cb4rm::codes::rm;

#[test]
fn validate_rejects_bad_parameters() {
    assert!(matches!(
        RmParams::new(0, 5).validate(),
        Err(RmParamError::InvalidR(0))
    ));
    assert!(matches!(
        RmParams::new(3, 4).validate(),
        Err(RmParamError::MTooSmall { r: 3, m: 4 })
    ));
    assert!(matches!(
        RmParams::new(1, 21).validate(),
        Err(RmParamError::MTooLarge(21))
    ));
    assert!(RmParams::new(2, 5).validate().is_ok());
}

#[test]
fn keygen_is_seed_deterministic() {
    let params = RmParams::new(2, 5);
    let a = params.keygen_from_seed(&[7u8; 32]).expect("keygen");
    let b = params.keygen_from_seed(&[7u8; 32]).expect("keygen");
    let c = params.keygen_from_seed(&[8u8; 32]).expect("keygen");
    assert_eq!(a.get_public_key(), b.get_public_key());
    assert_ne!(a.get_public_key(), c.get_public_key());
}

#[test]
fn public_key_satisfies_the_equation() {
    let params = RmParams::new(2, 5);
    let instance = params.keygen_from_seed(&[3u8; 32]).expect("keygen");
    let (m_mat, p_mat) = instance.get_secret_key();
    let reconstructed = m_mat.mul(&rm::generator(2, 5)).mul(p_mat);
    assert_eq!(&reconstructed, instance.get_public_key());
    assert_eq!(m_mat.rank(), m_mat.nrows());
    assert_eq!(instance.get_public_key().rank(), rm::dimension(2, 5));
}
