#[derive(Debug, thiserror::Error)]
pub enum RmParamError {
    #[error("invalid r (must be >= 1): {0}")]
    InvalidR(usize),
    #[error("m too small for order r (need m >= r + 2): r={r}, m={m}")]
    MTooSmall { r: usize, m: usize },
    #[error("m too large for an in-memory attack on length 2^m: {0}")]
    MTooLarge(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum KeygenError {
    #[error("params invalid: {0}")]
    InvalidParams(#[from] RmParamError),
    #[error("public key equation check failed: pk != M * G * P")]
    EquationFailed,
}

#[derive(Debug, thiserror::Error)]
pub enum AttackError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("linear system has no solution while {0}")]
    UnsolvableSystem(String),
    #[error("search exhausted after {attempts} attempts while {what}")]
    SearchExhausted { what: &'static str, attempts: u64 },
}
