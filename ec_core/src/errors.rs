use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// Requested an inverse of an element with gcd(a, m) != 1.
    #[error("no inverse modulo {0}")]
    NotInvertible(BigUint),

    #[error("invalid curve parameters: {0}")]
    InvalidParams(String),

    /// Hash-to-curve exhausted its candidate x-coordinates without hitting
    /// a quadratic residue.
    #[error("no curve point found after {0} candidates")]
    NoCurvePoint(usize),
}
