//! Prime-field helper routines shared by the point formulas and the
//! hash-to-curve derivation.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// Reduce a possibly-negative intermediate into `[0, m)`.
pub fn reduce(v: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    v.mod_floor(&m).magnitude().clone()
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Negative `a` is normalized into `[0, m)` first. Fails with
/// [`CurveError::NotInvertible`] when `gcd(a, m) != 1`; in particular
/// `a = 0` is always rejected, never mapped to 0.
pub fn mod_inverse(a: &BigInt, m: &BigUint) -> Result<BigUint, CurveError> {
    let modulus = BigInt::from(m.clone());
    let a = a.mod_floor(&modulus);

    let (mut r0, mut r1) = (modulus.clone(), a);
    let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        let t2 = &t0 - &q * &t1;
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }

    if !r0.is_one() {
        return Err(CurveError::NotInvertible(m.clone()));
    }

    Ok(t0.mod_floor(&modulus).magnitude().clone())
}

/// Square root modulo a prime `p ≡ 3 (mod 4)`, via the `(p + 1) / 4`
/// exponent. Returns `None` when `a` is a non-residue.
pub fn mod_sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    let exp = (p + 1u32) >> 2;
    let root = a.modpow(&exp, p);

    if root.modpow(&BigUint::from(2u32), p) == a {
        Some(root)
    } else {
        None
    }
}
