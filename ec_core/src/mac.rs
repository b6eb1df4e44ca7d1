//! Elliptic-curve homomorphic MAC.
//!
//! The tag of a value `v` under key `k` is the point `k·G + v·H`, where H
//! is a secondary generator with unknown discrete log relative to G. Tags
//! can be added and scaled without knowing any key, and the same operation
//! lands on the underlying `(key, value)` pair:
//!
//! ```text
//! MAC(k1, v1) + MAC(k2, v2) = MAC(k1 + k2, v1 + v2)
//! c · MAC(k, v)             = MAC(c·k, c·v)        (all mod n)
//! ```

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::CurveError;
use crate::field::mod_sqrt;
use crate::params::CurveParams;
use crate::point::Point;

/// An authentication tag. Holds no key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcMac {
    pub tag: Point,
}

impl EcMac {
    /// Tag `value` under `key`. Garbler-side: requires the key. Key and
    /// value are used as given; callers pre-reduce modulo the group order.
    pub fn new(
        key: &BigUint,
        value: &BigUint,
        h_point: &Point,
        curve: &CurveParams,
    ) -> Result<Self, CurveError> {
        let g_term = curve.generator().mul(key, curve)?;
        let h_term = h_point.mul(value, curve)?;
        Ok(EcMac {
            tag: g_term.add(&h_term, curve)?,
        })
    }

    /// Homomorphic addition of tags. Evaluator-usable: no key needed.
    pub fn add(&self, other: &EcMac, curve: &CurveParams) -> Result<EcMac, CurveError> {
        Ok(EcMac {
            tag: self.tag.add(&other.tag, curve)?,
        })
    }

    /// Homomorphic scalar multiplication of a tag. Evaluator-usable.
    pub fn scalar_mul(&self, scalar: &BigUint, curve: &CurveParams) -> Result<EcMac, CurveError> {
        Ok(EcMac {
            tag: self.tag.mul(scalar, curve)?,
        })
    }
}

/// How many candidate x-coordinates [`derive_h_point`] walks before
/// giving up.
const H_POINT_ATTEMPTS: usize = 256;

/// Derive a "nothing up my sleeve" secondary generator from a public
/// label.
///
/// SHA-256 the label, reduce into the base field, then walk x upward until
/// `x³ + 7` is a quadratic residue and lift it. Nobody learns the discrete
/// log of the result relative to G. Requires `p ≡ 3 (mod 4)` for the
/// square root.
pub fn derive_h_point(label: &[u8], curve: &CurveParams) -> Result<Point, CurveError> {
    if &curve.p % 4u32 != BigUint::from(3u32) {
        return Err(CurveError::InvalidParams(
            "hash-to-curve needs p = 3 (mod 4)".into(),
        ));
    }

    let digest = Sha256::digest(label);
    let mut x = BigUint::from_bytes_be(&digest) % &curve.p;

    for _ in 0..H_POINT_ATTEMPTS {
        let y_squared = (&x * &x % &curve.p * &x + 7u32) % &curve.p;
        if let Some(y) = mod_sqrt(&y_squared, &curve.p) {
            return Ok(Point::new(x, y));
        }
        x = (x + 1u32) % &curve.p;
    }

    Err(CurveError::NoCurvePoint(H_POINT_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CurveParams, Point) {
        let curve = CurveParams::secp256k1();
        let h = derive_h_point(b"test-h-generator", &curve).unwrap();
        (curve, h)
    }

    #[test]
    fn h_point_is_deterministic_and_on_curve() {
        let (curve, h) = setup();
        assert!(h.is_on_curve(&curve));
        assert!(!h.is_infinity());
        assert_ne!(h, curve.generator());
        assert_eq!(h, derive_h_point(b"test-h-generator", &curve).unwrap());
        assert_ne!(h, derive_h_point(b"another-label", &curve).unwrap());
    }

    #[test]
    fn tags_add_homomorphically() {
        let (curve, h) = setup();
        let (k1, v1) = (BigUint::from(1234u32), BigUint::from(42u32));
        let (k2, v2) = (BigUint::from(9876u32), BigUint::from(100u32));

        let lhs = EcMac::new(&k1, &v1, &h, &curve)
            .unwrap()
            .add(&EcMac::new(&k2, &v2, &h, &curve).unwrap(), &curve)
            .unwrap();
        let rhs = EcMac::new(&(&k1 + &k2), &(&v1 + &v2), &h, &curve).unwrap();

        assert_eq!(lhs.tag, rhs.tag);
    }

    #[test]
    fn tags_scale_homomorphically() {
        let (curve, h) = setup();
        let (k, v, c) = (
            BigUint::from(777u32),
            BigUint::from(42u32),
            BigUint::from(13u32),
        );

        let lhs = EcMac::new(&k, &v, &h, &curve)
            .unwrap()
            .scalar_mul(&c, &curve)
            .unwrap();
        let rhs = EcMac::new(&(&c * &k % &curve.n), &(&c * &v % &curve.n), &h, &curve).unwrap();

        assert_eq!(lhs.tag, rhs.tag);
    }

    #[test]
    fn zero_key_zero_value_tags_to_identity() {
        let (curve, h) = setup();
        let mac = EcMac::new(&BigUint::from(0u32), &BigUint::from(0u32), &h, &curve).unwrap();
        assert_eq!(mac.tag, Point::infinity());
    }

    #[test]
    fn homomorphism_wraps_modulo_group_order() {
        let (curve, h) = setup();
        let k1 = &curve.n - 1u32;
        let k2 = BigUint::from(5u32);
        let v = BigUint::from(7u32);

        let lhs = EcMac::new(&k1, &v, &h, &curve)
            .unwrap()
            .add(&EcMac::new(&k2, &v, &h, &curve).unwrap(), &curve)
            .unwrap();
        let rhs = EcMac::new(
            &((&k1 + &k2) % &curve.n),
            &((&v + &v) % &curve.n),
            &h,
            &curve,
        )
        .unwrap();

        assert_eq!(lhs.tag, rhs.tag);
    }
}
