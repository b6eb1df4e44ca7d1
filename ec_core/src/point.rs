//! Affine point arithmetic over the short-Weierstrass curve
//! `y² = x³ + 7 (mod p)`.
//!
//! Points are immutable values; every operation returns a fresh point.
//! Scalar multiplication is plain double-and-add and branches on the
//! scalar bits, so none of this is constant time. Fine for a conceptual
//! model, not for handling long-lived secrets on a shared machine.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::field::{mod_inverse, reduce};
use crate::params::CurveParams;

/// Curve constant `b` in `y² = x³ + b`.
const CURVE_B: u32 = 7;

/// A point on the working curve, or the group identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Point {
    /// The point at infinity.
    Infinity,
    /// A finite point with coordinates in `[0, p)`.
    Affine { x: BigUint, y: BigUint },
}

fn int(v: &BigUint) -> BigInt {
    BigInt::from(v.clone())
}

impl Point {
    pub fn infinity() -> Self {
        Point::Infinity
    }

    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Whether the point satisfies the curve equation. The identity is on
    /// every curve.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let p = &curve.p;
                let lhs = y * y % p;
                let rhs = (x * x % p * x + CURVE_B) % p;
                lhs == rhs
            }
        }
    }

    /// Group addition.
    ///
    /// Identity inputs short-circuit; inverse points (same x, different y)
    /// yield the identity; equal points take the tangent formula, distinct
    /// points the chord formula. The only failure is a non-invertible
    /// denominator, which a prime modulus makes unreachable outside the
    /// guarded branches.
    pub fn add(&self, other: &Point, curve: &CurveParams) -> Result<Point, CurveError> {
        let (x1, y1) = match self {
            Point::Infinity => return Ok(other.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Infinity => return Ok(self.clone()),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 != y2 {
            return Ok(Point::Infinity);
        }

        let p = &curve.p;
        let lambda = if x1 == x2 {
            // Tangent slope 3x² / 2y.
            let num = BigUint::from(3u32) * x1 % p * x1 % p;
            let den = mod_inverse(&int(&(BigUint::from(2u32) * y1)), p)?;
            num * den % p
        } else {
            // Chord slope (y₂ - y₁) / (x₂ - x₁).
            let inv = mod_inverse(&(int(x2) - int(x1)), p)?;
            reduce(&((int(y2) - int(y1)) * int(&inv)), p)
        };

        let lambda = int(&lambda);
        let x3 = reduce(&(&lambda * &lambda - int(x1) - int(x2)), p);
        let y3 = reduce(&(lambda * (int(x1) - int(&x3)) - int(y1)), p);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Point doubling, `self + self`.
    pub fn double(&self, curve: &CurveParams) -> Result<Point, CurveError> {
        self.add(self, curve)
    }

    /// Scalar multiplication by double-and-add. The scalar is reduced
    /// modulo the group order first; `k ≡ 0` yields the identity.
    pub fn mul(&self, k: &BigUint, curve: &CurveParams) -> Result<Point, CurveError> {
        let mut k = k % &curve.n;
        if k.is_zero() {
            return Ok(Point::Infinity);
        }

        let mut result = Point::Infinity;
        let mut addend = self.clone();
        while !k.is_zero() {
            if k.bit(0) {
                result = result.add(&addend, curve)?;
            }
            addend = addend.add(&addend, curve)?;
            k >>= 1;
        }

        Ok(result)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "Point(inf)"),
            Point::Affine { x, .. } => {
                let hex = format!("{:x}", x);
                write!(f, "Point(0x{}...)", &hex[..hex.len().min(10)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CurveParams;

    fn big(hex_str: &str) -> BigUint {
        BigUint::from_bytes_be(&hex::decode(hex_str).unwrap())
    }

    #[test]
    fn identity_is_neutral() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        let inf = Point::infinity();

        assert_eq!(g.add(&inf, &curve).unwrap(), g);
        assert_eq!(inf.add(&g, &curve).unwrap(), g);
        assert_eq!(inf.add(&inf, &curve).unwrap(), inf);
    }

    #[test]
    fn inverse_points_cancel() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        let neg_g = Point::new(curve.g_x.clone(), &curve.p - &curve.g_y);

        assert!(neg_g.is_on_curve(&curve));
        assert_eq!(g.add(&neg_g, &curve).unwrap(), Point::Infinity);
    }

    #[test]
    fn doubling_matches_known_vector() {
        let curve = CurveParams::secp256k1();
        let two_g = Point::new(
            big("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
            big("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
        );

        let g = curve.generator();
        assert_eq!(g.double(&curve).unwrap(), two_g);
        assert_eq!(g.add(&g, &curve).unwrap(), two_g);
        assert!(two_g.is_on_curve(&curve));
    }

    #[test]
    fn addition_is_commutative() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        let a = g.mul(&BigUint::from(5u32), &curve).unwrap();
        let b = g.mul(&BigUint::from(11u32), &curve).unwrap();

        assert_eq!(a.add(&b, &curve).unwrap(), b.add(&a, &curve).unwrap());
    }

    #[test]
    fn addition_is_associative() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        let a = g.mul(&BigUint::from(2u32), &curve).unwrap();
        let b = g.mul(&BigUint::from(3u32), &curve).unwrap();
        let c = g.mul(&BigUint::from(5u32), &curve).unwrap();

        let left = a.add(&b, &curve).unwrap().add(&c, &curve).unwrap();
        let right = a.add(&b.add(&c, &curve).unwrap(), &curve).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn scalar_zero_yields_identity() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        assert_eq!(g.mul(&BigUint::zero(), &curve).unwrap(), Point::Infinity);
    }

    #[test]
    fn generator_has_group_order() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        assert_eq!(g.mul(&curve.n, &curve).unwrap(), Point::Infinity);
    }

    #[test]
    fn scalar_mul_matches_repeated_add() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();

        let mut acc = Point::infinity();
        for _ in 0..5 {
            acc = acc.add(&g, &curve).unwrap();
        }
        assert_eq!(g.mul(&BigUint::from(5u32), &curve).unwrap(), acc);
    }

    #[test]
    fn scalar_one_is_identity_map() {
        let curve = CurveParams::secp256k1();
        let g = curve.generator();
        let p = g.mul(&BigUint::from(1u32), &curve).unwrap();
        assert_eq!(p, g);

        let k = BigUint::from(123_456u32);
        assert_eq!(p.mul(&k, &curve).unwrap(), g.mul(&k, &curve).unwrap());
    }

    #[test]
    fn display_is_truncated() {
        let curve = CurveParams::secp256k1();
        assert_eq!(format!("{}", Point::infinity()), "Point(inf)");
        assert!(format!("{}", curve.generator()).starts_with("Point(0x79be667e"));
    }
}
