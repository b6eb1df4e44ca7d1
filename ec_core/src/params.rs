//! Working-curve parameters: prime modulus, group order and generator.
//!
//! Defaults are secp256k1. Each constant can be overridden from the
//! environment (`CURVE_PRIME_MODULUS`, `CURVE_ORDER`, `CURVE_GENERATOR_X`,
//! `CURVE_GENERATOR_Y`), as hex (`0x`-prefixed or bare) or decimal. The
//! struct is validated on construction and never mutated afterwards; all
//! arithmetic entry points take it by reference.

use std::env;

use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::point::Point;

const SECP256K1_P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
const SECP256K1_N: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
const SECP256K1_G_X: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const SECP256K1_G_Y: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// The process-wide default curve, built from the environment once.
pub static SECP256K1: Lazy<CurveParams> =
    Lazy::new(|| CurveParams::from_env().expect("curve parameters from environment"));

/// Parameters of the working curve `y² = x³ + 7 (mod p)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Prime modulus of the base field.
    pub p: BigUint,
    /// Order of the generator.
    pub n: BigUint,
    /// Generator x-coordinate.
    pub g_x: BigUint,
    /// Generator y-coordinate.
    pub g_y: BigUint,
}

impl CurveParams {
    /// Build and validate a parameter set.
    pub fn new(
        p: BigUint,
        n: BigUint,
        g_x: BigUint,
        g_y: BigUint,
    ) -> Result<Self, CurveError> {
        if p <= BigUint::from(3u32) || (&p % 2u32).is_zero() {
            return Err(CurveError::InvalidParams(
                "prime modulus must be odd and greater than 3".into(),
            ));
        }
        if n.is_zero() {
            return Err(CurveError::InvalidParams("group order must be nonzero".into()));
        }

        let params = CurveParams { p, n, g_x, g_y };
        if !params.generator().is_on_curve(&params) {
            return Err(CurveError::InvalidParams(
                "generator does not satisfy y^2 = x^3 + 7".into(),
            ));
        }
        Ok(params)
    }

    /// The compiled-in secp256k1 constants.
    pub fn secp256k1() -> Self {
        CurveParams::new(
            parse_big(SECP256K1_P).expect("builtin modulus"),
            parse_big(SECP256K1_N).expect("builtin order"),
            parse_big(SECP256K1_G_X).expect("builtin generator x"),
            parse_big(SECP256K1_G_Y).expect("builtin generator y"),
        )
        .expect("builtin secp256k1 parameters")
    }

    /// Read the curve from the environment, falling back per-variable to
    /// the secp256k1 constants.
    pub fn from_env() -> Result<Self, CurveError> {
        CurveParams::new(
            env_big("CURVE_PRIME_MODULUS", SECP256K1_P)?,
            env_big("CURVE_ORDER", SECP256K1_N)?,
            env_big("CURVE_GENERATOR_X", SECP256K1_G_X)?,
            env_big("CURVE_GENERATOR_Y", SECP256K1_G_Y)?,
        )
    }

    /// The generator point G.
    pub fn generator(&self) -> Point {
        Point::new(self.g_x.clone(), self.g_y.clone())
    }
}

fn env_big(name: &str, default_hex: &str) -> Result<BigUint, CurveError> {
    match env::var(name) {
        Ok(raw) => parse_big(&raw)
            .ok_or_else(|| CurveError::InvalidParams(format!("cannot parse {}={}", name, raw))),
        Err(_) => Ok(parse_big(default_hex).expect("builtin curve constant")),
    }
}

/// Parse a big unsigned integer, hex when `0x`-prefixed or when the digits
/// only make sense as hex, decimal otherwise.
fn parse_big(s: &str) -> Option<BigUint> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return BigUint::parse_bytes(hex.as_bytes(), 16);
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return BigUint::parse_bytes(s.as_bytes(), 10);
    }
    BigUint::parse_bytes(s.as_bytes(), 16)
}
