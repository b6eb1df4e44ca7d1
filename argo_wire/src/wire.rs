//! Wires of the arithmetic circuit model.
//!
//! A wire carries a value together with its MAC tag. The garbler creates
//! wires from `(value, key)` pairs; the evaluator combines them through
//! [`ArgoWire::add`] and [`ArgoWire::mul_const`] on tags alone, without
//! ever seeing a key. Only the key holder can verify the declared value.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use ec_core::{CurveParams, EcMac, Point};

use crate::errors::WireError;

/// One wire: a value in `[0, n)` and its tag, bound to the circuit's
/// secondary generator H. Operations are pure and never mutate inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgoWire {
    pub value: BigUint,
    pub mac: EcMac,
    pub h_point: Point,
}

impl ArgoWire {
    /// Garbler-side constructor: store `value mod n` and tag it under
    /// `key`.
    pub fn new(
        value: &BigUint,
        key: &BigUint,
        h_point: &Point,
        curve: &CurveParams,
    ) -> Result<Self, WireError> {
        let value = value % &curve.n;
        let mac = EcMac::new(key, &value, h_point, curve)?;
        Ok(ArgoWire {
            value,
            mac,
            h_point: h_point.clone(),
        })
    }

    /// Addition gate. The evaluator computes this on tags alone:
    /// `(v₁, MAC(k₁, v₁)) + (v₂, MAC(k₂, v₂)) = (v₁+v₂, MAC(k₁+k₂, v₁+v₂))`.
    pub fn add(&self, other: &ArgoWire, curve: &CurveParams) -> Result<ArgoWire, WireError> {
        if self.h_point != other.h_point {
            return Err(WireError::GeneratorMismatch);
        }

        Ok(ArgoWire {
            value: (&self.value + &other.value) % &curve.n,
            mac: self.mac.add(&other.mac, curve)?,
            h_point: self.h_point.clone(),
        })
    }

    /// Multiplication by a public constant:
    /// `c · (v, MAC(k, v)) = (c·v, MAC(c·k, c·v))`.
    pub fn mul_const(&self, c: &BigUint, curve: &CurveParams) -> Result<ArgoWire, WireError> {
        let c = c % &curve.n;
        Ok(ArgoWire {
            value: (&c * &self.value) % &curve.n,
            mac: self.mac.scalar_mul(&c, curve)?,
            h_point: self.h_point.clone(),
        })
    }

    /// Garbler-side check that the declared value still matches the tag
    /// under `key`. A `false` return is the tamper signal; what to do with
    /// it is the calling protocol's decision.
    pub fn verify(&self, key: &BigUint, curve: &CurveParams) -> Result<bool, WireError> {
        let expected = EcMac::new(key, &self.value, &self.h_point, curve)?;
        Ok(self.mac.tag == expected.tag)
    }
}
