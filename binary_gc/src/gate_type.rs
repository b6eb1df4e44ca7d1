//! The closed set of gate kinds known to the circuit models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GateError;

/// Boolean gates carry a truth table; `Add` and `Mul` only label the role
/// of an arithmetic gate and cannot be garbled into a binary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateType {
    And,
    Xor,
    Or,
    Add,
    Mul,
}

impl GateType {
    /// The gate's boolean function. Arithmetic roles fail fast with
    /// [`GateError::UnsupportedGate`].
    pub fn eval_bool(self, a: bool, b: bool) -> Result<bool, GateError> {
        match self {
            GateType::And => Ok(a & b),
            GateType::Xor => Ok(a ^ b),
            GateType::Or => Ok(a | b),
            GateType::Add | GateType::Mul => Err(GateError::UnsupportedGate(self)),
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateType::And => "AND",
            GateType::Xor => "XOR",
            GateType::Or => "OR",
            GateType::Add => "ADD",
            GateType::Mul => "MUL",
        };
        write!(f, "{}", name)
    }
}
