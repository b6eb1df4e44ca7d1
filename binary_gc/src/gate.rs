//! Construction and evaluation of a single garbled boolean gate.
//!
//! The garbler encrypts the output label for every input pair under a key
//! hashed from the matching input labels, and places each ciphertext at
//! the table row named by the input labels' select bits (point-and-permute).
//! The evaluator holds exactly one label per input wire, recomputes the
//! row index and key from those labels, and decrypts that single row.
//!
//! This is the bare two-phase protocol: no oblivious transfer for input
//! delivery, no free-XOR, no row reduction.

use serde::{Deserialize, Serialize};

use crate::errors::GateError;
use crate::gate_type::GateType;
use crate::label::{Label, LABEL_BYTES};
use crate::wire::BinaryWire;

/// One ciphertext per input pair.
const TABLE_ROWS: usize = 4;

/// A garbled two-input boolean gate. The table is built once at
/// construction time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarbledGate {
    pub gate_type: GateType,
    pub in_a: BinaryWire,
    pub in_b: BinaryWire,
    pub out: BinaryWire,
    table: Vec<[u8; LABEL_BYTES]>,
}

impl GarbledGate {
    /// Garble `gate_type` over the given wires. Fails for gate types
    /// without a boolean truth table.
    pub fn garble(
        gate_type: GateType,
        in_a: BinaryWire,
        in_b: BinaryWire,
        out: BinaryWire,
    ) -> Result<Self, GateError> {
        let mut table = vec![[0u8; LABEL_BYTES]; TABLE_ROWS];

        for a in [false, true] {
            for b in [false, true] {
                let label_a = in_a.label(a);
                let label_b = in_b.label(b);
                let label_out = out.label(gate_type.eval_bool(a, b)?);

                let key = label_a.hash_with(&[label_b]);
                table[table_row(&label_a, &label_b)] = xor_bytes(&key, label_out.as_bytes());
            }
        }

        Ok(GarbledGate {
            gate_type,
            in_a,
            in_b,
            out,
            table,
        })
    }

    /// Decrypt the table row selected by the two held input labels and
    /// return the output label.
    pub fn evaluate(&self, label_a: &Label, label_b: &Label) -> Result<Label, GateError> {
        if self.table.len() != TABLE_ROWS {
            return Err(GateError::MalformedTable(self.table.len()));
        }

        let key = label_a.hash_with(&[*label_b]);
        let row = &self.table[table_row(label_a, label_b)];
        Ok(Label::from_bytes(xor_bytes(&key, row)))
    }
}

/// Table index from the select bits of the two input labels.
fn table_row(label_a: &Label, label_b: &Label) -> usize {
    ((label_a.select_bit() as usize) << 1) | label_b.select_bit() as usize
}

fn xor_bytes(a: &[u8; LABEL_BYTES], b: &[u8; LABEL_BYTES]) -> [u8; LABEL_BYTES] {
    let mut out = [0u8; LABEL_BYTES];
    for (o, (a, b)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = a ^ b;
    }
    out
}
