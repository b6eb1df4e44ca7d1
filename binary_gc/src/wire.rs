//! Binary wires: one random label per boolean value.

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::label::Label;

/// A wire with labels for 0 and 1. Created once per wire by the garbler;
/// the evaluator only ever holds the one label matching the wire's actual
/// bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryWire {
    label0: Label,
    label1: Label,
}

impl BinaryWire {
    /// Draw two independent random labels. The 1-label's select bit is
    /// forced to complement the 0-label's, so the two labels of a wire
    /// always signal different garbled-table rows.
    pub fn random<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        let label0 = Label::random(rng);
        let mut label1 = Label::random(rng);
        if label1.select_bit() == label0.select_bit() {
            label1 = label1.flip_select_bit();
        }

        BinaryWire { label0, label1 }
    }

    /// The label encoding `bit` on this wire.
    pub fn label(&self, bit: bool) -> Label {
        if bit {
            self.label1
        } else {
            self.label0
        }
    }
}
