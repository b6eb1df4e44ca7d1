//! Random wire labels for the binary garbled-circuit model.

use std::ops::BitXor;

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Width of a label in bytes.
pub const LABEL_BYTES: usize = 16;

/// An opaque secret token standing for one boolean value on one wire. Two
/// independently drawn labels are indistinguishable without the garbler's
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label([u8; LABEL_BYTES]);

impl Label {
    /// Draw a fresh random label.
    pub fn random<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        Label(rng.gen())
    }

    pub fn from_bytes(bytes: [u8; LABEL_BYTES]) -> Self {
        Label(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; LABEL_BYTES] {
        &self.0
    }

    /// The label's low bit, used as the point-and-permute row signal.
    pub fn select_bit(&self) -> bool {
        self.0[LABEL_BYTES - 1] & 1 == 1
    }

    pub(crate) fn flip_select_bit(self) -> Self {
        let mut bytes = self.0;
        bytes[LABEL_BYTES - 1] ^= 1;
        Label(bytes)
    }

    /// Hash this label together with `others` into a table-entry key:
    /// SHA-256 over the concatenation, truncated to the label width.
    pub fn hash_with(&self, others: &[Label]) -> [u8; LABEL_BYTES] {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        for other in others {
            hasher.update(other.0);
        }

        let digest = hasher.finalize();
        let mut key = [0u8; LABEL_BYTES];
        key.copy_from_slice(&digest[..LABEL_BYTES]);
        key
    }
}

impl BitXor for Label {
    type Output = Label;

    fn bitxor(self, rhs: Label) -> Label {
        let mut out = [0u8; LABEL_BYTES];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            *o = a ^ b;
        }
        Label(out)
    }
}
