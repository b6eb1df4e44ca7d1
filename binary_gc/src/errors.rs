use crate::gate_type::GateType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The gate type has no boolean truth table.
    #[error("unsupported gate type: {0}")]
    UnsupportedGate(GateType),

    /// The garbled table does not hold one ciphertext per input pair.
    /// Indicates a construction or ordering bug upstream.
    #[error("garbled table holds {0} rows, expected 4")]
    MalformedTable(usize),
}
