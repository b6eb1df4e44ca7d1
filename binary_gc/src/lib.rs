//! Classical Yao garbled gates over random wire labels: the binary model
//! the MAC'd arithmetic wires are measured against.

pub mod errors;
pub mod gate;
pub mod gate_type;
pub mod label;
pub mod wire;

pub use errors::GateError;
pub use gate::GarbledGate;
pub use gate_type::GateType;
pub use label::{Label, LABEL_BYTES};
pub use wire::BinaryWire;
