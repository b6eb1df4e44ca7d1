//! Arithmetic-circuit wires carrying homomorphically MAC'd values.

pub mod errors;
pub mod wire;

pub use errors::WireError;
pub use wire::ArgoWire;
