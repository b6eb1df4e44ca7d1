pub mod errors;
pub mod field;
pub mod mac;
pub mod params;
pub mod point;

pub use crate::{
    errors::CurveError,
    mac::{derive_h_point, EcMac},
    params::{CurveParams, SECP256K1},
    point::Point,
};

pub use field::{mod_inverse, mod_sqrt};
