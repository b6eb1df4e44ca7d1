use ec_core::CurveError;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The two wires were created under different secondary generators and
    /// belong to different circuits.
    #[error("wires use different H generators")]
    GeneratorMismatch,

    #[error(transparent)]
    Curve(#[from] CurveError),
}
