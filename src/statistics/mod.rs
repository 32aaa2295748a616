use thiserror::Error;

pub mod nullable;
pub mod projection;
pub mod variance;

pub use nullable::NullableVarianceExt;
pub use projection::ProjectionVarianceExt;
pub use variance::VarianceExt;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VarianceError {
    /// A value could not be converted to the `f64` accumulator, or the
    /// result does not fit the native numeric domain.
    #[error("Value not representable in the numeric domain")]
    InvalidInput,
    #[error("Sequence must contain at least 2 elements")]
    InsufficientData,
}
