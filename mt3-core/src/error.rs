/// Error types for the checked matrix and vector operations
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: f32 },

    #[error("homogeneous w is zero (w = {w}), perspective divide is undefined")]
    DegenerateW { w: f32 },

    #[error("transform produced a non-finite coordinate")]
    NonFinite,
}

pub type Result<T> = std::result::Result<T, MathError>;
