use thiserror::Error;

use crate::norms::errors::NormError;

#[derive(Debug, Error)]
pub enum EocError {
    #[error(transparent)]
    Norm(#[from] NormError),

    #[error("invalid error value: must be finite and >= 0. got {got}")]
    InvalidError { got: f64 },

    #[error("invalid degrees of freedom: must be >= 1. got {got}")]
    ZeroDofs { got: usize },
}
