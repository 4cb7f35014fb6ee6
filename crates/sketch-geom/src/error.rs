// Imports
use thiserror::Error;

/// Errors of the geometry kernel.
///
/// Queries that legitimately find nothing are not errors, they return `None` or an empty
/// [IntersectionResult][crate::IntersectionResult].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// An operation received input that violates its contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GeomError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
