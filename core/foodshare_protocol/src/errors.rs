//! Protocol-level error types.

use thiserror::Error;

use crate::types::DonationStatus;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed creation input. Recoverable: correct the draft and retry.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced donation id does not exist.
    #[error("Donation not found: {0}")]
    NotFound(String),

    /// The requested status change is not reachable from the current status,
    /// regardless of who requests it. Includes the losing side of a
    /// concurrent claim ("no longer available").
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: DonationStatus,
        to: DonationStatus,
    },

    /// The caller's role or identity does not satisfy the ownership rule for
    /// an otherwise legal transition.
    #[error("Not authorized: {0}")]
    Unauthorized(String),
}

pub type Result<T> = std::result::Result<T, Error>;
