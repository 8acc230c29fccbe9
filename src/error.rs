//! Recoverable domain errors.
//!
//! Both variants are handled inside the menu loop with a printed message;
//! neither terminates the session.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrarError {
    #[error("No students added yet. Please add a student first.")]
    EmptyRoster,

    #[error(
        "Your payment of ${paid} is less than the course tuition of ${required}. \
         Please enter a greater amount."
    )]
    InsufficientPayment { paid: f64, required: f64 },
}
