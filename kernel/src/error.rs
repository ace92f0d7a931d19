use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// Rejected on the client before anything was sent.
    Invalid,
    /// The backend answered with an error status.
    Rejected,
    /// The backend answered with a success status other than the expected one.
    Unexpected,
    Concurrency,
    /// No response was received at all.
    Connection,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Invalid => write!(f, "Invalid input"),
            KernelError::Rejected => write!(f, "Request rejected by the server"),
            KernelError::Unexpected => write!(f, "Unexpected server response"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Connection => write!(f, "Connection error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
