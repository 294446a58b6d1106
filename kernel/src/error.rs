use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    InvalidPayload,
    MissingName,
    ReadPageExceeded,
    NotFound,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidPayload => write!(f, "Malformed request payload"),
            KernelError::MissingName => write!(f, "Book name is missing"),
            KernelError::ReadPageExceeded => write!(f, "Read page exceeds page count"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
