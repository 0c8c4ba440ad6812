//! Status messages for operation feedback.

use std::fmt;

/// Outcome line printed after a mutation.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// Nothing changed, but nothing went wrong either
    Info,
    Failure,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Success,
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Info,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            kind: StatusKind::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Info => "Info:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
