use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::References;

use crate::validation::ValidationIssues;
use crate::KernelError;

pub const VALIDATION_FALLBACK: &str = "Validation error";
pub const SERVER_FALLBACK: &str = "Server error";
pub const UNEXPECTED_MESSAGE: &str = "Unexpected error while saving the document";
pub const CONNECTION_MESSAGE: &str = "Could not connect to the server";
pub const BUSY_MESSAGE: &str = "The document is already being saved";
pub const INCOMPLETE_MESSAGE: &str = "Complete the required fields before saving";

const FILE_HINTS: [&str; 3] = ["pdf", "file", "archivo"];

/// Error body returned by the backend, attached to `KernelError::Rejected`
/// reports.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct ServerRejection {
    status: u16,
    message: Option<String>,
    /// Field errors in the order the server listed them. `None` when the body
    /// had no `errors` key at all.
    errors: Option<Vec<(String, Vec<String>)>>,
}

impl ServerRejection {
    pub fn new(
        status: u16,
        message: Option<String>,
        errors: Option<Vec<(String, Vec<String>)>>,
    ) -> Self {
        Self {
            status,
            message,
            errors,
        }
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_ref()?
            .iter()
            .find_map(|(_, messages)| messages.first())
            .map(String::as_str)
    }
}

impl Display for ServerRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// The one message a failed save shows to the user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SaveError {
    Incomplete(String),
    FieldErrors(String),
    File(String),
    Server(Option<String>),
    Unexpected,
    Busy,
    Connection,
}

impl SaveError {
    pub fn from_report(report: &Report<KernelError>) -> Self {
        match report.current_context() {
            KernelError::Invalid => Self::Incomplete(
                report
                    .downcast_ref::<ValidationIssues>()
                    .and_then(ValidationIssues::first)
                    .map(ToString::to_string)
                    .unwrap_or_else(|| INCOMPLETE_MESSAGE.to_string()),
            ),
            KernelError::Rejected => report
                .downcast_ref::<ServerRejection>()
                .map(Self::from_rejection)
                .unwrap_or(Self::Server(None)),
            KernelError::Unexpected | KernelError::Internal => Self::Unexpected,
            KernelError::Concurrency => Self::Busy,
            KernelError::Connection | KernelError::Timeout => Self::Connection,
        }
    }

    pub fn from_rejection(rejection: &ServerRejection) -> Self {
        if rejection.errors.is_some() {
            return Self::FieldErrors(
                rejection
                    .first_error()
                    .unwrap_or(VALIDATION_FALLBACK)
                    .to_string(),
            );
        }
        match &rejection.message {
            Some(message) if mentions_file(message) => Self::File(message.clone()),
            Some(message) => Self::Server(Some(message.clone())),
            None => Self::Server(None),
        }
    }

    pub fn message(&self) -> String {
        match self {
            SaveError::Incomplete(message) | SaveError::FieldErrors(message) => message.clone(),
            SaveError::File(message) => format!("File error: {message}"),
            SaveError::Server(Some(message)) => format!("{SERVER_FALLBACK}: {message}"),
            SaveError::Server(None) => SERVER_FALLBACK.to_string(),
            SaveError::Unexpected => UNEXPECTED_MESSAGE.to_string(),
            SaveError::Busy => BUSY_MESSAGE.to_string(),
            SaveError::Connection => CONNECTION_MESSAGE.to_string(),
        }
    }
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

fn mentions_file(message: &str) -> bool {
    let message = message.to_lowercase();
    FILE_HINTS.iter().any(|hint| message.contains(hint))
}
