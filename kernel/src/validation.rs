use std::fmt::{Display, Formatter};

use error_stack::Report;

use crate::entity::VolumeNumber;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ValidationIssue {
    MissingType,
    MissingDenomination,
    MissingConsecutiveNumber,
    MissingTitle,
    MissingAuthor,
    MissingYear,
    MissingCountry,
    MissingFile(VolumeNumber),
    RejectedFile(VolumeNumber, String),
    MissingUsername,
    MissingEmail,
    InvalidEmail,
    MissingPassword,
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingType => write!(f, "Select a document type"),
            ValidationIssue::MissingDenomination => write!(f, "Select a denomination"),
            ValidationIssue::MissingConsecutiveNumber => {
                write!(f, "Enter the consecutive number (up to 4 digits)")
            }
            ValidationIssue::MissingTitle => write!(f, "Title is required"),
            ValidationIssue::MissingAuthor => write!(f, "Author is required"),
            ValidationIssue::MissingYear => write!(f, "Year is required"),
            ValidationIssue::MissingCountry => write!(f, "Country is required"),
            ValidationIssue::MissingFile(number) => {
                write!(f, "Select a PDF file for volume {}", number.as_ref())
            }
            ValidationIssue::RejectedFile(number, reason) => {
                write!(f, "Volume {}: {reason}", number.as_ref())
            }
            ValidationIssue::MissingUsername => write!(f, "Username is required"),
            ValidationIssue::MissingEmail => write!(f, "Email is required"),
            ValidationIssue::InvalidEmail => write!(f, "Enter a valid email address"),
            ValidationIssue::MissingPassword => write!(f, "Password is required"),
        }
    }
}

/// Every reason a step is not complete yet, in field order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn check(&mut self, condition: bool, issue: ValidationIssue) {
        if !condition {
            self.0.push(issue);
        }
    }

    pub fn extend(&mut self, other: ValidationIssues) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&ValidationIssue> {
        self.0.first()
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.0.contains(issue)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.iter()
    }

    pub fn into_checked(self) -> Result<(), ValidationIssues> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// `Ok` when nothing was collected, otherwise an `Invalid` report carrying
    /// the issues.
    pub fn into_result(self) -> error_stack::Result<(), KernelError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Report::new(KernelError::Invalid).attach(self))
        }
    }
}

impl Display for ValidationIssues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>();
        f.write_str(&messages.join("; "))
    }
}

impl From<Vec<ValidationIssue>> for ValidationIssues {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }
}
