use vodca::References;

use crate::entity::{Country, DocumentAuthor, DocumentPublisher, DocumentTitle, PublicationYear};
use crate::validation::{ValidationIssue, ValidationIssues};
use crate::KernelError;

/// Fields of step 2, apart from the volume list.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Bibliography {
    title: DocumentTitle,
    author: DocumentAuthor,
    publisher: Option<DocumentPublisher>,
    year: Option<PublicationYear>,
    country: Option<Country>,
}

impl Default for Bibliography {
    fn default() -> Self {
        Self {
            title: DocumentTitle::new(""),
            author: DocumentAuthor::new(""),
            publisher: None,
            year: None,
            country: None,
        }
    }
}

impl Bibliography {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = DocumentTitle::new(title);
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = DocumentAuthor::new(author);
    }

    /// Blank input clears the publisher.
    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        let publisher = DocumentPublisher::new(publisher);
        self.publisher = (!publisher.is_blank()).then_some(publisher);
    }

    /// An invalid year leaves the field empty.
    pub fn set_year(
        &mut self,
        input: impl AsRef<str>,
        current_year: i32,
    ) -> error_stack::Result<(), KernelError> {
        match PublicationYear::new(input, current_year) {
            Ok(year) => {
                self.year = Some(year);
                Ok(())
            }
            Err(report) => {
                self.year = None;
                Err(report)
            }
        }
    }

    pub fn clear_year(&mut self) {
        self.year = None;
    }

    pub fn set_country(&mut self, country: Option<Country>) {
        self.country = country;
    }

    pub fn validate(&self) -> Result<(), ValidationIssues> {
        let mut issues = ValidationIssues::new();
        issues.check(!self.title.is_blank(), ValidationIssue::MissingTitle);
        issues.check(!self.author.is_blank(), ValidationIssue::MissingAuthor);
        issues.check(self.year.is_some(), ValidationIssue::MissingYear);
        issues.check(self.country.is_some(), ValidationIssue::MissingCountry);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
