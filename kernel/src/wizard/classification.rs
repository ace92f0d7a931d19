use error_stack::Report;
use vodca::References;

use crate::entity::{ConsecutiveCode, Denomination, DocumentType};
use crate::validation::{ValidationIssue, ValidationIssues};
use crate::KernelError;

/// Fields of step 1.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct Classification {
    kind: Option<DocumentType>,
    denomination: Option<Denomination>,
    code: Option<ConsecutiveCode>,
}

impl Classification {
    pub fn set_kind(&mut self, kind: Option<DocumentType>) {
        self.kind = kind;
    }

    /// A denomination can only be picked once the type is known. Any change
    /// starts the code over from the bare prefix.
    pub fn set_denomination(
        &mut self,
        denomination: Option<Denomination>,
    ) -> error_stack::Result<(), KernelError> {
        if denomination.is_some() && self.kind.is_none() {
            return Err(Report::new(KernelError::Invalid)
                .attach(ValidationIssues::from(vec![ValidationIssue::MissingType])));
        }
        self.denomination = denomination;
        self.code = denomination.map(ConsecutiveCode::new);
        Ok(())
    }

    pub fn set_consecutive_digits(
        &mut self,
        input: impl AsRef<str>,
    ) -> error_stack::Result<(), KernelError> {
        let Some(denomination) = self.denomination else {
            return Err(Report::new(KernelError::Invalid)
                .attach(ValidationIssues::from(vec![ValidationIssue::MissingDenomination])));
        };
        self.code = Some(ConsecutiveCode::with_digits(denomination, input));
        Ok(())
    }

    /// Full code as shown to the user, empty while no denomination is chosen.
    pub fn code_text(&self) -> String {
        self.code
            .as_ref()
            .map(ConsecutiveCode::as_code)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationIssues> {
        let mut issues = ValidationIssues::new();
        issues.check(self.kind.is_some(), ValidationIssue::MissingType);
        issues.check(
            self.denomination.is_some(),
            ValidationIssue::MissingDenomination,
        );
        issues.check(
            self.code.as_ref().is_some_and(ConsecutiveCode::has_number),
            ValidationIssue::MissingConsecutiveNumber,
        );
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod test {
    use super::Classification;
    use crate::entity::{Denomination, DocumentType};
    use crate::validation::ValidationIssue;

    #[test]
    fn denomination_change_clears_digits() {
        let mut classification = Classification::default();
        classification.set_kind(Some(DocumentType::Book));
        classification
            .set_denomination(Some(Denomination::Legal))
            .unwrap();
        classification.set_consecutive_digits("42").unwrap();
        assert_eq!(classification.code_text(), "J42");

        classification
            .set_denomination(Some(Denomination::Journals))
            .unwrap();
        assert_eq!(classification.code_text(), "R");

        classification
            .set_denomination(Some(Denomination::Journals))
            .unwrap();
        assert_eq!(classification.code_text(), "R");

        classification.set_denomination(None).unwrap();
        assert_eq!(classification.code_text(), "");
    }

    #[test]
    fn denomination_requires_type() {
        let mut classification = Classification::default();
        assert!(classification
            .set_denomination(Some(Denomination::Legal))
            .is_err());
        assert!(classification.denomination().is_none());
    }

    #[test]
    fn digits_require_denomination() {
        let mut classification = Classification::default();
        classification.set_kind(Some(DocumentType::Book));
        assert!(classification.set_consecutive_digits("12").is_err());
        assert!(classification.code().is_none());
    }

    #[test]
    fn validation_lists_every_missing_field() {
        let issues = Classification::default().validate().unwrap_err();
        assert!(issues.contains(&ValidationIssue::MissingType));
        assert!(issues.contains(&ValidationIssue::MissingDenomination));
        assert!(issues.contains(&ValidationIssue::MissingConsecutiveNumber));
    }
}
