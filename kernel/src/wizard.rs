mod bibliography;
mod classification;
mod step;
mod submission;

pub use self::{bibliography::*, classification::*, step::*, submission::*};

use error_stack::Report;
use vodca::References;

use crate::entity::{
    current_year, Country, Denomination, DocumentType, DraftId, VolumeFile, VolumeList,
    VolumeNumber,
};
use crate::failure::SaveError;
use crate::validation::{ValidationIssue, ValidationIssues};
use crate::KernelError;

/// In-memory registration of one document, from the first field to the final
/// upload. The wizard is the only owner of its draft.
#[derive(Debug, Clone, References)]
pub struct DocumentWizard {
    id: DraftId,
    step: WizardStep,
    classification: Classification,
    bibliography: Bibliography,
    volumes: VolumeList,
    page_error: Option<String>,
    saving: bool,
    current_year: i32,
}

impl Default for DocumentWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWizard {
    pub fn new() -> Self {
        Self::with_current_year(current_year())
    }

    pub fn with_current_year(current_year: i32) -> Self {
        Self {
            id: DraftId::generate(),
            step: WizardStep::Classification,
            classification: Classification::default(),
            bibliography: Bibliography::default(),
            volumes: VolumeList::new(),
            page_error: None,
            saving: false,
            current_year,
        }
    }

    // step 1

    pub fn set_document_type(&mut self, kind: Option<DocumentType>) {
        self.classification.set_kind(kind);
    }

    pub fn set_denomination(
        &mut self,
        denomination: Option<Denomination>,
    ) -> error_stack::Result<(), KernelError> {
        self.classification.set_denomination(denomination)
    }

    pub fn set_consecutive_digits(
        &mut self,
        input: impl AsRef<str>,
    ) -> error_stack::Result<(), KernelError> {
        self.classification.set_consecutive_digits(input)
    }

    // step 2

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.bibliography.set_title(title);
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.bibliography.set_author(author);
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.bibliography.set_publisher(publisher);
    }

    pub fn set_year(&mut self, input: impl AsRef<str>) -> error_stack::Result<(), KernelError> {
        self.bibliography.set_year(input, self.current_year)
    }

    pub fn set_country(&mut self, country: Option<Country>) {
        self.bibliography.set_country(country);
    }

    pub fn add_volume(&mut self) -> error_stack::Result<VolumeNumber, KernelError> {
        self.require_step(WizardStep::Bibliography)?;
        Ok(self.volumes.add())
    }

    /// `Ok(false)` when nothing was removed because a single volume is left
    /// or `index` does not exist.
    pub fn remove_volume(&mut self, index: usize) -> error_stack::Result<bool, KernelError> {
        self.require_step(WizardStep::Bibliography)?;
        Ok(self.volumes.remove(index))
    }

    // step 3

    /// Attaches a file to the volume at `index`. A rejected file is also
    /// reported on the page-level banner, which stays up until every volume is
    /// free of rejections. A position without a volume leaves the banner alone.
    pub fn set_volume_file(
        &mut self,
        index: usize,
        file: Option<VolumeFile>,
    ) -> error_stack::Result<(), KernelError> {
        self.require_step(WizardStep::Upload)?;
        let result = self.volumes.set_file(index, file);
        match (&result, self.volumes.get(index)) {
            (_, None) => {}
            (Ok(()), Some(_)) => self.page_error = self.rejected_file_banner(),
            (Err(_), Some(volume)) => {
                self.page_error = volume
                    .validation_error()
                    .as_ref()
                    .map(|reason| {
                        ValidationIssue::RejectedFile(*volume.number(), reason.clone()).to_string()
                    })
                    .or_else(|| self.page_error.clone());
            }
        }
        result
    }

    fn rejected_file_banner(&self) -> Option<String> {
        self.volumes.iter().find_map(|volume| {
            volume.validation_error().as_ref().map(|reason| {
                ValidationIssue::RejectedFile(*volume.number(), reason.clone()).to_string()
            })
        })
    }

    // guards

    pub fn can_proceed_to_bibliography(&self) -> bool {
        self.classification.validate().is_ok()
    }

    pub fn can_proceed_to_upload(&self) -> bool {
        self.bibliography.validate().is_ok()
    }

    pub fn can_save(&self) -> bool {
        self.volumes.can_save()
    }

    pub fn can_advance(&self) -> bool {
        self.step
            .next()
            .is_some_and(|next| self.check_transition(next).is_ok())
    }

    // navigation

    pub fn advance(&mut self) -> error_stack::Result<WizardStep, KernelError> {
        let next = self.step.next().ok_or_else(|| {
            Report::new(KernelError::Invalid).attach_printable("Already at the last step")
        })?;
        self.go_to(next)
    }

    pub fn back(&mut self) -> error_stack::Result<WizardStep, KernelError> {
        let previous = self.step.previous().ok_or_else(|| {
            Report::new(KernelError::Invalid).attach_printable("Already at the first step")
        })?;
        self.go_to(previous)
    }

    pub fn go_to(&mut self, to: WizardStep) -> error_stack::Result<WizardStep, KernelError> {
        self.check_transition(to)?;
        self.step = to;
        Ok(to)
    }

    fn check_transition(&self, to: WizardStep) -> error_stack::Result<(), KernelError> {
        let transition = find_transition(self.step, to).ok_or_else(|| {
            Report::new(KernelError::Invalid)
                .attach_printable(format!("Cannot move from {} to {to}", self.step))
        })?;
        let checked = match transition.guard {
            Guard::Always => Ok(()),
            Guard::ClassificationComplete => self.classification.validate(),
            Guard::BibliographyComplete => self.bibliography.validate(),
        };
        checked.map_err(|issues| Report::new(KernelError::Invalid).attach(issues))
    }

    fn require_step(&self, step: WizardStep) -> error_stack::Result<(), KernelError> {
        if self.step == step {
            Ok(())
        } else {
            Err(Report::new(KernelError::Invalid).attach_printable(format!(
                "Only available in {step}, the wizard is at {}",
                self.step
            )))
        }
    }

    // submission

    /// Snapshot of the draft, or every reason it cannot be sent yet.
    pub fn prepare_submission(&self) -> error_stack::Result<DocumentSubmission, KernelError> {
        let mut issues = ValidationIssues::new();
        if let Err(found) = self.classification.validate() {
            issues.extend(found);
        }
        if let Err(found) = self.bibliography.validate() {
            issues.extend(found);
        }
        let mut volumes = Vec::with_capacity(self.volumes.len());
        for (index, volume) in self.volumes.iter().enumerate() {
            match (volume.file(), volume.validation_error()) {
                (_, Some(reason)) => {
                    issues.push(ValidationIssue::RejectedFile(*volume.number(), reason.clone()))
                }
                (None, None) => issues.push(ValidationIssue::MissingFile(*volume.number())),
                (Some(file), None) => {
                    volumes.push(SubmittedVolume::new(index, *volume.number(), file.clone()))
                }
            }
        }
        issues.into_result()?;

        match (
            self.classification.kind(),
            self.classification.denomination(),
            self.classification.code(),
            self.bibliography.year(),
            self.bibliography.country(),
        ) {
            (Some(kind), Some(denomination), Some(code), Some(year), Some(country)) => {
                Ok(DocumentSubmission::new(
                    self.id,
                    *kind,
                    *denomination,
                    code.clone(),
                    self.bibliography.title().clone(),
                    self.bibliography.author().clone(),
                    self.bibliography.publisher().clone(),
                    year.clone(),
                    *country,
                    volumes,
                ))
            }
            _ => Err(Report::new(KernelError::Internal)
                .attach_printable("Validated draft is missing a required field")),
        }
    }

    /// Enters the saving state and hands out the submission. Refused while a
    /// previous submission is still running, outside of step 3, or when the
    /// draft is incomplete; an incomplete draft also raises the page error.
    pub fn begin_saving(&mut self) -> error_stack::Result<DocumentSubmission, KernelError> {
        if self.saving {
            return Err(Report::new(KernelError::Concurrency)
                .attach_printable("A submission is already in progress"));
        }
        self.require_step(WizardStep::Upload)?;
        match self.prepare_submission() {
            Ok(submission) => {
                self.saving = true;
                self.page_error = None;
                Ok(submission)
            }
            Err(report) => {
                self.page_error = Some(SaveError::from_report(&report).message());
                Err(report)
            }
        }
    }

    /// Successful submission: the draft is gone and a fresh one takes its
    /// place.
    pub fn complete(&mut self) {
        *self = Self::with_current_year(self.current_year);
    }

    /// Failed submission: the draft stays as it was so it can be corrected and
    /// sent again.
    pub fn fail(&mut self, error: &SaveError) {
        self.saving = false;
        self.page_error = Some(error.message());
    }
}
