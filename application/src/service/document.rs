use kernel::interface::update::{DependOnDocumentRegistry, DocumentRegistry};
use kernel::prelude::entity::Session;
use kernel::prelude::failure::SaveError;
use kernel::prelude::wizard::DocumentWizard;
use kernel::KernelError;

use crate::transfer::RegisteredDocumentDto;

#[async_trait::async_trait]
pub trait RegisterDocumentService: 'static + Sync + Send + DependOnDocumentRegistry {
    /// Sends the wizard's draft as one request. The draft is replaced by a
    /// fresh one only when the backend confirms the creation, otherwise it is
    /// kept with the failure shown as its page error.
    async fn register_document(
        &self,
        session: &Session,
        wizard: &mut DocumentWizard,
    ) -> error_stack::Result<RegisteredDocumentDto, KernelError> {
        let submission = wizard.begin_saving()?;
        let draft = *submission.draft();
        tracing::info!(%draft, code = %submission.code(), volumes = submission.volumes().len(), "Registering document");

        match self.document_registry().register(session, &submission).await {
            Ok(registered) => {
                tracing::info!(%draft, "Document registered");
                wizard.complete();
                Ok(RegisteredDocumentDto::from(registered))
            }
            Err(report) => {
                let error = SaveError::from_report(&report);
                tracing::warn!(%draft, "Registration failed: {error}");
                wizard.fail(&error);
                Err(report)
            }
        }
    }
}

impl<T> RegisterDocumentService for T where T: DependOnDocumentRegistry {}
