use crate::entity::{RegisteredDocument, Session};
use crate::wizard::DocumentSubmission;
use crate::KernelError;

/// Stores new documents in the backend.
#[async_trait::async_trait]
pub trait DocumentRegistry: 'static + Sync + Send {
    async fn register(
        &self,
        session: &Session,
        submission: &DocumentSubmission,
    ) -> error_stack::Result<RegisteredDocument, KernelError>;
}

pub trait DependOnDocumentRegistry: 'static + Sync + Send {
    type DocumentRegistry: DocumentRegistry;
    fn document_registry(&self) -> &Self::DocumentRegistry;
}
