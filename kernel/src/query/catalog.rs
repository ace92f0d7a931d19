use crate::entity::{CatalogEntry, Session};
use crate::KernelError;

#[async_trait::async_trait]
pub trait DocumentCatalog: 'static + Sync + Send {
    async fn find_all(
        &self,
        session: &Session,
    ) -> error_stack::Result<Vec<CatalogEntry>, KernelError>;
}

pub trait DependOnDocumentCatalog: 'static + Sync + Send {
    type DocumentCatalog: DocumentCatalog;
    fn document_catalog(&self) -> &Self::DocumentCatalog;
}
