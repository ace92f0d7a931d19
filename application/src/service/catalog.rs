use kernel::interface::query::{DependOnDocumentCatalog, DocumentCatalog};
use kernel::prelude::entity::{CatalogFilter, CatalogPage, CatalogStatistics, Session};
use kernel::KernelError;

use crate::transfer::{CatalogPageDto, CatalogStatisticsDto, SearchCatalogDto};

#[async_trait::async_trait]
pub trait SearchCatalogService: 'static + Sync + Send + DependOnDocumentCatalog {
    async fn search_catalog(
        &self,
        session: &Session,
        dto: SearchCatalogDto,
    ) -> error_stack::Result<CatalogPageDto, KernelError> {
        let entries = self.document_catalog().find_all(session).await?;
        let filter = CatalogFilter::new(dto.search, dto.kind, dto.denomination);
        let page = CatalogPage::paginate(entries, &filter, &dto.limit, &dto.offset);
        tracing::debug!(total = page.total(), "Catalogue searched");
        Ok(CatalogPageDto::from(page))
    }
}

impl<T> SearchCatalogService for T where T: DependOnDocumentCatalog {}

#[async_trait::async_trait]
pub trait CatalogStatisticsService: 'static + Sync + Send + DependOnDocumentCatalog {
    async fn catalog_statistics(
        &self,
        session: &Session,
    ) -> error_stack::Result<CatalogStatisticsDto, KernelError> {
        let entries = self.document_catalog().find_all(session).await?;
        Ok(CatalogStatisticsDto::from(CatalogStatistics::collect(
            &entries,
        )))
    }
}

impl<T> CatalogStatisticsService for T where T: DependOnDocumentCatalog {}
