use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::Value;

use kernel::interface::query::DocumentCatalog;
use kernel::prelude::entity::{
    CatalogEntry, ConsecutiveCode, Denomination, DocumentAuthor, DocumentId, DocumentTitle,
    DocumentType, Session,
};
use kernel::KernelError;

use crate::api::{rejection, scalar, LibraryApi, DOCUMENTS};
use crate::error::ConvertError;

/// Listing bodies come either bare or wrapped in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Rows(Vec<CatalogRow>),
    Wrapped { data: Vec<CatalogRow> },
}

impl CatalogBody {
    fn into_rows(self) -> Vec<CatalogRow> {
        match self {
            CatalogBody::Rows(rows) | CatalogBody::Wrapped { data: rows } => rows,
        }
    }
}

#[derive(Deserialize)]
struct CatalogRow {
    id: Option<Value>,
    tipo_documento: Option<String>,
    denominacion: Option<String>,
    #[serde(alias = "consecutivo")]
    denominacion_numerica: Option<String>,
    titulo: Option<String>,
    autor: Option<String>,
    editorial: Option<String>,
    #[serde(rename = "año")]
    year: Option<Value>,
    pais: Option<String>,
    tomos: Option<Vec<Value>>,
}

impl CatalogRow {
    /// `None` for a row the backend sent without an id.
    fn into_entry(self) -> Option<CatalogEntry> {
        let id = self.id.as_ref().and_then(scalar)?;
        let code = self.denominacion_numerica.unwrap_or_default();
        let denomination = self
            .denominacion
            .as_deref()
            .and_then(Denomination::from_prefix)
            .or_else(|| ConsecutiveCode::parse(&code).map(|code| *code.denomination()));
        Some(CatalogEntry::new(
            DocumentId::new(id),
            code,
            self.tipo_documento.as_deref().and_then(DocumentType::from_code),
            denomination,
            DocumentTitle::new(self.titulo.unwrap_or_default()),
            DocumentAuthor::new(self.autor.unwrap_or_default()),
            self.editorial.filter(|publisher| !publisher.trim().is_empty()),
            self.year.as_ref().and_then(scalar),
            self.pais,
            self.tomos.map_or(1, |volumes| volumes.len()),
        ))
    }
}

#[async_trait::async_trait]
impl DocumentCatalog for LibraryApi {
    #[tracing::instrument(skip_all)]
    async fn find_all(
        &self,
        session: &Session,
    ) -> error_stack::Result<Vec<CatalogEntry>, KernelError> {
        let response = self
            .client
            .get(self.config.endpoint(DOCUMENTS))
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await
            .convert_error()?;
        let status = response.status();
        if !status.is_success() {
            return Err(rejection(response).await);
        }
        let body = response.json::<CatalogBody>().await.convert_error()?;
        let rows = body.into_rows();
        let received = rows.len();
        let entries = rows
            .into_iter()
            .filter_map(CatalogRow::into_entry)
            .collect::<Vec<_>>();
        if entries.len() < received {
            tracing::warn!(
                skipped = received - entries.len(),
                "Catalogue rows without an id were skipped"
            );
        }
        tracing::debug!(count = entries.len(), "Catalogue fetched");
        Ok(entries)
    }
}
