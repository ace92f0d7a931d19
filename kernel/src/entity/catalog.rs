use destructure::Destructure;
use vodca::References;

use crate::entity::{
    Denomination, DocumentAuthor, DocumentId, DocumentTitle, DocumentType, SelectLimit,
    SelectOffset,
};

/// A stored document as listed by the catalogue.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CatalogEntry {
    id: DocumentId,
    code: String,
    kind: Option<DocumentType>,
    denomination: Option<Denomination>,
    title: DocumentTitle,
    author: DocumentAuthor,
    publisher: Option<String>,
    year: Option<String>,
    country: Option<String>,
    volume_count: usize,
}

impl CatalogEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DocumentId,
        code: String,
        kind: Option<DocumentType>,
        denomination: Option<Denomination>,
        title: DocumentTitle,
        author: DocumentAuthor,
        publisher: Option<String>,
        year: Option<String>,
        country: Option<String>,
        volume_count: usize,
    ) -> Self {
        Self {
            id,
            code,
            kind,
            denomination,
            title,
            author,
            publisher,
            year,
            country,
            volume_count,
        }
    }
}

/// Search box plus the two drop-down filters of the catalogue view. `None`
/// means "all".
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct CatalogFilter {
    search: Option<String>,
    kind: Option<DocumentType>,
    denomination: Option<Denomination>,
}

impl CatalogFilter {
    pub fn new(
        search: Option<String>,
        kind: Option<DocumentType>,
        denomination: Option<Denomination>,
    ) -> Self {
        let search = search
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());
        Self {
            search,
            kind,
            denomination,
        }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let matches_search = self.search.as_ref().map_or(true, |term| {
            let fields: [&String; 3] = [entry.title.as_ref(), entry.author.as_ref(), &entry.code];
            fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(term.as_str()))
        });
        let matches_kind = self.kind.map_or(true, |kind| entry.kind == Some(kind));
        let matches_denomination = self
            .denomination
            .map_or(true, |denomination| entry.denomination == Some(denomination));
        matches_search && matches_kind && matches_denomination
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CatalogPage {
    entries: Vec<CatalogEntry>,
    total: usize,
}

impl CatalogPage {
    /// Filters `entries` and cuts out the window described by `limit` and
    /// `offset`. `total` counts every match, not just the ones returned.
    pub fn paginate(
        entries: Vec<CatalogEntry>,
        filter: &CatalogFilter,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Self {
        let matched = entries
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect::<Vec<CatalogEntry>>();
        let total = matched.len();
        let entries = matched
            .into_iter()
            .skip(offset.as_count())
            .take(limit.as_count())
            .collect();
        Self { entries, total }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct CatalogStatistics {
    total: usize,
    books: usize,
    ringed_books: usize,
    boxes_and_folders: usize,
}

impl CatalogStatistics {
    pub fn collect<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |mut stats, entry| {
                stats.total += 1;
                match entry.kind {
                    Some(DocumentType::Book) => stats.books += 1,
                    Some(DocumentType::RingedBook) => stats.ringed_books += 1,
                    Some(DocumentType::BoxesAndFolders) => stats.boxes_and_folders += 1,
                    None => {}
                }
                stats
            })
    }
}
