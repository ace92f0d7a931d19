use kernel::prelude::entity::{
    CatalogEntry, CatalogPage, CatalogStatistics, Denomination, DestructCatalogEntry,
    DestructCatalogPage, DocumentType, SelectLimit, SelectOffset,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CatalogEntryDto {
    pub id: String,
    pub code: String,
    pub kind: Option<DocumentType>,
    pub denomination: Option<Denomination>,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub year: Option<String>,
    pub country: Option<String>,
    pub volume_count: usize,
}

impl From<CatalogEntry> for CatalogEntryDto {
    fn from(value: CatalogEntry) -> Self {
        let DestructCatalogEntry {
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
        } = value.into_destruct();
        Self {
            id: id.into(),
            code,
            kind,
            denomination,
            title: title.into(),
            author: author.into(),
            publisher,
            year,
            country,
            volume_count,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CatalogPageDto {
    pub entries: Vec<CatalogEntryDto>,
    pub total: usize,
}

impl From<CatalogPage> for CatalogPageDto {
    fn from(value: CatalogPage) -> Self {
        let DestructCatalogPage { entries, total } = value.into_destruct();
        Self {
            entries: entries.into_iter().map(CatalogEntryDto::from).collect(),
            total,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CatalogStatisticsDto {
    pub total: usize,
    pub books: usize,
    pub ringed_books: usize,
    pub boxes_and_folders: usize,
}

impl From<CatalogStatistics> for CatalogStatisticsDto {
    fn from(value: CatalogStatistics) -> Self {
        Self {
            total: *value.total(),
            books: *value.books(),
            ringed_books: *value.ringed_books(),
            boxes_and_folders: *value.boxes_and_folders(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchCatalogDto {
    pub search: Option<String>,
    pub kind: Option<DocumentType>,
    pub denomination: Option<Denomination>,
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}
