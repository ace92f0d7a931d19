use vodca::References;

use crate::entity::{
    ConsecutiveCode, Country, Denomination, DocumentAuthor, DocumentPublisher, DocumentTitle,
    DocumentType, DraftId, PublicationYear, VolumeFile, VolumeNumber,
};

pub const FIELD_DOCUMENT_TYPE: &str = "tipo_documento";
pub const FIELD_DENOMINATION: &str = "denominacion";
pub const FIELD_CODE: &str = "denominacion_numerica";
pub const FIELD_TITLE: &str = "titulo";
pub const FIELD_AUTHOR: &str = "autor";
pub const FIELD_PUBLISHER: &str = "editorial";
pub const FIELD_YEAR: &str = "año";
pub const FIELD_COUNTRY: &str = "pais";

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct SubmittedVolume {
    index: usize,
    number: VolumeNumber,
    file: VolumeFile,
}

impl SubmittedVolume {
    pub fn new(index: usize, number: VolumeNumber, file: VolumeFile) -> Self {
        Self {
            index,
            number,
            file,
        }
    }

    pub fn number_field(&self) -> String {
        format!("tomos[{}][numero]", self.index)
    }

    pub fn file_field(&self) -> String {
        format!("tomos[{}][archivo]", self.index)
    }

    pub fn number_value(&self) -> String {
        self.number.as_ref().to_string()
    }
}

/// Frozen copy of a complete draft, ready to be encoded as one multipart
/// request.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct DocumentSubmission {
    draft: DraftId,
    kind: DocumentType,
    denomination: Denomination,
    code: ConsecutiveCode,
    title: DocumentTitle,
    author: DocumentAuthor,
    publisher: Option<DocumentPublisher>,
    year: PublicationYear,
    country: Country,
    volumes: Vec<SubmittedVolume>,
}

impl DocumentSubmission {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        draft: DraftId,
        kind: DocumentType,
        denomination: Denomination,
        code: ConsecutiveCode,
        title: DocumentTitle,
        author: DocumentAuthor,
        publisher: Option<DocumentPublisher>,
        year: PublicationYear,
        country: Country,
        volumes: Vec<SubmittedVolume>,
    ) -> Self {
        Self {
            draft,
            kind,
            denomination,
            code,
            title,
            author,
            publisher,
            year,
            country,
            volumes,
        }
    }

    /// Scalar form fields in the order they are sent.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FIELD_DOCUMENT_TYPE, self.kind.code().to_string()),
            (FIELD_DENOMINATION, self.denomination.prefix().to_string()),
            (FIELD_CODE, self.code.as_code()),
            (FIELD_TITLE, self.title.as_ref().trim().to_string()),
            (FIELD_AUTHOR, self.author.as_ref().trim().to_string()),
            (
                FIELD_PUBLISHER,
                self.publisher
                    .as_ref()
                    .map(|publisher| publisher.as_ref().trim().to_string())
                    .unwrap_or_default(),
            ),
            (FIELD_YEAR, self.year.as_ref().clone()),
            (FIELD_COUNTRY, self.country.name().to_string()),
        ]
    }
}
