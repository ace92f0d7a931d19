use kernel::prelude::entity::{DestructRegisteredDocument, RegisteredDocument};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RegisteredDocumentDto {
    pub id: Option<String>,
    pub code: String,
}

impl From<RegisteredDocument> for RegisteredDocumentDto {
    fn from(value: RegisteredDocument) -> Self {
        let DestructRegisteredDocument { id, code } = value.into_destruct();
        Self {
            id: id.map(String::from),
            code: code.as_code(),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{
        ConsecutiveCode, Denomination, DocumentId, RegisteredDocument,
    };

    use super::RegisteredDocumentDto;

    #[test]
    fn registered_document_flattens_to_text() {
        let code = ConsecutiveCode::with_digits(Denomination::Journals, "7");
        let dto = RegisteredDocumentDto::from(RegisteredDocument::new(
            Some(DocumentId::new("31")),
            code.clone(),
        ));
        assert_eq!(dto.id.as_deref(), Some("31"));
        assert_eq!(dto.code, code.as_code());

        let dto = RegisteredDocumentDto::from(RegisteredDocument::new(None, code));
        assert!(dto.id.is_none());
    }
}
