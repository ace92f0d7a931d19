use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "libro")]
    Book,
    #[serde(rename = "libro-anillado")]
    RingedBook,
    #[serde(rename = "azs")]
    BoxesAndFolders,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Book,
        DocumentType::RingedBook,
        DocumentType::BoxesAndFolders,
    ];

    /// Value of the `tipo_documento` form field.
    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::Book => "libro",
            DocumentType::RingedBook => "libro-anillado",
            DocumentType::BoxesAndFolders => "azs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Book => "Libro",
            DocumentType::RingedBook => "Libro Anillado",
            DocumentType::BoxesAndFolders => "AZS",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

#[cfg(test)]
mod test {
    use super::DocumentType;

    #[test]
    fn codes_resolve_back() {
        for kind in DocumentType::ALL {
            assert_eq!(DocumentType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DocumentType::from_code("Libro"), None);
    }
}
