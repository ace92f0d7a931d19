use serde::{Deserialize, Serialize};

/// Top-level collection a document is filed under. Its prefix leads every
/// consecutive code in the collection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    #[serde(rename = "MI")]
    InstitutionalMemory,
    #[serde(rename = "CG")]
    GeneralCollection,
    #[serde(rename = "J")]
    Legal,
    #[serde(rename = "R")]
    Journals,
    #[serde(rename = "H")]
    PressArchive,
}

impl Denomination {
    pub const ALL: [Denomination; 5] = [
        Denomination::InstitutionalMemory,
        Denomination::GeneralCollection,
        Denomination::Legal,
        Denomination::Journals,
        Denomination::PressArchive,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            Denomination::InstitutionalMemory => "MI",
            Denomination::GeneralCollection => "CG",
            Denomination::Legal => "J",
            Denomination::Journals => "R",
            Denomination::PressArchive => "H",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Denomination::InstitutionalMemory => "Memoria Institucional",
            Denomination::GeneralCollection => "Colección General",
            Denomination::Legal => "Jurídico",
            Denomination::Journals => "Revistas",
            Denomination::PressArchive => "Hemeroteca",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|denomination| denomination.prefix() == prefix)
    }
}
