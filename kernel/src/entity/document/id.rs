use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Identifier the backend assigned to a stored document.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
