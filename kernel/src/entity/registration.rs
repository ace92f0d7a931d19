use std::fmt::{Display, Formatter};

use destructure::Destructure;
use uuid::Uuid;
use vodca::{AsRefln, Fromln, References};

use crate::entity::{ConsecutiveCode, DocumentId};

/// Correlates the log lines of one wizard session. Never leaves the client.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct DraftId(Uuid);

impl DraftId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for DraftId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// What the backend confirmed after storing a document.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct RegisteredDocument {
    id: Option<DocumentId>,
    code: ConsecutiveCode,
}

impl RegisteredDocument {
    pub fn new(id: Option<DocumentId>, code: ConsecutiveCode) -> Self {
        Self { id, code }
    }
}
