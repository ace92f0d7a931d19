use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DocumentPublisher(String);

impl DocumentPublisher {
    pub fn new(publisher: impl Into<String>) -> Self {
        Self(publisher.into())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}
