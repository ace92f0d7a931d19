mod file;
mod list;
mod number;

pub use self::{file::*, list::*, number::*};
use vodca::References;

/// One scanned sub-unit of a document ("tomo").
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Volume {
    number: VolumeNumber,
    file: Option<VolumeFile>,
    validation_error: Option<String>,
}

impl Volume {
    pub fn new(number: VolumeNumber) -> Self {
        Self {
            number,
            file: None,
            validation_error: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.file.is_some() && self.validation_error.is_none()
    }
}
