use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

pub const DEFAULT_PAGE_SIZE: i32 = 30;

/// Page size of a catalogue listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectLimit(i32);

impl SelectLimit {
    pub fn new(value: impl Into<i32>) -> Self {
        SelectLimit(value.into())
    }

    /// Negative sizes select nothing.
    pub fn as_count(&self) -> usize {
        usize::try_from(self.0).unwrap_or(0)
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectOffset(i32);

impl SelectOffset {
    pub fn new(value: impl Into<i32>) -> Self {
        SelectOffset(value.into())
    }

    /// Negative offsets start from the beginning.
    pub fn as_count(&self) -> usize {
        usize::try_from(self.0).unwrap_or(0)
    }
}
