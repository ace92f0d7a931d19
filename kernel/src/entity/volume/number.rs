use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct VolumeNumber(u32);

impl VolumeNumber {
    pub fn new(number: impl Into<u32>) -> Self {
        Self(number.into())
    }

    /// Number of the volume sitting at `index` in its list.
    pub fn at(index: usize) -> Self {
        Self(u32::try_from(index).map_or(u32::MAX, |index| index.saturating_add(1)))
    }
}
