//! An identified, weighted unit of freight.

use std::fmt;

/// A single cargo item: a unique string id plus a weight in kilograms.
///
/// Immutable once constructed — the fields are private and there are no
/// setters, so an item in a manifest can never drift from the weight it was
/// admitted under.  Weight is expected to be positive; a zero-weight item is
/// accepted but pointless.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CargoItem {
    id:     String,
    weight: u32,
}

impl CargoItem {
    pub fn new(id: impl Into<String>, weight: u32) -> Self {
        Self { id: id.into(), weight }
    }

    /// The manifest key.  Unique per vessel while loaded.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight in kilograms.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl fmt::Display for CargoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cargo {} ({} kg)", self.id, self.weight)
    }
}
