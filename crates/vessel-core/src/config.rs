//! Fixed vessel capacities.

/// The two capacities fixed at construction time.
///
/// Typically embedded in application code or loaded from a TOML/JSON file
/// (enable the `serde` feature) and passed to `Vessel::new` or
/// `VesselBuilder::new` in `vessel-sim`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselConfig {
    /// Maximum number of passengers aboard at once.  Must be positive.
    pub max_passengers: u32,

    /// Maximum total cargo weight in kilograms.  Must be positive.
    pub max_weight: u32,
}

impl VesselConfig {
    #[inline]
    pub fn new(max_passengers: u32, max_weight: u32) -> Self {
        Self { max_passengers, max_weight }
    }
}
