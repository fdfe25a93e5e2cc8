//! Anchor state machine states.
//!
//! Two states, no intermediate "dropping" — raising and dropping are
//! modeled as instantaneous transitions.  The vessel may only row while
//! the anchor is up.

/// Whether the anchor is stowed or holding the vessel in place.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorState {
    /// Anchor stowed; the vessel is free to move.  Initial state.
    #[default]
    Up,
    /// Anchor set; the vessel is immobilized.
    Down,
}

impl AnchorState {
    /// `true` exactly when rowing is permitted.
    #[inline]
    pub fn is_up(self) -> bool {
        matches!(self, AnchorState::Up)
    }

    /// Human-readable label, useful for log event fields.
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorState::Up   => "up",
            AnchorState::Down => "down",
        }
    }
}

impl std::fmt::Display for AnchorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
