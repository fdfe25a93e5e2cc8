//! Vessel observer trait for event logging and data collection.

use vessel_core::{AnchorState, CargoItem, Position};

/// Callbacks invoked by [`Vessel`][crate::Vessel] after each *successful*
/// mutating operation.  Failed operations are never reported here — a
/// rejected operation changes nothing and surfaces only through its
/// `Err` return.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — rowing tracker
///
/// ```rust,ignore
/// struct RowLog { legs: Vec<Position> }
///
/// impl VesselObserver for RowLog {
///     fn on_row(&mut self, _heading: f64, _speed: f64, position: Position) {
///         self.legs.push(position);
///     }
/// }
/// ```
pub trait VesselObserver {
    /// `added` passengers boarded; `aboard` is the new total.
    fn on_passengers_added(&mut self, _added: u32, _aboard: u32) {}

    /// `removed` passengers went ashore; `aboard` is the new total.
    fn on_passengers_removed(&mut self, _removed: u32, _aboard: u32) {}

    /// `item` entered the manifest; `loaded_kg` is the new total weight.
    fn on_cargo_loaded(&mut self, _item: &CargoItem, _loaded_kg: u32) {}

    /// `item` left the manifest; `loaded_kg` is the new total weight.
    fn on_cargo_unloaded(&mut self, _item: &CargoItem, _loaded_kg: u32) {}

    /// The anchor transitioned to `state`.
    fn on_anchor(&mut self, _state: AnchorState) {}

    /// A rowing leg completed; `position` is where the vessel ended up.
    fn on_row(&mut self, _heading_deg: f64, _speed: f64, _position: Position) {}
}

/// A [`VesselObserver`] that does nothing.  The default when a vessel is
/// built without an explicit sink.
pub struct NoopObserver;

impl VesselObserver for NoopObserver {}
