//! `tracing`-backed observer.
//!
//! Emits one INFO event per successful operation with structured fields for
//! the action and the resulting state.  Timestamps, severity formatting, and
//! filtering are the subscriber's job — install one in the application (the
//! `rowboat` demo uses `tracing_subscriber::fmt`).

use tracing::info;
use vessel_core::{AnchorState, CargoItem, Position};

use crate::VesselObserver;

/// Forwards every vessel event to the active `tracing` subscriber.
pub struct TraceObserver;

impl VesselObserver for TraceObserver {
    fn on_passengers_added(&mut self, added: u32, aboard: u32) {
        info!(added, aboard, "passengers boarded");
    }

    fn on_passengers_removed(&mut self, removed: u32, aboard: u32) {
        info!(removed, aboard, "passengers went ashore");
    }

    fn on_cargo_loaded(&mut self, item: &CargoItem, loaded_kg: u32) {
        info!(id = item.id(), weight_kg = item.weight(), loaded_kg, "cargo loaded");
    }

    fn on_cargo_unloaded(&mut self, item: &CargoItem, loaded_kg: u32) {
        info!(id = item.id(), weight_kg = item.weight(), loaded_kg, "cargo unloaded");
    }

    fn on_anchor(&mut self, state: AnchorState) {
        match state {
            AnchorState::Down => info!("anchor dropped"),
            AnchorState::Up   => info!("anchor raised"),
        }
    }

    fn on_row(&mut self, heading_deg: f64, speed: f64, position: Position) {
        info!(heading_deg, speed, %position, "rowing complete");
    }
}
