//! Fluent, validating builder for seeding a `Vessel` with non-initial state.
//!
//! Normal operation never mutates `current_weight` or `passenger_count`
//! directly — they are derived through the operations, which is what keeps
//! the weight-equals-manifest-sum invariant honest.  Tests and scenario
//! setups still need to start mid-state, so the builder re-validates every
//! invariant at `build` time with the same error variants the operations
//! use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vessel_core::{AnchorState, CargoItem, VesselConfig};
//! use vessel_sim::VesselBuilder;
//!
//! let vessel = VesselBuilder::new(VesselConfig::new(4, 300))
//!     .passengers(2)
//!     .cargo(CargoItem::new("c1", 100))
//!     .anchor(AnchorState::Down)
//!     .build()?;
//! ```

use std::collections::HashMap;

use vessel_core::{AnchorState, CargoItem, Position, VesselConfig, VesselError, VesselResult};

use crate::{NoopObserver, Vessel, VesselObserver};

/// Builder for [`Vessel`] starting from arbitrary (but valid) state.
pub struct VesselBuilder {
    config:     VesselConfig,
    passengers: u32,
    cargo:      Vec<CargoItem>,
    anchor:     AnchorState,
    heading:    f64,
    position:   Position,
}

impl VesselBuilder {
    /// Start from the default state: empty, anchor up, at the origin.
    pub fn new(config: VesselConfig) -> Self {
        Self {
            config,
            passengers: 0,
            cargo:      Vec::new(),
            anchor:     AnchorState::Up,
            heading:    0.0,
            position:   Position::ORIGIN,
        }
    }

    /// Seed `n` passengers aboard.
    pub fn passengers(mut self, n: u32) -> Self {
        self.passengers = n;
        self
    }

    /// Seed one cargo item into the manifest.  Repeatable.
    pub fn cargo(mut self, item: CargoItem) -> Self {
        self.cargo.push(item);
        self
    }

    pub fn anchor(mut self, state: AnchorState) -> Self {
        self.anchor = state;
        self
    }

    pub fn heading(mut self, heading_deg: f64) -> Self {
        self.heading = heading_deg;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Build with no event sink.
    pub fn build(self) -> VesselResult<Vessel> {
        self.build_with_observer(NoopObserver)
    }

    /// Build, reporting subsequent successful operations to `observer`.
    ///
    /// Seeding is validated, not replayed: the observer sees no events for
    /// the seeded state itself.
    pub fn build_with_observer<O: VesselObserver>(self, observer: O) -> VesselResult<Vessel<O>> {
        if self.passengers > self.config.max_passengers {
            return Err(VesselError::CapacityExceeded {
                requested: self.passengers,
                aboard:    0,
                capacity:  self.config.max_passengers,
            });
        }

        // Admit seeded cargo under the same checks (and errors) load_cargo
        // applies, so a seeded state is always one the operations could
        // have produced.
        let mut manifest = HashMap::with_capacity(self.cargo.len());
        let mut loaded_kg = 0u32;
        for item in self.cargo {
            // Remaining-capacity form, as in load_cargo: no overflow for
            // huge seeded weights.
            if item.weight() > self.config.max_weight - loaded_kg {
                return Err(VesselError::Overweight {
                    item_kg:   item.weight(),
                    loaded_kg,
                    limit_kg:  self.config.max_weight,
                });
            }
            if manifest.contains_key(item.id()) {
                return Err(VesselError::DuplicateCargo(item.id().to_owned()));
            }
            loaded_kg += item.weight();
            manifest.insert(item.id().to_owned(), item);
        }

        Ok(Vessel {
            config: self.config,
            passenger_count: self.passengers,
            manifest,
            current_weight: loaded_kg,
            anchor: self.anchor,
            heading: self.heading,
            speed: 0.0,
            position: self.position,
            observer,
        })
    }
}
