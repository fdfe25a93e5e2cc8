//! The `Vessel` struct and its mutating operations.

use std::collections::HashMap;
use std::fmt;

use vessel_core::{AnchorState, CargoItem, Position, VesselConfig, VesselError, VesselResult};

use crate::{NoopObserver, VesselObserver};

/// The simulated vessel: passengers, cargo manifest, anchor, and position.
///
/// Every operation follows the same shape:
///
/// 1. **Check** — validate all preconditions against current state.
/// 2. **Mutate** — apply the full effect, or nothing at all on failure.
/// 3. **Notify** — report the success to the observer.
///
/// Single-threaded by design: the API takes `&mut self` and there is
/// exactly one owner, so no locking is needed and each operation is atomic
/// with respect to the caller.
///
/// State invariants that hold after every successful operation:
/// - `passenger_count() ≤ config().max_passengers`
/// - `current_weight()` equals the sum of manifest item weights and never
///   exceeds `config().max_weight`
/// - manifest ids are unique
/// - rowing is permitted strictly when `anchor()` is `Up`
///
/// Create via [`Vessel::new`], [`Vessel::with_observer`], or — to seed
/// non-initial state for tests — [`VesselBuilder`][crate::VesselBuilder].
pub struct Vessel<O: VesselObserver = NoopObserver> {
    // Fields are crate-private: outside this crate the only way to reach a
    // non-initial state is through the operations or the validating builder,
    // which is what keeps current_weight equal to the manifest sum.
    pub(crate) config: VesselConfig,

    /// People currently aboard.  Rowing requires at least one.
    pub(crate) passenger_count: u32,

    /// Cargo keyed by unique id.  Insertion order carries no meaning.
    pub(crate) manifest: HashMap<String, CargoItem>,

    /// Derived total of the manifest's weights, maintained incrementally.
    pub(crate) current_weight: u32,

    pub(crate) anchor: AnchorState,

    /// Last commanded heading in degrees (0° = +x axis, CCW positive).
    pub(crate) heading: f64,

    /// Last commanded rowing speed.
    pub(crate) speed: f64,

    pub(crate) position: Position,

    /// Success-event sink.  Failures never reach it.
    pub(crate) observer: O,
}

impl Vessel {
    /// A vessel with the given capacities and no event sink.
    ///
    /// Starts empty at the origin with the anchor up.
    pub fn new(config: VesselConfig) -> Vessel {
        Vessel::with_observer(config, NoopObserver)
    }
}

impl<O: VesselObserver> Vessel<O> {
    /// A fresh vessel reporting successful operations to `observer`.
    pub fn with_observer(config: VesselConfig, observer: O) -> Vessel<O> {
        Vessel {
            config,
            passenger_count: 0,
            manifest: HashMap::new(),
            current_weight: 0,
            anchor: AnchorState::Up,
            heading: 0.0,
            speed: 0.0,
            position: Position::ORIGIN,
            observer,
        }
    }

    // ── Passenger management ──────────────────────────────────────────────

    /// Board `quantity` passengers.
    ///
    /// Fails with [`VesselError::CapacityExceeded`] if the result would
    /// exceed `max_passengers`.
    pub fn add_passengers(&mut self, quantity: u32) -> VesselResult<()> {
        // Compared against remaining capacity — the sum form could overflow
        // u32 for huge quantities.  capacity - aboard cannot underflow while
        // the occupancy invariant holds.
        if quantity > self.config.max_passengers - self.passenger_count {
            return Err(VesselError::CapacityExceeded {
                requested: quantity,
                aboard:    self.passenger_count,
                capacity:  self.config.max_passengers,
            });
        }
        self.passenger_count += quantity;
        self.observer.on_passengers_added(quantity, self.passenger_count);
        Ok(())
    }

    /// Send `quantity` passengers ashore.
    ///
    /// Fails with [`VesselError::InsufficientOccupants`] if fewer than
    /// `quantity` are aboard.
    pub fn remove_passengers(&mut self, quantity: u32) -> VesselResult<()> {
        if quantity > self.passenger_count {
            return Err(VesselError::InsufficientOccupants {
                requested: quantity,
                aboard:    self.passenger_count,
            });
        }
        self.passenger_count -= quantity;
        self.observer.on_passengers_removed(quantity, self.passenger_count);
        Ok(())
    }

    // ── Cargo management ──────────────────────────────────────────────────

    /// Take `item` into the manifest.
    ///
    /// Checked in order: [`VesselError::Overweight`] if the item would push
    /// the total past `max_weight`, then [`VesselError::DuplicateCargo`] if
    /// its id is already aboard.
    pub fn load_cargo(&mut self, item: CargoItem) -> VesselResult<()> {
        // Remaining-capacity form: limit - loaded cannot underflow while the
        // weight invariant holds, and huge item weights cannot overflow.
        if item.weight() > self.config.max_weight - self.current_weight {
            return Err(VesselError::Overweight {
                item_kg:   item.weight(),
                loaded_kg: self.current_weight,
                limit_kg:  self.config.max_weight,
            });
        }
        if self.manifest.contains_key(item.id()) {
            return Err(VesselError::DuplicateCargo(item.id().to_owned()));
        }
        self.current_weight += item.weight();
        let item = self.manifest.entry(item.id().to_owned()).or_insert(item);
        self.observer.on_cargo_loaded(item, self.current_weight);
        Ok(())
    }

    /// Release the item with `id` from the manifest and return it.
    ///
    /// Fails with [`VesselError::CargoNotFound`] if no such id is aboard.
    /// The vessel drops all ownership of the returned item.
    pub fn unload_cargo(&mut self, id: &str) -> VesselResult<CargoItem> {
        let item = self
            .manifest
            .remove(id)
            .ok_or_else(|| VesselError::CargoNotFound(id.to_owned()))?;
        self.current_weight -= item.weight();
        self.observer.on_cargo_unloaded(&item, self.current_weight);
        Ok(item)
    }

    // ── Anchor state machine ──────────────────────────────────────────────

    /// Transition Up → Down.  Fails with [`VesselError::AnchorAlreadyDown`]
    /// if the anchor is already set.
    pub fn drop_anchor(&mut self) -> VesselResult<()> {
        if self.anchor == AnchorState::Down {
            return Err(VesselError::AnchorAlreadyDown);
        }
        self.anchor = AnchorState::Down;
        self.observer.on_anchor(self.anchor);
        Ok(())
    }

    /// Transition Down → Up.  Fails with [`VesselError::AnchorAlreadyUp`]
    /// if the anchor is already stowed.
    pub fn raise_anchor(&mut self) -> VesselResult<()> {
        if self.anchor == AnchorState::Up {
            return Err(VesselError::AnchorAlreadyUp);
        }
        self.anchor = AnchorState::Up;
        self.observer.on_anchor(self.anchor);
        Ok(())
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Row along `heading_deg` at `speed` for `duration_secs`.
    ///
    /// Preconditions, checked in this order (the order is contractual —
    /// callers see the first violated condition):
    ///
    /// 1. anchor up, else [`VesselError::AnchorDown`];
    /// 2. at least one passenger aboard, else [`VesselError::NoRowers`].
    ///
    /// On success the heading and speed are recorded as current state and
    /// the position advances by `speed * duration_secs` along the heading.
    /// `duration_secs` only scales distance; no simulated time is tracked.
    pub fn row(&mut self, heading_deg: f64, speed: f64, duration_secs: f64) -> VesselResult<()> {
        if !self.anchor.is_up() {
            return Err(VesselError::AnchorDown);
        }
        if self.passenger_count == 0 {
            return Err(VesselError::NoRowers);
        }

        self.heading = heading_deg;
        self.speed = speed;
        self.position = self.position.displaced(heading_deg, speed * duration_secs);
        self.observer.on_row(heading_deg, speed, self.position);
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> VesselConfig {
        self.config
    }

    #[inline]
    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    /// Total manifest weight in kilograms.
    #[inline]
    pub fn current_weight(&self) -> u32 {
        self.current_weight
    }

    /// The loaded item with `id`, if aboard.
    pub fn cargo(&self, id: &str) -> Option<&CargoItem> {
        self.manifest.get(id)
    }

    pub fn has_cargo(&self, id: &str) -> bool {
        self.manifest.contains_key(id)
    }

    /// The full manifest, keyed by cargo id.
    pub fn manifest(&self) -> &HashMap<String, CargoItem> {
        &self.manifest
    }

    #[inline]
    pub fn anchor(&self) -> AnchorState {
        self.anchor
    }

    /// Last commanded heading in degrees.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Last commanded rowing speed.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Borrow the observer, e.g. to inspect a recording sink in tests.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the vessel and hand back its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

// Manual impl: the observer is an arbitrary sink and need not be Debug,
// so it is left out of the listing.
impl<O: VesselObserver> fmt::Debug for Vessel<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vessel")
            .field("config", &self.config)
            .field("passenger_count", &self.passenger_count)
            .field("manifest", &self.manifest)
            .field("current_weight", &self.current_weight)
            .field("anchor", &self.anchor)
            .field("heading", &self.heading)
            .field("speed", &self.speed)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
