//! `vessel-sim` — the vessel state machine for the vessel simulation.
//!
//! A [`Vessel`] owns a passenger count, a cargo manifest, an anchor state,
//! and a 2D kinematic position, and exposes mutating operations with
//! precondition checks.  Every operation is atomic with respect to the
//! caller: it either fully applies its effect or fails with a
//! [`VesselError`][vessel_core::VesselError] leaving state unchanged.
//!
//! Successful mutations are reported through the [`VesselObserver`] sink so
//! the core logic stays testable without coupling to a logging backend.
//! [`TraceObserver`] is the batteries-included sink that forwards every
//! event to `tracing`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vessel_core::{CargoItem, VesselConfig};
//! use vessel_sim::{TraceObserver, Vessel};
//!
//! let mut vessel = Vessel::with_observer(VesselConfig::new(4, 300), TraceObserver);
//! vessel.add_passengers(2)?;
//! vessel.load_cargo(CargoItem::new("c1", 100))?;
//! vessel.row(0.0, 10.0, 5.0)?;   // → position (50, 0)
//! ```

pub mod builder;
pub mod observer;
pub mod trace;
pub mod vessel;


pub use builder::VesselBuilder;
pub use observer::{NoopObserver, VesselObserver};
pub use trace::TraceObserver;
pub use vessel::Vessel;
