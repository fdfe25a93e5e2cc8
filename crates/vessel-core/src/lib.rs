//! `vessel-core` — foundational types for the vessel simulation.
//!
//! This crate is a dependency of `vessel-sim` and intentionally has no
//! intra-workspace dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`anchor`]   | `AnchorState` (up / down)                      |
//! | [`cargo`]    | `CargoItem` (identified, weighted freight)     |
//! | [`config`]   | `VesselConfig` (fixed capacities)              |
//! | [`position`] | `Position`, heading-based displacement         |
//! | [`error`]    | `VesselError`, `VesselResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod anchor;
pub mod cargo;
pub mod config;
pub mod error;
pub mod position;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use anchor::AnchorState;
pub use cargo::CargoItem;
pub use config::VesselConfig;
pub use error::{VesselError, VesselResult};
pub use position::Position;
