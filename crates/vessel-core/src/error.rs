//! The single error family for all vessel operations.
//!
//! Every precondition violation is reported synchronously through one of
//! these variants; no error is fatal, and a failed operation always leaves
//! the vessel's observable state exactly as it was.

use thiserror::Error;

/// A rejected vessel operation.
#[derive(Debug, Error, PartialEq)]
pub enum VesselError {
    #[error("too many passengers: {requested} requested with {aboard} of {capacity} aboard")]
    CapacityExceeded {
        requested: u32,
        aboard:    u32,
        capacity:  u32,
    },

    #[error("fewer people on board: cannot remove {requested} with {aboard} aboard")]
    InsufficientOccupants { requested: u32, aboard: u32 },

    #[error("too much cargo: {item_kg} kg would put {loaded_kg} kg over the {limit_kg} kg limit")]
    Overweight {
        item_kg:   u32,
        loaded_kg: u32,
        limit_kg:  u32,
    },

    #[error("cargo {0} already on board")]
    DuplicateCargo(String),

    #[error("cargo {0} not on board")]
    CargoNotFound(String),

    #[error("anchor is already down")]
    AnchorAlreadyDown,

    #[error("anchor is already up")]
    AnchorAlreadyUp,

    #[error("anchor is down, cannot row")]
    AnchorDown,

    #[error("there is no one to row")]
    NoRowers,
}

/// Shorthand result type for all vessel crates.
pub type VesselResult<T> = Result<T, VesselError>;
