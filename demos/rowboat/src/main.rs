//! rowboat — minimal demo voyage for the vessel simulation.
//!
//! Boards a crew, shuffles some cargo, works the anchor, and rows two legs,
//! with every successful operation logged through `TraceObserver`.  Run with
//! `RUST_LOG=info` (the default here) to see the event stream.

use anyhow::Result;

use vessel_core::{CargoItem, VesselConfig};
use vessel_sim::{TraceObserver, Vessel};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_PASSENGERS: u32 = 4;
const MAX_WEIGHT_KG:  u32 = 200;

fn main() -> Result<()> {
    // Timestamp + level + structured fields on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = VesselConfig::new(MAX_PASSENGERS, MAX_WEIGHT_KG);
    let mut vessel = Vessel::with_observer(config, TraceObserver);

    vessel.add_passengers(2)?;

    let barrel = CargoItem::new("barrel", 100);
    vessel.load_cargo(barrel)?;

    // An over-limit crate: rejected, vessel untouched.
    if let Err(err) = vessel.load_cargo(CargoItem::new("crate", 1010)) {
        tracing::warn!(%err, "load refused");
    }

    vessel.unload_cargo("barrel")?;
    vessel.drop_anchor()?;
    vessel.raise_anchor()?;
    vessel.row(45.0, 10.0, 30.0)?;

    println!(
        "final state: {} aboard, {} kg loaded, anchor {}, position {}",
        vessel.passenger_count(),
        vessel.current_weight(),
        vessel.anchor(),
        vessel.position(),
    );
    Ok(())
}
