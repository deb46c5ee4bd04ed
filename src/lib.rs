//! Fleet Simulation Library
//!
//! A headless fleet telemetry simulator: a timer-driven live-state loop that
//! drifts vehicle positions and republishes immutable snapshots, plus pure
//! aggregate views over those snapshots.

pub mod fleet;
