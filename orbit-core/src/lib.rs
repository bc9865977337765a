//! Planar gravity core: a dominant fixed mass, a few orbiting bodies and
//! a flyby that loops back into view.
//!
//! Main components:
//! - [`body`] — point masses and their presentation attributes.
//! - [`trail`] — bounded position history per body.
//! - [`forces`] — pairwise gravity with softening and a safe-approach clamp.
//! - [`accel_buffer`] — per-body accelerations shared between phases.
//! - [`integrator`] — semi-implicit Euler step and time reversal.
//! - [`respawn`] — viewport bounds and the loop-on-exit rule.
//! - [`phases`] — the read-only force phase and the mutating motion phase.
//! - [`simulation`] — owned state and the per-frame entry point.
//! - [`scenario`] — the canonical starting configuration.
//! - [`render`] — per-body snapshots for the drawing side.
//! - [`config`] — tunable constants.
//! - [`types`] — shared type aliases and IDs.

pub mod accel_buffer;
pub mod body;
pub mod config;
pub mod forces;
pub mod integrator;
pub mod phases;
pub mod render;
pub mod respawn;
pub mod scenario;
pub mod simulation;
pub mod trail;
pub mod types;
