//! The two phases of a simulation step.
//!
//! Every frame runs:
//! 1. [`force_phase`] — read-only pass: the net acceleration of every body
//!    is computed from the same position snapshot and stored in an
//!    [`AccelBuffer`].
//! 2. [`motion_phase`] — mutating pass, body by body in stable order:
//!    integrate, record the trail point, then apply the respawn rule.
//!
//! The borrow split enforces the ordering: the force phase only gets
//! `&[Body]`, so no velocity or position can change until every
//! acceleration has been evaluated.

use crate::{
    accel_buffer::AccelBuffer,
    body::Body,
    config::Config,
    forces,
    integrator::{integrate, record_trail},
    respawn::{Viewport, respawn_if_exited},
    types::BodyId,
};

/// Computes the net acceleration of every body into `acc`.
///
/// ### Parameters
/// - `bodies` - The full body set; only positions and masses are read.
/// - `cfg` - Force law constants.
/// - `acc` - Scratch buffer; resized to `bodies.len()` and overwritten.
pub fn force_phase(bodies: &[Body], cfg: &Config, acc: &mut AccelBuffer) {
    forces::accumulate_accelerations(bodies, cfg, acc);
}

/// Moves every body using the accelerations from [`force_phase`].
///
/// For each body, in order:
///
/// 1. [`integrate`] — kick the velocity, drift the position.
/// 2. [`record_trail`] — append the new position to the trail, capped at
///    `cfg.trail_len`.
/// 3. [`respawn_if_exited`] — reset looping bodies that left the
///    extended viewport. This runs after the trail point is recorded and
///    clears it again, so a respawned body starts with an empty trail.
///
/// ### Parameters
/// - `bodies` - Body set to mutate.
/// - `acc` - Accelerations for this step, one per body.
/// - `viewport` - Current viewport, used by the respawn rule.
/// - `cfg` - Trail cap and respawn constants.
///
/// ### Returns
/// The ids of bodies respawned during this phase, in order.
///
/// ### Panics
/// Panics if `acc` is shorter than `bodies`.
pub fn motion_phase(
    bodies: &mut [Body],
    acc: &AccelBuffer,
    viewport: Viewport,
    cfg: &Config,
) -> Vec<BodyId> {
    debug_assert!(acc.len() >= bodies.len());
    let mut respawned = Vec::new();

    for (id, body) in bodies.iter_mut().enumerate() {
        integrate(body, acc.get(id));
        record_trail(body, cfg);
        if respawn_if_exited(body, viewport, cfg) {
            respawned.push(id);
        }
    }
    respawned
}
