//! Pairwise Newtonian gravity with two singularity guards.
//!
//! - The softening constant keeps `f` finite when two bodies coincide.
//! - The safe-approach clamp keeps a body passing close to a fixed
//!   (dominant) body from picking up an unbounded kick.
//!
//! The clamped distance is used for both the magnitude and the direction
//! term, so inside the safe radius the pull is that of a body sitting
//! exactly on the safe radius, scaled by how far inside it the target is.

use crate::{accel_buffer::AccelBuffer, body::Body, config::Config, types::BodyId};
use glam::DVec2;

/// Net gravitational acceleration acting on `bodies[id]`.
///
/// Pure: reads only positions and masses, never velocities, and mutates
/// nothing. Fixed bodies never accumulate force and get `DVec2::ZERO`.
///
/// ### Parameters
/// - `id` - Index of the target body.
/// - `bodies` - The full body set (the target included; it is skipped).
/// - `cfg` - Provides `g`, the softening constant and the safe radius.
///
/// ### Panics
/// Panics if `id` is out of bounds.
pub fn net_acceleration(id: BodyId, bodies: &[Body], cfg: &Config) -> DVec2 {
    let target = &bodies[id];
    if target.fixed {
        return DVec2::ZERO;
    }

    let safe_radius = cfg.safe_radius();
    let mut force = DVec2::ZERO;

    for (other_id, other) in bodies.iter().enumerate() {
        if other_id == id {
            continue;
        }

        let d = other.pos - target.pos;
        let mut r = d.length();
        if other.fixed && r < safe_radius {
            r = safe_radius;
        }
        // Coincident free bodies: no direction to pull along.
        if r == 0.0 {
            continue;
        }

        let f = cfg.g * target.mass * other.mass / (r * r + cfg.softening);
        force += d * (f / r);
    }

    force / target.mass
}

/// Fills `buf` with the net acceleration of every body.
///
/// All entries are computed against the same body snapshot; `bodies` is
/// borrowed immutably for the whole pass. The buffer is resized to
/// `bodies.len()` and cleared first via [`AccelBuffer::ensure_len`].
pub fn accumulate_accelerations(bodies: &[Body], cfg: &Config, buf: &mut AccelBuffer) {
    buf.ensure_len(bodies.len());
    for id in 0..bodies.len() {
        buf.set(id, net_acceleration(id, bodies, cfg));
    }
}
