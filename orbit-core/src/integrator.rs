//! Semi-implicit Euler with a unit time step.
//!
//! Each step kicks the velocity with the acceleration evaluated at the old
//! positions, then drifts the position with the new velocity.

use crate::{accel_buffer::AccelBuffer, body::Body, config::Config};
use glam::DVec2;

/// Applies `acc` to the body's velocity, then advances its position.
///
/// Fixed bodies are left untouched.
#[inline]
pub fn integrate(body: &mut Body, acc: DVec2) {
    if body.fixed {
        return;
    }
    body.vel += acc;
    body.pos += body.vel;
}

/// Appends the body's current position to its trail (free bodies only),
/// keeping at most `cfg.trail_len` points.
#[inline]
pub fn record_trail(body: &mut Body, cfg: &Config) {
    if body.fixed {
        return;
    }
    body.trail.record(body.pos, cfg.trail_len);
}

/// Turns every free body around so that further steps retrace its path.
///
/// After a kick-then-drift step the stored velocity is the one that carried
/// the body *into* its current position. Stepping backwards therefore needs
/// the velocity that will carry it *out*, negated: `-(vel + acc)`, with
/// `acc` evaluated at the current positions. A bare sign flip would be one
/// kick off and the reversed run would drift away from the forward path.
///
/// ### Parameters
/// - `bodies` - The body set; fixed bodies are skipped.
/// - `acc` - Accelerations at the current positions, one per body.
///
/// ### Panics
/// Panics if `acc` is shorter than `bodies`.
pub fn reverse_time(bodies: &mut [Body], acc: &AccelBuffer) {
    for (id, body) in bodies.iter_mut().enumerate() {
        if body.fixed {
            continue;
        }
        body.vel = -(body.vel + acc.get(id));
    }
}
