use crate::{body::Body, config::Config};
use glam::DVec2;
use log::{debug, warn};

/// Size of the visible drawing area, in world units.
///
/// World coordinates match screen pixels: the origin is the top-left
/// corner and y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned rectangle used for the exit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// The viewport grown by `margin` on all four sides.
    pub fn extended(viewport: Viewport, margin: f64) -> Self {
        Self {
            min: DVec2::splat(-margin),
            max: DVec2::new(viewport.width + margin, viewport.height + margin),
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Where a looping body re-enters the scene for the given viewport.
pub fn reentry_point(viewport: Viewport, cfg: &Config) -> DVec2 {
    viewport.center() + cfg.reentry_offset
}

/// Resets a looping body that has left the extended viewport.
///
/// Only free bodies with `loops_on_exit` set are considered. When the
/// body's position lies outside [`Bounds::extended`] it is moved to
/// [`reentry_point`], given `cfg.reentry_velocity`, and its trail is
/// cleared, all in one go.
///
/// ### Parameters
/// - `body` - Body to test, already integrated for this step.
/// - `viewport` - Current viewport size.
/// - `cfg` - Provides the exit margin and the re-entry state.
///
/// ### Returns
/// `true` if the body was respawned.
pub fn respawn_if_exited(body: &mut Body, viewport: Viewport, cfg: &Config) -> bool {
    if body.fixed || !body.loops_on_exit {
        return false;
    }

    let bounds = Bounds::extended(viewport, cfg.exit_margin);
    if bounds.contains(body.pos) {
        return false;
    }

    let entry = reentry_point(viewport, cfg);
    debug!(
        "respawning {} at ({:.1}, {:.1}) after exit at ({:.1}, {:.1})",
        body.label.as_deref().unwrap_or("body"),
        entry.x,
        entry.y,
        body.pos.x,
        body.pos.y
    );
    if !bounds.contains(entry) {
        warn!(
            "re-entry point ({:.1}, {:.1}) lies outside the {}x{} viewport bounds",
            entry.x, entry.y, viewport.width, viewport.height
        );
    }

    body.pos = entry;
    body.vel = cfg.reentry_velocity;
    body.trail.clear();
    true
}
