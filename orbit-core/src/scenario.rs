//! The canonical starting configuration.
//!
//! One fixed dominant mass at the viewport center, two planets on
//! near-circular orbits turning the same way, and a light flyby body that
//! crosses the scene on an open trajectory and loops back when it leaves.

use crate::{
    body::{Body, ColorTag},
    config::Config,
};
use glam::DVec2;

pub const DOMINANT_MASS: f64 = 1e4;

pub const INNER_RADIUS: f64 = 200.0;
pub const INNER_MASS: f64 = 10.0;

pub const OUTER_RADIUS: f64 = 300.0;
pub const OUTER_MASS: f64 = 5.0;

pub const FLYBY_MASS: f64 = 2.0;
pub const FLYBY_LABEL: &str = "ʻOumuamua";

/// Tangential speed of a circular orbit of radius `r` around `mass`.
pub fn circular_speed(g: f64, mass: f64, r: f64) -> f64 {
    (g * mass / r).sqrt()
}

/// The dominant body and the two planets, without the flyby.
///
/// The inner planet starts to the right of the center moving `+y`, the
/// outer one to the left moving `-y`, so both go round in the same sense.
pub fn orbiting_pair(center: DVec2, cfg: &Config) -> Vec<Body> {
    let v1 = circular_speed(cfg.g, DOMINANT_MASS, INNER_RADIUS);
    let v2 = circular_speed(cfg.g, DOMINANT_MASS, OUTER_RADIUS);

    vec![
        Body::fixed(center, DOMINANT_MASS),
        Body::new(
            center + DVec2::new(INNER_RADIUS, 0.0),
            DVec2::new(0.0, v1),
            INNER_MASS,
            ColorTag::WHITE,
        ),
        Body::new(
            center - DVec2::new(OUTER_RADIUS, 0.0),
            DVec2::new(0.0, -v2),
            OUTER_MASS,
            ColorTag::LIGHT_BLUE,
        ),
    ]
}

/// The full canonical set: [`orbiting_pair`] plus the looping flyby body.
///
/// The flyby starts at the same point and speed it re-enters with.
pub fn canonical_bodies(center: DVec2, cfg: &Config) -> Vec<Body> {
    let mut bodies = orbiting_pair(center, cfg);
    bodies.push(
        Body::new(
            center + cfg.reentry_offset,
            cfg.reentry_velocity,
            FLYBY_MASS,
            ColorTag::RED,
        )
        .with_label(FLYBY_LABEL)
        .looping(),
    );
    bodies
}
