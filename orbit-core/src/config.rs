use glam::DVec2;

/// Tunable constants of the simulation.
///
/// Every phase receives the config by reference. [`Config::default`] gives
/// the canonical values; tests override single fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Gravitational constant.
    pub g: f64,
    /// Added to `r²` in the force law so coincident bodies stay finite.
    pub softening: f64,
    /// Visual radius of a fixed (dominant) body.
    pub dominant_radius: f64,
    /// Gap kept between the dominant body's disc and an orbiting body.
    pub approach_margin: f64,
    /// Maximum number of positions kept per trail.
    pub trail_len: usize,
    /// How far outside the viewport a looping body may travel before respawning.
    pub exit_margin: f64,
    /// Re-entry point relative to the viewport center.
    pub reentry_offset: DVec2,
    /// Velocity given to a body on re-entry.
    pub reentry_velocity: DVec2,
}

impl Config {
    /// Minimum distance used when a body interacts with a fixed body.
    #[inline]
    pub fn safe_radius(&self) -> f64 {
        self.dominant_radius + self.approach_margin
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            g: 1.0,
            softening: 1e-6,
            dominant_radius: 50.0,
            approach_margin: 20.0,
            trail_len: 120,
            exit_margin: 300.0,
            reentry_offset: DVec2::new(1100.0, -600.0),
            reentry_velocity: DVec2::new(-2.4, 0.25),
        }
    }
}
