use crate::trail::Trail;
use glam::DVec2;

/// Opaque RGB colour handed through to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTag {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTag {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One point mass in the simulation.
///
/// A `fixed` body anchors the field: it is never integrated, never records
/// a trail and is never respawned. `loops_on_exit` marks bodies that the
/// respawn rule brings back once they leave the extended viewport; it is
/// independent of `label`, which is display text only.
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub fixed: bool,
    pub color: Option<ColorTag>,
    pub label: Option<String>,
    pub loops_on_exit: bool,
    pub trail: Trail,
}

impl Body {
    /// Creates a fixed, dominant body at rest.
    ///
    /// ### Panics
    /// Panics if `mass` is not a finite positive number.
    pub fn fixed(pos: DVec2, mass: f64) -> Self {
        assert_valid_mass(mass);
        Self {
            pos,
            vel: DVec2::ZERO,
            mass,
            fixed: true,
            color: None,
            label: None,
            loops_on_exit: false,
            trail: Trail::new(),
        }
    }

    /// Creates a free body with an empty trail.
    ///
    /// ### Panics
    /// Panics if `mass` is not a finite positive number.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, color: ColorTag) -> Self {
        assert_valid_mass(mass);
        Self {
            pos,
            vel,
            mass,
            fixed: false,
            color: Some(color),
            label: None,
            loops_on_exit: false,
            trail: Trail::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the body as respawning after it leaves the extended viewport.
    pub fn looping(mut self) -> Self {
        self.loops_on_exit = true;
        self
    }

    /// Drawing radius: `max(3, ln(mass))`.
    pub fn size_hint(&self) -> f64 {
        self.mass.ln().max(3.0)
    }

    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

fn assert_valid_mass(mass: f64) {
    assert!(
        mass.is_finite() && mass > 0.0,
        "body mass must be finite and positive, got {mass}"
    );
}
