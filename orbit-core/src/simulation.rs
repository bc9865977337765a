use crate::{
    accel_buffer::AccelBuffer,
    body::Body,
    config::Config,
    integrator,
    phases,
    render::RenderBody,
    respawn::Viewport,
    scenario,
    types::BodyId,
};
use glam::DVec2;
use log::info;

/// Outcome of one [`Simulation::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Number of steps taken so far, this one included.
    pub step: u64,
    /// Bodies that left the extended viewport and were respawned.
    pub respawned: Vec<BodyId>,
}

/// Owned simulation state.
///
/// The body set is allocated once and never grows or shrinks. It can only
/// be mutated through [`Simulation::step`] and [`Simulation::reverse_time`];
/// everything else is read-only.
#[derive(Debug)]
pub struct Simulation {
    bodies: Box<[Body]>,
    cfg: Config,
    acc: AccelBuffer,
    steps: u64,
    respawns: u64,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>, cfg: Config) -> Self {
        let acc = AccelBuffer::with_len(bodies.len());
        Self {
            bodies: bodies.into_boxed_slice(),
            cfg,
            acc,
            steps: 0,
            respawns: 0,
        }
    }

    /// The canonical scenario centred in `viewport`.
    pub fn canonical(viewport: Viewport, cfg: Config) -> Self {
        let bodies = scenario::canonical_bodies(viewport.center(), &cfg);
        info!(
            "canonical scenario with {} bodies in a {}x{} viewport",
            bodies.len(),
            viewport.width,
            viewport.height
        );
        Self::new(bodies, cfg)
    }

    /// Advances the simulation by one frame.
    ///
    /// The step consists of:
    /// 1. [`phases::force_phase`] — accelerations from the current positions.
    /// 2. [`phases::motion_phase`] — integrate, record trails, respawn.
    pub fn step(&mut self, viewport: Viewport) -> StepReport {
        phases::force_phase(&self.bodies, &self.cfg, &mut self.acc);
        let respawned = phases::motion_phase(&mut self.bodies, &self.acc, viewport, &self.cfg);

        self.steps += 1;
        self.respawns += respawned.len() as u64;
        StepReport {
            step: self.steps,
            respawned,
        }
    }

    /// Reverses the direction of time for every free body.
    ///
    /// Running `n` steps, calling this, then running `n` more steps brings
    /// the bodies back to where they started (up to rounding), as long as
    /// no respawn fired in between.
    pub fn reverse_time(&mut self) {
        phases::force_phase(&self.bodies, &self.cfg, &mut self.acc);
        integrator::reverse_time(&mut self.bodies, &self.acc);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Total respawns since construction.
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    /// Total kinetic energy of the free bodies.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().filter(|b| !b.fixed).map(Body::kinetic_energy).sum()
    }

    /// Total momentum of the free bodies. Not conserved: the fixed bodies
    /// absorb the reaction without moving.
    pub fn momentum(&self) -> DVec2 {
        self.bodies
            .iter()
            .filter(|b| !b.fixed)
            .map(Body::momentum)
            .fold(DVec2::ZERO, |acc, p| acc + p)
    }

    /// Render snapshots of every free body, in body order.
    pub fn render_bodies(&self) -> impl Iterator<Item = RenderBody<'_>> {
        self.bodies.iter().filter_map(RenderBody::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        body::ColorTag,
        respawn::{Bounds, reentry_point},
        scenario::{DOMINANT_MASS, INNER_RADIUS, circular_speed, orbiting_pair},
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn wide() -> Viewport {
        Viewport::new(1920.0, 1080.0)
    }

    fn pair_sim() -> Simulation {
        let cfg = Config::default();
        Simulation::new(orbiting_pair(wide().center(), &cfg), cfg)
    }

    #[test]
    fn fixed_body_is_bit_identical_after_many_steps() {
        let mut sim = Simulation::canonical(wide(), Config::default());
        let sun = sim.bodies()[0].clone();
        assert!(sun.fixed);

        for _ in 0..2_000 {
            sim.step(wide());
        }

        let after = &sim.bodies()[0];
        assert_eq!(after.pos.x.to_bits(), sun.pos.x.to_bits());
        assert_eq!(after.pos.y.to_bits(), sun.pos.y.to_bits());
        assert_eq!(after.vel.x.to_bits(), sun.vel.x.to_bits());
        assert_eq!(after.vel.y.to_bits(), sun.vel.y.to_bits());
        assert!(after.trail.is_empty());
    }

    #[test]
    fn fixed_bodies_stay_put_among_random_free_bodies() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = Config::default();
        let vp = wide();

        let mut bodies = vec![
            Body::fixed(DVec2::new(700.0, 500.0), 1e4),
            Body::fixed(DVec2::new(1300.0, 500.0), 5e3),
        ];
        for _ in 0..6 {
            let pos = DVec2::new(rng.random_range(0.0..1920.0), rng.random_range(0.0..1080.0));
            let vel = DVec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0));
            let mass = rng.random_range(1.0..20.0);
            bodies.push(Body::new(pos, vel, mass, ColorTag::WHITE));
        }
        let anchors: Vec<_> = bodies[..2].iter().map(|b| (b.pos, b.vel)).collect();

        let mut sim = Simulation::new(bodies, cfg);
        for _ in 0..500 {
            sim.step(vp);
        }

        for (body, (pos, vel)) in sim.bodies()[..2].iter().zip(anchors) {
            assert_eq!(body.pos, pos);
            assert_eq!(body.vel, vel);
        }
        assert!(sim.bodies().iter().all(|b| b.pos.is_finite() && b.vel.is_finite()));
    }

    #[test]
    fn trail_is_a_sliding_window_of_positions() {
        let mut sim = pair_sim();
        let cap = sim.config().trail_len;
        let mut history: Vec<Vec<DVec2>> = vec![Vec::new(); sim.bodies().len()];

        for step in 1..=(cap as u64 + 80) {
            sim.step(wide());
            for (id, body) in sim.bodies().iter().enumerate() {
                history[id].push(body.pos);
                if body.fixed {
                    assert!(body.trail.is_empty());
                    continue;
                }

                let len = body.trail.len();
                assert_eq!(len, (step as usize).min(cap));
                // Oldest point is the position after step `step - len + 1`.
                let oldest_step = step as usize - len + 1;
                assert_eq!(body.trail.oldest(), Some(history[id][oldest_step - 1]));
                assert_eq!(body.trail.newest(), Some(body.pos));
            }
        }
    }

    #[test]
    fn trail_cap_comes_from_config() {
        let mut cfg = Config::default();
        cfg.trail_len = 10;
        let mut sim = Simulation::new(orbiting_pair(wide().center(), &cfg), cfg);

        for _ in 0..50 {
            sim.step(wide());
            for body in sim.bodies().iter().filter(|b| !b.fixed) {
                assert!(body.trail.len() <= 10, "trail grew to {}", body.trail.len());
            }
        }
        assert!(sim.render_bodies().all(|b| b.trail().len() == 10));
    }

    #[test]
    fn default_trail_cap_holds_for_hand_built_bodies() {
        let cfg = Config::default();
        let bodies = vec![Body::new(DVec2::ZERO, DVec2::new(0.5, 0.0), 1.0, ColorTag::WHITE)];
        let mut sim = Simulation::new(bodies, cfg);

        for _ in 0..300 {
            sim.step(wide());
        }

        assert_eq!(sim.bodies()[0].trail.len(), cfg.trail_len);
    }

    #[test]
    fn energy_and_momentum_cover_free_bodies_only() {
        let cfg = Config::default();
        let bodies = vec![
            Body::fixed(DVec2::ZERO, 1e4),
            Body::new(DVec2::new(100.0, 0.0), DVec2::new(3.0, 4.0), 2.0, ColorTag::WHITE),
            Body::new(DVec2::new(-100.0, 0.0), DVec2::new(0.0, -1.0), 4.0, ColorTag::WHITE),
        ];
        let sim = Simulation::new(bodies, cfg);

        assert_eq!(sim.kinetic_energy(), 25.0 + 2.0);
        assert_eq!(sim.momentum(), DVec2::new(6.0, 4.0));
    }

    #[test]
    fn reversing_time_retraces_orbits() {
        let mut sim = pair_sim();
        let start: Vec<DVec2> = sim.bodies().iter().map(|b| b.pos).collect();

        for _ in 0..1_000 {
            sim.step(wide());
        }
        sim.reverse_time();
        for _ in 0..1_000 {
            sim.step(wide());
        }

        for (body, p0) in sim.bodies().iter().zip(start) {
            let err = (body.pos - p0).length();
            assert!(err < 1e-6, "drifted {err} from {p0:?}");
        }
    }

    #[test]
    fn looping_body_never_stays_outside_bounds() {
        let cfg = Config::default();
        let vp = wide();
        let bounds = Bounds::extended(vp, cfg.exit_margin);
        let mut sim = Simulation::canonical(vp, cfg);
        let flyby = sim
            .bodies()
            .iter()
            .position(|b| b.loops_on_exit)
            .unwrap();

        for _ in 0..2_000 {
            let report = sim.step(vp);
            let body = &sim.bodies()[flyby];
            assert!(bounds.contains(body.pos), "left at {:?}", body.pos);
            if report.respawned.contains(&flyby) {
                assert_eq!(body.pos, reentry_point(vp, sim.config()));
                assert!(body.trail.is_empty());
            }
        }

        // The flyby crosses the scene in roughly 600 steps.
        assert!(sim.respawns() >= 2, "only {} respawns", sim.respawns());
        assert_eq!(sim.steps(), 2_000);
    }

    #[test]
    fn single_orbit_stays_near_its_radius() {
        let cfg = Config::default();
        let center = wide().center();
        let v1 = circular_speed(cfg.g, DOMINANT_MASS, INNER_RADIUS);
        let bodies = vec![
            Body::fixed(center, DOMINANT_MASS),
            Body::new(
                center + DVec2::new(INNER_RADIUS, 0.0),
                DVec2::new(0.0, v1),
                10.0,
                ColorTag::WHITE,
            ),
        ];
        let mut sim = Simulation::new(bodies, cfg);

        for _ in 0..5_000 {
            sim.step(wide());
            let r = (sim.bodies()[1].pos - center).length();
            assert!((r - INNER_RADIUS).abs() < 10.0, "r = {r}");
        }
    }

    #[test]
    fn one_step_applies_centripetal_kick() {
        let cfg = Config::default();
        let center = DVec2::new(400.0, 300.0);
        let v1 = circular_speed(cfg.g, DOMINANT_MASS, INNER_RADIUS);
        assert!((v1 - 7.071).abs() < 1e-3);

        let bodies = vec![
            Body::fixed(center, DOMINANT_MASS),
            Body::new(
                center + DVec2::new(INNER_RADIUS, 0.0),
                DVec2::new(0.0, v1),
                10.0,
                ColorTag::WHITE,
            ),
        ];
        let mut sim = Simulation::new(bodies, cfg);

        let report = sim.step(Viewport::new(800.0, 600.0));

        assert_eq!(report.step, 1);
        let dv = sim.bodies()[1].vel - DVec2::new(0.0, v1);
        // a = v1² / r1 = 0.25, toward the dominant body (-x).
        assert!((dv.x + 0.25).abs() < 1e-9, "dv = {dv:?}");
        assert!(dv.y.abs() < 1e-12);
    }

    #[test]
    fn render_bodies_skip_fixed_and_keep_order() {
        let sim = Simulation::canonical(wide(), Config::default());

        let snaps: Vec<_> = sim.render_bodies().collect();

        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[0].color, Some(ColorTag::WHITE));
        assert_eq!(snaps[1].color, Some(ColorTag::LIGHT_BLUE));
        assert_eq!(snaps[2].label, Some(scenario::FLYBY_LABEL));
        assert!(sim.body(4).is_none());
    }
}
