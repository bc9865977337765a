//! Real-time view of the flyby simulation built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Simulation`] and
//! implements [`eframe::App`]. egui's repaint loop is the frame scheduler:
//! each frame feeds the current panel size to the simulation as its
//! viewport, advances one step while running, and draws the result.

use eframe::App;
use glam::DVec2;
use log::info;
use orbit_core::{
    body::ColorTag,
    config::Config,
    respawn::Viewport,
    simulation::Simulation,
};

/// Size the native window opens with. The flyby's re-entry point only lies
/// inside the extended bounds for panels at least 1600 wide; the extra
/// width leaves room for side decorations.
pub const INITIAL_SIZE: [f32; 2] = [1700.0, 1000.0];

const SUN_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 200, 60);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0xcc, 0xcc);
const LABEL_SIZE: f32 = 14.0;

/// Main application state for the viewer.
///
/// ### Fields
/// - `sim` - The simulation being displayed.
/// - `viewport` - Size of the drawing area seen on the last frame.
/// - `placed` - Whether the scenario has been centred on a real panel size.
/// - `running` - Whether the simulation advances on every frame.
/// - `last_respawned` - Number of bodies respawned by the last step.
pub struct Viewer {
    sim: Simulation,
    viewport: Viewport,
    placed: bool,
    running: bool,
    last_respawned: usize,
}

impl Viewer {
    /// Creates a viewer running the canonical scenario.
    ///
    /// The scenario is centred in a viewport of [`INITIAL_SIZE`] until the
    /// first frame reports the real panel size, see [`Viewer::sync_viewport`].
    pub fn new() -> Self {
        let viewport = Viewport::new(f64::from(INITIAL_SIZE[0]), f64::from(INITIAL_SIZE[1]));
        Self {
            sim: Simulation::canonical(viewport, Config::default()),
            viewport,
            placed: false,
            running: true,
            last_respawned: 0,
        }
    }

    /// Rebuilds the canonical scenario around the current viewport centre.
    ///
    /// Keeps the current configuration and the run/pause state.
    fn reset(&mut self) {
        info!(
            "reset after {} steps and {} respawns",
            self.sim.steps(),
            self.sim.respawns()
        );
        let cfg = *self.sim.config();
        self.sim = Simulation::canonical(self.viewport, cfg);
        self.last_respawned = 0;
    }

    /// Adopts the panel size as the viewport.
    ///
    /// The first call rebuilds the scenario around the panel's centre, since
    /// the panel is smaller than the window by the top and bottom bars.
    fn sync_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !self.placed {
            self.placed = true;
            if self.sim.steps() == 0 {
                self.sim = Simulation::canonical(viewport, *self.sim.config());
            }
        }
    }

    /// Advances the simulation by a single step.
    fn step_once(&mut self) {
        let report = self.sim.step(self.viewport);
        self.last_respawned = report.respawned.len();
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are pixels relative to the top-left corner of the
    /// drawing area, y pointing down.
    fn world_to_screen(p: DVec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
    }

    fn color32(tag: Option<ColorTag>) -> egui::Color32 {
        match tag {
            Some(c) => egui::Color32::from_rgb(c.r, c.g, c.b),
            None => egui::Color32::GRAY,
        }
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (steps, respawns, energy, viewport size).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "viewport = {:.0} x {:.0}",
                    self.viewport.width, self.viewport.height
                ));
                ui.separator();
                let p = self.sim.momentum();
                ui.label(format!("momentum = ({:.1}, {:.1})", p.x, p.y));
                ui.label(format!("kinetic energy = {:.1}", self.sim.kinetic_energy()));
                ui.separator();
                ui.label(format!("respawns = {}", self.sim.respawns()));
                ui.label(format!("last step respawned = {}", self.last_respawned));
                ui.separator();
                ui.label(format!("steps = {}", self.sim.steps()));
            });
        });
    }

    /// Builds the central panel where the bodies are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // The panel is the viewport; resizing the window resizes it.
                self.sync_viewport(Viewport::new(
                    f64::from(rect.width()),
                    f64::from(rect.height()),
                ));

                if self.running {
                    self.step_once();
                    ctx.request_repaint();
                }

                // Dominant bodies.
                let sun_radius = self.sim.config().dominant_radius as f32;
                for body in self.sim.bodies().iter().filter(|b| b.fixed) {
                    let center = Self::world_to_screen(body.pos, rect);
                    painter.circle_filled(center, sun_radius, SUN_COLOR);
                }

                for snap in self.sim.render_bodies() {
                    let color = Self::color32(snap.color);

                    let trail: Vec<egui::Pos2> =
                        snap.trail().map(|p| Self::world_to_screen(p, rect)).collect();
                    if trail.len() > 1 {
                        painter.add(egui::Shape::line(trail, egui::Stroke::new(1.0, color)));
                    }

                    painter.circle_filled(
                        Self::world_to_screen(snap.pos, rect),
                        snap.radius as f32,
                        color,
                    );

                    if let Some(label) = snap.label {
                        painter.text(
                            Self::world_to_screen(snap.label_anchor, rect),
                            egui::Align2::LEFT_BOTTOM,
                            label,
                            egui::FontId::proportional(LABEL_SIZE),
                            LABEL_COLOR,
                        );
                    }
                }
            });
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
