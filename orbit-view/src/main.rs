//! Application entry point for the orbit flyby viewer.
//!
//! This binary sets up logging and eframe/egui, then delegates all
//! simulation and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::{INITIAL_SIZE, Viewer};

/// Starts the native eframe application.
///
/// Log output is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug` shows
/// every respawn).
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(INITIAL_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Orbit Flyby",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
