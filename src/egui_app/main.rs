//! Sociable - Main Entry Point
//!
//! Native desktop entry point. Builds the eframe window, installs the
//! tracing subscriber, and drives the app state once per frame.

use eframe::egui;
use sociable::egui_app::{views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sociable",
        options,
        Box::new(|_cc| Ok(Box::new(SociableApp::default()))),
    )
}

/// Main application state
struct SociableApp {
    state: AppState,
}

impl Default for SociableApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for SociableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_submission();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // keep polling for the worker thread's result while a request is out
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
