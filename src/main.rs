mod state;
mod data;
mod processing;
mod ui;
mod error;
mod app;

use std::path::Path;

use app::NumberAnalysisApp;
use eframe::egui;
use eframe::egui_wgpu;
use state::app_state::{APP_TITLE, ICON_PATH, MIN_WINDOW_SIZE, WINDOW_SIZE};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging, `RUST_LOG` overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_drag_and_drop(true);
    if let Some(icon) = data::icon::load_icon(Path::new(ICON_PATH)) {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            ..Default::default()
        },
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(NumberAnalysisApp::new(cc)))),
    )
}
