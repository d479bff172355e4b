// Hide the console window in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod cli;
mod config;
mod plans;
mod state;
mod types;

use app::PowerModeApp;
use cli::PowerCfg;
use state::PowerSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        )
        .without_time()
        .init();

    let config = config::load();

    // Every powercfg call runs on this thread, driven from the UI
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let powercfg = PowerCfg::new(&config.powercfg);
    let session = runtime.block_on(PowerSession::start(powercfg, &config.powercfg.plan_marker));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([350.0, 320.0])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Power Mode Switcher",
        options,
        Box::new(|cc| Ok(Box::new(PowerModeApp::new(cc, session, runtime)))),
    )?;
    Ok(())
}
