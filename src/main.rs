//! Txtpad - a minimal desktop editor for plain `.txt` files.
//!
//! One window, one document at a time. Every edit is written straight back
//! to the file on disk.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod platform;
mod ui;
mod utils;

use anyhow::Context as _;
use app::TxtpadApp;
use config::ConfigManager;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("TXTPAD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Files handed over by the OS ("open with", file association).
fn host_open_paths() -> Vec<PathBuf> {
    std::env::args_os().skip(1).map(PathBuf::from).collect()
}

fn main() -> anyhow::Result<()> {
    let config_manager = ConfigManager::new();
    let config = config_manager
        .load()
        .with_env_override(std::env::var(config::ENV_VAR).ok().as_deref());

    init_tracing(&config.log_filter);
    tracing::debug!(
        "Config file: {}",
        config_manager.get_config_file_path().display()
    );

    let tokio_runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let host_paths = host_open_paths();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Txtpad")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 240.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Txtpad",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TxtpadApp::start(
                cc,
                tokio_runtime,
                config_manager,
                config,
                host_paths,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to create window: {e}"))
}
