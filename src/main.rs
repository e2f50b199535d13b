#![windows_subsystem = "windows"]

mod app;
mod catalog;
mod config;
mod core;
mod egui_winit_wgpu_context;
mod event;
mod fonts;
mod i18n;
mod preferences;
mod presentation;
mod shortcut;
mod storage;
mod theme;
mod ui;
mod window_icon;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    if let Err(err) = i18n::select_system_locales() {
        log::warn!("Failed to select system locales: {}", err);
    }

    let config = config::Config::from_env()?;

    let app = app::App::new(config)?;

    app.run();

    Ok(())
}
