// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use provider_directory::{
    config::{options::AppOptions, state::GuiState},
    gui,
    log::{self, LogTarget},
};

fn app_icon() -> Result<IconData, image::ImageError> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init(LogTarget::File, None);
    let options = AppOptions::from_env();
    let gui_state = GuiState::default();

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]);
    match app_icon() {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => eprintln!("icon: {}", e),
    }

    let native = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
