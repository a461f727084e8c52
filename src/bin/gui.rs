// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use canoe_failures::{
    config::{consts::LOG_FILE, state::GuiState},
    gui, log,
};
use eframe::egui::{IconData, ViewportBuilder};

/// 32x32 red tile with a white cross, drawn in memory.
fn app_icon() -> IconData {
    const SIZE: u32 = 32;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let d = (x as i32 - y as i32).abs();
        let e = (x as i32 + y as i32 - (SIZE as i32 - 1)).abs();
        let inset = (6..SIZE - 6).contains(&x) && (6..SIZE - 6).contains(&y);
        if inset && (d <= 2 || e <= 2) {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([200, 30, 30, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    log::init(log::Sink::File(Path::new(LOG_FILE)), cfg!(debug_assertions));

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
