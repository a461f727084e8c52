// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    runner::Outcome,
    table::TableData,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "CANoe Failure Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // result of the most recent run; replaced wholesale by the next one
    pub outcome: Option<Outcome>,
    pub table: TableData,

    // status line (progress sink writes here too)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: export → {}", out_path_text);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            outcome: None,
            table: TableData::empty(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Forget the previous run entirely.
    pub fn reset_run(&mut self) {
        self.outcome = None;
        self.table = TableData::empty();
    }

    pub fn has_failures(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Extracted(_)))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A dropped file is an upload: run on it right away.
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next() {
            actions::extract_dropped(self, file);
        }

        egui::TopBottomPanel::top("report").show(ctx, |ui| {
            components::report_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
