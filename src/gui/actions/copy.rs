// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    // Clipboard is always tab-separated so it pastes into a spreadsheet.
    let include_headers = app.state.options.export.include_headers;
    let txt = to_export_string(&app.table, include_headers, '\t');
    logf!("Copy: rows={}, headers={}", app.table.nrows(), include_headers);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
