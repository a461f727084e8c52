// src/gui/actions/extract.rs
use std::path::Path;

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner::{self, Outcome},
    Result,
};

/// Run on the report named in the path field.
pub fn extract(app: &mut App) {
    let text = app.state.gui.report_path_text.trim().to_string();
    if text.is_empty() {
        app.status("Choose or drop an HTML report first");
        logd!("Extract: Clicked, but no report path");
        return;
    }

    logf!("Extract: Begin {}", text);
    let mut progress = GuiProgress::new(app.status.clone());
    let res = runner::process_file(Path::new(&text), Some(&mut progress));
    apply(app, res);
}

/// Run on a file dropped onto the window. Native drops carry a path;
/// web drops carry the bytes.
pub fn extract_dropped(app: &mut App, file: egui::DroppedFile) {
    let mut progress = GuiProgress::new(app.status.clone());

    let res = if let Some(path) = &file.path {
        app.state.gui.report_path_text = path.to_string_lossy().into_owned();
        logf!("Extract: Dropped {}", path.display());
        runner::process_file(path, Some(&mut progress))
    } else if let Some(bytes) = &file.bytes {
        app.state.gui.report_path_text = file.name.clone();
        logf!("Extract: Dropped {} ({} bytes)", file.name, bytes.len());
        runner::process_report(bytes, Some(&mut progress))
    } else {
        logd!("Extract: Drop without path or bytes, ignored");
        return;
    };
    apply(app, res);
}

/// Every run replaces the previous one; nothing carries over.
fn apply(app: &mut App, res: Result<Outcome>) {
    app.reset_run();
    match res {
        Ok(outcome) => {
            app.status(outcome.message());
            app.table = outcome.table().unwrap_or_default();
            app.outcome = Some(outcome);
        }
        Err(e) => {
            loge!("Extract: Error: {}", e);
            app.status(format!("Could not read report: {e}"));
        }
    }
}
