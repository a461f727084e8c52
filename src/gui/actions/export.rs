// src/gui/actions/export.rs
use crate::{file, gui::app::App};

use super::current_summary;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }

    let export = &app.state.options.export;

    let status_msg = match current_summary(app) {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(summary) => {
            logf!(
                "Export: Begin rows={}, format={:?}, headers={}",
                summary.len(),
                export.format,
                export.include_headers
            );
            match file::export_summary(export, summary) {
                Ok(path) => {
                    logf!("Export: OK {}", path.display());
                    format!("Exported {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}
