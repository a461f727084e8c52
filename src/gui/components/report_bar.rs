// src/gui/components/report_bar.rs
//
// Report input: path field, Extract button, status line.
// Dropping a file anywhere on the window is handled in App::update.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Report:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.report_path_text)
                .hint_text("Path to a CANoe HTML test report, or drop it here")
                .font(egui::TextStyle::Monospace)
                .desired_width(520.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Extract").clicked() || enter {
            actions::extract(app);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Status:");
        ui.label(app.status_text());
    });
    ui.add_space(4.0);
}
