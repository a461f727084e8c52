// src/gui/components/data_table.rs
//
// Draws the failure summary. Purely a view over App::table.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const COLUMN_WIDTHS: [f32; 6] = [110.0, 260.0, 110.0, 260.0, 380.0, 60.0];
const ROW_HEIGHT: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_empty() {
        ui.add_space(8.0);
        ui.weak("No failures to show.");
        return;
    }

    let table = &app.table;
    let cols = table.ncols();
    let count_col = cols.saturating_sub(1);

    // Ensure scroll bars allocate space (not floating over content)
    ui.style_mut().spacing.scroll.floating = false;

    egui::ScrollArea::horizontal()
        .id_salt("summary_table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(f32::INFINITY);
            for ci in 0..cols {
                let w = COLUMN_WIDTHS.get(ci).copied().unwrap_or(120.0);
                builder = builder.column(Column::initial(w).at_least(40.0).resizable(true).clip(true));
            }

            builder
                .header(ROW_HEIGHT + 4.0, |mut header| {
                    for ci in 0..cols {
                        let name = table
                            .headers
                            .as_ref()
                            .and_then(|h| h.get(ci))
                            .map(String::as_str)
                            .unwrap_or("");
                        header.col(|ui| {
                            ui.label(RichText::new(name).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, table.nrows(), |mut row| {
                        let ri = row.index();
                        for ci in 0..cols {
                            let text = table.display_cell(ri, ci).unwrap_or_default();
                            let raw = table.rows.get(ri).and_then(|r| r.get(ci));
                            row.col(|ui| {
                                if ci == count_col {
                                    ui.with_layout(Layout::top_down(Align::Center), |ui| {
                                        ui.label(text);
                                    });
                                } else {
                                    let resp = ui.label(text);
                                    // full text (line breaks kept) on hover
                                    if let Some(raw) = raw {
                                        resp.on_hover_text(raw.as_str());
                                    }
                                }
                            });
                        }
                    });
                });
        });
}
