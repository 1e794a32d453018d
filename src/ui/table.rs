use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::table::TitrationTable;

/// Render the parsed readings as a striped two-column table.
pub fn data_table(ui: &mut Ui, table: &TitrationTable<'_>) {
    let [volume_header, conductance_header] = table.headers();
    let cells: Vec<[String; 2]> = table.rows().collect();

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(260.0)
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong(volume_header);
            });
            header.col(|ui| {
                ui.strong(conductance_header);
            });
        })
        .body(|body| {
            body.rows(18.0, cells.len(), |mut row| {
                let Some([volume, conductance]) = cells.get(row.index()) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(volume.as_str());
                });
                row.col(|ui| {
                    ui.label(conductance.as_str());
                });
            });
        });
}
