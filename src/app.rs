use eframe::egui;

use crate::data::table::TitrationTable;
use crate::state::AppState;
use crate::ui::plot::{self, ChartSpec};
use crate::ui::{panels, results, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TitrationApp {
    pub state: AppState,
}

impl eframe::App for TitrationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: experiment inputs ----
        egui::SidePanel::left("input_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, chart, calculations ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Both are omitted when no line parsed.
                    if let Some(view) = TitrationTable::present(&self.state.series) {
                        table::data_table(ui, &view);
                        ui.add_space(12.0);
                    }
                    if let Some(spec) = ChartSpec::build(&self.state.series) {
                        plot::titration_plot(ui, &spec);
                        ui.add_space(12.0);
                    }

                    results::calculations(ui, &mut self.state);
                });
        });
    }
}
