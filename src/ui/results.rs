use eframe::egui::{Color32, RichText, Ui};

use crate::analysis::{result_lines, summary_statements};
use crate::state::AppState;
use crate::ui::panels::number_input;

// ---------------------------------------------------------------------------
// Calculations (central panel, below the chart)
// ---------------------------------------------------------------------------

/// Breakpoint inputs followed by the derived normalities and masses.
pub fn calculations(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Calculations");

    // Breakpoints are read off the curve by the user.
    number_input(
        ui,
        "Volume of NaOH consumed for HCl (Vₐ) in mL",
        &mut state.params.vol_strong_acid_ml,
        0.01,
    );
    number_input(
        ui,
        "Total volume of NaOH consumed (Vb) in mL (HCl + CH₃COOH)",
        &mut state.params.vol_total_ml,
        0.01,
    );
    ui.add_space(8.0);

    let results = state.results();

    for (label, value) in result_lines(&results) {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong(label);
            ui.label(value);
        });
    }

    ui.add_space(8.0);
    ui.heading("Result");
    for statement in summary_statements(&results) {
        ui.label(RichText::new(statement).color(Color32::DARK_GREEN).strong());
    }
}
