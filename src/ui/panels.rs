use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – experiment inputs
// ---------------------------------------------------------------------------

/// Render the left input panel: sample, titrant and the measurement text.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Enter Conductometric Titration Data");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            number_input(
                ui,
                "Volume of sample taken (ml)",
                &mut state.params.sample_volume_ml,
                0.1,
            );
            number_input(
                ui,
                "Normality of NaOH (N)",
                &mut state.params.naoh_normality_n,
                0.01,
            );
            ui.add_space(8.0);

            ui.label("Paste volume (ml) and conductance (mS) values (comma-separated):");
            let response = ui.add(
                egui::TextEdit::multiline(&mut state.raw_text)
                    .code_editor()
                    .desired_rows(21)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                state.reparse();
            }
        });
}

/// A labelled numeric field with `-`/`+` buttons that move it by exactly `step`.
/// Dragging the field changes it continuously at the same rate.
pub fn number_input(ui: &mut Ui, label: &str, value: &mut f64, step: f64) -> bool {
    ui.label(label);
    ui.horizontal(|ui: &mut Ui| {
        let mut changed = ui
            .add(egui::DragValue::new(&mut *value).speed(step).max_decimals(3))
            .changed();
        if ui.small_button("-").clicked() {
            *value = stepped(*value, -step);
            changed = true;
        }
        if ui.small_button("+").clicked() {
            *value = stepped(*value, step);
            changed = true;
        }
        changed
    })
    .inner
}

/// `value + delta`, snapped to 1e-6 so repeated clicks don't accumulate float error.
fn stepped(value: f64, delta: f64) -> f64 {
    const SNAP: f64 = 1e6;
    ((value + delta) * SNAP).round() / SNAP
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reset to defaults").clicked() {
                state.reset();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} readings", state.series.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open titration readings")
        .add_filter("Supported files", &["csv", "json", "txt"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Text", &["txt"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.import_file(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_moves_by_exact_increment() {
        assert_eq!(stepped(10.0, 0.1), 10.1);
        assert_eq!(stepped(10.0, -0.1), 9.9);
        assert_eq!(stepped(2.0, 0.01), 2.01);
    }

    #[test]
    fn test_repeated_steps_do_not_drift() {
        let mut v = 0.1;
        for _ in 0..10 {
            v = stepped(v, 0.01);
        }
        assert_eq!(v, 0.2);

        for _ in 0..30 {
            v = stepped(v, -0.01);
        }
        assert_eq!(v, -0.1);
    }
}
