use eframe::egui::{Color32, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::TitrationSeries;
use crate::data::table::{CONDUCTANCE_COLUMN, VOLUME_COLUMN};

pub const CHART_TITLE: &str = "Conductance vs Volume of NaOH Added";

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

/// Marker drawn at every reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
}

/// Declarative description of the titration curve plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `[volume, conductance]` in series order, not sorted by x.
    pub points: Vec<[f64; 2]>,
    pub marker: Marker,
    pub color: Color32,
    pub show_grid: bool,
}

impl ChartSpec {
    /// Describe the plot for a series; `None` when there is nothing to draw.
    pub fn build(series: &TitrationSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        Some(Self {
            title: CHART_TITLE,
            x_label: VOLUME_COLUMN,
            y_label: CONDUCTANCE_COLUMN,
            points: series
                .iter()
                .map(|p| [p.volume_ml, p.conductance_ms])
                .collect(),
            marker: Marker::Circle,
            color: Color32::BLUE,
            show_grid: true,
        })
    }
}

// ---------------------------------------------------------------------------
// Titration plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart described by `spec`.
pub fn titration_plot(ui: &mut Ui, spec: &ChartSpec) {
    ui.heading(spec.title);

    let shape = match spec.marker {
        Marker::Circle => MarkerShape::Circle,
    };

    Plot::new("titration_plot")
        .height(320.0)
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .show_grid(spec.show_grid)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(spec.points.clone()))
                .color(spec.color)
                .width(1.5);
            let markers = Points::new(PlotPoints::from(spec.points.clone()))
                .shape(shape)
                .radius(3.0)
                .filled(true)
                .color(spec.color);

            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;

    #[test]
    fn test_no_chart_for_empty_series() {
        assert!(ChartSpec::build(&TitrationSeries::default()).is_none());
    }

    #[test]
    fn test_chart_labels_and_style() {
        let spec = ChartSpec::build(&parse("0.0, 4.2")).unwrap();

        assert_eq!(spec.title, "Conductance vs Volume of NaOH Added");
        assert_eq!(spec.x_label, "Volume of NaOH (ml)");
        assert_eq!(spec.y_label, "Conductance (mS)");
        assert_eq!(spec.marker, Marker::Circle);
        assert!(spec.show_grid);
    }

    #[test]
    fn test_chart_points_keep_series_order() {
        let spec = ChartSpec::build(&parse("1.0, 5.0\n0.0, 4.0\n2.0, 3.0")).unwrap();
        assert_eq!(spec.points, vec![[1.0, 5.0], [0.0, 4.0], [2.0, 3.0]]);
    }
}
