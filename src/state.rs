use std::path::Path;

use anyhow::Result;

use crate::analysis::{AnalyteResults, compute};
use crate::data::loader::{ImportedData, load_file};
use crate::data::model::{DEFAULT_MEASUREMENTS, ExperimentParameters, TitrationSeries};
use crate::data::parser::{format_series, parse};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One session's inputs and the series derived from them, independent of rendering.
pub struct AppState {
    /// Contents of the measurements text area.
    pub raw_text: String,

    /// Numeric form inputs.
    pub params: ExperimentParameters,

    /// Readings parsed from `raw_text` (rebuilt on every edit).
    pub series: TitrationSeries,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            raw_text: DEFAULT_MEASUREMENTS.to_string(),
            params: ExperimentParameters::default(),
            series: TitrationSeries::default(),
            status_message: None,
        };
        state.reparse();
        state
    }
}

impl AppState {
    /// Rebuild `series` from the text area.
    pub fn reparse(&mut self) {
        self.series = parse(&self.raw_text);
    }

    /// Analyte figures for the current parameters, computed fresh on each call.
    pub fn results(&self) -> AnalyteResults {
        compute(&self.params)
    }

    /// Replace the text area contents and re-parse.
    pub fn set_raw_text(&mut self, text: String) {
        self.raw_text = text;
        self.reparse();
    }

    /// Restore the default parameters and example readings.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the contents of an imported file.
    pub fn apply_import(&mut self, data: ImportedData) {
        match data {
            ImportedData::Series { series, parameters } => {
                if let Some(params) = parameters {
                    self.params = params;
                }
                self.set_raw_text(format_series(&series));
            }
            ImportedData::RawText(text) => self.set_raw_text(text),
        }
        self.status_message = None;
    }

    /// Load a file and apply it; on failure the session is left untouched.
    pub fn import_file(&mut self, path: &Path) -> Result<()> {
        let data = load_file(path)?;
        self.apply_import(data);
        log::info!(
            "Imported {} readings from {}",
            self.series.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MeasurementPoint;

    #[test]
    fn test_default_state_parses_example_data() {
        let state = AppState::default();
        assert_eq!(state.series.len(), 21);
        assert_eq!(state.params, ExperimentParameters::default());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_text_change_rebuilds_series_only() {
        let mut state = AppState::default();
        let before = state.results();

        state.set_raw_text("1.0, 2.0\ngarbage\n3.0, 4.0".to_string());

        assert_eq!(
            state.series.points,
            vec![MeasurementPoint::new(1.0, 2.0), MeasurementPoint::new(3.0, 4.0)]
        );
        assert_eq!(state.results(), before);

        state.set_raw_text(String::new());
        assert!(state.series.is_empty());
        assert_eq!(state.results(), before);
    }

    #[test]
    fn test_parameter_change_updates_results() {
        let mut state = AppState::default();
        state.params.vol_total_ml = 1.0;
        assert!(state.results().weak_acid.mass_g < 0.0);
    }

    #[test]
    fn test_reset() {
        let mut state = AppState::default();
        state.set_raw_text("9, 9".to_string());
        state.params.sample_volume_ml = 0.0;
        state.status_message = Some("Error".to_string());

        state.reset();

        assert_eq!(state.raw_text, DEFAULT_MEASUREMENTS);
        assert_eq!(state.series.len(), 21);
        assert_eq!(state.params.sample_volume_ml, 10.0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_apply_series_import_with_parameters() {
        let mut state = AppState::default();
        let params = ExperimentParameters {
            sample_volume_ml: 20.0,
            ..ExperimentParameters::default()
        };
        let series = TitrationSeries::from_points(vec![
            MeasurementPoint::new(0.5, 3.1),
            MeasurementPoint::new(0.25, 3.3),
        ]);

        state.apply_import(ImportedData::Series {
            series: series.clone(),
            parameters: Some(params),
        });

        assert_eq!(state.raw_text, "0.5, 3.1\n0.25, 3.3");
        assert_eq!(state.series, series);
        assert_eq!(state.params.sample_volume_ml, 20.0);
    }

    #[test]
    fn test_apply_raw_text_import_keeps_parameters() {
        let mut state = AppState::default();
        state.params.naoh_normality_n = 0.5;

        state.apply_import(ImportedData::RawText("0.0, 1.0\nx".to_string()));

        assert_eq!(state.series.len(), 1);
        assert_eq!(state.params.naoh_normality_n, 0.5);
    }

    #[test]
    fn test_failed_import_leaves_state() {
        let mut state = AppState::default();
        let err = state.import_file(Path::new("readings.parquet"));
        assert!(err.is_err());
        assert_eq!(state.series.len(), 21);
    }
}
