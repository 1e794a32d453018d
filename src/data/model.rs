use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MeasurementPoint – one (volume, conductance) reading
// ---------------------------------------------------------------------------

/// A single reading taken after adding titrant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPoint {
    /// Volume of NaOH added so far, in ml.
    pub volume_ml: f64,
    /// Measured conductance, in mS.
    pub conductance_ms: f64,
}

impl MeasurementPoint {
    pub fn new(volume_ml: f64, conductance_ms: f64) -> Self {
        Self {
            volume_ml,
            conductance_ms,
        }
    }
}

// ---------------------------------------------------------------------------
// TitrationSeries – the parsed readings in input order
// ---------------------------------------------------------------------------

/// Readings in the order they were entered. Never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitrationSeries {
    pub points: Vec<MeasurementPoint>,
}

impl TitrationSeries {
    pub fn from_points(points: Vec<MeasurementPoint>) -> Self {
        Self { points }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeasurementPoint> {
        self.points.iter()
    }
}

// ---------------------------------------------------------------------------
// ExperimentParameters – the numeric form inputs
// ---------------------------------------------------------------------------

pub const DEFAULT_SAMPLE_VOLUME_ML: f64 = 10.0;
pub const DEFAULT_NAOH_NORMALITY_N: f64 = 0.1;
pub const DEFAULT_VOL_STRONG_ACID_ML: f64 = 2.0;
pub const DEFAULT_VOL_TOTAL_ML: f64 = 5.0;

/// Experiment inputs. Every field is set independently; no cross-field
/// checks are made (`vol_total_ml` may be below `vol_strong_acid_ml`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentParameters {
    /// Volume of the titrated sample aliquot, in ml.
    pub sample_volume_ml: f64,
    /// Normality of the NaOH titrant, in N.
    pub naoh_normality_n: f64,
    /// First breakpoint: NaOH consumed by HCl (Vₐ), in ml.
    pub vol_strong_acid_ml: f64,
    /// Second breakpoint: NaOH consumed by HCl + CH₃COOH (Vb), in ml.
    pub vol_total_ml: f64,
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        Self {
            sample_volume_ml: DEFAULT_SAMPLE_VOLUME_ML,
            naoh_normality_n: DEFAULT_NAOH_NORMALITY_N,
            vol_strong_acid_ml: DEFAULT_VOL_STRONG_ACID_ML,
            vol_total_ml: DEFAULT_VOL_TOTAL_ML,
        }
    }
}

// ---------------------------------------------------------------------------
// Default dataset shown in the text area
// ---------------------------------------------------------------------------

/// Example readings: 0.0 → 4.0 ml in 0.2 ml steps, 4.2 → 8.2 mS.
pub const DEFAULT_MEASUREMENTS: &str = "0.0, 4.2
0.2, 4.4
0.4, 4.6
0.6, 4.8
0.8, 5.0
1.0, 5.2
1.2, 5.4
1.4, 5.6
1.6, 5.8
1.8, 6.0
2.0, 6.2
2.2, 6.4
2.4, 6.6
2.6, 6.8
2.8, 7.0
3.0, 7.2
3.2, 7.4
3.4, 7.6
3.6, 7.8
3.8, 8.0
4.0, 8.2";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = ExperimentParameters::default();
        assert_eq!(params.sample_volume_ml, 10.0);
        assert_eq!(params.naoh_normality_n, 0.1);
        assert_eq!(params.vol_strong_acid_ml, 2.0);
        assert_eq!(params.vol_total_ml, 5.0);
    }

    #[test]
    fn test_parameters_partial_json_uses_defaults() {
        let params: ExperimentParameters =
            serde_json::from_str(r#"{ "naoh_normality_n": 0.05 }"#).unwrap();
        assert_eq!(params.naoh_normality_n, 0.05);
        assert_eq!(params.sample_volume_ml, DEFAULT_SAMPLE_VOLUME_ML);
        assert_eq!(params.vol_total_ml, DEFAULT_VOL_TOTAL_ML);
    }

    #[test]
    fn test_default_measurements_shape() {
        assert_eq!(DEFAULT_MEASUREMENTS.lines().count(), 21);
        assert!(DEFAULT_MEASUREMENTS.starts_with("0.0, 4.2"));
        assert!(DEFAULT_MEASUREMENTS.ends_with("4.0, 8.2"));
    }
}
