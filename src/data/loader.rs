use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{ExperimentParameters, MeasurementPoint, TitrationSeries};
use super::table::{CONDUCTANCE_COLUMN, VOLUME_COLUMN};

// ---------------------------------------------------------------------------
// Imported file contents
// ---------------------------------------------------------------------------

/// What a file contributes to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportedData {
    /// Readings from a structured file, optionally with experiment parameters.
    Series {
        series: TitrationSeries,
        parameters: Option<ExperimentParameters>,
    },
    /// Free text to drop into the text area as-is.
    RawText(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load titration readings from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `volume_ml` and `conductance_ms` columns
///             (the table headings are accepted too)
/// * `.json` – `{ "parameters": {...}, "measurements": [{ "volume_ml", "conductance_ms" }] }`
/// * `.txt`  – pasted `volume, conductance` lines, parsed leniently later
pub fn load_file(path: &Path) -> Result<ImportedData> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "txt" => {
            let text = std::fs::read_to_string(path).context("reading text file")?;
            Ok(ImportedData::RawText(text))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TitrationFile {
    #[serde(default)]
    parameters: Option<ExperimentParameters>,
    measurements: Vec<MeasurementPoint>,
}

/// Expected JSON schema:
///
/// ```json
/// {
///   "parameters": { "sample_volume_ml": 10.0, "naoh_normality_n": 0.1 },
///   "measurements": [
///     { "volume_ml": 0.0, "conductance_ms": 4.2 },
///     { "volume_ml": 0.2, "conductance_ms": 4.4 }
///   ]
/// }
/// ```
///
/// `parameters` and any of its fields may be omitted.
fn load_json(path: &Path) -> Result<ImportedData> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let file: TitrationFile = serde_json::from_str(&text).context("parsing JSON")?;

    Ok(ImportedData::Series {
        series: TitrationSeries::from_points(file.measurements),
        parameters: file.parameters,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row, then one reading per record.
/// Extra columns are ignored.
fn load_csv(path: &Path) -> Result<ImportedData> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let volume_idx = find_column(&headers, &["volume_ml", VOLUME_COLUMN])
        .context("CSV missing 'volume_ml' column")?;
    let conductance_idx = find_column(&headers, &["conductance_ms", CONDUCTANCE_COLUMN])
        .context("CSV missing 'conductance_ms' column")?;

    let mut points = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let volume = parse_cell(record.get(volume_idx).unwrap_or(""), row_no, "volume_ml")?;
        let conductance = parse_cell(
            record.get(conductance_idx).unwrap_or(""),
            row_no,
            "conductance_ms",
        )?;

        points.push(MeasurementPoint::new(volume, conductance));
    }

    Ok(ImportedData::Series {
        series: TitrationSeries::from_points(points),
        parameters: None,
    })
}

fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
}

fn parse_cell(s: &str, row: usize, col: &str) -> Result<f64> {
    s.parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))
}
