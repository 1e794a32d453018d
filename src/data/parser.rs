use thiserror::Error;

use super::model::{MeasurementPoint, TitrationSeries};

// ---------------------------------------------------------------------------
// Line-level errors
// ---------------------------------------------------------------------------

/// Why a single text-area line was not accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected 2 comma-separated values, found {0}")]
    TokenCount(usize),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// Result of a permissive parse: accepted points plus how many lines were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub series: TitrationSeries,
    pub discarded: usize,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse pasted `volume, conductance` lines into a series.
///
/// Malformed lines are skipped without signalling the caller; an input with
/// no usable line yields an empty series.
pub fn parse(raw_text: &str) -> TitrationSeries {
    let report = parse_report(raw_text);
    log::debug!(
        "Parsed {} points ({} lines discarded)",
        report.series.len(),
        report.discarded
    );
    report.series
}

/// Same as [`parse`] but also counts the discarded lines.
pub fn parse_report(raw_text: &str) -> ParseReport {
    let mut points = Vec::new();
    let mut discarded = 0;

    for (line_no, line) in raw_text.trim().lines().enumerate() {
        match parse_line(line) {
            Ok(point) => points.push(point),
            Err(e) => {
                log::debug!("Skipping line {}: {e}", line_no + 1);
                discarded += 1;
            }
        }
    }

    ParseReport {
        series: TitrationSeries::from_points(points),
        discarded,
    }
}

/// Parse one `volume, conductance` line.
pub fn parse_line(line: &str) -> Result<MeasurementPoint, LineError> {
    let tokens: Vec<&str> = line.trim().split(',').collect();
    let [volume, conductance] = tokens.as_slice() else {
        return Err(LineError::TokenCount(tokens.len()));
    };
    Ok(MeasurementPoint::new(
        parse_number(volume)?,
        parse_number(conductance)?,
    ))
}

/// Render a series back into the text-area format, one `v, c` pair per line.
///
/// `parse(&format_series(s)) == s` for finite values.
pub fn format_series(series: &TitrationSeries) -> String {
    series
        .iter()
        .map(|p| {
            format!(
                "{}, {}",
                format_number(p.volume_ml),
                format_number(p.conductance_ms)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shortest text that parses back to `value`, keeping one decimal on whole
/// numbers (`2.0`, not `2`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn parse_number(token: &str) -> Result<f64, LineError> {
    let token = token.trim();
    let invalid = || LineError::InvalidNumber(token.to_string());
    strip_digit_separators(token)
        .ok_or_else(invalid)?
        .parse::<f64>()
        .map_err(|_| invalid())
}

/// Drop `_` separators that sit between two digits (`1_000.5`). Any other
/// underscore makes the token invalid.
fn strip_digit_separators(token: &str) -> Option<String> {
    if !token.contains('_') {
        return Some(token.to_string());
    }
    let bytes = token.as_bytes();
    let mut out = String::with_capacity(token.len());
    for (i, ch) in token.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}
