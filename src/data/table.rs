use super::model::TitrationSeries;
use super::parser::format_number;

pub const VOLUME_COLUMN: &str = "Volume of NaOH (ml)";
pub const CONDUCTANCE_COLUMN: &str = "Conductance (mS)";

// ---------------------------------------------------------------------------
// TitrationTable – read-only tabular view over a series
// ---------------------------------------------------------------------------

/// Two labelled columns over the readings, in stored order.
#[derive(Debug, Clone, Copy)]
pub struct TitrationTable<'a> {
    series: &'a TitrationSeries,
}

impl<'a> TitrationTable<'a> {
    /// Build the table view, or `None` when there is nothing to show.
    pub fn present(series: &'a TitrationSeries) -> Option<Self> {
        if series.is_empty() {
            None
        } else {
            Some(Self { series })
        }
    }

    pub fn headers(&self) -> [&'static str; 2] {
        [VOLUME_COLUMN, CONDUCTANCE_COLUMN]
    }

    /// Cell text for every row, top to bottom. Whole numbers keep one
    /// decimal (`0.0`, `2.0`).
    pub fn rows(&self) -> impl Iterator<Item = [String; 2]> + 'a {
        self.series
            .iter()
            .map(|p| [format_number(p.volume_ml), format_number(p.conductance_ms)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;

    #[test]
    fn test_empty_series_has_no_table() {
        let series = TitrationSeries::default();
        assert!(TitrationTable::present(&series).is_none());
    }

    #[test]
    fn test_headers_and_order() {
        let series = parse("2.0, 1.5\n0.5, 3.25\n2.0, 1.5");
        let table = TitrationTable::present(&series).unwrap();

        assert_eq!(table.headers(), ["Volume of NaOH (ml)", "Conductance (mS)"]);

        let rows: Vec<[String; 2]> = table.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["2.0".to_string(), "1.5".to_string()]);
        assert_eq!(rows[1], ["0.5".to_string(), "3.25".to_string()]);
        // Duplicates are kept.
        assert_eq!(rows[2], rows[0]);
    }

    #[test]
    fn test_default_dataset_cells() {
        let series = parse(crate::data::model::DEFAULT_MEASUREMENTS);
        let table = TitrationTable::present(&series).unwrap();
        let rows: Vec<[String; 2]> = table.rows().collect();

        assert_eq!(rows.len(), 21);
        assert_eq!(rows[0], ["0.0".to_string(), "4.2".to_string()]);
        assert_eq!(rows[5], ["1.0".to_string(), "5.2".to_string()]);
        assert_eq!(rows[20], ["4.0".to_string(), "8.2".to_string()]);
    }

    #[test]
    fn test_table_cells_read_back_to_same_series() {
        let series = parse("0.0, 4.2\n0.2, 4.4\n1.7, 0.123456789\n0.1, 3");
        let table = TitrationTable::present(&series).unwrap();

        let text: Vec<String> = table.rows().map(|[v, c]| format!("{v},{c}")).collect();
        let reread = parse(&text.join("\n"));

        assert_eq!(reread, series);
    }
}
