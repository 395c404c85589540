//! CSV ingestion for the forecasting dataset.
//!
//! The loader is reader-based so the same code path serves native callers
//! (files, test fixtures) and the wasm frontend (fetched response body).

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::{DATE_COLUMN, OUTPUT_COLUMN, Observation, ObservationTable, Predictor};

/// Errors raised while reading the source dataset. All of them are fatal for
/// the dashboard: no other component can proceed without the table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("line {line}: unparsable date `{value}`")]
    BadDate { line: usize, value: String },

    #[error("line {line}: column `{column}` has non-numeric value `{value}`")]
    BadNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// Parse the dataset from any reader into an [`ObservationTable`].
pub fn load_csv<R: Read>(reader: R) -> Result<ObservationTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let date_idx = column(DATE_COLUMN)?;
    let irradiance_idx = column(Predictor::Irradiance.column_name())?;
    let temperature_idx = column(Predictor::Temperature.column_name())?;
    let humidity_idx = column(Predictor::Humidity.column_name())?;
    let output_idx = column(OUTPUT_COLUMN)?;

    let mut rows = Vec::new();
    for (record_no, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header occupies line 1.
        let line = record_no + 2;

        let field = |idx: usize| record.get(idx).unwrap_or("");

        let date = parse_date(field(date_idx)).ok_or_else(|| LoadError::BadDate {
            line,
            value: field(date_idx).to_string(),
        })?;

        let number = |idx: usize, column: &'static str| -> Result<f64, LoadError> {
            field(idx).parse::<f64>().map_err(|_| LoadError::BadNumber {
                line,
                column,
                value: field(idx).to_string(),
            })
        };

        rows.push(Observation {
            date,
            irradiance: number(irradiance_idx, Predictor::Irradiance.column_name())?,
            temperature: number(temperature_idx, Predictor::Temperature.column_name())?,
            humidity: number(humidity_idx, Predictor::Humidity.column_name())?,
            output: number(output_idx, OUTPUT_COLUMN)?,
        });
    }

    debug!(rows = rows.len(), "loaded observation table");
    Ok(ObservationTable::from_rows(rows))
}

/// Convenience wrapper for native callers reading from disk.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<ObservationTable, LoadError> {
    let file = std::fs::File::open(path)?;
    load_csv(file)
}

/// ISO dates are the expected format; slash-separated US dates show up in
/// exported spreadsheets often enough to accept as a fallback.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
Date,Irradiance (kWh/m²),Temperature (°C),Humidity (%),Solar Output (MWh)
2024-06-01,5.2,24.0,48,10.1
2024-06-02,6.0,26.5,52,11.8
2024-06-03,4.1,22.0,61,8.0
";

    #[test]
    fn loads_well_formed_csv() {
        let table = load_csv(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);

        let first = table.rows()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(first.irradiance, 5.2);
        assert_eq!(first.temperature, 24.0);
        assert_eq!(first.humidity, 48.0);
        assert_eq!(first.output, 10.1);

        let span = table.date_span().unwrap();
        assert_eq!(span.0, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(span.1, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn accepts_slash_separated_dates() {
        let csv = "\
Date,Irradiance (kWh/m²),Temperature (°C),Humidity (%),Solar Output (MWh)
06/01/2024,5.2,24.0,48,10.1
";
        let table = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            table.rows()[0].date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn reports_missing_column() {
        let csv = "\
Date,Irradiance (kWh/m²),Temperature (°C),Solar Output (MWh)
2024-06-01,5.2,24.0,10.1
";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "Humidity (%)"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_unparsable_date_with_line() {
        let csv = "\
Date,Irradiance (kWh/m²),Temperature (°C),Humidity (%),Solar Output (MWh)
2024-06-01,5.2,24.0,48,10.1
yesterday,6.0,26.5,52,11.8
";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::BadDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_non_numeric_field() {
        let csv = "\
Date,Irradiance (kWh/m²),Temperature (°C),Humidity (%),Solar Output (MWh)
2024-06-01,cloudy,24.0,48,10.1
";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::BadNumber { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Irradiance (kWh/m²)");
                assert_eq!(value, "cloudy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv_path("/nonexistent/forecasting_dataset.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn empty_data_section_yields_empty_table() {
        let csv = "Date,Irradiance (kWh/m²),Temperature (°C),Humidity (%),Solar Output (MWh)\n";
        let table = load_csv(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
        assert!(table.date_span().is_none());
    }
}
