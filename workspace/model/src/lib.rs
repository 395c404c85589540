//! Data layer for the solar output dashboard: the observation table loaded
//! from the forecasting dataset, the predictor column enum, and the
//! date-range filter.

pub mod filter;
pub mod loader;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Header name of the date column in the source dataset.
pub const DATE_COLUMN: &str = "Date";
/// Header name of the target column in the source dataset.
pub const OUTPUT_COLUMN: &str = "Solar Output (MWh)";

/// One of the three environmental predictor columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predictor {
    Irradiance,
    Temperature,
    Humidity,
}

impl Predictor {
    pub const ALL: [Predictor; 3] = [
        Predictor::Irradiance,
        Predictor::Temperature,
        Predictor::Humidity,
    ];

    /// The column header this predictor carries in the source dataset.
    /// Also used as the human-readable axis label.
    pub fn column_name(&self) -> &'static str {
        match self {
            Predictor::Irradiance => "Irradiance (kWh/m²)",
            Predictor::Temperature => "Temperature (°C)",
            Predictor::Humidity => "Humidity (%)",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.column_name() == name)
    }
}

impl std::fmt::Display for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A single dated measurement row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub irradiance: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub output: f64,
}

impl Observation {
    /// Value of the given predictor column for this row.
    pub fn predictor(&self, predictor: Predictor) -> f64 {
        match predictor {
            Predictor::Irradiance => self.irradiance,
            Predictor::Temperature => self.temperature,
            Predictor::Humidity => self.humidity,
        }
    }
}

/// Ordered, immutable table of observations. Dates are not required to be
/// unique or sorted; `date_span` scans for the extremes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest dates present in the table, or `None` when empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.first()?.date;
        let span = self.rows.iter().fold((first, first), |(min, max), row| {
            (min.min(row.date), max.max(row.date))
        });
        Some(span)
    }
}
