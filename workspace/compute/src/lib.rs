//! Analytics layer for the solar output dashboard: the one-time model fit,
//! the derived predicted column, and the pure chart builders.

pub mod charts;
pub mod error;
pub mod regression;

use chrono::NaiveDate;
use model::{ObservationTable, filter::date_filter_indices};
use tracing::debug;

pub use error::{ComputeError, Result};
pub use regression::LinearModel;

/// Everything the rendering side needs, built once at startup and immutable
/// afterward: the loaded table, the model fitted over all of it, and the
/// predicted column computed from that model.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardContext {
    table: ObservationTable,
    model: LinearModel,
    predicted: Vec<f64>,
}

impl DashboardContext {
    pub fn new(table: ObservationTable) -> Result<Self> {
        let model = LinearModel::fit(&table)?;
        let predicted = model.predict_many(table.rows());
        debug!(rows = table.len(), r_squared = model.score(), "dashboard context ready");
        Ok(Self {
            table,
            model,
            predicted,
        })
    }

    pub fn table(&self) -> &ObservationTable {
        &self.table
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// The derived predicted-output column, one value per table row.
    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.table.date_span()
    }

    /// Rows in the inclusive date interval paired with their slice of the
    /// predicted column. The stored column is reused, never recomputed.
    pub fn filtered(&self, selection: Option<(NaiveDate, NaiveDate)>) -> FilteredView {
        let indices = date_filter_indices(&self.table, selection);
        FilteredView {
            rows: indices.iter().map(|&idx| self.table.rows()[idx]).collect(),
            predicted: indices.iter().map(|&idx| self.predicted[idx]).collect(),
        }
    }
}

/// A filtered slice of the table with actual and predicted outputs kept in
/// lockstep, as consumed by the chart builders.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub rows: Vec<model::Observation>,
    pub predicted: Vec<f64>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
