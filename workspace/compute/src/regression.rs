//! Ordinary least squares regression of solar output on the three
//! environmental predictors.
//!
//! The design matrix is tall (every table row, four columns including the
//! intercept), so the system is solved with SVD rather than QR, trying
//! progressively looser tolerances before giving up on a near-singular fit.

use model::{OUTPUT_COLUMN, Observation, ObservationTable, Predictor};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::{ComputeError, Result};

/// A fitted linear model: three predictor coefficients plus an intercept.
/// Fit exactly once over the full table and read-only afterward; R² against
/// the training data is computed at fit time and reported by [`score`].
///
/// [`score`]: LinearModel::score
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: [f64; 3],
    intercept: f64,
    r_squared: f64,
}

impl LinearModel {
    /// Least-squares fit of the target column on the predictor columns over
    /// every row of the table. Descriptive by design: no regularization and
    /// no train/test split.
    pub fn fit(table: &ObservationTable) -> Result<Self> {
        if table.is_empty() {
            return Err(ComputeError::EmptyTable);
        }
        check_finite(table)?;

        let rows = table.rows();
        let design = DMatrix::from_fn(rows.len(), 4, |r, c| match c {
            0 => 1.0,
            _ => rows[r].predictor(Predictor::ALL[c - 1]),
        });
        let target = DVector::from_iterator(rows.len(), rows.iter().map(|row| row.output));

        let beta = solve_least_squares(&design, &target)?;
        let mut fitted = Self {
            intercept: beta[0],
            coefficients: [beta[1], beta[2], beta[3]],
            r_squared: 0.0,
        };
        fitted.r_squared = r_squared(rows, &fitted.predict_many(rows));

        debug!(
            intercept = fitted.intercept,
            coefficients = ?fitted.coefficients,
            r_squared = fitted.r_squared,
            "fitted linear model"
        );
        Ok(fitted)
    }

    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Affine map for a single what-if triple.
    pub fn predict_one(&self, irradiance: f64, temperature: f64, humidity: f64) -> f64 {
        self.intercept
            + self.coefficients[0] * irradiance
            + self.coefficients[1] * temperature
            + self.coefficients[2] * humidity
    }

    pub fn predict_row(&self, row: &Observation) -> f64 {
        self.predict_one(row.irradiance, row.temperature, row.humidity)
    }

    /// Row-wise prediction. Pure and deterministic: identical inputs always
    /// yield identical outputs.
    pub fn predict_many(&self, rows: &[Observation]) -> Vec<f64> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    /// Coefficient of determination against the model's own training data.
    pub fn score(&self) -> f64 {
        self.r_squared
    }
}

fn check_finite(table: &ObservationTable) -> Result<()> {
    for (row_idx, row) in table.rows().iter().enumerate() {
        let columns = [
            (row.irradiance, Predictor::Irradiance.column_name()),
            (row.temperature, Predictor::Temperature.column_name()),
            (row.humidity, Predictor::Humidity.column_name()),
            (row.output, OUTPUT_COLUMN),
        ];
        for (value, column) in columns {
            if !value.is_finite() {
                return Err(ComputeError::NonFiniteValue {
                    column,
                    row: row_idx,
                });
            }
        }
    }
    Ok(())
}

/// SVD least-squares solve, retrying with looser tolerances so that nearly
/// collinear predictor columns still produce a usable fit.
fn solve_least_squares(design: &DMatrix<f64>, target: &DVector<f64>) -> Result<DVector<f64>> {
    let svd = design.clone().svd(true, true);

    for &tolerance in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(target, tolerance) {
            if beta.iter().all(|value| value.is_finite()) {
                return Ok(beta);
            }
        }
    }

    Err(ComputeError::Fit(
        "design matrix is too ill-conditioned".to_string(),
    ))
}

/// Standard R² formula over (actual, predicted) pairs. With zero target
/// variance the fraction is undefined; an exact fit counts as 1.0 and
/// anything else as 0.0.
pub fn r_squared(rows: &[Observation], predicted: &[f64]) -> f64 {
    let n = rows.len() as f64;
    let mean = rows.iter().map(|row| row.output).sum::<f64>() / n;
    let ss_tot: f64 = rows.iter().map(|row| (row.output - mean).powi(2)).sum();
    let ss_res: f64 = rows
        .iter()
        .zip(predicted)
        .map(|(row, pred)| (row.output - pred).powi(2))
        .sum();

    if ss_tot == 0.0 {
        if ss_res < f64::EPSILON { 1.0 } else { 0.0 }
    } else {
        1.0 - ss_res / ss_tot
    }
}
