//! Pure chart builders: both functions map a filtered view to a plotly
//! trace/layout description and nothing else, so the same inputs always
//! produce the same chart.

use model::{OUTPUT_COLUMN, Predictor};
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter, Trace};

use crate::FilteredView;

const CHART_HEIGHT: usize = 400;

/// A renderable chart: traces plus layout, ready to hand to Plotly.
pub struct ChartSpec {
    pub traces: Vec<Box<dyn Trace>>,
    pub layout: Layout,
}

/// Actual vs. predicted output over time, drawn over the filtered rows so
/// the overlay always reflects the current date selection.
pub fn timeseries_chart(view: &FilteredView) -> ChartSpec {
    let dates: Vec<String> = view.rows.iter().map(|row| row.date.to_string()).collect();
    let actual: Vec<f64> = view.rows.iter().map(|row| row.output).collect();

    let actual_trace = Scatter::new(dates.clone(), actual)
        .mode(Mode::LinesMarkers)
        .name("Solar Output (MWh)")
        .line(Line::new().color("rgb(59, 130, 246)").width(2.0));
    let predicted_trace = Scatter::new(dates, view.predicted.clone())
        .mode(Mode::LinesMarkers)
        .name("Predicted Output")
        .line(Line::new().color("rgb(249, 115, 22)").width(2.0));

    let layout = Layout::new()
        .title(Title::with_text("Actual vs Predicted Output over Time"))
        .x_axis(Axis::new().title(Title::with_text("Date")))
        .y_axis(Axis::new().title(Title::with_text(OUTPUT_COLUMN)))
        .height(CHART_HEIGHT);

    ChartSpec {
        traces: vec![actual_trace as Box<dyn Trace>, predicted_trace],
        layout,
    }
}

/// Output against the chosen predictor, one marker per row with the row's
/// date as hover text.
pub fn scatter_chart(view: &FilteredView, predictor: Predictor) -> ChartSpec {
    let x: Vec<f64> = view.rows.iter().map(|row| row.predictor(predictor)).collect();
    let y: Vec<f64> = view.rows.iter().map(|row| row.output).collect();
    let dates: Vec<String> = view.rows.iter().map(|row| row.date.to_string()).collect();

    let trace = Scatter::new(x, y)
        .mode(Mode::Markers)
        .name(OUTPUT_COLUMN)
        .marker(Marker::new().size(9))
        .text_array(dates);

    let layout = Layout::new()
        .title(Title::with_text(format!("Solar Output vs {}", predictor)))
        .x_axis(Axis::new().title(Title::with_text(predictor.column_name())))
        .y_axis(Axis::new().title(Title::with_text(OUTPUT_COLUMN)))
        .height(CHART_HEIGHT);

    ChartSpec {
        traces: vec![trace as Box<dyn Trace>],
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::{Observation, ObservationTable};
    use serde_json::Value;

    use crate::DashboardContext;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn context() -> DashboardContext {
        let rows = (1..=10)
            .map(|d| Observation {
                date: day(d),
                irradiance: d as f64,
                temperature: 20.0 + d as f64,
                humidity: 60.0 - d as f64,
                output: 2.0 * d as f64 + 3.0,
            })
            .collect();
        DashboardContext::new(ObservationTable::from_rows(rows)).unwrap()
    }

    fn trace_json(spec: &ChartSpec, idx: usize) -> Value {
        serde_json::from_str(&spec.traces[idx].to_json()).unwrap()
    }

    #[test]
    fn timeseries_has_actual_and_predicted_series() {
        let view = context().filtered(None);
        let spec = timeseries_chart(&view);
        assert_eq!(spec.traces.len(), 2);

        let actual = trace_json(&spec, 0);
        let predicted = trace_json(&spec, 1);
        assert_eq!(actual["name"], "Solar Output (MWh)");
        assert_eq!(predicted["name"], "Predicted Output");
        assert_eq!(actual["x"], predicted["x"]);
        assert_eq!(actual["y"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn timeseries_is_limited_to_the_filtered_rows() {
        let view = context().filtered(Some((day(3), day(5))));
        let spec = timeseries_chart(&view);

        let actual = trace_json(&spec, 0);
        let x = actual["x"].as_array().unwrap().clone();
        assert_eq!(x.len(), 3);
        assert_eq!(x[0], "2024-06-03");
        assert_eq!(x[2], "2024-06-05");
    }

    #[test]
    fn scatter_uses_the_chosen_predictor_axis() {
        let view = context().filtered(None);
        let spec = scatter_chart(&view, Predictor::Temperature);

        let trace = trace_json(&spec, 0);
        let x = trace["x"].as_array().unwrap();
        assert_eq!(x[0], 21.0);
        assert_eq!(x[9], 30.0);
        assert_eq!(trace["mode"], "markers");

        let layout: Value = serde_json::to_value(&spec.layout).unwrap();
        assert_eq!(layout["title"]["text"], "Solar Output vs Temperature (°C)");
        assert_eq!(layout["xaxis"]["title"]["text"], "Temperature (°C)");
    }

    #[test]
    fn scatter_points_carry_their_dates_as_hover_text() {
        let view = context().filtered(Some((day(1), day(2))));
        let spec = scatter_chart(&view, Predictor::Irradiance);

        let trace = trace_json(&spec, 0);
        let text = trace["text"].as_array().unwrap();
        assert_eq!(text.len(), 2);
        assert_eq!(text[0], "2024-06-01");
        assert_eq!(text[1], "2024-06-02");
    }

    #[test]
    fn same_inputs_build_the_same_chart() {
        let view = context().filtered(Some((day(2), day(8))));
        let first = scatter_chart(&view, Predictor::Humidity);
        let second = scatter_chart(&view, Predictor::Humidity);
        assert_eq!(first.traces[0].to_json(), second.traces[0].to_json());
    }
}
