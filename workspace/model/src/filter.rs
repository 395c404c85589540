//! Date-range filtering over the observation table.

use chrono::NaiveDate;

use crate::ObservationTable;

/// Indices of the rows whose date falls in the closed interval
/// `[start, end]`, in original table order. A missing selection, or one with
/// `start > end`, is treated as "no filter" and selects every row.
pub fn date_filter_indices(
    table: &ObservationTable,
    selection: Option<(NaiveDate, NaiveDate)>,
) -> Vec<usize> {
    match selection {
        Some((start, end)) if start <= end => table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| start <= row.date && row.date <= end)
            .map(|(idx, _)| idx)
            .collect(),
        _ => (0..table.len()).collect(),
    }
}

/// Sub-table bounded by the inclusive date interval. The source table is not
/// mutated; row order is preserved.
pub fn filter_by_date(
    table: &ObservationTable,
    selection: Option<(NaiveDate, NaiveDate)>,
) -> ObservationTable {
    let rows = date_filter_indices(table, selection)
        .into_iter()
        .map(|idx| table.rows()[idx])
        .collect();
    ObservationTable::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Observation;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn table_of_days(days: &[u32]) -> ObservationTable {
        let rows = days
            .iter()
            .map(|&d| Observation {
                date: day(d),
                irradiance: d as f64,
                temperature: 20.0,
                humidity: 50.0,
                output: d as f64 * 2.0,
            })
            .collect();
        ObservationTable::from_rows(rows)
    }

    #[test]
    fn bounds_are_inclusive_and_order_is_preserved() {
        let table = table_of_days(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let filtered = filter_by_date(&table, Some((day(3), day(5))));

        let dates: Vec<NaiveDate> = filtered.rows().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(3), day(4), day(5)]);
    }

    #[test]
    fn selects_matching_rows_even_when_unsorted() {
        let table = table_of_days(&[9, 2, 7, 4]);
        let filtered = filter_by_date(&table, Some((day(2), day(7))));

        let dates: Vec<NaiveDate> = filtered.rows().iter().map(|r| r.date).collect();
        // Original order, not chronological order.
        assert_eq!(dates, vec![day(2), day(7), day(4)]);
    }

    #[test]
    fn missing_selection_returns_full_table() {
        let table = table_of_days(&[1, 2, 3]);
        assert_eq!(filter_by_date(&table, None), table);
    }

    #[test]
    fn inverted_selection_returns_full_table() {
        let table = table_of_days(&[1, 2, 3]);
        assert_eq!(filter_by_date(&table, Some((day(9), day(1)))), table);
    }

    #[test]
    fn range_outside_data_yields_empty_table() {
        let table = table_of_days(&[1, 2, 3]);
        let filtered = filter_by_date(&table, Some((day(20), day(25))));
        assert!(filtered.is_empty());
    }

    #[test]
    fn single_day_selection_keeps_boundary_rows() {
        let table = table_of_days(&[1, 2, 2, 3]);
        let filtered = filter_by_date(&table, Some((day(2), day(2))));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn indices_line_up_with_filtered_rows() {
        let table = table_of_days(&[1, 2, 3, 4, 5]);
        let indices = date_filter_indices(&table, Some((day(2), day(4))));
        assert_eq!(indices, vec![1, 2, 3]);
    }
}
