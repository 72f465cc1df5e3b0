//! Table sort engine
//!
//! One engine serves every tab's schema: rows are compared by looking the
//! sorted column up by key, so a column the current rows lack simply leaves
//! them in input order.

use std::cmp::Ordering;

use impact_types::{CellValue, MetricRecord, SortDirection, SortState};

/// Return `rows` ordered by `sort`, without touching the source slice.
///
/// The sort is stable in both directions: rows with equal keys keep their
/// input order.
pub fn sort_rows<'a>(rows: &'a [MetricRecord], sort: &SortState) -> Vec<&'a MetricRecord> {
    let mut ordered: Vec<&MetricRecord> = rows.iter().collect();

    let Some(column) = sort.column.as_deref().filter(|c| !c.is_empty()) else {
        return ordered;
    };
    if !rows.iter().any(|r| r.get(column).is_some()) {
        tracing::debug!(column, "sort column not in dataset, leaving rows unsorted");
        return ordered;
    }

    ordered.sort_by(|a, b| {
        let cmp = compare_cells(a.get(column), b.get(column));
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    ordered
}

/// Total order over optional cells: missing < numbers < text.
fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => x.total_cmp(y),
        (Some(CellValue::Text(x)), Some(CellValue::Text(y))) => x.cmp(y),
        (Some(CellValue::Number(_)), Some(CellValue::Text(_))) => Ordering::Less,
        (Some(CellValue::Text(_)), Some(CellValue::Number(_))) => Ordering::Greater,
    }
}
