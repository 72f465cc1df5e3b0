//! Percentage bar encodings
//!
//! The layout only paints widths; every percentage is computed here.

use impact_types::{ChartSpec, KpiSummary, MetricRecord};

use crate::format::group_thousands;

/// `value / max * 100`, or 0 when there is no positive scale.
pub fn percent_of(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        value / max * 100.0
    } else {
        0.0
    }
}

/// Paintable width for a percentage, clamped to `[0, 100]`.
pub fn bar_fill(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Width of a KPI card's progress-to-target bar. Over-target KPIs fill the bar.
pub fn progress_fill(kpi: &KpiSummary) -> f64 {
    bar_fill(kpi.progress_percent)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub field: String,
    pub color: String,
    pub text: String,
    /// Raw percentage of the field's scale (may exceed 100)
    pub percent: f64,
    /// Clamped paint width
    pub width: f64,
}

/// One labelled row of side-by-side bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: String,
    pub bars: Vec<BarSegment>,
}

/// Build comparison rows for every record of a series.
///
/// Fields without a `scale_max` are scaled against the largest value of that
/// field in the series. Records missing a field get an empty bar.
pub fn comparison_rows(spec: &ChartSpec, series: &[MetricRecord]) -> Vec<ComparisonRow> {
    series
        .iter()
        .map(|record| ComparisonRow {
            label: record
                .get(&spec.x_field)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            bars: spec
                .fields
                .iter()
                .map(|field| {
                    let scale = field
                        .scale_max
                        .unwrap_or_else(|| series_max(series, &field.key));
                    let value = record.number(&field.key);
                    let percent = value.map(|v| percent_of(v, scale)).unwrap_or(0.0);
                    let text = match value {
                        Some(v) => format!(
                            "{}{}",
                            group_thousands(v),
                            field.unit.as_deref().unwrap_or_default()
                        ),
                        None => String::new(),
                    };
                    BarSegment {
                        field: field.key.clone(),
                        color: field.color.clone(),
                        text,
                        percent,
                        width: bar_fill(percent),
                    }
                })
                .collect(),
        })
        .collect()
}

fn series_max(series: &[MetricRecord], key: &str) -> f64 {
    series
        .iter()
        .filter_map(|r| r.number(key))
        .fold(0.0, f64::max)
}
