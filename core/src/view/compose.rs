use impact_types::{
    ChartKind, ChartSeries, ChartSpec, DashboardState, KpiSummary, SortDirection, TabId, Viewport,
};

use crate::bars::{ComparisonRow, comparison_rows, progress_fill};
use crate::dataset::Registry;
use crate::format::{column_label, format_cell};
use crate::sort::sort_rows;
use crate::sparkline::{Sparkline, project};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: &'static str,
    pub tab: TabId,
    pub tab_title: &'static str,
    pub tabs: Vec<TabButton>,
    pub kpis: Vec<KpiCard>,
    pub charts: Vec<ChartPanel>,
    pub table: TableView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabButton {
    pub tab: TabId,
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub summary: KpiSummary,
    pub sparkline: Sparkline,
    /// Paint width of the progress-to-target bar, `[0, 100]`
    pub progress_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub spec: ChartSpec,
    pub series: ChartSeries,
    pub expanded: bool,
    /// Pre-computed rows for [`ChartKind::Comparison`] charts, empty otherwise
    pub comparison: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableHeader {
    pub key: &'static str,
    pub label: String,
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<TableHeader>,
    /// Formatted cells in header order, rows in sorted order
    pub rows: Vec<Vec<String>>,
}

/// Derive the full view for `state`. Nothing is cached between calls.
pub fn compose(registry: &Registry, state: &DashboardState, viewport: Viewport) -> DashboardView {
    let revision = registry.revision();
    let dataset = registry.resolve(state.active_tab);

    let tabs = TabId::all()
        .iter()
        .map(|tab| TabButton {
            tab: *tab,
            key: revision.tab_key(*tab),
            label: revision.tab_label(*tab),
            active: *tab == state.active_tab,
        })
        .collect();

    let kpis = dataset
        .kpis
        .iter()
        .map(|kpi| KpiCard {
            sparkline: project(&kpi.trend_series, viewport),
            progress_width: progress_fill(kpi),
            summary: kpi.clone(),
        })
        .collect();

    let charts = dataset
        .charts
        .iter()
        .map(|input| ChartPanel {
            expanded: state.expanded_chart.as_deref() == Some(input.spec.key.as_str()),
            comparison: match input.spec.kind {
                ChartKind::Comparison => comparison_rows(&input.spec, &input.series),
                _ => Vec::new(),
            },
            spec: input.spec.clone(),
            series: input.series.clone(),
        })
        .collect();

    let headers = dataset
        .columns
        .iter()
        .map(|&key| TableHeader {
            key,
            label: column_label(key),
            sorted: state.sort.indicator(key),
        })
        .collect();

    let rows = sort_rows(&dataset.rows, &state.sort)
        .into_iter()
        .map(|record| {
            dataset
                .columns
                .iter()
                .map(|key| {
                    record
                        .get(key)
                        .map(|value| format_cell(key, value))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    DashboardView {
        title: revision.title(),
        tab: state.active_tab,
        tab_title: dataset.title,
        tabs,
        kpis,
        charts,
        table: TableView { headers, rows },
    }
}
