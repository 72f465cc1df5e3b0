//! Dataset registry
//!
//! Fixed lookup from a tab to everything it shows: KPI cards, chart inputs,
//! detail table rows and the table's column order. The data is static seed
//! data built once per revision and shared read-only.

mod program;
mod transit;

#[cfg(test)]
mod registry_tests;

use std::sync::LazyLock;

use impact_types::{
    ChartSeries, ChartSpec, KpiSummary, MetricRecord, Revision, TabId, TrendDirection,
};

/// A chart's spec together with the series it draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub spec: ChartSpec,
    pub series: ChartSeries,
}

/// Everything one tab renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub tab: TabId,
    pub title: &'static str,
    pub kpis: Vec<KpiSummary>,
    pub charts: Vec<ChartInput>,
    pub rows: Vec<MetricRecord>,
    /// Table column order; fixed per tab, never derived from the rows
    pub columns: Vec<&'static str>,
}

impl Dataset {
    pub fn chart(&self, key: &str) -> Option<&ChartInput> {
        self.charts.iter().find(|c| c.spec.key == key)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| *c == column)
    }
}

/// The three datasets of one revision.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    revision: Revision,
    overview: Dataset,
    demographics: Dataset,
    outcomes: Dataset,
}

static PROGRAM: LazyLock<Registry> = LazyLock::new(program::registry);
static TRANSIT: LazyLock<Registry> = LazyLock::new(transit::registry);

impl Registry {
    pub fn for_revision(revision: Revision) -> &'static Registry {
        match revision {
            Revision::Program => &PROGRAM,
            Revision::Transit => &TRANSIT,
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn resolve(&self, tab: TabId) -> &Dataset {
        match tab {
            TabId::Overview => &self.overview,
            TabId::Demographics => &self.demographics,
            TabId::Outcomes => &self.outcomes,
        }
    }

    /// Parse an external tab key, falling back to the first tab when unknown.
    pub fn tab_or_default(&self, key: &str) -> TabId {
        self.revision.parse_tab(key).unwrap_or_else(|| {
            tracing::debug!(key, revision = ?self.revision, "unknown tab key, using first tab");
            TabId::default()
        })
    }

    /// Resolve by external tab key. Unknown keys resolve to the first tab.
    pub fn resolve_key(&self, key: &str) -> &Dataset {
        self.resolve(self.tab_or_default(key))
    }

    pub fn datasets(&self) -> impl Iterator<Item = &Dataset> {
        TabId::all().iter().map(|tab| self.resolve(*tab))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Seed helpers
// ─────────────────────────────────────────────────────────────────────────────

fn kpi(
    label: &str,
    value: &str,
    change_text: &str,
    target_text: &str,
    trend: TrendDirection,
    progress_percent: f64,
    trend_series: &[f64],
) -> KpiSummary {
    debug_assert!(!trend_series.is_empty(), "KPI {label} has no trend data");
    KpiSummary {
        label: label.to_string(),
        value: value.to_string(),
        change_text: change_text.to_string(),
        target_text: target_text.to_string(),
        trend,
        progress_percent: progress_percent.max(0.0),
        trend_series: trend_series.to_vec(),
    }
}

fn chart(spec: ChartSpec, series: ChartSeries) -> ChartInput {
    ChartInput { spec, series }
}

/// Build a series from a label column plus parallel numeric columns.
fn labelled_series(label_key: &str, labels: &[&str], columns: &[(&str, &[f64])]) -> ChartSeries {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            columns.iter().fold(
                MetricRecord::new().with(label_key, *label),
                |record, (key, values)| match values.get(i) {
                    Some(v) => record.with(key, *v),
                    None => record,
                },
            )
        })
        .collect()
}
