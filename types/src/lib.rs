//! Shared data types for the Impact Dashboard
//!
//! This crate contains the serializable model that is shared between the
//! native core (impact-core, impact-cli) and the WASM frontend (impact-app).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Tabs & Revisions
// ─────────────────────────────────────────────────────────────────────────────

/// One of the three top-level dashboard views.
///
/// The variants are tab slots. Each [`Revision`] assigns its own key and
/// label to every slot, so the transit revision shows `equity` in the
/// `Overview` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    #[default]
    Overview,
    Demographics,
    Outcomes,
}

impl TabId {
    pub fn all() -> &'static [TabId] {
        &[TabId::Overview, TabId::Demographics, TabId::Outcomes]
    }
}

/// Bundled dashboard configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Revision {
    /// Workforce program dashboard: overview / demographics / outcomes
    #[default]
    Program,
    /// Earlier metro transit dashboard: equity / performance / impact
    Transit,
}

impl Revision {
    /// Stable key used for the tab in this revision
    pub fn tab_key(&self, tab: TabId) -> &'static str {
        match (self, tab) {
            (Revision::Program, TabId::Overview) => "overview",
            (Revision::Program, TabId::Demographics) => "demographics",
            (Revision::Program, TabId::Outcomes) => "outcomes",
            (Revision::Transit, TabId::Overview) => "equity",
            (Revision::Transit, TabId::Demographics) => "performance",
            (Revision::Transit, TabId::Outcomes) => "impact",
        }
    }

    /// Button label for the tab in this revision
    pub fn tab_label(&self, tab: TabId) -> &'static str {
        match (self, tab) {
            (Revision::Program, TabId::Overview) => "Program Overview",
            (Revision::Program, TabId::Demographics) => "Demographics",
            (Revision::Program, TabId::Outcomes) => "Outcomes",
            (Revision::Transit, TabId::Overview) => "Service Equity",
            (Revision::Transit, TabId::Demographics) => "Performance",
            (Revision::Transit, TabId::Outcomes) => "Community Impact",
        }
    }

    /// Parse a tab key using this revision's vocabulary (case-insensitive).
    pub fn parse_tab(&self, key: &str) -> Option<TabId> {
        let key = key.trim();
        TabId::all()
            .iter()
            .copied()
            .find(|tab| self.tab_key(*tab).eq_ignore_ascii_case(key))
    }

    pub fn parse(name: &str) -> Option<Revision> {
        match name.trim().to_ascii_lowercase().as_str() {
            "program" => Some(Revision::Program),
            "transit" => Some(Revision::Transit),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Revision::Program => "Workforce Program Impact Dashboard",
            Revision::Transit => "LBS Ventures - Impact Assessment",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A single table cell: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// One row of domain data: an ordered mapping from column key to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricRecord {
    fields: Vec<(String, CellValue)>,
}

impl MetricRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion. Replaces an existing key in place.
    pub fn with(mut self, key: &str, value: impl Into<CellValue>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(CellValue::as_number)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered records sharing one shape, handed to the chart renderer.
pub type ChartSeries = Vec<MetricRecord>;

// ─────────────────────────────────────────────────────────────────────────────
// KPI Summaries
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "▲",
            TrendDirection::Down => "▼",
        }
    }
}

/// Summary tile: current value, change indicator, target and trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub label: String,
    pub value: String,
    pub change_text: String,
    pub target_text: String,
    pub trend: TrendDirection,
    /// Progress toward target. Never negative, may exceed 100.
    pub progress_percent: f64,
    /// Never empty
    pub trend_series: Vec<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart Specs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    Pie,
    /// Horizontal per-row bars scaled against a fixed maximum per field
    Comparison,
}

/// A named field of the series and how the chart should paint it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartField {
    pub key: String,
    pub label: String,
    pub color: String,
    /// Fixed full-scale value for comparison bars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<f64>,
    /// Suffix shown after comparison bar values (e.g. " riders")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ChartField {
    pub fn new(key: &str, label: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            scale_max: None,
            unit: None,
        }
    }

    pub fn scaled(mut self, max: f64) -> Self {
        self.scale_max = Some(max);
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }
}

/// Everything the chart collaborator needs besides the series itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub key: String,
    pub title: String,
    pub kind: ChartKind,
    /// Category / x-axis field
    pub x_field: String,
    pub fields: Vec<ChartField>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_stroke_width() -> f64 {
    2.0
}

impl ChartSpec {
    pub fn new(key: &str, title: &str, kind: ChartKind, x_field: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            kind,
            x_field: x_field.to_string(),
            fields: Vec::new(),
            stroke_width: default_stroke_width(),
        }
    }

    pub fn field(mut self, field: ChartField) -> Self {
        self.fields.push(field);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current table sort. Only header clicks change it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: the same column while ascending flips to descending,
    /// anything else sorts the clicked column ascending.
    pub fn click(&mut self, column: &str) {
        let same = self.column.as_deref() == Some(column);
        if same && self.direction == SortDirection::Ascending {
            self.direction = SortDirection::Descending;
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction to show next to `column`'s header, if it is the sorted one
    pub fn indicator(&self, column: &str) -> Option<SortDirection> {
        (self.column.as_deref() == Some(column)).then_some(self.direction)
    }
}

/// All mutable dashboard state. Updated only through `impact_core::view`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub active_tab: TabId,
    #[serde(default)]
    pub sort: SortState,
    /// At most one chart is shown enlarged
    #[serde(default)]
    pub expanded_chart: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Normalized drawing area for sparklines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default = "default_viewport_width")]
    pub width: f64,
    #[serde(default = "default_viewport_height")]
    pub height: f64,
}

fn default_viewport_width() -> f64 {
    100.0
}
fn default_viewport_height() -> f64 {
    20.0
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

/// Startup options. Read-only; the dashboard never writes it back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub revision: Revision,
    /// Tab key in the revision's vocabulary. Unknown keys fall back to the first tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_tab: Option<String>,
    #[serde(default)]
    pub sparkline: Viewport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_click_toggles_same_column() {
        let mut sort = SortState::default();
        sort.click("cost");
        assert_eq!(sort.column.as_deref(), Some("cost"));
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.click("cost");
        assert_eq!(sort.direction, SortDirection::Descending);

        // Third click on a descending column starts over ascending
        sort.click("cost");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_click_new_column_resets_to_ascending() {
        let mut sort = SortState {
            column: Some("cost".into()),
            direction: SortDirection::Descending,
        };
        sort.click("completion");
        assert_eq!(sort.column.as_deref(), Some("completion"));
        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(sort.indicator("completion"), Some(SortDirection::Ascending));
        assert_eq!(sort.indicator("cost"), None);
    }

    #[test]
    fn test_revision_tab_vocabulary() {
        assert_eq!(Revision::Program.parse_tab("Outcomes"), Some(TabId::Outcomes));
        assert_eq!(Revision::Transit.parse_tab("equity"), Some(TabId::Overview));
        assert_eq!(Revision::Program.parse_tab("equity"), None);
        assert_eq!(Revision::parse("TRANSIT"), Some(Revision::Transit));
    }

    #[test]
    fn test_record_builder_replaces_existing_key() {
        let rec = MetricRecord::new()
            .with("program", "Healthcare")
            .with("cost", 2850.0)
            .with("cost", 2900.0);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.number("cost"), Some(2900.0));
        assert_eq!(rec.keys().collect::<Vec<_>>(), vec!["program", "cost"]);
    }

    #[test]
    fn test_state_serde() {
        let state = DashboardState {
            active_tab: TabId::Outcomes,
            sort: SortState {
                column: Some("earnings".into()),
                direction: SortDirection::Descending,
            },
            expanded_chart: None,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"outcomes\""));
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
