//! View composition
//!
//! All dashboard state lives in [`DashboardState`] and changes only through
//! [`apply`]. Every render calls [`compose`], which resolves the active
//! dataset and re-derives KPI cards, charts and the sorted table from
//! scratch.

mod compose;

#[cfg(test)]
mod view_tests;

pub use compose::{ChartPanel, DashboardView, KpiCard, TabButton, TableHeader, TableView, compose};

use impact_types::{DashboardState, TabId};

/// User interactions the dashboard reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(TabId),
    /// Column header click
    SortBy(String),
    /// Chart click: expand it, or collapse it if it is already expanded
    ToggleChart(String),
    CollapseChart,
}

/// Apply one interaction to the state.
///
/// Switching tabs keeps the sort column and direction. A column the new tab
/// lacks is simply ignored by the sort engine until a tab that has it is
/// shown again.
pub fn apply(state: &mut DashboardState, action: Action) {
    match action {
        Action::SelectTab(tab) => {
            tracing::debug!(from = ?state.active_tab, to = ?tab, "tab selected");
            state.active_tab = tab;
        }
        Action::SortBy(column) => {
            state.sort.click(&column);
            tracing::debug!(column = %column, direction = ?state.sort.direction, "sort changed");
        }
        Action::ToggleChart(key) => {
            if state.expanded_chart.as_deref() == Some(key.as_str()) {
                state.expanded_chart = None;
            } else {
                state.expanded_chart = Some(key);
            }
            tracing::debug!(expanded = ?state.expanded_chart, "chart toggled");
        }
        Action::CollapseChart => state.expanded_chart = None,
    }
}

/// Initial state for a tab key in the registry's vocabulary.
pub fn initial_state(registry: &crate::dataset::Registry, tab_key: Option<&str>) -> DashboardState {
    DashboardState {
        active_tab: tab_key
            .map(|key| registry.tab_or_default(key))
            .unwrap_or_default(),
        ..Default::default()
    }
}
