//! Tests for the dataset registry
//!
//! Verifies that:
//! - Every tab of every revision resolves, and unknown keys fall back
//! - Table rows carry exactly the tab's columns
//! - Chart specs only name fields their series provides

use impact_types::{Revision, TabId};

use super::Registry;

fn revisions() -> [Revision; 2] {
    [Revision::Program, Revision::Transit]
}

#[test]
fn test_unknown_tab_resolves_to_overview() {
    let registry = Registry::for_revision(Revision::Program);
    let fallback = registry.resolve_key("unknown-tab");
    let overview = registry.resolve_key("overview");
    assert_eq!(fallback, overview);
    assert!(std::ptr::eq(fallback, registry.resolve(TabId::Overview)));
}

#[test]
fn test_transit_fallback_is_equity() {
    let registry = Registry::for_revision(Revision::Transit);
    assert_eq!(registry.resolve_key("overview").title, "Service Equity Analysis");
    assert_eq!(registry.resolve_key("IMPACT").tab, TabId::Outcomes);
}

#[test]
fn test_every_tab_resolves_to_itself() {
    for revision in revisions() {
        let registry = Registry::for_revision(revision);
        assert_eq!(registry.revision(), revision);
        for tab in TabId::all() {
            assert_eq!(registry.resolve(*tab).tab, *tab);
            assert_eq!(registry.resolve_key(revision.tab_key(*tab)).tab, *tab);
        }
    }
}

#[test]
fn test_overview_column_order() {
    let registry = Registry::for_revision(Revision::Program);
    assert_eq!(
        registry.resolve(TabId::Overview).columns,
        vec!["program", "enrollment", "completion", "cost", "efficiency", "satisfaction"]
    );
}

#[test]
fn test_rows_match_columns() {
    for revision in revisions() {
        for dataset in Registry::for_revision(revision).datasets() {
            assert!(!dataset.rows.is_empty(), "{} has no rows", dataset.title);
            for row in &dataset.rows {
                let keys: Vec<&str> = row.keys().collect();
                assert_eq!(keys, dataset.columns, "row shape in {}", dataset.title);
            }
        }
    }
}

#[test]
fn test_chart_fields_exist_in_series() {
    for revision in revisions() {
        for dataset in Registry::for_revision(revision).datasets() {
            for input in &dataset.charts {
                assert!(!input.series.is_empty(), "{} has no data", input.spec.key);
                for record in &input.series {
                    assert!(record.get(&input.spec.x_field).is_some(), "{}", input.spec.key);
                    for field in &input.spec.fields {
                        assert!(
                            record.number(&field.key).is_some(),
                            "{} missing {}",
                            input.spec.key,
                            field.key
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_chart_keys_unique_and_kpis_well_formed() {
    for revision in revisions() {
        for dataset in Registry::for_revision(revision).datasets() {
            let mut keys: Vec<&str> = dataset.charts.iter().map(|c| c.spec.key.as_str()).collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate chart key in {}", dataset.title);

            for kpi in &dataset.kpis {
                assert!(!kpi.trend_series.is_empty(), "{}", kpi.label);
                assert!(kpi.progress_percent >= 0.0, "{}", kpi.label);
            }
        }
    }
}

#[test]
fn test_satisfaction_is_shared_by_all_program_tabs() {
    let registry = Registry::for_revision(Revision::Program);
    assert!(registry.datasets().all(|d| d.has_column("satisfaction")));
    assert!(registry.resolve(TabId::Overview).chart("cost_by_program").is_some());
    assert!(registry.resolve(TabId::Overview).chart("earnings_by_program").is_none());
}
