//! Metro transit seed data (equity / performance / impact)
//!
//! The earlier revision of the dashboard. It fills the same three tab slots
//! with service equity, system performance and community impact data.

use impact_types::{ChartField, ChartKind, ChartSpec, Revision, TabId, TrendDirection};

use super::{Dataset, Registry, chart, kpi, labelled_series};

const RIDERSHIP_COLOR: &str = "#4a90d9";
const SERVICE_COLOR: &str = "#50c878";
const EQUITY_COLOR: &str = "#9b59b6";
const TREND_COLOR: &str = "#f39c12";

const ROUTES: &[&str] = &["Route 1", "Route 2", "Route 3", "Route 4", "Route 5"];
const RIDERSHIP: &[f64] = &[12500.0, 8900.0, 15600.0, 7200.0, 11300.0];
const SERVICE_HOURS: &[f64] = &[18.0, 12.0, 22.0, 10.0, 16.0];
const DEMOGRAPHIC_INDEX: &[f64] = &[85.0, 92.0, 78.0, 95.0, 82.0];

const MONTHS: &[&str] = &["M1", "M2", "M3", "M4", "M5", "M6"];
const ON_TIME_TREND: &[f64] = &[82.0, 84.0, 85.0, 87.0, 86.0, 87.0];

const YEARS: &[&str] = &["Year 1", "Year 2", "Year 3", "Year 4", "Year 5", "Year 6", "Year 7"];
const PROJECTED_GROWTH: &[f64] = &[28.0, 35.0, 42.0, 48.0, 52.0, 55.0, 58.0];

/// Full scale for ridership bars (riders per day)
const RIDERSHIP_SCALE: f64 = 20000.0;
/// Full scale for service hour bars
const SERVICE_HOURS_SCALE: f64 = 24.0;
/// Full scale for projected growth bars (percent)
const GROWTH_SCALE: f64 = 60.0;

pub(super) fn registry() -> Registry {
    Registry {
        revision: Revision::Transit,
        overview: equity(),
        demographics: performance(),
        outcomes: impact(),
    }
}

fn equity() -> Dataset {
    let routes = labelled_series(
        "route",
        ROUTES,
        &[
            ("ridership", RIDERSHIP),
            ("service_hours", SERVICE_HOURS),
            ("demographic_index", DEMOGRAPHIC_INDEX),
        ],
    );

    Dataset {
        tab: TabId::Overview,
        title: "Service Equity Analysis",
        kpis: Vec::new(),
        charts: vec![
            chart(
                ChartSpec::new("route_equity", "Route Equity Index", ChartKind::Comparison, "route")
                    .field(
                        ChartField::new("demographic_index", "Equity Index", EQUITY_COLOR)
                            .scaled(100.0)
                            .with_unit("%"),
                    ),
                routes.clone(),
            ),
            chart(
                ChartSpec::new(
                    "ridership_vs_service",
                    "Ridership vs Service Hours",
                    ChartKind::Comparison,
                    "route",
                )
                .field(
                    ChartField::new("ridership", "Ridership", RIDERSHIP_COLOR)
                        .scaled(RIDERSHIP_SCALE)
                        .with_unit(" riders"),
                )
                .field(
                    ChartField::new("service_hours", "Service Hours", SERVICE_COLOR)
                        .scaled(SERVICE_HOURS_SCALE)
                        .with_unit(" hrs"),
                ),
                routes.clone(),
            ),
        ],
        rows: routes,
        columns: vec!["route", "ridership", "service_hours", "demographic_index"],
    }
}

fn performance() -> Dataset {
    let trend = labelled_series("month", MONTHS, &[("on_time", ON_TIME_TREND)]);

    Dataset {
        tab: TabId::Demographics,
        title: "System Performance Metrics",
        kpis: vec![
            kpi(
                "On-Time Performance",
                "87%",
                "Last 6 months",
                "Target: 90%",
                TrendDirection::Up,
                96.7,
                ON_TIME_TREND,
            ),
            kpi(
                "Cost Per Rider",
                "$2.45",
                "",
                "Target: $2.50",
                TrendDirection::Down,
                102.0,
                &[2.45],
            ),
            kpi(
                "Customer Satisfaction",
                "4.2/5",
                "",
                "Target: 4.5",
                TrendDirection::Up,
                93.3,
                &[4.2],
            ),
            kpi(
                "Route Efficiency",
                "91%",
                "",
                "Target: 90%",
                TrendDirection::Up,
                101.1,
                &[91.0],
            ),
        ],
        charts: vec![chart(
            ChartSpec::new("performance_trend", "Performance Trend (Last 6 Months)", ChartKind::Bar, "month")
                .field(ChartField::new("on_time", "On-Time %", TREND_COLOR)),
            trend.clone(),
        )],
        rows: trend,
        columns: vec!["month", "on_time"],
    }
}

fn impact() -> Dataset {
    let projections = labelled_series("year", YEARS, &[("growth", PROJECTED_GROWTH)]);

    Dataset {
        tab: TabId::Outcomes,
        title: "Community & Environmental Impact",
        kpis: vec![
            kpi(
                "CO₂ Reduction",
                "12,500 tons",
                "Annual emissions avoided",
                "",
                TrendDirection::Up,
                100.0,
                &[12500.0],
            ),
            kpi(
                "Cars Removed",
                "8,500",
                "Equivalent daily trips",
                "",
                TrendDirection::Up,
                100.0,
                &[8500.0],
            ),
            kpi(
                "Economic Impact",
                "$45.2M",
                "Annual regional benefit",
                "",
                TrendDirection::Up,
                100.0,
                &[45.2],
            ),
            kpi(
                "Jobs Supported",
                "1,250",
                "Direct and indirect employment",
                "",
                TrendDirection::Up,
                100.0,
                &[1250.0],
            ),
        ],
        charts: vec![chart(
            ChartSpec::new("impact_projection", "Projected Growth in Impact", ChartKind::Comparison, "year")
                .field(
                    ChartField::new("growth", "Growth", SERVICE_COLOR)
                        .scaled(GROWTH_SCALE)
                        .with_unit("%"),
                ),
            projections.clone(),
        )],
        rows: projections,
        columns: vec!["year", "growth"],
    }
}
