//! Workforce program seed data (overview / demographics / outcomes)

use impact_types::{ChartField, ChartKind, ChartSpec, MetricRecord, Revision, TabId, TrendDirection};

use super::{Dataset, Registry, chart, kpi, labelled_series};

const BLUE: &str = "#3b82f6";
const GREEN: &str = "#10b981";
const AMBER: &str = "#f59e0b";
const PURPLE: &str = "#8b5cf6";
const ROSE: &str = "#f43f5e";

const PROGRAMS: &[&str] = &[
    "Digital Skills",
    "Healthcare",
    "Manufacturing",
    "Green Jobs",
    "Business",
];
const MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const QUARTERS: &[&str] = &["Q1", "Q2", "Q3", "Q4"];
const REGIONS: &[&str] = &["North", "South", "East", "West", "Central"];

pub(super) fn registry() -> Registry {
    Registry {
        revision: Revision::Program,
        overview: overview(),
        demographics: demographics(),
        outcomes: outcomes(),
    }
}

fn overview() -> Dataset {
    let rows = vec![
        program_row("Digital Skills", 450.0, 94.0, 2200.0, 92.0, 4.7),
        program_row("Healthcare", 320.0, 89.0, 2850.0, 88.0, 4.6),
        program_row("Manufacturing", 280.0, 85.0, 3200.0, 84.0, 4.4),
        program_row("Green Jobs", 210.0, 91.0, 2650.0, 90.0, 4.8),
        program_row("Business", 190.0, 87.0, 2400.0, 86.0, 4.5),
    ];

    let enrollment: Vec<f64> = rows.iter().filter_map(|r| r.number("enrollment")).collect();

    Dataset {
        tab: TabId::Overview,
        title: "Program Overview",
        kpis: vec![
            kpi(
                "Total Enrollment",
                "1,450",
                "+12.4% vs last quarter",
                "Target: 1,600",
                TrendDirection::Up,
                90.6,
                &[980.0, 1050.0, 1120.0, 1210.0, 1340.0, 1450.0],
            ),
            kpi(
                "Completion Rate",
                "89.2%",
                "+3.1 pts",
                "Target: 90%",
                TrendDirection::Up,
                99.1,
                &[82.0, 84.0, 85.0, 87.0, 88.0, 89.2],
            ),
            kpi(
                "Cost per Completion",
                "$2,660",
                "-5.8% vs last quarter",
                "Target: $2,500",
                TrendDirection::Down,
                94.0,
                &[2950.0, 2900.0, 2820.0, 2760.0, 2700.0, 2660.0],
            ),
            kpi(
                "Participant Satisfaction",
                "4.6/5",
                "+0.2",
                "Target: 4.5",
                TrendDirection::Up,
                102.2,
                &[4.2, 4.3, 4.4, 4.4, 4.5, 4.6],
            ),
        ],
        charts: vec![
            chart(
                ChartSpec::new("enrollment_trend", "Enrollment & Completions", ChartKind::Area, "month")
                    .field(ChartField::new("enrollment", "Enrollment", BLUE))
                    .field(ChartField::new("completions", "Completions", GREEN)),
                labelled_series(
                    "month",
                    MONTHS,
                    &[
                        ("enrollment", &[980.0, 1050.0, 1120.0, 1210.0, 1340.0, 1450.0]),
                        ("completions", &[812.0, 880.0, 951.0, 1049.0, 1176.0, 1293.0]),
                    ],
                ),
            ),
            chart(
                ChartSpec::new("completion_by_program", "Completion & Efficiency", ChartKind::Bar, "program")
                    .field(ChartField::new("completion", "Completion", GREEN))
                    .field(ChartField::new("efficiency", "Efficiency", PURPLE)),
                rows.clone(),
            ),
            chart(
                ChartSpec::new("cost_by_program", "Cost per Participant", ChartKind::Bar, "program")
                    .field(ChartField::new("cost", "Cost", AMBER)),
                rows.clone(),
            ),
            chart(
                ChartSpec::new("enrollment_mix", "Enrollment by Program", ChartKind::Pie, "program")
                    .field(ChartField::new("enrollment", "Enrollment", BLUE)),
                labelled_series("program", PROGRAMS, &[("enrollment", enrollment.as_slice())]),
            ),
        ],
        rows,
        columns: vec!["program", "enrollment", "completion", "cost", "efficiency", "satisfaction"],
    }
}

fn demographics() -> Dataset {
    let rows = vec![
        region_row("North", 24.0, 58.0, 46.0, 62.0, 4.6),
        region_row("South", 21.0, 54.0, 52.0, 68.0, 4.5),
        region_row("East", 19.0, 61.0, 39.0, 55.0, 4.7),
        region_row("West", 22.0, 49.0, 44.0, 59.0, 4.4),
        region_row("Central", 14.0, 56.0, 57.0, 71.0, 4.6),
    ];

    Dataset {
        tab: TabId::Demographics,
        title: "Participant Demographics",
        kpis: vec![
            kpi(
                "Women Participants",
                "56%",
                "+4 pts year over year",
                "Target: 50%",
                TrendDirection::Up,
                112.0,
                &[47.0, 49.0, 51.0, 52.0, 54.0, 56.0],
            ),
            kpi(
                "Low-Income Reach",
                "63%",
                "+6 pts year over year",
                "Target: 65%",
                TrendDirection::Up,
                96.9,
                &[51.0, 54.0, 56.0, 59.0, 61.0, 63.0],
            ),
            kpi(
                "Minority Participation",
                "47%",
                "+2 pts year over year",
                "Target: 50%",
                TrendDirection::Up,
                94.0,
                &[42.0, 43.0, 44.0, 45.0, 46.0, 47.0],
            ),
            kpi(
                "Median Participant Age",
                "31",
                "-2 years",
                "Target: under 35",
                TrendDirection::Down,
                100.0,
                &[34.0, 34.0, 33.0, 33.0, 32.0, 31.0],
            ),
        ],
        charts: vec![
            chart(
                ChartSpec::new("age_distribution", "Age Distribution", ChartKind::Bar, "age_group")
                    .field(ChartField::new("participants", "Participants", BLUE)),
                labelled_series(
                    "age_group",
                    &["18-24", "25-34", "35-44", "45-54", "55+"],
                    &[("participants", &[310.0, 520.0, 360.0, 180.0, 80.0])],
                ),
            ),
            chart(
                ChartSpec::new("region_mix", "Participants by Region", ChartKind::Pie, "region")
                    .field(ChartField::new("share", "Share", PURPLE)),
                labelled_series("region", REGIONS, &[("share", &[24.0, 21.0, 19.0, 22.0, 14.0])]),
            ),
            chart(
                ChartSpec::new("equity_by_region", "Equity Reach by Region", ChartKind::Bar, "region")
                    .field(ChartField::new("female", "Female", ROSE))
                    .field(ChartField::new("minority", "Minority", AMBER))
                    .field(ChartField::new("low_income", "Low Income", GREEN)),
                rows.clone(),
            ),
            chart(
                ChartSpec::new("participation_trend", "Participation Trend", ChartKind::Line, "quarter")
                    .field(ChartField::new("women", "Women", ROSE))
                    .field(ChartField::new("low_income", "Low Income", GREEN)),
                labelled_series(
                    "quarter",
                    QUARTERS,
                    &[
                        ("women", &[51.0, 53.0, 54.0, 56.0]),
                        ("low_income", &[56.0, 59.0, 61.0, 63.0]),
                    ],
                ),
            ),
        ],
        rows,
        columns: vec!["region", "share", "female", "minority", "low_income", "satisfaction"],
    }
}

fn outcomes() -> Dataset {
    let rows = vec![
        outcome_row("Digital Skills", 88.0, 52400.0, 91.0, 34.0, 4.7),
        outcome_row("Healthcare", 92.0, 48200.0, 94.0, 29.0, 4.6),
        outcome_row("Manufacturing", 84.0, 45600.0, 87.0, 26.0, 4.4),
        outcome_row("Green Jobs", 86.0, 47800.0, 89.0, 31.0, 4.8),
        outcome_row("Business", 79.0, 43900.0, 82.0, 38.0, 4.5),
    ];

    Dataset {
        tab: TabId::Outcomes,
        title: "Participant Outcomes",
        kpis: vec![
            kpi(
                "Job Placement",
                "86%",
                "+5 pts year over year",
                "Target: 85%",
                TrendDirection::Up,
                101.2,
                &[78.0, 80.0, 81.0, 83.0, 85.0, 86.0],
            ),
            kpi(
                "Average Starting Wage",
                "$47,580",
                "+8.2% year over year",
                "Target: $50,000",
                TrendDirection::Up,
                95.2,
                &[41200.0, 42600.0, 43900.0, 45100.0, 46300.0, 47580.0],
            ),
            kpi(
                "12-Month Retention",
                "89%",
                "+1 pt year over year",
                "Target: 90%",
                TrendDirection::Up,
                98.9,
                &[85.0, 86.0, 86.0, 87.0, 88.0, 89.0],
            ),
            kpi(
                "Career Advancement",
                "32%",
                "-1 pt year over year",
                "Target: 35%",
                TrendDirection::Down,
                91.4,
                &[30.0, 33.0, 34.0, 33.0, 33.0, 32.0],
            ),
        ],
        charts: vec![
            chart(
                ChartSpec::new("earnings_by_program", "Starting Earnings", ChartKind::Bar, "program")
                    .field(ChartField::new("earnings", "Earnings", GREEN)),
                rows.clone(),
            ),
            chart(
                ChartSpec::new("placement_trend", "Placement & Retention", ChartKind::Line, "quarter")
                    .field(ChartField::new("placement", "Placement", BLUE))
                    .field(ChartField::new("retention", "Retention", PURPLE)),
                labelled_series(
                    "quarter",
                    QUARTERS,
                    &[
                        ("placement", &[81.0, 83.0, 85.0, 86.0]),
                        ("retention", &[86.0, 87.0, 88.0, 89.0]),
                    ],
                ),
            ),
            chart(
                ChartSpec::new("outcome_comparison", "Outcomes by Program", ChartKind::Bar, "program")
                    .field(ChartField::new("employed", "Employed", BLUE))
                    .field(ChartField::new("retention", "Retention", PURPLE))
                    .field(ChartField::new("advancement", "Advancement", AMBER)),
                rows.clone(),
            ),
            chart(
                ChartSpec::new("wage_growth", "Wage Growth", ChartKind::Area, "quarter")
                    .field(ChartField::new("earnings", "Earnings", GREEN)),
                labelled_series(
                    "quarter",
                    QUARTERS,
                    &[("earnings", &[43900.0, 45100.0, 46300.0, 47580.0])],
                ),
            ),
        ],
        rows,
        columns: vec!["program", "employed", "earnings", "retention", "advancement", "satisfaction"],
    }
}

fn program_row(
    program: &str,
    enrollment: f64,
    completion: f64,
    cost: f64,
    efficiency: f64,
    satisfaction: f64,
) -> MetricRecord {
    MetricRecord::new()
        .with("program", program)
        .with("enrollment", enrollment)
        .with("completion", completion)
        .with("cost", cost)
        .with("efficiency", efficiency)
        .with("satisfaction", satisfaction)
}

fn region_row(
    region: &str,
    share: f64,
    female: f64,
    minority: f64,
    low_income: f64,
    satisfaction: f64,
) -> MetricRecord {
    MetricRecord::new()
        .with("region", region)
        .with("share", share)
        .with("female", female)
        .with("minority", minority)
        .with("low_income", low_income)
        .with("satisfaction", satisfaction)
}

fn outcome_row(
    program: &str,
    employed: f64,
    earnings: f64,
    retention: f64,
    advancement: f64,
    satisfaction: f64,
) -> MetricRecord {
    MetricRecord::new()
        .with("program", program)
        .with("employed", employed)
        .with("earnings", earnings)
        .with("retention", retention)
        .with("advancement", advancement)
        .with("satisfaction", satisfaction)
}
