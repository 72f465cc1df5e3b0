//! Plain-text rendering of a composed dashboard view
//!
//! Every function takes the composer's output and returns a string; nothing
//! here computes percentages or sorts rows.

use impact_core::view::{ChartPanel, DashboardView, KpiCard, TableView};
use impact_core::{ChartKind, SortDirection, Sparkline, format_cell};

/// Width in characters of a full (100%) bar
const BAR_WIDTH: usize = 20;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Rows printed per chart; expanded charts print everything
const COLLAPSED_CHART_ROWS: usize = 3;

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str(&render_header(view));
    out.push('\n');
    if !view.kpis.is_empty() {
        out.push_str(&render_kpis(view));
        out.push('\n');
    }
    out.push_str(&render_charts(view));
    out.push('\n');
    out.push_str(&render_table(&view.table));
    out
}

pub fn render_header(view: &DashboardView) -> String {
    let tabs = view
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                format!(" {} ", t.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}\n{}\n{}\n{}\n", view.title, tabs, view.tab_title, "-".repeat(80))
}

pub fn render_kpis(view: &DashboardView) -> String {
    view.kpis.iter().map(render_kpi).collect()
}

fn render_kpi(card: &KpiCard) -> String {
    let kpi = &card.summary;
    let mut line = format!(
        "{:<28} {:>12}  {} {:<24} {}",
        kpi.label,
        kpi.value,
        kpi.trend.arrow(),
        kpi.change_text,
        spark_text(&card.sparkline)
    );
    if !kpi.target_text.is_empty() {
        line.push_str(&format!(
            "\n{:<28} {} {:.1}%  {}",
            "",
            bar(card.progress_width),
            kpi.progress_percent,
            kpi.target_text
        ));
    }
    line.push('\n');
    line
}

pub fn render_charts(view: &DashboardView) -> String {
    view.charts.iter().map(render_chart).collect()
}

fn render_chart(panel: &ChartPanel) -> String {
    let spec = &panel.spec;
    let marker = if panel.expanded { "[-]" } else { "[+]" };
    let mut out = format!("{} {} ({})\n", marker, spec.title, spec.key);
    let limit = if panel.expanded {
        usize::MAX
    } else {
        COLLAPSED_CHART_ROWS
    };

    if spec.kind == ChartKind::Comparison {
        for row in panel.comparison.iter().take(limit) {
            for (i, segment) in row.bars.iter().enumerate() {
                let label = if i == 0 { row.label.as_str() } else { "" };
                out.push_str(&format!(
                    "    {:<12} {} {}\n",
                    label,
                    bar(segment.width),
                    segment.text
                ));
            }
        }
    } else {
        for record in panel.series.iter().take(limit) {
            let x = record
                .get(&spec.x_field)
                .map(|v| v.to_string())
                .unwrap_or_default();
            let values = spec
                .fields
                .iter()
                .filter_map(|f| {
                    record
                        .get(&f.key)
                        .map(|v| format!("{} {}", f.label, format_cell(&f.key, v)))
                })
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("    {:<14} {}\n", x, values));
        }
    }

    let total = if spec.kind == ChartKind::Comparison {
        panel.comparison.len()
    } else {
        panel.series.len()
    };
    let hidden = total.saturating_sub(limit);
    if hidden > 0 {
        out.push_str(&format!("    ... {} more (expand {})\n", hidden, spec.key));
    }
    out
}

pub fn render_table(table: &TableView) -> String {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let cells = table.rows.iter().map(|r| r.get(i).map_or(0, |c| c.chars().count()));
            cells.chain([h.label.chars().count() + 2]).max().unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| {
            let arrow = match h.sorted {
                Some(SortDirection::Ascending) => " ↑",
                Some(SortDirection::Descending) => " ↓",
                None => "",
            };
            format!("{:<w$}", format!("{}{}", h.label, arrow), w = *w)
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3));
    out.push('\n');

    for row in &table.rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Text sparkline: one block character per point, height from the projected y.
pub fn spark_text(line: &Sparkline) -> String {
    let height = line.viewport.height;
    line.points
        .iter()
        .map(|p| {
            let level = if height > 0.0 {
                ((height - p.y) / height * (SPARK_LEVELS.len() - 1) as f64).round() as usize
            } else {
                0
            };
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// Fixed-width bar for a paint width in `[0, 100]`
pub fn bar(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_core::view::{Action, apply, compose};
    use impact_core::{DashboardState, Registry, Revision, Viewport, project};

    fn view_for(state: &DashboardState) -> DashboardView {
        compose(Registry::for_revision(Revision::Program), state, Viewport::default())
    }

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar(0.0), "░".repeat(20));
        assert_eq!(bar(100.0), "█".repeat(20));
        assert_eq!(bar(50.0).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_spark_text() {
        let line = project(&[0.0, 5.0, 10.0], Viewport::default());
        assert_eq!(spark_text(&line), "▁▅█");
        let flat = project(&[0.0, 0.0], Viewport::default());
        assert_eq!(spark_text(&flat), "▁▁");
    }

    #[test]
    fn test_table_shows_sort_arrow_and_sorted_rows() {
        let mut state = DashboardState::default();
        apply(&mut state, Action::SortBy("cost".into()));
        apply(&mut state, Action::SortBy("cost".into()));
        let text = render_table(&view_for(&state).table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Cost ↓"));
        assert!(lines[2].starts_with("Manufacturing"));
        assert!(lines[2].contains("$3,200"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_expanded_chart_prints_all_rows() {
        let mut state = DashboardState::default();
        let collapsed = render_charts(&view_for(&state));
        assert!(collapsed.contains("[+] Cost per Participant (cost_by_program)"));
        assert!(collapsed.contains("... 2 more (expand cost_by_program)"));

        apply(&mut state, Action::ToggleChart("cost_by_program".into()));
        let expanded = render_charts(&view_for(&state));
        assert!(expanded.contains("[-] Cost per Participant"));
        assert!(expanded.contains("Business"));
        assert!(expanded.contains("Cost $2,400"));
    }

    #[test]
    fn test_dashboard_header_marks_active_tab() {
        let state = DashboardState::default();
        let text = render_dashboard(&view_for(&state));
        assert!(text.starts_with("Workforce Program Impact Dashboard\n[Program Overview]"));
        assert!(text.contains("Total Enrollment"));
        assert!(text.contains("Target: 1,600"));
    }
}
