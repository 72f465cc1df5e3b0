//! KPI summary tiles with sparkline and progress-to-target bar

use dioxus::prelude::*;
use impact_core::TrendDirection;
use impact_core::view::KpiCard;

#[component]
pub fn KpiCards(cards: Vec<KpiCard>) -> Element {
    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "kpi-grid",
            for card in cards.iter().cloned() {
                KpiTile { key: "{card.summary.label}", card }
            }
        }
    }
}

#[component]
fn KpiTile(card: KpiCard) -> Element {
    let kpi = &card.summary;
    let trend_class = match kpi.trend {
        TrendDirection::Up => "kpi-change up",
        TrendDirection::Down => "kpi-change down",
    };
    let view_box = card.sparkline.view_box();
    let points = card.sparkline.polyline();
    let arrow = kpi.trend.arrow();
    let progress = format!("{:.1}% of target", kpi.progress_percent);

    rsx! {
        div { class: "kpi-card",
            div { class: "kpi-header",
                span { class: "kpi-label", "{kpi.label}" }
                svg {
                    class: "kpi-sparkline",
                    view_box: "{view_box}",
                    preserve_aspect_ratio: "none",
                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                    }
                }
            }
            div { class: "kpi-value", "{kpi.value}" }
            div { class: "{trend_class}",
                span { class: "kpi-arrow", "{arrow}" }
                " {kpi.change_text}"
            }
            if !kpi.target_text.is_empty() {
                div { class: "kpi-progress",
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {card.progress_width}%;",
                        }
                    }
                    div { class: "progress-text",
                        span { "{progress}" }
                        span { "{kpi.target_text}" }
                    }
                }
            }
        }
    }
}
