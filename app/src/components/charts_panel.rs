//! Charts Panel Component
//!
//! Grid of chart cards for the active tab. Line, area, bar and pie charts
//! are drawn by ECharts via wasm-bindgen JS interop; comparison charts are
//! plain HTML bars. Clicking a card expands it to full width.

use dioxus::prelude::*;
use impact_core::bars::ComparisonRow;
use impact_core::view::{Action, ChartPanel, apply};
use impact_core::{ChartKind, DashboardState};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local as spawn;

use crate::chart_options::build_option;

const CHART_DRAW_ATTEMPTS: u32 = 60;

// ─────────────────────────────────────────────────────────────────────────────
// ECharts JS Interop
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> JsValue;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn echarts_get_instance(dom: &web_sys::Element) -> JsValue;
}

/// The ECharts script loads asynchronously; calling into it early throws.
fn echarts_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("echarts")).unwrap_or(false)
}

fn chart_element_id(key: &str) -> String {
    format!("chart-{}", key)
}

fn init_chart(element_id: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let element = document.get_element_by_id(element_id)?;

    // Check if instance already exists
    let existing = echarts_get_instance(&element);
    if !existing.is_null() && !existing.is_undefined() {
        return Some(existing);
    }

    Some(echarts_init(&element))
}

fn call_method(chart: &JsValue, name: &str, args: &[JsValue]) {
    let method = js_sys::Reflect::get(chart, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(func) = method {
        let _ = match args {
            [] => func.call0(chart),
            [a] => func.call1(chart, a),
            [a, b, ..] => func.call2(chart, a, b),
        };
    }
}

fn set_chart_option(chart: &JsValue, option: &JsValue) {
    // notMerge: series from the previous tab must not linger
    call_method(chart, "setOption", &[option.clone(), JsValue::TRUE]);
}

fn resize_chart(chart: &JsValue) {
    call_method(chart, "resize", &[]);
}

fn dispose_chart(element_id: &str) {
    if echarts_loaded()
        && let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(element_id)
    {
        let instance = echarts_get_instance(&element);
        if !instance.is_null() && !instance.is_undefined() {
            call_method(&instance, "dispose", &[]);
        }
    }
}

/// Push options for every ECharts-backed panel and resize to the current layout.
pub fn draw_charts(panels: &[ChartPanel]) {
    for panel in panels {
        let Some(option) = build_option(&panel.spec, &panel.series) else {
            continue;
        };
        let Ok(js_option) = option.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        else {
            dioxus_logger::tracing::warn!(chart = %panel.spec.key, "failed to convert chart option");
            continue;
        };
        if let Some(chart) = init_chart(&chart_element_id(&panel.spec.key)) {
            set_chart_option(&chart, &js_option);
            resize_chart(&chart);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Components
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn ChartsPanel(charts: Vec<ChartPanel>, state: Signal<DashboardState>) -> Element {
    // Draw after the DOM has the chart containers, retrying until ECharts loads
    use_effect(use_reactive!(|charts| {
        spawn(async move {
            for _ in 0..CHART_DRAW_ATTEMPTS {
                gloo_timers::future::TimeoutFuture::new(50).await;
                if echarts_loaded() {
                    draw_charts(&charts);
                    return;
                }
            }
            dioxus_logger::tracing::warn!("echarts not available, charts left blank");
        });
    }));

    rsx! {
        div { class: "charts-grid",
            for panel in charts.iter().cloned() {
                ChartCard { key: "{panel.spec.key}", panel, state }
            }
        }
    }
}

#[component]
fn ChartCard(panel: ChartPanel, mut state: Signal<DashboardState>) -> Element {
    let key = panel.spec.key.clone();
    let card_class = if panel.expanded { "chart-card expanded" } else { "chart-card" };
    let hint = if panel.expanded { "Click to collapse" } else { "Click to expand" };

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| {
                let key = key.clone();
                state.with_mut(|s| apply(s, Action::ToggleChart(key)));
            },
            div { class: "chart-header",
                h3 { "{panel.spec.title}" }
                span { class: "chart-hint", "{hint}" }
            }
            if panel.spec.kind == ChartKind::Comparison {
                ComparisonBars { rows: panel.comparison.clone() }
            } else {
                ChartCanvas { chart_key: panel.spec.key.clone() }
            }
        }
    }
}

#[component]
fn ChartCanvas(chart_key: String) -> Element {
    let element_id = chart_element_id(&chart_key);

    use_drop({
        let element_id = element_id.clone();
        move || dispose_chart(&element_id)
    });

    rsx! {
        div { id: "{element_id}", class: "chart-canvas" }
    }
}

#[component]
fn ComparisonBars(rows: Vec<ComparisonRow>) -> Element {
    rsx! {
        div { class: "comparison",
            for row in rows.iter() {
                div { class: "comparison-row",
                    span { class: "comparison-label", "{row.label}" }
                    div { class: "comparison-bars",
                        for segment in row.bars.iter() {
                            div { class: "comparison-bar",
                                div {
                                    class: "comparison-fill",
                                    style: "width: {segment.width}%; background: {segment.color};",
                                }
                                span { class: "comparison-value", "{segment.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
