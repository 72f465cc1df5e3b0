//! ECharts option building
//!
//! Turns a chart spec and its series into the option object ECharts
//! expects. Kept free of JS interop so it can be tested natively.

use impact_types::{ChartKind, ChartSpec, MetricRecord};
use serde_json::{Value, json};

const AXIS_COLOR: &str = "#888";
const TEXT_COLOR: &str = "#e0e0e0";
const SPLIT_LINE_COLOR: &str = "#333";

/// Build the option object, or `None` for charts drawn as HTML bars.
pub fn build_option(spec: &ChartSpec, series: &[MetricRecord]) -> Option<Value> {
    match spec.kind {
        ChartKind::Line | ChartKind::Area | ChartKind::Bar => Some(cartesian_option(spec, series)),
        ChartKind::Pie => Some(pie_option(spec, series)),
        ChartKind::Comparison => None,
    }
}

fn categories(spec: &ChartSpec, series: &[MetricRecord]) -> Vec<String> {
    series
        .iter()
        .map(|r| r.get(&spec.x_field).map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

fn cartesian_option(spec: &ChartSpec, series: &[MetricRecord]) -> Value {
    let series_type = match spec.kind {
        ChartKind::Bar => "bar",
        _ => "line",
    };

    let chart_series: Vec<Value> = spec
        .fields
        .iter()
        .map(|field| {
            let data: Vec<Value> = series
                .iter()
                .map(|r| r.number(&field.key).map_or(Value::Null, |n| json!(n)))
                .collect();
            let mut s = json!({
                "name": field.label,
                "type": series_type,
                "data": data,
                "itemStyle": { "color": field.color },
            });
            if series_type == "line" {
                s["smooth"] = json!(true);
                s["showSymbol"] = json!(false);
                s["lineStyle"] = json!({ "width": spec.stroke_width, "color": field.color });
            }
            if spec.kind == ChartKind::Area {
                s["areaStyle"] = json!({ "opacity": 0.25 });
            }
            s
        })
        .collect();

    let mut option = json!({
        "animation": false,
        "grid": { "left": "50", "right": "20", "top": "30", "bottom": "30" },
        "tooltip": { "trigger": "axis" },
        "xAxis": {
            "type": "category",
            "data": categories(spec, series),
            "axisLabel": { "color": AXIS_COLOR },
        },
        "yAxis": {
            "type": "value",
            "axisLabel": { "color": AXIS_COLOR },
            "splitLine": { "lineStyle": { "color": SPLIT_LINE_COLOR } },
        },
        "series": chart_series,
    });
    if spec.fields.len() > 1 {
        option["legend"] = json!({ "top": 0, "textStyle": { "color": TEXT_COLOR } });
    }
    option
}

fn pie_option(spec: &ChartSpec, series: &[MetricRecord]) -> Value {
    // Pies draw the first field only
    let Some(field) = spec.fields.first() else {
        return json!({ "animation": false, "series": [] });
    };
    let data: Vec<Value> = categories(spec, series)
        .into_iter()
        .zip(series)
        .filter_map(|(name, r)| r.number(&field.key).map(|v| json!({ "name": name, "value": v })))
        .collect();

    json!({
        "animation": false,
        "tooltip": { "trigger": "item", "formatter": "{b}: {c} ({d}%)" },
        "series": [{
            "name": field.label,
            "type": "pie",
            "radius": ["35%", "65%"],
            "center": ["50%", "55%"],
            "label": { "show": true, "formatter": "{b}", "color": "#ccc", "fontSize": 10 },
            "itemStyle": { "borderColor": "#1a1a1a", "borderWidth": 2 },
            "data": data,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_types::ChartField;

    fn series() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new().with("month", "Jan").with("a", 1.0).with("b", 2.0),
            MetricRecord::new().with("month", "Feb").with("a", 3.0),
        ]
    }

    #[test]
    fn test_area_option() {
        let spec = ChartSpec::new("t", "Trend", ChartKind::Area, "month")
            .field(ChartField::new("a", "A", "#111"))
            .field(ChartField::new("b", "B", "#222"));
        let option = build_option(&spec, &series()).unwrap();

        assert_eq!(option["xAxis"]["data"], json!(["Jan", "Feb"]));
        assert_eq!(option["series"][0]["type"], "line");
        assert_eq!(option["series"][0]["data"], json!([1.0, 3.0]));
        assert_eq!(option["series"][1]["data"], json!([2.0, null]));
        assert_eq!(option["series"][1]["lineStyle"]["width"], json!(2.0));
        assert!(option["series"][0].get("areaStyle").is_some());
        assert!(option.get("legend").is_some());
    }

    #[test]
    fn test_bar_option_has_no_line_style() {
        let spec = ChartSpec::new("t", "Bars", ChartKind::Bar, "month")
            .field(ChartField::new("a", "A", "#111"));
        let option = build_option(&spec, &series()).unwrap();
        assert_eq!(option["series"][0]["type"], "bar");
        assert!(option["series"][0].get("lineStyle").is_none());
        assert!(option.get("legend").is_none());
    }

    #[test]
    fn test_pie_option_skips_missing_values() {
        let spec = ChartSpec::new("t", "Mix", ChartKind::Pie, "month")
            .field(ChartField::new("b", "B", "#222"));
        let option = build_option(&spec, &series()).unwrap();
        assert_eq!(
            option["series"][0]["data"],
            json!([{ "name": "Jan", "value": 2.0 }])
        );
    }

    #[test]
    fn test_comparison_is_not_charted() {
        let spec = ChartSpec::new("t", "Cmp", ChartKind::Comparison, "month");
        assert!(build_option(&spec, &series()).is_none());
    }
}
