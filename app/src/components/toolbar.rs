//! Header toolbar: revision picker, date range and report actions
//!
//! The date range and the export/report buttons are placeholders; they hold
//! local UI state only and never touch the dataset.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use impact_core::Revision;

const DATE_RANGES: [(&str, &str); 4] = [
    ("30d", "Last 30 days"),
    ("90d", "Last 90 days"),
    ("ytd", "Year to date"),
    ("12m", "Last 12 months"),
];

#[component]
pub fn Toolbar(revision: Revision, on_revision: EventHandler<Revision>) -> Element {
    let mut date_range = use_signal(|| "ytd".to_string());

    rsx! {
        div { class: "toolbar",
            select {
                class: "revision-select",
                value: match revision {
                    Revision::Program => "program",
                    Revision::Transit => "transit",
                },
                onchange: move |e| {
                    if let Some(rev) = Revision::parse(&e.value()) {
                        on_revision.call(rev);
                    }
                },
                option { value: "program", "Workforce Programs" }
                option { value: "transit", "Metro Transit" }
            }
            select {
                class: "date-range",
                value: "{date_range}",
                onchange: move |e| date_range.set(e.value()),
                for (value, label) in DATE_RANGES {
                    option { value: "{value}", "{label}" }
                }
            }
            button {
                class: "btn",
                onclick: move |_| info!(range = %date_range.read(), "export requested"),
                "Export Data"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| info!(range = %date_range.read(), "report requested"),
                "Generate Report"
            }
        }
    }
}
