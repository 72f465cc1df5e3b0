#![allow(non_snake_case)]

use dioxus::prelude::*;
use impact_core::view::{Action, apply, compose, initial_state};
use impact_core::{Registry, Revision, Viewport};

use crate::components::{ChartsPanel, KpiCards, MetricsTable, Toolbar};

static CSS: Asset = asset!("/assets/styles.css");

const ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

#[component]
pub fn App() -> Element {
    let mut revision = use_signal(Revision::default);
    let mut state = use_signal(|| initial_state(Registry::for_revision(Revision::default()), None));

    // The whole frame is re-derived from (revision, state) on every change
    let view = use_memo(move || {
        compose(
            Registry::for_revision(revision()),
            &state.read(),
            Viewport::default(),
        )
    });
    let view = view();

    rsx! {
        link { rel: "stylesheet", href: CSS }
        document::Script { src: ECHARTS_SRC }

        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "{view.title}" }
                Toolbar {
                    revision: revision(),
                    on_revision: move |rev: Revision| {
                        revision.set(rev);
                        state.set(initial_state(Registry::for_revision(rev), None));
                    },
                }
            }

            nav { class: "tab-bar",
                for tab in view.tabs.iter() {
                    button {
                        key: "{tab.key}",
                        class: if tab.active { "tab-btn active" } else { "tab-btn" },
                        onclick: {
                            let id = tab.tab;
                            move |_| state.with_mut(|s| apply(s, Action::SelectTab(id)))
                        },
                        "{tab.label}"
                    }
                }
            }

            main { class: "tab-content",
                h2 { class: "tab-title", "{view.tab_title}" }
                KpiCards { cards: view.kpis.clone() }
                ChartsPanel { charts: view.charts.clone(), state }
                MetricsTable { table: view.table.clone(), state }
            }
        }
    }
}
