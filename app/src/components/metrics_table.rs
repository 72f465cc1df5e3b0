//! Sortable detail table
//!
//! Headers dispatch sort clicks; rows arrive already sorted and formatted.

use dioxus::prelude::*;
use impact_core::view::{Action, TableView, apply};
use impact_core::{DashboardState, SortDirection};

#[component]
pub fn MetricsTable(table: TableView, mut state: Signal<DashboardState>) -> Element {
    // Helper to get sort indicator class
    let sort_class = |sorted: Option<SortDirection>| -> &'static str {
        match sorted {
            Some(SortDirection::Ascending) => "sortable sorted-asc",
            Some(SortDirection::Descending) => "sortable sorted-desc",
            None => "sortable",
        }
    };

    rsx! {
        div { class: "table-card",
            table { class: "metrics-table",
                thead {
                    tr {
                        for header in table.headers.iter() {
                            th {
                                key: "{header.key}",
                                class: sort_class(header.sorted),
                                onclick: {
                                    let column = header.key;
                                    move |_| state.with_mut(|s| apply(s, Action::SortBy(column.to_string())))
                                },
                                "{header.label}"
                            }
                        }
                    }
                }
                tbody {
                    for (i, row) in table.rows.iter().enumerate() {
                        tr { key: "{i}",
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
