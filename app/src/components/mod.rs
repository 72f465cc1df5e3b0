//! UI Components
//!
//! Each component renders one region of the composed dashboard view.

pub mod charts_panel;
pub mod kpi_cards;
pub mod metrics_table;
pub mod toolbar;

pub use charts_panel::ChartsPanel;
pub use kpi_cards::KpiCards;
pub use metrics_table::MetricsTable;
pub use toolbar::Toolbar;
