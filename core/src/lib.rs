pub mod bars;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod sort;
pub mod sparkline;
pub mod view;

// Re-exports for convenience
pub use config::DashboardConfigExt;
pub use dataset::{ChartInput, Dataset, Registry};
pub use error::ConfigError;
pub use format::{column_label, format_cell, group_thousands};
pub use sort::sort_rows;
pub use sparkline::{Point, Sparkline, project};
pub use view::{Action, DashboardView, apply, compose, initial_state};

pub use impact_types::*;
