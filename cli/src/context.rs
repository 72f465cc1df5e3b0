use impact_core::view::{self, Action, DashboardView};
use impact_core::{DashboardConfig, DashboardState, Registry, Viewport};

/// Holds all state for the CLI session.
/// This is a lightweight container - logic lives in impact-core.
pub struct CliContext {
    pub registry: &'static Registry,
    pub state: DashboardState,
    pub viewport: Viewport,
}

impl CliContext {
    pub fn new(config: &DashboardConfig) -> Self {
        let registry = Registry::for_revision(config.revision);
        Self {
            registry,
            state: view::initial_state(registry, config.initial_tab.as_deref()),
            viewport: config.sparkline,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        view::apply(&mut self.state, action);
    }

    /// Fresh view of the current state
    pub fn view(&self) -> DashboardView {
        view::compose(self.registry, &self.state, self.viewport)
    }
}
