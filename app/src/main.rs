mod app;
mod chart_options;
mod components;

use dioxus_logger::tracing::Level;

fn main() {
    // A second init only fails if a logger is already installed
    let _ = dioxus_logger::init(Level::INFO);
    dioxus::launch(app::App);
}
