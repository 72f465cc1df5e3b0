use impact_core::Action;

use crate::CliContext;
use crate::render;

pub fn show(ctx: &CliContext) {
    print!("{}", render::render_dashboard(&ctx.view()));
}

pub fn show_kpis(ctx: &CliContext) {
    let view = ctx.view();
    if view.kpis.is_empty() {
        println!("No KPIs on this tab");
        return;
    }
    print!("{}", render::render_kpis(&view));
}

pub fn show_charts(ctx: &CliContext) {
    print!("{}", render::render_charts(&ctx.view()));
}

pub fn show_table(ctx: &CliContext) {
    print!("{}", render::render_table(&ctx.view().table));
}

/// Switch tabs. Unknown keys land on the first tab.
pub fn select_tab(ctx: &mut CliContext, key: &str) {
    let tab = ctx.registry.tab_or_default(key);
    ctx.dispatch(Action::SelectTab(tab));
    show(ctx);
}

pub fn sort_by(ctx: &mut CliContext, column: &str) {
    ctx.dispatch(Action::SortBy(column.to_string()));
    show_table(ctx);
}

pub fn toggle_chart(ctx: &mut CliContext, key: &str) {
    let dataset = ctx.registry.resolve(ctx.state.active_tab);
    if dataset.chart(key).is_none() {
        let keys: Vec<&str> = dataset.charts.iter().map(|c| c.spec.key.as_str()).collect();
        println!("No chart '{}' on this tab. Charts: {}", key, keys.join(", "));
        return;
    }
    ctx.dispatch(Action::ToggleChart(key.to_string()));
    show_charts(ctx);
}

pub fn collapse(ctx: &mut CliContext) {
    ctx.dispatch(Action::CollapseChart);
    show_charts(ctx);
}

pub fn show_state(ctx: &CliContext) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&ctx.state).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
