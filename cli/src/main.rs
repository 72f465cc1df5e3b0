use impact_cli::CliContext;
use impact_cli::commands;
use impact_cli::logging;
use impact_cli::readline;
use impact_core::{DashboardConfig, DashboardConfigExt, Revision};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Startup options
#[derive(Parser)]
#[command(version, about = "Impact dashboard")]
struct Args {
    /// TOML config file (revision, initial tab, sparkline viewport)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Dashboard revision: program or transit (overrides the config file)
    #[arg(short, long)]
    revision: Option<String>,
    /// Initial tab key (overrides the config file)
    #[arg(short, long)]
    tab: Option<String>,
}

fn main() -> Result<(), String> {
    logging::init();

    let args = Args::parse();
    let mut config = DashboardConfig::load(args.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(name) = args.revision {
        config.revision =
            Revision::parse(&name).ok_or_else(|| format!("unknown revision '{}'", name))?;
    }
    if args.tab.is_some() {
        config.initial_tab = args.tab;
    }

    let mut ctx = CliContext::new(&config);
    commands::show(&ctx);

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(about = "dashboard commands")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole dashboard
    Show,
    /// Switch tab
    Tab { key: String },
    /// Click a column header
    Sort { column: String },
    /// Click a chart (expand, or collapse if already expanded)
    Expand { chart: String },
    /// Collapse the expanded chart
    Collapse,
    Kpis,
    Charts,
    Table,
    /// Print the dashboard state as JSON
    State,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "impact".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Show) => commands::show(ctx),
        Some(Commands::Tab { key }) => commands::select_tab(ctx, key),
        Some(Commands::Sort { column }) => commands::sort_by(ctx, column),
        Some(Commands::Expand { chart }) => commands::toggle_chart(ctx, chart),
        Some(Commands::Collapse) => commands::collapse(ctx),
        Some(Commands::Kpis) => commands::show_kpis(ctx),
        Some(Commands::Charts) => commands::show_charts(ctx),
        Some(Commands::Table) => commands::show_table(ctx),
        Some(Commands::State) => commands::show_state(ctx)?,
        Some(Commands::Exit) => {
            write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
            std::io::stdout().flush().map_err(|e| e.to_string())?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
