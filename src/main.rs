use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use carteira::cli::{
    chart::load_dataset, handle_chart_command, handle_menu_command, handle_summary_command,
    ChartArgs, MenuArgs, SummaryArgs,
};
use carteira::config::{paths::CarteiraPaths, settings::Settings};
use carteira::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "carteira",
    version,
    about = "Terminal personal-finance dashboard",
    long_about = "Carteira shows expense categories, monthly budgets and spending \
                  trends as interactive charts in the terminal, and exports the \
                  same chart configurations as JSON or YAML."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Dashboard dataset (JSON). Uses the built-in sample data when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print a chart configuration
    Chart(ChartArgs),

    /// Print a summary of the dashboard data
    Summary(SummaryArgs),

    /// List the navigation menu or resolve a route path
    Menu(MenuArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CarteiraPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui { input }) => {
            let dataset = load_dataset(input.as_deref())?;
            paths.ensure_directories()?;
            let log_file = paths.log_file();
            logging::init(LogTarget::File(&log_file), &settings.log_filter)?;
            carteira::tui::run_tui(&settings, &paths, dataset)?;
        }
        Some(Commands::Chart(args)) => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_chart_command(&args, &mut io::stdout().lock())?;
        }
        Some(Commands::Summary(args)) => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_summary_command(&args, &settings, &mut io::stdout().lock())?;
        }
        Some(Commands::Menu(args)) => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_menu_command(&args, &mut io::stdout().lock())?;
        }
        Some(Commands::Init) => {
            println!("Initializing Carteira at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'carteira tui' to open the dashboard.");
        }
        Some(Commands::Config) => {
            println!("Carteira Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:            {}", settings.locale);
            println!("  Show legend:       {}", settings.show_legend);
            println!("  Show actions:      {}", settings.show_actions);
            println!("  Handset max width: {}", settings.handset_max_width);
            println!("  Compact max width: {}", settings.compact_max_width);
            println!("  Tick rate:         {} ms", settings.tick_rate_ms);
            println!("  Log filter:        {}", settings.log_filter);
        }
        None => {
            println!("Carteira - terminal personal-finance dashboard");
            println!();
            println!("Run 'carteira --help' for usage information.");
            println!("Run 'carteira tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
