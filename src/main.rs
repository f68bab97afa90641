use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::config::{paths::DIR_ENV_VAR, Settings, TrackerPaths};
use expense_tracker::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Single-screen terminal expense tracker",
    long_about = "Record short expenses with a description and amount, each \
                  attributed to a random user, and delete them again. \
                  Nothing is saved: expenses last until you quit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config {
        /// Write the current settings (defaults if none exist) to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            init_logging(&paths, &settings);
            expense_tracker::tui::run_tui(&settings)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }
            print_config(&paths, &settings);
        }
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!("(override with {})", DIR_ENV_VAR);
    println!();
    println!("Settings:");
    println!("  Title:            {}", settings.title);
    println!("  Tick rate:        {}ms", settings.tick_rate_ms);
    println!("  Log level:        {}", settings.log_level);
    println!("  Background fill:  {}", settings.background.fill_color);
    println!(
        "  Background image: {}",
        settings.background.image_url.as_deref().unwrap_or("(none)")
    );
}
