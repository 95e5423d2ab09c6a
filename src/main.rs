use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stepform::actions::{ActionLogger, ExportFormat};
use stepform::cli::{handle_log_command, handle_pages_command, handle_run_command, RunArgs};
use stepform::config::{Settings, StepformPaths, WizardStrings};
use stepform::tui::{run_tui, App};
use stepform::wizard::PageRoute;

#[derive(Parser)]
#[command(
    name = "stepform",
    version,
    about = "Terminal multi-step wizard with validated form steps",
    long_about = "Stepform renders multi-step wizards in the terminal. Required \
                  fields are validated before the wizard moves on, and every \
                  navigate, submit and cancel request is recorded in an action log."
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
        /// Page route (defaults to the configured page)
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Drive a page without a terminal and print its state
    Run(RunArgs),

    /// List the available pages
    Pages,

    /// Show recent wizard actions
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output format: text, json or csv
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config,

    /// Write default settings and strings files
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StepformPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let strings = WizardStrings::load_or_default(&paths)?;

    match cli.command {
        Some(Commands::Tui { page }) => {
            let route: PageRoute = page.as_deref().unwrap_or(&settings.default_page).parse()?;
            let mut app = App::new(route.page()).with_strings(strings);
            if settings.action_log_enabled {
                app = app.with_action_log(ActionLogger::new(paths.action_log()));
            }
            run_tui(&mut app, Duration::from_millis(settings.tick_rate_ms))?;
        }
        Some(Commands::Run(args)) => {
            handle_run_command(&paths, &settings, &strings, &args, &mut io::stdout())?;
        }
        Some(Commands::Pages) => {
            handle_pages_command(&strings, &mut io::stdout())?;
        }
        Some(Commands::Log { limit, format }) => {
            handle_log_command(&paths, limit, format, &mut io::stdout())?;
        }
        Some(Commands::Config) => {
            println!("Stepform Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Strings file:   {}", paths.strings_file().display());
            println!("Action log:     {}", paths.action_log().display());
            println!();
            println!("Settings:");
            println!("  Default page:       {}", settings.default_page);
            println!("  Tick rate (ms):     {}", settings.tick_rate_ms);
            println!("  Action log enabled: {}", settings.action_log_enabled);
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            strings.save(&paths)?;
            println!("Initialized Stepform at: {}", paths.base_dir().display());
            println!("Edit {} to change labels.", paths.strings_file().display());
        }
        None => {
            println!("Stepform - terminal multi-step wizard");
            println!();
            println!("Run 'stepform --help' for usage information.");
            println!("Run 'stepform tui' to open the default page.");
        }
    }

    Ok(())
}
