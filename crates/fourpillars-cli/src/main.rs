use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use fourpillars_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "fourpillars-cli", version, about = "Four Pillars chart CLI")]
struct Cli {
    /// Log debug events to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and their relation analysis
    Chart(commands::birth::BirthArgs),
    /// Decade luck cycle
    Luck(commands::birth::BirthArgs),
    /// Special stars in the chart
    Stars(commands::birth::BirthArgs),
    /// Hundred-year annual fortune table
    Table(commands::birth::BirthArgs),
    /// Life highlight window
    Highlight(commands::highlight::HighlightArgs),
    /// Energy-dip profile and status
    Energy {
        #[command(subcommand)]
        action: commands::energy::EnergyAction,
    },
    /// Two-person compatibility
    Compat(commands::compat::CompatArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = Config::load()
                .map(|c| c.logging.level)
                .unwrap_or_else(|_| "warn".to_string());
            EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"))
        })
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Chart(args) => commands::chart::run_chart(args),
        Commands::Luck(args) => commands::chart::run_luck(args),
        Commands::Stars(args) => commands::chart::run_stars(args),
        Commands::Table(args) => commands::chart::run_table(args),
        Commands::Highlight(args) => commands::highlight::run(args),
        Commands::Energy { action } => commands::energy::run(action),
        Commands::Compat(args) => commands::compat::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "fourpillars-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
