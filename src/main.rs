use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wattsmith::config::Config;
use wattsmith::library::LibraryHandle;
use wattsmith::selector::Selector;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/workouts.json")]
    library: String,

    /// JSON profile with selection params and scoring weights
    #[arg(global = true, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Validate(cmd::validate::ValidateArgs),
    Select(cmd::select::SelectArgs),
    Plan(cmd::plan::PlanArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout is reserved for reports and --json output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli, cli_config: &Config, sub_matches: &clap::ArgMatches) -> Config {
    let config = match &cli.profile {
        Some(path) => {
            info!("⚖️  Loading profile from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load profile: {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);
    info!("🚴 Loading workout library: {}", cli.library);

    let handle = LibraryHandle::new(&cli.library);
    let library = handle.get().unwrap_or_else(|e| {
        error!("\n❌ FATAL ERROR LOADING LIBRARY:");
        error!("   {}", e);
        process::exit(1);
    });

    match &cli.command {
        Commands::Validate(args) => cmd::validate::run(args, &library),
        Commands::Select(args) => {
            let sub = matches.subcommand_matches("select").unwrap_or(&matches);
            let config = resolve_config(&cli, &args.config, sub);
            let selector = Selector::new(Arc::clone(&library), &config);
            cmd::select::run(args, &selector);
        }
        Commands::Plan(args) => {
            let sub = matches.subcommand_matches("plan").unwrap_or(&matches);
            let config = resolve_config(&cli, &args.config, sub);
            let selector = Selector::new(Arc::clone(&library), &config);
            cmd::plan::run(args, &selector);
        }
    }
}
