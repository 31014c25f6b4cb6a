pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pizza_demo_core::config::{ConfigOverrides, DemoConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "pizza-demo",
    about = "Interactive tour of the Data Pizza skills",
    long_about = "Walk through the Datapizza AI skills with canned examples, simulated conversations, and a local setup check.",
    after_help = "Examples:\n  pizza-demo\n  pizza-demo check --json\n  pizza-demo ask \"What is Datapizza AI?\""
)]
pub struct Cli {
    #[arg(long, global = true, help = "Read configuration from this TOML file")]
    config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Log level for stderr diagnostics (trace|debug|info|warn|error)"
    )]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Do not wait for Enter after each tour screen")]
    no_pause: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start the interactive menu (default)")]
    Tour,
    #[command(about = "Check skills directories, skill files, and optional API keys")]
    Check {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
        #[arg(long, help = "Exit with status 1 when any check does not pass")]
        strict: bool,
    },
    #[command(about = "Show effective configuration values with their sources")]
    Config,
    #[command(about = "Run the knowledge-base lookup on a question")]
    Ask {
        #[arg(required = true, num_args = 1.., help = "Question to look up")]
        query: Vec<String>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let overrides = cli_overrides(&cli);

    let config = match load_config(cli.config.clone(), overrides.clone()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    tracing::debug!(
        event_name = "config.loaded",
        pause_after_screen = config.tour.pause_after_screen,
        credential_variables = config.credentials.variables.len(),
        "configuration loaded"
    );

    let result = match cli.command.unwrap_or(Command::Tour) {
        Command::Tour => commands::tour::run(&config),
        Command::Check { json, strict } => commands::check::run(&config, json, strict),
        Command::Config => commands::CommandResult::success(commands::config::run(
            &config,
            cli.config.as_deref(),
            &overrides,
        )),
        Command::Ask { query } => {
            commands::CommandResult::success(commands::ask::run(&query.join(" ")))
        }
    };

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    ExitCode::from(result.exit_code)
}

fn cli_overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        log_level: cli.log_level.clone(),
        log_format: None,
        pause_after_screen: cli.no_pause.then_some(false),
    }
}

fn load_config(
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
) -> anyhow::Result<DemoConfig> {
    let require_file = config_path.is_some();
    DemoConfig::load(LoadOptions { config_path, require_file, overrides })
        .context("could not load pizza-demo configuration")
}

fn init_logging(config: &DemoConfig) {
    use pizza_demo_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    match config.logging.format {
        Compact => builder.compact().init(),
        Pretty => builder.pretty().init(),
        Json => builder.json().init(),
    }
}
