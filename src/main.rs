use clap::Parser;
use explorer::core::config::{self, CliOverrides, EnvOverrides};
use explorer::{demos, term};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "explorer", about = "Interactive tour of interfaces and enums")]
struct Args {
    /// Print every category and topic, then exit
    #[arg(long)]
    list: bool,

    /// Run a single topic's demonstration, then exit
    #[arg(long, value_name = "TOPIC", conflicts_with = "list")]
    run: Option<String>,

    /// Never clear the screen between pages
    #[arg(long)]
    no_clear: bool,

    /// Plain output without colors
    #[arg(long)]
    no_color: bool,

    /// Skip the welcome page
    #[arg(long)]
    no_welcome: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to explorer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("explorer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Explorer starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::ExplorerConfig::default()
    });
    let cli = CliOverrides {
        no_clear: args.no_clear,
        no_color: args.no_color,
        no_welcome: args.no_welcome,
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), cli);
    log::debug!("Resolved config: {:?}", resolved);

    let registry = match demos::default_registry() {
        Ok(r) => r,
        Err(e) => {
            log::error!("Invalid catalog: {}", e);
            eprintln!("explorer: invalid catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if args.list {
        term::list(&registry, &resolved)
    } else if let Some(topic) = args.run.as_deref() {
        term::run_single(&registry, topic, &resolved)
    } else {
        term::run(&registry, &resolved)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            eprintln!("explorer: {e}");
            ExitCode::FAILURE
        }
    }
}
