mod client;
mod config;
mod monitor;
mod render;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::{DataSource, HttpDataSource, SatelliteSummary};
use crate::config::Config;
use crate::monitor::{Subject, TelemetrySyncController};
use crate::render::ConsoleSink;

#[derive(Parser)]
#[command(name = "satwatch")]
#[command(about = "Satellite telemetry monitoring console")]
struct Cli {
    /// Path to a YAML configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive monitoring console
    Watch,
    /// Print the satellite list once and exit
    List {
        /// Emit the list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Probe both services and report their health
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Watch => watch(config).await,
        Commands::List { json } => list(config, json).await,
        Commands::Health => health(config).await,
    }
}

fn load_config(path: Option<&str>) -> Result<Config, config::ConfigError> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn build_controller(
    config: &Config,
) -> Result<TelemetrySyncController<HttpDataSource, ConsoleSink>, config::ConfigError> {
    let data = Arc::new(HttpDataSource::new(
        &config.status_service_url,
        &config.telemetry_service_url,
    ));
    Ok(TelemetrySyncController::new(
        data,
        Arc::new(ConsoleSink),
        config.poll_interval_duration()?,
        config.window_capacity,
        config.history_seed_limit,
    ))
}

async fn list(config: Config, json: bool) -> ExitCode {
    if json {
        let data = HttpDataSource::new(&config.status_service_url, &config.telemetry_service_url);
        let items = match data.fetch_satellite_list().await {
            Ok(items) => items,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        match serde_json::to_string_pretty(&items) {
            Ok(out) => {
                println!("{}", out);
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let controller = match build_controller(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match controller.load_subject_list().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn health(config: Config) -> ExitCode {
    let controller = match build_controller(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let health = controller.check_health().await;
    if health.all_up() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn watch(config: Config) -> ExitCode {
    let mut controller = match build_controller(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    controller.check_health().await;

    let mut satellites: Vec<SatelliteSummary> = match controller.load_subject_list().await {
        Ok(items) => items,
        Err(e) => {
            // degraded state is visible, not a silent empty list
            eprintln!("Could not load satellite list: {}", e);
            Vec::new()
        }
    };

    println!("commands: <id> select | back | list | health | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        };

        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "b" | "back" => controller.exit_monitoring(),
            "h" | "health" => {
                controller.check_health().await;
            }
            "l" | "list" => {
                controller.exit_monitoring();
                match controller.load_subject_list().await {
                    Ok(items) => satellites = items,
                    Err(e) => eprintln!("Could not load satellite list: {}", e),
                }
            }
            input => match input.parse::<u32>() {
                Ok(id) => {
                    let Some(satellite) = satellites.iter().find(|s| s.id == id) else {
                        println!("unknown satellite id {id}; run `list` to refresh");
                        continue;
                    };
                    let subject = Subject {
                        id,
                        display_name: satellite.name.clone(),
                    };
                    println!(
                        "monitoring {} (every {})",
                        subject.display_name, config.poll_interval
                    );
                    if let Err(e) = controller.enter_monitoring(subject).await {
                        eprintln!("Could not start monitoring: {}", e);
                    }
                }
                Err(_) => println!("unrecognized command: {input}"),
            },
        }
    }

    controller.exit_monitoring();
    ExitCode::SUCCESS
}
