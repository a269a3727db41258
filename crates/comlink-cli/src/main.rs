/*
[INPUT]:  CLI arguments, YAML configuration file or COMLINK_* environment
[OUTPUT]: Pretty-printed JSON responses on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or subcommands
*/

mod commands;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use comlink_client::{ClientConfig, ComlinkClient};

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "comlink", version, about = "Game data service client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    info!(
        base_url = %config.base_url,
        stats_base_url = %config.stats_base_url,
        signing = !config.access_key.is_empty() && !config.secret_key.is_empty(),
        "configuration loaded"
    );

    let client = ComlinkClient::with_config(config).context("create client")?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a subcommand is required unless --dry-run is given")?;
    let response = command.run(&client).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("render response")?
    );

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<ClientConfig> {
    match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            ClientConfig::from_file(path_str).context("load config")
        }
        None => ClientConfig::from_env().context("load config from environment"),
    }
}
