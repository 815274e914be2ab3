/*
[INPUT]:  CLI arguments, YAML configuration file, environment credentials
[OUTPUT]: Signed DMarket API calls with JSON printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dmarket_cli::{CliConfig, Overrides, TargetPricing, create_target_from_market};
use dmarket_client::Credentials;

#[derive(Parser, Debug)]
#[command(name = "dmarket-cli", version, about = "Signed DMarket API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "timeout-secs", value_name = "SECS", global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Raw signed call
    Call {
        method: String,
        path: String,
        /// JSON object: query parameters for GET, body otherwise
        #[arg(long)]
        payload: Option<String>,
    },
    /// Recent sales of one item
    LastSales {
        #[arg(long = "game-id", default_value = "a8db")]
        game_id: String,
        #[arg(long)]
        title: String,
    },
    /// Market offers for a game
    MarketItems {
        #[arg(long = "game-id", default_value = "a8db")]
        game_id: String,
        #[arg(long, default_value_t = 1)]
        limit: u32,
        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Create a target from the first market offer
    CreateTarget {
        #[arg(long = "game-id", default_value = "a8db")]
        game_id: String,
        #[arg(long, default_value = "2")]
        price: Decimal,
        #[arg(long = "owner-gets", default_value = "1")]
        owner_gets: Decimal,
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(&args)?;
    let client = config.build_client().context("create client")?;
    info!(base_url = %client.base_url(), "client ready");

    let response = match args.command {
        Command::Call {
            method,
            path,
            payload,
        } => {
            let payload = payload
                .as_deref()
                .map(|raw| serde_json::from_str::<Value>(raw))
                .transpose()
                .context("parse --payload as JSON")?;
            client
                .call(&method, &path, payload.as_ref())
                .await
                .context("signed call")?
        }
        Command::LastSales { game_id, title } => client
            .last_sales(&game_id, &title)
            .await
            .context("query last sales")?,
        Command::MarketItems {
            game_id,
            limit,
            currency,
        } => {
            let items = client
                .market_items(&game_id, limit, &currency)
                .await
                .context("query market items")?;
            serde_json::to_value(items).context("serialize market items")?
        }
        Command::CreateTarget {
            game_id,
            price,
            owner_gets,
            currency,
            dry_run,
        } => {
            let pricing = TargetPricing {
                price,
                owner_gets,
                currency,
            };
            create_target_from_market(&client, &game_id, &pricing, dry_run).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
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

fn load_config(args: &Cli) -> Result<CliConfig> {
    let file_config = match &args.config_path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    let overrides = Overrides {
        base_url: args.base_url.clone(),
        timeout_secs: args.timeout_secs,
    };
    Ok(file_config
        .apply_env(Credentials::from_env().ok())
        .apply_overrides(&overrides))
}
