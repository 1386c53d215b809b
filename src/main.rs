//! Kaia Wallet Demo (CLI)
//!
//! Logs a local wallet into an EVM-compatible test network and runs basic
//! chain operations through the stateless facade.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI command ──▶ config (TOML / Kairos defaults)
//!                      │
//!                      ▼
//!                  session (wallet key → authenticated ChainHandle)
//!                      │
//!                      ▼
//!                  chain facade (reads / sign / transfer / contract)
//!                      │
//!                      ▼
//!                  normalized output (+ explorer link for transactions)
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kaia_wallet_demo::chain::{contract, facade};
use kaia_wallet_demo::config::loader::load_config;
use kaia_wallet_demo::config::DemoConfig;
use kaia_wallet_demo::session::{Session, Wallet};

#[derive(Parser)]
#[command(name = "kaia-wallet-demo")]
#[command(about = "Wallet demo for the Kaia Kairos testnet", long_about = None)]
struct Cli {
    /// Path to a TOML config file (Kairos testnet defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the connected network ID
    Network,
    /// Show the session account address
    Account,
    /// Show the account's native balance
    Balance,
    /// Sign a message with the session key
    Sign {
        #[arg(short, long)]
        message: String,
    },
    /// Send native currency to an address
    Send {
        /// Destination address (config default when omitted)
        #[arg(long)]
        to: Option<String>,

        /// Amount in human-decimal units (config default when omitted)
        #[arg(long)]
        amount: Option<String>,

        /// Return after broadcast instead of waiting for inclusion
        #[arg(long)]
        no_wait: bool,
    },
    /// Read the stored value from the demo contract
    Read,
    /// Write a value to the demo contract
    Write {
        #[arg(long)]
        value: String,

        /// Wait for inclusion instead of returning after broadcast
        #[arg(long)]
        wait: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kaia_wallet_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };

    tracing::info!(
        rpc_url = %config.chain.rpc_url,
        chain_id = config.chain.chain_id,
        "Configuration loaded"
    );

    let explorer_url = config.chain.explorer_url.clone();
    let ticker = config.chain.ticker.clone();
    let payment = config.payment.clone();

    let mut session = Session::new(config);
    session.login(Wallet::from_env()?).await?;
    let handle = session.handle()?;

    match cli.command {
        Commands::Network => {
            println!("{}", facade::network_id(handle).await?);
        }
        Commands::Account => {
            println!("{}", facade::account(handle).await?);
        }
        Commands::Balance => {
            println!("{} {}", facade::balance(handle).await?, ticker);
        }
        Commands::Sign { message } => {
            println!("{}", facade::sign_message(handle, &message).await?);
        }
        Commands::Send { to, amount, no_wait } => {
            let to = to.unwrap_or(payment.default_destination);
            let amount = amount.unwrap_or(payment.default_amount);
            if no_wait {
                let pending = facade::submit_payment(handle, &to, &amount).await?;
                print_tx(&pending.tx_hash, &explorer_url, serde_json::to_value(&pending)?)?;
            } else {
                let receipt = facade::send_payment(handle, &to, &amount).await?;
                print_tx(&receipt.tx_hash, &explorer_url, serde_json::to_value(&receipt)?)?;
            }
        }
        Commands::Read => {
            println!("{}", contract::read_stored_value(handle).await?);
        }
        Commands::Write { value, wait } => {
            if wait {
                let receipt = contract::store_value_confirmed(handle, &value).await?;
                print_tx(&receipt.tx_hash, &explorer_url, serde_json::to_value(&receipt)?)?;
            } else {
                let pending = contract::store_value(handle, &value).await?;
                print_tx(&pending.tx_hash, &explorer_url, serde_json::to_value(&pending)?)?;
            }
        }
    }

    Ok(())
}

fn print_tx(
    tx_hash: &str,
    explorer_url: &str,
    details: serde_json::Value,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&details)?);
    println!("{}/tx/{}", explorer_url, tx_hash);
    Ok(())
}
