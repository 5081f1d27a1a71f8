//! Command line access to the papr math library. Results are printed to stdout as JSON.
//!
//! You can run this script using the following command:
//! ```shell
//! RUST_LOG=info cargo run --release -- price --start-price 10000000000000000000 \
//!     --start-timestamp 1700000000 --seconds-in-period 86400 --decay-wad 700000000000000000
//! ```
//! or
//! ```shell
//! RUST_LOG=debug cargo run --release -- liquidation --debt 50000000 --max-debt 100000000 --decimals 6
//! ```

use alloy_primitives::U256;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use papr_lib::{
    compute_ltv, compute_ltv_precise, controller_debt, controller_nft_value, current_price,
    max_debt, price_series, AuctionParameters, OnchainIdentifiable, VaultDebtSnapshot,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[path = "../lib/config.rs"]
mod config;
#[path = "../lib/input.rs"]
mod input;

use input::parse_u256;

/// The arguments for the command.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the liquidation estimator assumptions
    #[clap(long, env = "PAPR_CONFIG")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

/// The decay schedule of an auction, as read from the subgraph.
#[derive(clap::Args, Debug)]
struct AuctionArgs {
    #[clap(long, value_parser = parse_u256)]
    start_price: U256,

    #[clap(long)]
    start_timestamp: u64,

    #[clap(long, default_value = "86400")]
    seconds_in_period: u64,

    #[clap(long, value_parser = parse_u256)]
    decay_wad: U256,
}

impl AuctionArgs {
    fn parameters(&self) -> Result<AuctionParameters> {
        let parameters = AuctionParameters {
            start_price: self.start_price,
            start_timestamp: self.start_timestamp,
            seconds_in_period: self.seconds_in_period,
            per_period_decay_percent_wad: self.decay_wad,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price of an auction at a timestamp, now by default
    Price {
        #[clap(flatten)]
        auction: AuctionArgs,
        #[clap(long)]
        at: Option<u64>,
    },
    /// Price curve of an auction, sampled every 15 minutes over 3 days
    Chart {
        #[clap(flatten)]
        auction: AuctionArgs,
        #[clap(long)]
        current_timestamp: Option<u64>,
    },
    /// Loan to value from debt and max debt, or from debt, collateral value and norm
    Ltv {
        #[clap(long, value_parser = parse_u256)]
        debt: U256,
        #[clap(long, value_parser = parse_u256, required_unless_present = "collateral_value")]
        max_debt: Option<U256>,
        #[clap(long, value_parser = parse_u256, default_value = "500000000000000000")]
        max_ltv: U256,
        #[clap(long, default_value = "18")]
        decimals: u8,
        #[clap(long, value_parser = parse_u256, requires = "norm")]
        collateral_value: Option<U256>,
        #[clap(long, value_parser = parse_u256)]
        norm: Option<U256>,
    },
    /// Maximum debt allowed by a collateral value
    MaxDebt {
        #[clap(long, value_parser = parse_u256)]
        collateral_value: U256,
        #[clap(long, value_parser = parse_u256, default_value = "500000000000000000")]
        max_ltv: U256,
        #[clap(long, value_parser = parse_u256)]
        target: U256,
    },
    /// Days until a position is projected to be liquidatable
    Liquidation {
        #[clap(long, value_parser = parse_u256)]
        debt: U256,
        #[clap(long, value_parser = parse_u256)]
        max_debt: U256,
        #[clap(long, default_value = "18")]
        decimals: u8,
        #[clap(long)]
        index_mark_ratio: Option<f64>,
        #[clap(long)]
        target_growth_per_period: Option<f64>,
    },
    /// Oracle value of the collateral held by a set of vaults, and their total debt
    NftValue {
        #[clap(long)]
        vaults: PathBuf,
        #[clap(long)]
        oracle: Option<PathBuf>,
    },
    /// Onchain identifier of an auction struct
    AuctionId {
        #[clap(long)]
        auction: PathBuf,
    },
}

fn main() -> Result<()> {
    // Setup the logger.
    setup_logger();

    // Parse the command line arguments.
    let args = Args::parse();
    let config = config::Config::load(args.config.as_deref())?;

    let output: Value = match args.command {
        Command::Price { auction, at } => {
            let parameters: AuctionParameters = auction.parameters()?;
            let timestamp: u64 = match at {
                Some(timestamp) => timestamp,
                None => input::now()?,
            };
            let price: U256 = current_price(&parameters, timestamp)?;
            json!({ "timestamp": timestamp, "price": price.to_string() })
        }
        Command::Chart {
            auction,
            current_timestamp,
        } => {
            let series = price_series(&auction.parameters()?, current_timestamp)?;
            tracing::info!("Sampled {} chart points", series.len());
            Value::Array(
                series
                    .iter()
                    .map(|point| {
                        json!({ "timestamp": point.timestamp, "price": point.price.to_string() })
                    })
                    .collect(),
            )
        }
        Command::Ltv {
            debt,
            max_debt,
            max_ltv,
            decimals,
            collateral_value,
            norm,
        } => match (max_debt, collateral_value, norm) {
            (_, Some(collateral_value), Some(norm)) => json!({
                "ltv": compute_ltv(&debt, &collateral_value, &norm).to_string(),
                "ltvPrecise": compute_ltv_precise(&debt, &collateral_value, &norm)?.to_string(),
            }),
            (Some(max_debt), _, _) => {
                let snapshot = VaultDebtSnapshot {
                    debt,
                    max_debt,
                    decimals,
                };
                json!({ "ltv": snapshot.ltv(&max_ltv)? })
            }
            _ => anyhow::bail!("Either --max-debt or --collateral-value with --norm is required"),
        },
        Command::MaxDebt {
            collateral_value,
            max_ltv,
            target,
        } => json!({ "maxDebt": max_debt(&collateral_value, &max_ltv, &target)?.to_string() }),
        Command::Liquidation {
            debt,
            max_debt,
            decimals,
            index_mark_ratio,
            target_growth_per_period,
        } => {
            let mut estimator = config.estimator;
            if let Some(index_mark_ratio) = index_mark_ratio {
                estimator.index_mark_ratio = index_mark_ratio;
            }
            if let Some(target_growth_per_period) = target_growth_per_period {
                estimator.target_growth_per_period = target_growth_per_period;
            }
            tracing::debug!("Using estimator {:?}", estimator);
            json!({ "days": estimator.estimate_days(&debt, &max_debt, decimals)? })
        }
        Command::NftValue { vaults, oracle } => {
            let vaults = input::load_vaults(&vaults)?;
            let oracle_info = oracle.as_deref().map(input::load_oracle_info).transpose()?;
            if oracle_info.is_none() {
                tracing::warn!("No oracle quotes provided, collateral value is zero");
            }
            json!({
                "value": controller_nft_value(&vaults, oracle_info.as_ref())?,
                "debt": controller_debt(&vaults)?.to_string(),
            })
        }
        Command::AuctionId { auction } => {
            let auction = input::load_auction(&auction)?;
            json!({ "auctionId": auction.onchain_id().to_string() })
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize output")?
    );
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` and defaulting to `info`.
fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
