//! Generates a JSON fixture with auction prices and liquidation estimates, so the numbers
//! computed here can be checked against the interface and the contracts.
//!
//! You can run this script using the following command:
//! ```shell
//! RUST_LOG=info cargo run --release --bin fixture
//! ```
//! or
//! ```shell
//! RUST_LOG=info cargo run --release --bin fixture -- --out-dir ./fixtures --decimals 6
//! ```

use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};
use clap::Parser;
use papr_lib::{
    constants::WAD, price_series, utils::pow10, Auction, AuctionParameters, LiquidationEstimator,
    OnchainIdentifiable, PricePoint,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The arguments for the fixture command.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct FixtureArgs {
    /// Directory the fixture is written to
    #[clap(long)]
    out_dir: Option<PathBuf>,

    /// Start timestamp of the sample auction
    #[clap(long, default_value = "1700000000")]
    start_timestamp: u64,

    /// Decimals of the debt token used for the liquidation estimates
    #[clap(long, default_value = "18")]
    decimals: u8,
}

/// A liquidation estimate for a debt expressed as a share of the max debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LiquidationFixture {
    debt: U256,
    max_debt: U256,
    days: f64,
}

/// A fixture that can be used to test papr math against other implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaprFixture {
    auction: Auction,
    auction_id: String,
    parameters: AuctionParameters,
    price_series: Vec<PricePoint>,
    estimator: LiquidationEstimator,
    liquidation_estimates: Vec<LiquidationFixture>,
}

fn main() -> Result<()> {
    // Setup the logger.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = FixtureArgs::parse();

    // Sample auction: 10 tokens, losing 70% of its price every day.
    let auction = Auction {
        nftOwner: Address::with_last_byte(1),
        auctionAssetID: U256::from(42),
        auctionAssetContract: Address::with_last_byte(2),
        perPeriodDecayPercentWad: U256::from(7 * WAD / 10),
        secondsInPeriod: U256::from(86_400),
        startPrice: U256::from(10 * WAD),
        paymentAsset: Address::with_last_byte(3),
    };
    let parameters = AuctionParameters::from_auction(&auction, args.start_timestamp)?;
    let series: Vec<PricePoint> = price_series(&parameters, None)?;
    tracing::info!("Sampled {} auction prices", series.len());

    let estimator = LiquidationEstimator::default();
    let unit: U256 = pow10(args.decimals)?;
    let max_debt: U256 = U256::from(100) * unit;
    let liquidation_estimates: Vec<LiquidationFixture> = [10u64, 25, 50, 80, 99, 150]
        .into_iter()
        .map(|debt_units: u64| -> Result<LiquidationFixture> {
            let debt: U256 = U256::from(debt_units) * unit;
            Ok(LiquidationFixture {
                debt,
                max_debt,
                days: estimator.estimate_days(&debt, &max_debt, args.decimals)?,
            })
        })
        .collect::<Result<_>>()?;

    let fixture = PaprFixture {
        auction_id: auction.onchain_id().to_string(),
        auction,
        parameters,
        price_series: series,
        estimator,
        liquidation_estimates,
    };
    tracing::info!("Auction ID: {}", fixture.auction_id);

    // Save the fixture to a file.
    let fixture_path: PathBuf = args
        .out_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures"));
    std::fs::create_dir_all(&fixture_path).context("Failed to create fixture path")?;
    let file: PathBuf = fixture_path.join("papr-fixture.json");
    std::fs::write(
        &file,
        serde_json::to_string_pretty(&fixture).context("Failed to serialize fixture")?,
    )
    .with_context(|| format!("Failed to write fixture to {}", file.display()))?;
    tracing::info!("Wrote fixture to {}", file.display());

    Ok(())
}
