use super::OnchainIdentifiable;
use crate::constants::WAD;
use crate::errors::{PaprMathError, Result};
use alloy_primitives::U256;
use alloy_sol_types::sol;
use serde::{Deserialize, Serialize};

sol! {
    /// An `Auction` is the onchain record of an exponential decay Dutch auction selling a liquidated NFT
    #[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
    struct Auction {
        /// The owner of the vault the NFT was liquidated from
        address nftOwner;
        /// The token ID of the NFT being sold
        uint256 auctionAssetID;
        /// The ERC721 contract of the NFT being sold
        address auctionAssetContract;
        /// The share of the price lost every period, as a wad
        uint256 perPeriodDecayPercentWad;
        /// The length of a decay period
        uint256 secondsInPeriod;
        /// The price the auction starts at, as a wad
        uint256 startPrice;
        /// The ERC20 token the NFT is paid with
        address paymentAsset;
    }
}

impl OnchainIdentifiable for Auction {}

/// The decay schedule of a single liquidation auction.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionParameters {
    /// Price the auction starts at, one-scaled.
    pub start_price: U256,
    /// Timestamp of the block the auction started in.
    pub start_timestamp: u64,
    /// Length of a decay period, must be positive.
    pub seconds_in_period: u64,
    /// Share of the price lost every period as a wad, must be below one wad.
    pub per_period_decay_percent_wad: U256,
}

impl AuctionParameters {
    /// Builds the decay schedule of an onchain auction started at `start_timestamp`.
    pub fn from_auction(auction: &Auction, start_timestamp: u64) -> Result<Self> {
        let seconds_in_period: u64 = u64::try_from(auction.secondsInPeriod)
            .map_err(|_| PaprMathError::Overflow("seconds in period"))?;
        let parameters = Self {
            start_price: auction.startPrice,
            start_timestamp,
            seconds_in_period,
            per_period_decay_percent_wad: auction.perPeriodDecayPercentWad,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Checks the schedule invariants: a positive period and a decay below 100%.
    pub fn validate(&self) -> Result<()> {
        if self.seconds_in_period == 0 {
            return Err(PaprMathError::ZeroSecondsInPeriod);
        }
        if self.per_period_decay_percent_wad >= U256::from(WAD) {
            return Err(PaprMathError::DecayPercentOutOfRange(
                self.per_period_decay_percent_wad,
            ));
        }
        Ok(())
    }

    /// Seconds between the auction start and `timestamp`.
    pub fn seconds_elapsed(&self, timestamp: u64) -> Result<u64> {
        timestamp.checked_sub(self.start_timestamp).ok_or(
            PaprMathError::TimestampBeforeAuctionStart {
                timestamp,
                start_timestamp: self.start_timestamp,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{keccak256, Address, B256};
    use alloy_sol_types::SolValue;

    #[test]
    fn test_onchain_id() {
        let auction: Auction = random_auction();

        // Recreates `abi.encode(auction)`, every field is a static 32 bytes word
        let mut encoded_auction: Vec<u8> = Vec::new();
        encoded_auction.extend_from_slice(&auction.nftOwner.abi_encode());
        encoded_auction.extend_from_slice(&auction.auctionAssetID.abi_encode());
        encoded_auction.extend_from_slice(&auction.auctionAssetContract.abi_encode());
        encoded_auction.extend_from_slice(&auction.perPeriodDecayPercentWad.abi_encode());
        encoded_auction.extend_from_slice(&auction.secondsInPeriod.abi_encode());
        encoded_auction.extend_from_slice(&auction.startPrice.abi_encode());
        encoded_auction.extend_from_slice(&auction.paymentAsset.abi_encode());
        assert_eq!(encoded_auction.len(), 7 * 32);
        let expected_hash: B256 = keccak256(&encoded_auction);

        assert_eq!(auction.onchain_id(), U256::from_be_bytes(expected_hash.0));
    }

    #[test]
    fn test_from_auction() {
        let auction: Auction = random_auction();
        let parameters = AuctionParameters::from_auction(&auction, 1_700_000_000).unwrap();

        assert_eq!(parameters.start_price, auction.startPrice);
        assert_eq!(parameters.start_timestamp, 1_700_000_000);
        assert_eq!(parameters.seconds_in_period, 86_400);
        assert_eq!(
            parameters.per_period_decay_percent_wad,
            auction.perPeriodDecayPercentWad
        );
    }

    #[test]
    fn test_from_auction_rejects_invalid_schedules() {
        let mut auction: Auction = random_auction();
        auction.secondsInPeriod = U256::ZERO;
        assert_eq!(
            AuctionParameters::from_auction(&auction, 0),
            Err(PaprMathError::ZeroSecondsInPeriod)
        );

        auction.secondsInPeriod = U256::from(u64::MAX) + U256::from(1);
        assert_eq!(
            AuctionParameters::from_auction(&auction, 0),
            Err(PaprMathError::Overflow("seconds in period"))
        );

        let mut auction: Auction = random_auction();
        auction.perPeriodDecayPercentWad = U256::from(WAD);
        assert!(matches!(
            AuctionParameters::from_auction(&auction, 0),
            Err(PaprMathError::DecayPercentOutOfRange(_))
        ));
    }

    #[test]
    fn test_seconds_elapsed() {
        let parameters = AuctionParameters::from_auction(&random_auction(), 1_000).unwrap();
        assert_eq!(parameters.seconds_elapsed(1_000).unwrap(), 0);
        assert_eq!(parameters.seconds_elapsed(1_900).unwrap(), 900);
        assert_eq!(
            parameters.seconds_elapsed(999),
            Err(PaprMathError::TimestampBeforeAuctionStart {
                timestamp: 999,
                start_timestamp: 1_000
            })
        );
    }

    // TEST HELPER FUNCTIONS
    /// Creates an auction with a one day period and random price, decay and asset.
    fn random_auction() -> Auction {
        Auction {
            nftOwner: Address::with_last_byte(rand::random::<u8>()),
            auctionAssetID: U256::from(rand::random::<u64>()),
            auctionAssetContract: Address::with_last_byte(rand::random::<u8>()),
            perPeriodDecayPercentWad: U256::from(rand::random::<u64>() % (WAD as u64)),
            secondsInPeriod: U256::from(86_400),
            startPrice: U256::from(rand::random::<u128>()),
            paymentAsset: Address::with_last_byte(rand::random::<u8>()),
        }
    }
}
